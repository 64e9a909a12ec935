//! Recolor error types.

use std::path::PathBuf;
use thiserror::Error;

/// File-system failures that abort a recolor run.
///
/// Outputs written before the failure stay on disk.
#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("failed to list directory `{0}`")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_recolor_error_display() {
        let err = RecolorError::Write(
            PathBuf::from("redlogo.svg"),
            Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "failed to write `redlogo.svg`");
        assert!(err.source().is_some());
    }
}
