//! Optional `recolor.toml` configuration.
//!
//! Every field has a default, so a missing file behaves exactly like an
//! empty one.
//!
//! # Example
//!
//! ```toml
//! [rule]
//! prefix = "w"
//! extension = ".svg"
//! placeholder = 'fill="#fff"'
//! ```

mod error;

pub use error::ConfigError;

use crate::{debug, recolor::RecolorRule};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the scanned directory when `--config` is absent.
pub const DEFAULT_CONFIG_NAME: &str = "recolor.toml";

/// Root configuration structure representing recolor.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecolorConfig {
    /// `[rule]`: which files match and what gets replaced.
    pub rule: RecolorRule,
}

impl RecolorConfig {
    /// Load configuration for a run over `dir`.
    ///
    /// An explicit path must exist. Without one, `recolor.toml` inside `dir`
    /// is used when present and defaults apply otherwise. Relative paths are
    /// resolved against `dir`.
    pub fn load(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (resolve(dir, path), true),
            None => (dir.join(DEFAULT_CONFIG_NAME), false),
        };

        if !required && !path.is_file() {
            debug!("config"; "no {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::from_path(&path)?;
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Reject rules that would match every file or replace nothing.
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("rule.prefix", &self.rule.prefix),
            ("rule.extension", &self.rule.extension),
            ("rule.placeholder", &self.rule.placeholder),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("`{field}` must not be empty")));
            }
        }
        Ok(())
    }
}

fn resolve(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
