//! Batch recolor of placeholder-filled SVG icons.
//!
//! A single non-recursive pass over one directory:
//!
//! ```text
//! wlogo.svg  <svg><path fill="#fff"/></svg>
//!     │  recolor ff0000 red
//!     ▼
//! redlogo.svg  <svg><path fill="#ff0000"/></svg>
//! ```
//!
//! Both the file name and the content are rewritten at the first match only.
//! Inputs are never modified; outputs are created or silently overwritten.

mod error;
mod report;

pub use error::RecolorError;
pub use report::{RecolorEntry, RunReport};

use crate::debug;
use serde::Deserialize;
use std::{fs, path::Path};

/// Build the substitution attribute for a color token, e.g. `fill="#ff0000"`.
///
/// The token is inserted verbatim; it is not checked to be a hex color.
#[inline]
pub fn fill_attribute(color: &str) -> String {
    format!(r##"fill="#{color}""##)
}

// ============================================================================
// Matching rule
// ============================================================================

/// Which files are eligible and what text gets replaced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecolorRule {
    /// Required name prefix, also the text swapped out in output names.
    pub prefix: String,
    /// Required name suffix.
    pub extension: String,
    /// Attribute text replaced by the fill attribute.
    pub placeholder: String,
}

impl Default for RecolorRule {
    fn default() -> Self {
        Self {
            prefix: "w".to_string(),
            extension: ".svg".to_string(),
            placeholder: r##"fill="#fff""##.to_string(),
        }
    }
}

impl RecolorRule {
    /// Check whether a file name is eligible.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.ends_with(&self.extension)
    }

    /// Derive the output name by replacing the first occurrence of the prefix.
    ///
    /// For a matching name that occurrence is the leading one.
    #[inline]
    pub fn output_name(&self, name: &str, replacement: &str) -> String {
        name.replacen(&self.prefix, replacement, 1)
    }

    /// Replace the first placeholder in `content` with `fill`.
    ///
    /// Works on raw bytes so content in any ASCII-compatible encoding keeps
    /// every byte outside the match. Returns the new content and whether a
    /// placeholder was found.
    pub fn substitute(&self, content: &[u8], fill: &str) -> (Vec<u8>, bool) {
        let needle = self.placeholder.as_bytes();
        let Some(start) = find_bytes(content, needle) else {
            return (content.to_vec(), false);
        };

        let mut out = Vec::with_capacity(content.len() - needle.len() + fill.len());
        out.extend_from_slice(&content[..start]);
        out.extend_from_slice(fill.as_bytes());
        out.extend_from_slice(&content[start + needle.len()..]);
        (out, true)
    }
}

/// Offset of the first occurrence of `needle` in `haystack`.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

// ============================================================================
// Directory pass
// ============================================================================

/// One configured recolor run: a rule plus the two caller tokens.
#[derive(Debug, Clone)]
pub struct Recolorer {
    rule: RecolorRule,
    fill: String,
    replacement: String,
    dry_run: bool,
}

impl Recolorer {
    pub fn new(rule: RecolorRule, color: &str, replacement: impl Into<String>) -> Self {
        Self {
            rule,
            fill: fill_attribute(color),
            replacement: replacement.into(),
            dry_run: false,
        }
    }

    /// Compute outputs without writing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every matching regular file directly inside `dir`.
    ///
    /// Entries are visited in listing order. The first read or write failure
    /// aborts the run; files written before it are kept.
    pub fn run(&self, dir: &Path) -> Result<RunReport, RecolorError> {
        let read_dir_err = |err| RecolorError::ReadDir(dir.to_path_buf(), err);

        // Dropped on every return path, closing the listing handle
        let entries = fs::read_dir(dir).map_err(read_dir_err)?;
        let mut report = RunReport::new(self.dry_run);

        for entry in entries {
            let entry = entry.map_err(read_dir_err)?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!("recolor"; "skipping non-utf8 name {:?}", file_name);
                continue;
            };
            if !self.rule.matches(name) {
                continue;
            }

            // Follows symlinks, so a link to an icon still counts
            let input = entry.path();
            if !input.is_file() {
                debug!("recolor"; "skipping {}: not a regular file", name);
                continue;
            }

            let output_name = self.rule.output_name(name, &self.replacement);
            let content =
                fs::read(&input).map_err(|err| RecolorError::Read(input.clone(), err))?;
            let (content, replaced) = self.rule.substitute(&content, &self.fill);

            if !self.dry_run {
                let output = dir.join(&output_name);
                fs::write(&output, content).map_err(|err| RecolorError::Write(output, err))?;
            }

            if replaced {
                debug!("recolor"; "{} -> {}", name, output_name);
            } else {
                debug!("recolor"; "{} -> {} (no placeholder, copied)", name, output_name);
            }

            report.push(RecolorEntry {
                input: name.to_string(),
                output: output_name,
                replaced,
            });
        }

        Ok(report)
    }
}
