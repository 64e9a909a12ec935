//! Per-run record of processed files.

use crate::utils::plural::plural_count;

/// One matched input and the output derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorEntry {
    pub input: String,
    pub output: String,
    /// Whether the placeholder was found and replaced.
    pub replaced: bool,
}

/// Files processed by a run, in directory listing order.
#[derive(Debug)]
pub struct RunReport {
    entries: Vec<RecolorEntry>,
    dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            entries: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, entry: RecolorEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RecolorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files copied through without a placeholder.
    pub fn unchanged(&self) -> usize {
        self.entries.iter().filter(|e| !e.replaced).count()
    }

    /// One-line summary, e.g. `wrote 3 files (1 without placeholder)`.
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "would write" } else { "wrote" };
        let mut line = format!("{verb} {}", plural_count(self.len(), "file"));
        let unchanged = self.unchanged();
        if unchanged > 0 {
            line.push_str(&format!(" ({unchanged} without placeholder)"));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input: &str, output: &str, replaced: bool) -> RecolorEntry {
        RecolorEntry {
            input: input.to_string(),
            output: output.to_string(),
            replaced,
        }
    }

    #[test]
    fn test_summary_empty() {
        let report = RunReport::new(false);
        assert!(report.is_empty());
        assert_eq!(report.summary(), "wrote 0 files");
    }

    #[test]
    fn test_summary_counts_unchanged() {
        let mut report = RunReport::new(false);
        report.push(entry("wlogo.svg", "redlogo.svg", true));
        report.push(entry("wicon.svg", "redicon.svg", false));
        report.push(entry("wking.svg", "redking.svg", true));

        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.summary(), "wrote 3 files (1 without placeholder)");
    }

    #[test]
    fn test_summary_dry_run() {
        let mut report = RunReport::new(true);
        report.push(entry("wlogo.svg", "redlogo.svg", true));
        assert_eq!(report.summary(), "would write 1 file");
    }
}
