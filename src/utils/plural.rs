//! Pluralization for summary lines.

/// Format a count with its noun, e.g. `1 file`, `3 files`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
