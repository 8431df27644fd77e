//! Count formatting for log lines.

/// Format a count with its noun, e.g. `3 posts`, `1 talk`.
///
/// Appends a plain `s`, which covers every noun the loaders report.
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
