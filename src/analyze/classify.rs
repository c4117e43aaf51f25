//! Physical line classification.
//!
//! Every line is exactly one of blank, comment, or code. A line counts as a
//! comment when its first non-whitespace character is the `#` marker, so
//! trailing comments on code lines stay code.

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Per-file line counts by kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    pub blank: usize,
    pub comment: usize,
    pub code: usize,
}

impl LineCounts {
    /// Total physical lines; always equals the number of lines classified.
    pub fn total(&self) -> usize {
        self.blank + self.comment + self.code
    }
}

pub fn classify_line(line: &str) -> LineKind {
    let stripped = line.trim();
    if stripped.is_empty() {
        LineKind::Blank
    } else if stripped.starts_with('#') {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

/// Count blank, comment, and code lines across the whole file content.
///
/// Lines are the parts of `content` split on `\n`, so a trailing newline
/// contributes one final blank line and `total()` matches the raw physical
/// line count used by the long-file check.
pub fn count_lines(content: &str) -> LineCounts {
    let mut counts = LineCounts::default();
    for line in content.split('\n') {
        match classify_line(line) {
            LineKind::Blank => counts.blank += 1,
            LineKind::Comment => counts.comment += 1,
            LineKind::Code => counts.code += 1,
        }
    }
    counts
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
