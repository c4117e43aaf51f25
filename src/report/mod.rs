//! Output rendering for project metrics.
//!
//! Three modes over the same record: a lossless JSON export, a Markdown
//! report with metric and issue tables, and a console summary.

pub mod json;
pub mod markdown;
pub mod summary;

/// Maximum number of issues listed in the Markdown report.
pub(crate) const MAX_REPORT_ISSUES: usize = 20;

/// Human label for a quality score band.
pub(crate) fn quality_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "good"
    } else if score >= 60.0 {
        "fair"
    } else {
        "poor"
    }
}
