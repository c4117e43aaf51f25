use std::error::Error;
use std::fs;
use std::path::Path;

use crate::issue::Issue;
use crate::metrics::ProjectMetrics;

use super::{MAX_REPORT_ISSUES, quality_label};

/// Escape backslashes and pipe characters so paths render correctly inside
/// markdown tables. Backslashes first to avoid double-escaping.
fn escape_md(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// File name component of an issue path, for the compact issues table.
fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Detail column: the offending function, else the error message, else a
/// line count.
fn issue_detail(issue: &Issue) -> String {
    if let Some(function) = &issue.function {
        function.clone()
    } else if let Some(message) = &issue.message {
        message.clone()
    } else if let Some(lines) = issue.lines {
        format!("{lines} lines")
    } else {
        String::new()
    }
}

/// Render the full Markdown report.
pub fn render(metrics: &ProjectMetrics) -> String {
    let mut out = String::new();

    out.push_str("# Code Metrics Report\n\n");
    out.push_str(&format!("**Generated:** {}\n", metrics.analysis_time));
    out.push_str(&format!("**Project:** `{}`\n", metrics.project_path));

    out.push_str("\n## Overview\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|------:|\n");
    out.push_str(&format!(
        "| Quality score | {:.1} / 100 ({}) |\n",
        metrics.quality_score,
        quality_label(metrics.quality_score)
    ));
    out.push_str(&format!("| Python files | {} |\n", metrics.python_files));
    out.push_str(&format!("| Analyzed files | {} |\n", metrics.total_files));
    out.push_str(&format!("| Functions | {} |\n", metrics.total_functions));
    out.push_str(&format!("| Classes | {} |\n", metrics.total_classes));
    out.push_str(&format!("| Imports | {} |\n", metrics.total_imports));

    out.push_str("\n## Code Statistics\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|------:|\n");
    out.push_str(&format!("| Total lines | {} |\n", metrics.total_lines));
    out.push_str(&format!("| Code lines | {} |\n", metrics.code_lines));
    out.push_str(&format!("| Comment lines | {} |\n", metrics.comment_lines));
    out.push_str(&format!("| Blank lines | {} |\n", metrics.blank_lines));
    out.push_str(&format!(
        "| Average file length | {:.2} lines |\n",
        metrics.avg_file_length
    ));
    out.push_str(&format!(
        "| Longest file | {} lines |\n",
        metrics.max_file_length
    ));

    let d = &metrics.complexity_distribution;
    out.push_str("\n## Complexity Distribution\n\n");
    out.push_str("| Level | Files |\n");
    out.push_str("|-------|------:|\n");
    out.push_str(&format!("| Low (1-10) | {} |\n", d.low));
    out.push_str(&format!("| Medium (11-20) | {} |\n", d.medium));
    out.push_str(&format!("| High (21-50) | {} |\n", d.high));
    out.push_str(&format!("| Very high (>50) | {} |\n", d.very_high));

    out.push_str("\n## Issues\n\n");
    if metrics.issues.is_empty() {
        out.push_str("No issues found.\n");
    } else {
        out.push_str("| Severity | Kind | File | Detail |\n");
        out.push_str("|----------|------|------|--------|\n");
        for issue in metrics.issues.iter().take(MAX_REPORT_ISSUES) {
            out.push_str(&format!(
                "| {} | {} | `{}` | {} |\n",
                issue.severity.as_str(),
                issue.kind.as_str(),
                escape_md(file_name(&issue.file)),
                escape_md(&issue_detail(issue))
            ));
        }
        if metrics.issues.len() > MAX_REPORT_ISSUES {
            out.push_str(&format!(
                "\n*{} more issues not shown.*\n",
                metrics.issues.len() - MAX_REPORT_ISSUES
            ));
        }
    }

    out
}

/// Render the report and write it to `path`.
pub fn write(metrics: &ProjectMetrics, path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, render(metrics))?;
    log::info!("Markdown report saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
