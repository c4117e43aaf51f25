//! Metric records and project-level aggregation.

use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Severity};

/// Metrics for a single successfully analyzed source file.
/// Immutable after creation; owned by the aggregation step.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetrics {
    pub path: String,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub function_count: usize,
    pub class_count: usize,
    pub import_count: usize,
    pub max_complexity: usize,
    pub avg_complexity: f64,
    pub long_functions: Vec<String>,
}

impl FileMetrics {
    /// Total physical lines of the file.
    pub fn total_lines(&self) -> usize {
        self.code_lines + self.blank_lines + self.comment_lines
    }
}

/// File counts bucketed by maximum function complexity.
/// The buckets partition all recorded values: 1-10, 11-20, 21-50, >50.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub very_high: usize,
}

impl ComplexityDistribution {
    /// Bucket one file's maximum complexity. Files without functions
    /// (complexity 0) contribute nothing.
    fn record(&mut self, max_complexity: usize) {
        match max_complexity {
            0 => {}
            1..=10 => self.low += 1,
            11..=20 => self.medium += 1,
            21..=50 => self.high += 1,
            _ => self.very_high += 1,
        }
    }
}

/// Project-level metrics for one run. Created once after every file has
/// been analyzed; serializes losslessly in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub project_path: String,
    pub analysis_time: String,
    /// Files that analyzed successfully and contribute to the totals.
    pub total_files: usize,
    /// Source files discovered by the walk, including skipped ones.
    pub python_files: usize,
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub total_functions: usize,
    pub total_classes: usize,
    pub total_imports: usize,
    pub avg_file_length: f64,
    pub max_file_length: usize,
    pub complexity_distribution: ComplexityDistribution,
    pub quality_score: f64,
    pub issues: Vec<Issue>,
}

/// Roll per-file metrics and the run's issues into the project record.
pub fn aggregate(
    project_path: &Path,
    python_files: usize,
    files: &[FileMetrics],
    issues: Vec<Issue>,
) -> ProjectMetrics {
    let total_files = files.len();
    let total_lines: usize = files.iter().map(FileMetrics::total_lines).sum();
    let code_lines: usize = files.iter().map(|f| f.code_lines).sum();
    let blank_lines: usize = files.iter().map(|f| f.blank_lines).sum();
    let comment_lines: usize = files.iter().map(|f| f.comment_lines).sum();
    let total_functions: usize = files.iter().map(|f| f.function_count).sum();
    let total_classes: usize = files.iter().map(|f| f.class_count).sum();
    let total_imports: usize = files.iter().map(|f| f.import_count).sum();

    let avg_file_length = if total_files > 0 {
        round2(total_lines as f64 / total_files as f64)
    } else {
        0.0
    };
    let max_file_length = files.iter().map(FileMetrics::total_lines).max().unwrap_or(0);

    let mut distribution = ComplexityDistribution::default();
    for f in files {
        distribution.record(f.max_complexity);
    }

    let quality_score = quality_score(
        total_files,
        code_lines,
        comment_lines,
        &distribution,
        total_functions,
        &issues,
    );

    ProjectMetrics {
        project_path: project_path.display().to_string(),
        analysis_time: Local::now().to_rfc3339(),
        total_files,
        python_files,
        total_lines,
        code_lines,
        blank_lines,
        comment_lines,
        total_functions,
        total_classes,
        total_imports,
        avg_file_length,
        max_file_length,
        complexity_distribution: distribution,
        quality_score,
        issues,
    }
}

/// Heuristic 0-100 quality score.
///
/// Starts at 100 and applies each penalty band once: comment ratio below
/// 10% costs 15 (below 15% costs 5), a high share of complex files costs
/// up to 20, and every high/medium severity issue costs 5/2. Rounded to
/// one decimal and clamped to the 0-100 range.
fn quality_score(
    analyzed_files: usize,
    code_lines: usize,
    comment_lines: usize,
    distribution: &ComplexityDistribution,
    total_functions: usize,
    issues: &[Issue],
) -> f64 {
    // An empty project has nothing to penalize.
    if analyzed_files == 0 {
        return 100.0;
    }

    let mut score = 100.0;

    let comment_ratio = if code_lines > 0 {
        comment_lines as f64 / code_lines as f64
    } else {
        0.0
    };
    if comment_ratio < 0.10 {
        score -= 15.0;
    } else if comment_ratio < 0.15 {
        score -= 5.0;
    }

    if total_functions > 0 {
        let high_ratio =
            (distribution.high + distribution.very_high) as f64 / total_functions as f64;
        if high_ratio > 0.2 {
            score -= 20.0;
        } else if high_ratio > 0.1 {
            score -= 10.0;
        }
    }

    let high_issues = issues.iter().filter(|i| i.severity == Severity::High).count();
    let medium_issues = issues
        .iter()
        .filter(|i| i.severity == Severity::Medium)
        .count();
    score -= high_issues as f64 * 5.0;
    score -= medium_issues as f64 * 2.0;

    round1(score).clamp(0.0, 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
