use crate::issue::Severity;
use crate::metrics::ProjectMetrics;

use super::quality_label;

/// Print the console summary: headline figures only, no file enumeration.
pub fn print(metrics: &ProjectMetrics) {
    let separator = "\u{2500}".repeat(50);
    let d = &metrics.complexity_distribution;

    println!();
    println!("Code Analysis Summary");
    println!("{separator}");
    println!(" Project:          {}", metrics.project_path);
    println!(" Analyzed:         {}", metrics.analysis_time);
    println!(
        " Quality score:    {:.1} / 100 ({})",
        metrics.quality_score,
        quality_label(metrics.quality_score)
    );
    println!("{separator}");
    println!(" Python files:     {}", metrics.python_files);
    println!(" Code lines:       {}", metrics.code_lines);
    println!(" Functions:        {}", metrics.total_functions);
    println!(" Classes:          {}", metrics.total_classes);
    println!(" Avg file length:  {:.2} lines", metrics.avg_file_length);
    println!("{separator}");
    println!(
        " Complexity:       low {}  medium {}  high {}  very high {}",
        d.low, d.medium, d.high, d.very_high
    );
    if metrics.issues.is_empty() {
        println!(" Issues:           none");
    } else {
        let count = |severity| {
            metrics
                .issues
                .iter()
                .filter(|i| i.severity == severity)
                .count()
        };
        println!(
            " Issues:           {} high, {} medium, {} low",
            count(Severity::High),
            count(Severity::Medium),
            count(Severity::Low)
        );
    }
    println!("{separator}");
}
