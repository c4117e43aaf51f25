/// CLI argument definitions for the `pymetrics` command.
///
/// A single command with no subcommands: point it at a project root and
/// pick an output format.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Path fragments excluded from the scan unless overridden with `--exclude`.
pub const DEFAULT_EXCLUDES: [&str; 4] = [".venv", "__pycache__", ".git", "node_modules"];

#[derive(Parser)]
#[command(
    name = "pymetrics",
    version,
    about = "Static code quality analyzer for Python projects"
)]
pub struct Cli {
    /// Project root directory to analyze
    #[arg(short, long)]
    pub project_path: PathBuf,

    /// Output file path (default: metrics.json for json, analysis_report.md for markdown)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Path substrings to exclude from the scan
    #[arg(short, long, num_args = 0.., default_values_t = DEFAULT_EXCLUDES.map(String::from))]
    pub exclude: Vec<String>,

    /// Show debug-level log output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Requested rendering of the collected metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Structured export of every field, including the issue list
    Json,
    /// Human-readable report with metric and issue tables
    Markdown,
    /// Console headline figures only
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["pymetrics", "-p", "."]);
        assert_eq!(cli.format, OutputFormat::Summary);
        assert_eq!(cli.exclude, DEFAULT_EXCLUDES.map(String::from));
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn explicit_excludes_replace_defaults() {
        let cli = Cli::parse_from(["pymetrics", "-p", ".", "-e", "build", "dist"]);
        assert_eq!(cli.exclude, ["build".to_string(), "dist".to_string()]);
    }

    #[test]
    fn format_values() {
        let cli = Cli::parse_from(["pymetrics", "-p", ".", "-f", "markdown"]);
        assert_eq!(cli.format, OutputFormat::Markdown);
        let cli = Cli::parse_from(["pymetrics", "-p", ".", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
