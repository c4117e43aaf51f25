mod analyze;
mod cli;
mod issue;
mod metrics;
mod report;
mod walk;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use analyze::Analyzer;
use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    if !cli.project_path.exists() {
        eprintln!(
            "error: project path does not exist: {}",
            cli.project_path.display()
        );
        std::process::exit(1);
    }
    if !cli.project_path.is_dir() {
        eprintln!(
            "error: project path is not a directory: {}",
            cli.project_path.display()
        );
        std::process::exit(1);
    }

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let source_files: Vec<PathBuf> = walk::source_files(&cli.project_path, &cli.exclude).collect();
    log::info!("found {} Python files", source_files.len());

    let mut analyzer = Analyzer::new()?;
    let mut file_metrics = Vec::new();
    for path in &source_files {
        log::debug!("analyzing {}", path.display());
        if let Some(m) = analyzer.analyze_file(path) {
            file_metrics.push(m);
        }
    }

    let project = metrics::aggregate(
        &cli.project_path,
        source_files.len(),
        &file_metrics,
        analyzer.into_issues(),
    );

    match cli.format {
        OutputFormat::Json => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("metrics.json"));
            report::json::write(&project, &output)?;
            report::summary::print(&project);
        }
        OutputFormat::Markdown => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("analysis_report.md"));
            report::markdown::write(&project, &output)?;
            report::summary::print(&project);
        }
        OutputFormat::Summary => {
            report::summary::print(&project);
            if let Some(output) = &cli.output {
                report::json::write(&project, output)?;
            }
        }
    }

    Ok(())
}
