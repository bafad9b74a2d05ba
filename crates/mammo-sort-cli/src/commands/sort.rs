//! The main sorting command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mammo_sort::{sort_all, AnswerKey, MoveOutcome};

pub fn run(
    answers: PathBuf,
    dirs: Vec<PathBuf>,
    extension: String,
    report_path: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let config = super::config_from_args(answers, dirs, extension);

    let key = AnswerKey::load(&config.answers_path)
        .with_context(|| format!("Failed to load answer key {}", config.answers_path.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} records from {}",
            key.len(),
            config.answers_path.display()
        );
    }

    if dry_run {
        return plan(&config, &key);
    }

    let report = sort_all(&config, &key).context("Sorting run failed")?;

    for entry in &report.entries {
        match &entry.outcome {
            MoveOutcome::SourceMissing => {
                println!("File {} not found", entry.source.display());
            }
            MoveOutcome::PermissionDenied(reason) => {
                println!("File {} permission denied: {reason}", entry.source.display());
            }
            MoveOutcome::Failed(reason) => {
                println!("File {} move failed: {reason}", entry.source.display());
            }
            MoveOutcome::Moved => {}
        }
    }

    if verbose {
        eprintln!(
            "Moved {} files, skipped {}, failed {}",
            report.moved, report.skipped, report.failed
        );
    }

    if let Some(path) = report_path {
        report
            .save(&path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        println!("Saved report to: {}", path.display());
    }

    Ok(())
}

/// Dry run: print what would move, touch nothing.
fn plan(config: &mammo_sort::SortConfig, key: &AnswerKey) -> Result<()> {
    for record in &key.records {
        for dir in &config.variant_dirs {
            let source = mammo_sort::router::source_path(dir, record, &config.extension);
            let dest = mammo_sort::router::dest_path(dir, record, &config.extension);
            if source.is_file() {
                println!("{} -> {}", source.display(), dest.display());
            } else {
                println!("File {} not found", source.display());
            }
        }
    }

    Ok(())
}
