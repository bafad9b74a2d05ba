//! Standalone directory initialization.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mammo_sort::{init_class_dirs, DEFAULT_ANSWERS_FILE, DEFAULT_EXTENSION};

pub fn run(dirs: Vec<PathBuf>, verbose: bool) -> Result<()> {
    let config = super::config_from_args(
        PathBuf::from(DEFAULT_ANSWERS_FILE),
        dirs,
        DEFAULT_EXTENSION.to_string(),
    );

    init_class_dirs(&config).context("Failed to create classification directories")?;

    if verbose {
        for dir in &config.variant_dirs {
            eprintln!("Initialized {}/Normal and {}/Abnormal", dir.display(), dir.display());
        }
    }

    println!("Initialized {} variant directories", config.variant_dirs.len());
    Ok(())
}
