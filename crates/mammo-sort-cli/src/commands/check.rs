//! Answer-key inspection without touching the filesystem layout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mammo_sort::{AnswerKey, Classification};

pub fn run(answers: PathBuf, verbose: bool) -> Result<()> {
    let key = AnswerKey::load(&answers)
        .with_context(|| format!("Failed to load answer key {}", answers.display()))?;

    println!("Answer key: {}", answers.display());
    println!("  Records: {}", key.len());
    println!("  Normal: {}", key.count(Classification::Normal));
    println!("  Abnormal: {}", key.count(Classification::Abnormal));

    if verbose {
        for record in &key.records {
            eprintln!("{}\t{}", record.image_id, record.classification);
        }
    }

    Ok(())
}
