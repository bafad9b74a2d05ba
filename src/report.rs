//! Run summary and machine-readable report.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::Classification;
use crate::error::Result;
use crate::router::MoveOutcome;

/// One reported (record, variant directory) pair.
///
/// Successful moves are counted but not listed; entries are kept only for
/// pairs that did not move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Source path that was attempted.
    pub source: PathBuf,

    /// Classification the record carried.
    pub classification: Classification,

    /// Outcome of the attempt.
    pub outcome: MoveOutcome,
}

/// Summary of a sorting run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// Files moved into a classification subfolder.
    pub moved: usize,

    /// Pairs skipped because the source file was absent.
    pub skipped: usize,

    /// Pairs that failed for another reason (permissions, other I/O).
    pub failed: usize,

    /// Details for every pair that did not move.
    pub entries: Vec<MoveEntry>,
}

impl Default for SortReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SortReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            moved: 0,
            skipped: 0,
            failed: 0,
            entries: Vec::new(),
        }
    }

    /// Record the outcome of one move attempt.
    pub fn record(&mut self, source: PathBuf, classification: Classification, outcome: MoveOutcome) {
        match &outcome {
            MoveOutcome::Moved => {
                self.moved += 1;
                return;
            }
            MoveOutcome::SourceMissing => self.skipped += 1,
            MoveOutcome::PermissionDenied(_) | MoveOutcome::Failed(_) => self.failed += 1,
        }
        self.entries.push(MoveEntry { source, classification, outcome });
    }

    /// Total number of attempts recorded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.moved + self.skipped + self.failed
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let report: Self = serde_json::from_str(&content)?;
        Ok(report)
    }
}
