//! Directory initialization and file routing.
//!
//! The router is deliberately sequential: records are processed in answer-key
//! order, and for each record the variant directories are visited in list
//! order. A later move is never attempted before an earlier one completes.
//! Per-file failures never abort the run; they are classified into
//! [`MoveOutcome`] values and collected in the [`SortReport`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerKey, AnswerRecord};
use crate::config::SortConfig;
use crate::error::{Error, Result};
use crate::report::SortReport;

/// Outcome of a single (record, variant directory) move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum MoveOutcome {
    /// The file was moved into its classification subfolder.
    Moved,
    /// The source file did not exist in this variant directory.
    SourceMissing,
    /// The move failed with a permission error.
    PermissionDenied(String),
    /// The move failed for some other I/O reason.
    Failed(String),
}

impl MoveOutcome {
    /// Whether the file ended up in its classification subfolder.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Ensure `Normal/` and `Abnormal/` exist under each variant directory.
///
/// Idempotent: directories that already exist are left untouched. Creation
/// failure (e.g. permissions) is fatal. A variant directory that did not
/// exist beforehand is created empty here; its files will simply be reported
/// missing during routing.
pub fn init_class_dirs(config: &SortConfig) -> Result<()> {
    for dir in &config.variant_dirs {
        for subdir in ["Normal", "Abnormal"] {
            let path = dir.join(subdir);
            fs::create_dir_all(&path).map_err(|source| Error::InitDir { path, source })?;
        }
    }
    Ok(())
}

/// Source path for a record in a variant directory: `<variant>/<image_id>.<ext>`.
#[must_use]
pub fn source_path(variant_dir: &Path, record: &AnswerRecord, extension: &str) -> PathBuf {
    variant_dir.join(format!("{}.{}", record.image_id, extension))
}

/// Destination path: `<variant>/<Normal|Abnormal>/<image_id>.<ext>`.
#[must_use]
pub fn dest_path(variant_dir: &Path, record: &AnswerRecord, extension: &str) -> PathBuf {
    variant_dir
        .join(record.classification.folder_name())
        .join(format!("{}.{}", record.image_id, extension))
}

/// Attempt to move one record's file within one variant directory.
///
/// Never returns an error: every failure is a recoverable, per-pair outcome.
pub fn route_one(variant_dir: &Path, record: &AnswerRecord, extension: &str) -> MoveOutcome {
    let source = source_path(variant_dir, record, extension);
    let dest = dest_path(variant_dir, record, extension);

    match fs::rename(&source, &dest) {
        Ok(()) => MoveOutcome::Moved,
        Err(e) => match e.kind() {
            io::ErrorKind::NotFound => MoveOutcome::SourceMissing,
            io::ErrorKind::PermissionDenied => MoveOutcome::PermissionDenied(e.to_string()),
            _ => MoveOutcome::Failed(e.to_string()),
        },
    }
}

/// Run the full sorting pass: initialize class directories, then route every
/// (record, variant directory) pair in order.
pub fn sort_all(config: &SortConfig, key: &AnswerKey) -> Result<SortReport> {
    init_class_dirs(config)?;

    let mut report = SortReport::new();

    for record in &key.records {
        for dir in &config.variant_dirs {
            let outcome = route_one(dir, record, &config.extension);
            report.record(
                source_path(dir, record, &config.extension),
                record.classification,
                outcome,
            );
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Classification;

    fn record(id: &str, token: &str) -> AnswerRecord {
        AnswerRecord {
            image_id: id.to_string(),
            classification: Classification::from_token(token),
        }
    }

    fn config_for(root: &Path, dirs: &[&str]) -> SortConfig {
        SortConfig::builder()
            .answers_path(root.join("Answers"))
            .variant_dirs(dirs.iter().map(|d| root.join(d)))
            .build()
    }

    #[test]
    fn test_init_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_for(tmp.path(), &["mammograms"]);

        init_class_dirs(&config).unwrap();
        init_class_dirs(&config).unwrap();

        assert!(tmp.path().join("mammograms/Normal").is_dir());
        assert!(tmp.path().join("mammograms/Abnormal").is_dir());
    }

    #[test]
    fn test_route_one_moves_exactly_once() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("output");
        fs::create_dir_all(dir.join("Normal")).unwrap();
        fs::write(dir.join("A1.pgm"), b"P5").unwrap();

        let rec = record("A1", "NORM");
        assert_eq!(route_one(&dir, &rec, "pgm"), MoveOutcome::Moved);
        assert!(dir.join("Normal/A1.pgm").is_file());
        assert!(!dir.join("A1.pgm").exists());
        assert!(!dir.join("Abnormal/A1.pgm").exists());

        // Second attempt finds no source
        assert_eq!(route_one(&dir, &rec, "pgm"), MoveOutcome::SourceMissing);
    }

    #[test]
    fn test_sort_all_routes_norm_and_abnormal() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("mammograms");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("A1.pgm"), b"P5").unwrap();
        fs::write(dir.join("A2.pgm"), b"P5").unwrap();

        let config = config_for(tmp.path(), &["mammograms"]);
        let key = AnswerKey::parse("A1 x NORM\nA2 x ABN\n").unwrap();

        let report = sort_all(&config, &key).unwrap();

        assert!(dir.join("Normal/A1.pgm").is_file());
        assert!(dir.join("Abnormal/A2.pgm").is_file());
        assert!(!dir.join("A1.pgm").exists());
        assert!(!dir.join("A2.pgm").exists());
        assert_eq!(report.moved, 2);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_missing_source_never_aborts_the_run() {
        let tmp = tempfile::tempdir().unwrap();
        let mammograms = tmp.path().join("mammograms");
        let output = tmp.path().join("output");
        fs::create_dir_all(&mammograms).unwrap();
        fs::create_dir_all(&output).unwrap();
        // img1 only exists in mammograms, not output
        fs::write(mammograms.join("img1.pgm"), b"P5").unwrap();
        fs::write(output.join("img2.pgm"), b"P5").unwrap();

        let config = config_for(tmp.path(), &["mammograms", "output"]);
        let key = AnswerKey::parse("img1 x NORM\nimg2 x CALC\n").unwrap();

        let report = sort_all(&config, &key).unwrap();

        // Processing continued past the misses in both directions
        assert!(mammograms.join("Normal/img1.pgm").is_file());
        assert!(output.join("Abnormal/img2.pgm").is_file());
        assert_eq!(report.moved, 2);
        assert_eq!(report.skipped, 2);
        assert!(report
            .entries
            .iter()
            .any(|e| e.source == output.join("img1.pgm")
                && e.outcome == MoveOutcome::SourceMissing));
    }

    #[test]
    fn test_sort_all_covers_every_variant_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = ["raw", "processed", "saturated"];
        for d in dirs {
            let dir = tmp.path().join(d);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("mdb001.pgm"), b"P5").unwrap();
        }

        let config = config_for(tmp.path(), &dirs);
        let key = AnswerKey::parse("mdb001 G CIRC B 535 425 197\n").unwrap();

        let report = sort_all(&config, &key).unwrap();
        assert_eq!(report.moved, 3);
        for d in dirs {
            assert!(tmp.path().join(d).join("Abnormal/mdb001.pgm").is_file());
        }
    }

    #[test]
    fn test_outcome_classification_for_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("output");
        fs::create_dir_all(dir.join("Normal")).unwrap();

        let outcome = route_one(&dir, &record("img1", "NORM"), "pgm");
        assert_eq!(outcome, MoveOutcome::SourceMissing);
    }

    #[test]
    fn test_paths_built_from_id_and_classification() {
        let rec = record("mdb047", "NORM");
        assert_eq!(
            source_path(Path::new("saturated"), &rec, "pgm"),
            PathBuf::from("saturated/mdb047.pgm")
        );
        assert_eq!(
            dest_path(Path::new("saturated"), &rec, "pgm"),
            PathBuf::from("saturated/Normal/mdb047.pgm")
        );
    }
}
