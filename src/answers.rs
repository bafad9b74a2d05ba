//! Answer-key parsing.
//!
//! The answer key is a plain-text file mapping image identifiers to
//! ground-truth diagnostic labels, one record per line:
//!
//! ```text
//! mdb001 G CIRC B 535 425 197
//! mdb003 D NORM
//! ```
//!
//! Only two fields are consulted: field 0 is the image identifier and field 2
//! is the classification token. The literal token `NORM` marks a normal case;
//! every other value (lesion codes, case variants, typos) is abnormal.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token that marks a normal case in the answer key.
pub const NORMAL_TOKEN: &str = "NORM";

/// Ground-truth classification of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Normal case (answer-key token is exactly `NORM`).
    Normal,
    /// Abnormal case (any other token).
    Abnormal,
}

impl Classification {
    /// Classify an answer-key token.
    ///
    /// The comparison is exact: `"norm"` or `"Norm"` classify as abnormal.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == NORMAL_TOKEN {
            Self::Normal
        } else {
            Self::Abnormal
        }
    }

    /// Name of the destination subfolder for this classification.
    #[must_use]
    pub fn folder_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Abnormal => "Abnormal",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Abnormal => write!(f, "abnormal"),
        }
    }
}

/// One parsed answer-key record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Image identifier (filename without extension).
    pub image_id: String,

    /// Ground-truth classification.
    pub classification: Classification,
}

/// A parsed answer key, records in file order.
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    /// Records in order of appearance.
    pub records: Vec<AnswerRecord>,
}

impl AnswerKey {
    /// Load and parse an answer key from a file.
    ///
    /// A missing or unreadable file is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Parse answer-key text.
    ///
    /// Blank lines are skipped. A line with fewer than three fields is a
    /// fatal [`Error::AnswerKey`] naming the 1-based line number; no
    /// recovery is attempted. Line numbers count every line of the input,
    /// including skipped blanks, so they match the file as written.
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                return Err(Error::AnswerKey {
                    line: idx + 1,
                    reason: format!(
                        "expected at least 3 fields, found {}: {line:?}",
                        fields.len()
                    ),
                });
            }

            records.push(AnswerRecord {
                image_id: fields[0].to_string(),
                classification: Classification::from_token(fields[2]),
            });
        }

        Ok(Self { records })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the key holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records with the given classification.
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.records
            .iter()
            .filter(|r| r.classification == classification)
            .count()
    }
}
