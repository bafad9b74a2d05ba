//! # mammo-sort
//!
//! Sorts a mammogram image dataset into `Normal/` and `Abnormal/` subfolders
//! based on a ground-truth answer key.
//!
//! Several sibling "variant" directories each hold a differently processed
//! copy of the same image set (raw scans, pipeline output, saturated
//! variants). For every answer-key record, each variant directory's copy of
//! the image is moved into that directory's classification subfolder. Missing
//! files are skipped and reported, never fatal.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mammo_sort::{AnswerKey, SortConfig, sort_all};
//!
//! let config = SortConfig::builder()
//!     .answers_path("Answers")
//!     .variant_dirs(["mammograms", "output", "saturated"])
//!     .build();
//!
//! let key = AnswerKey::load(&config.answers_path)?;
//! let report = sort_all(&config, &key)?;
//! println!("moved {} files, skipped {}", report.moved, report.skipped);
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`answers`]: Answer-key parsing and classification
//! - [`config`]: Run configuration
//! - [`router`]: Directory initialization and file routing
//! - [`report`]: Run summary and JSON report

pub mod answers;
pub mod config;
pub mod error;
pub mod report;
pub mod router;

// Re-export commonly used types
pub use answers::{AnswerKey, AnswerRecord, Classification, NORMAL_TOKEN};
pub use config::{
    SortConfig, SortConfigBuilder, DEFAULT_ANSWERS_FILE, DEFAULT_EXTENSION, DEFAULT_VARIANT_DIRS,
};
pub use error::{Error, Result};
pub use report::{MoveEntry, SortReport};
pub use router::{init_class_dirs, route_one, sort_all, MoveOutcome};
