//! Run configuration.
//!
//! The original dataset scripts hardcoded the answer-key filename and the
//! variant directory list as globals; two forks differed only in those two
//! values. [`SortConfig`] makes both explicit so a run can be pointed at any
//! dataset layout (and tests at temporary directories).

use std::path::PathBuf;

/// Default answer-key filename.
pub const DEFAULT_ANSWERS_FILE: &str = "Answers";

/// Default image file extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "pgm";

/// Default variant directory list, in processing order.
pub const DEFAULT_VARIANT_DIRS: &[&str] = &[
    "mammograms",
    "output",
    "saturated",
    "output_simple",
    "saturated_simple",
];

/// Configuration for a sorting run.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Path to the answer-key file.
    pub answers_path: PathBuf,

    /// Variant directories to sort, in order. Each is expected to directly
    /// contain files named `<image_id>.<extension>`.
    pub variant_dirs: Vec<PathBuf>,

    /// Image file extension (without the dot).
    pub extension: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            answers_path: PathBuf::from(DEFAULT_ANSWERS_FILE),
            variant_dirs: DEFAULT_VARIANT_DIRS.iter().map(PathBuf::from).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl SortConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> SortConfigBuilder {
        SortConfigBuilder::default()
    }
}

/// Builder for [`SortConfig`].
#[derive(Debug, Default)]
pub struct SortConfigBuilder {
    answers_path: Option<PathBuf>,
    variant_dirs: Option<Vec<PathBuf>>,
    extension: Option<String>,
}

impl SortConfigBuilder {
    /// Set the answer-key path.
    #[must_use]
    pub fn answers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.answers_path = Some(path.into());
        self
    }

    /// Set the variant directory list (replaces any previous list).
    #[must_use]
    pub fn variant_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.variant_dirs = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    /// Add a single variant directory.
    #[must_use]
    pub fn variant_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.variant_dirs.get_or_insert_with(Vec::new).push(dir.into());
        self
    }

    /// Set the image file extension (without the dot).
    #[must_use]
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> SortConfig {
        let defaults = SortConfig::default();
        SortConfig {
            answers_path: self.answers_path.unwrap_or(defaults.answers_path),
            variant_dirs: self.variant_dirs.unwrap_or(defaults.variant_dirs),
            extension: self.extension.unwrap_or(defaults.extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_later_script_variant() {
        let config = SortConfig::default();
        assert_eq!(config.answers_path, PathBuf::from("Answers"));
        assert_eq!(config.variant_dirs.len(), 5);
        assert_eq!(config.extension, "pgm");
    }

    #[test]
    fn test_builder_overrides() {
        let config = SortConfig::builder()
            .answers_path("answers")
            .variant_dirs(["mammograms", "output"])
            .extension("png")
            .build();
        assert_eq!(config.answers_path, PathBuf::from("answers"));
        assert_eq!(config.variant_dirs, [PathBuf::from("mammograms"), PathBuf::from("output")]);
        assert_eq!(config.extension, "png");
    }

    #[test]
    fn test_builder_variant_dir_appends_in_order() {
        let config = SortConfig::builder()
            .variant_dir("a")
            .variant_dir("b")
            .build();
        assert_eq!(config.variant_dirs, [PathBuf::from("a"), PathBuf::from("b")]);
    }
}
