//! CLI command implementations.

pub mod check;
pub mod init;
pub mod sort;

use std::path::PathBuf;

use mammo_sort::SortConfig;

/// Build a [`SortConfig`] from CLI arguments, falling back to the built-in
/// dataset layout when no directories were given.
pub fn config_from_args(answers: PathBuf, dirs: Vec<PathBuf>, extension: String) -> SortConfig {
    let mut builder = SortConfig::builder()
        .answers_path(answers)
        .extension(extension);
    if !dirs.is_empty() {
        builder = builder.variant_dirs(dirs);
    }
    builder.build()
}
