//! Content loaders for reading game data from files.
//!
//! Bundled copies of the data files are compiled in, so a game can start
//! without a data directory; the `load` functions read replacements from
//! disk.

pub mod classes;
pub mod config;

pub use classes::ClassLoader;
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
