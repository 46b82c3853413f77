//! Content loaders for reading game data from files.
//!
//! Levels are RON, configuration is TOML. Both fall back to built-in content
//! when no file is supplied.

pub mod config;
pub mod levels;

pub use config::ConfigLoader;
pub use levels::{LevelFile, LevelLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
