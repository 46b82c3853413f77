//! Level catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::levels::{LevelCatalog, LevelSpec};
use crate::loaders::{LoadResult, read_file};

/// Level catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelFile {
    pub levels: Vec<LevelSpec>,
}

/// Loader for the level catalog from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<LevelCatalog> {
        let file: LevelFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level catalog RON: {}", e))?;

        Ok(LevelCatalog::new(file.levels)?)
    }

    /// Loads `path` when given, otherwise the built-in twelve levels.
    pub fn load_or_builtin(path: Option<&Path>) -> LoadResult<LevelCatalog> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(LevelCatalog::builtin()),
        }
    }
}
