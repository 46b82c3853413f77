//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{RepositoryError, Result, SaveData, SaveRepository};

/// Save slot backed by a single text file.
///
/// Writes go to `<path>.tmp` first and are renamed over the target, so a crash
/// mid-write never leaves a truncated save.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository for `path`, creating its parent directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, data: &SaveData) -> Result<()> {
        let temp_path = self.temp_path();

        // Write to temp file
        fs::write(&temp_path, data.encode()).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved game: {}", self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let data = SaveData::decode(&text)?;

        tracing::info!(
            "Loaded save {} at level {}",
            self.path.display(),
            data.level
        );

        Ok(Some(data))
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::info!("Deleted save: {}", self.path.display());
        }

        Ok(())
    }
}
