//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use super::{RepositoryError, Result, SaveData, SaveRepository};

/// Keeps the encoded save text in memory.
#[derive(Default)]
pub struct InMemorySaveRepository {
    slot: RwLock<Option<String>>,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw save text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(text.into())),
        }
    }

    /// Raw text of the stored save.
    pub fn text(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, data: &SaveData) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(data.encode());
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>> {
        let slot = self
            .slot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slot.as_deref().map(SaveData::decode).transpose()
    }

    fn exists(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
