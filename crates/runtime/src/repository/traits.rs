//! Repository contract for saving and loading a run.

use super::format::SaveData;
use super::Result;

/// Single-slot save storage.
///
/// Pending battle modifiers are never part of [`SaveData`], so loading a save
/// always starts with a clean next battle.
pub trait SaveRepository: Send + Sync {
    /// Replace the stored save.
    fn save(&self, data: &SaveData) -> Result<()>;

    /// Load the stored save, `None` when there is none.
    fn load(&self) -> Result<Option<SaveData>>;

    /// Check if a save exists
    fn exists(&self) -> bool;

    /// Delete the save. Deleting a missing save is not an error.
    fn delete(&self) -> Result<()>;
}
