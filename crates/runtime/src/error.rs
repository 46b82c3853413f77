//! Errors surfaced by the runtime API.
//!
//! Wraps repository and content failures so the client can report them with
//! consistent context.

use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Content(#[from] game_content::CatalogError),

    #[error("no saved game found")]
    NoSave,

    #[error("the run is over ({status})")]
    GameOver { status: crate::session::RunStatus },

    #[error("level {level} is not in the catalog of {levels} levels")]
    LevelOutOfRange { level: u32, levels: usize },

    #[error("level {level} has already been played")]
    LevelAlreadyCleared { level: u32 },

    #[error("level {level} must be played before moving on")]
    LevelNotCleared { level: u32 },

    #[error("not enough gold: costs {price}, have {gold}")]
    InsufficientGold { price: u32, gold: u32 },
}
