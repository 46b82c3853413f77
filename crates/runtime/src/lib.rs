//! Run orchestration around the combat core.
//!
//! This crate wires levels, random events, rewards, the shop, and persistence
//! into a cohesive runtime API. Consumers build a [`Runtime`] and play it level
//! by level, supplying a [`game_core::DecisionProvider`] for each battle.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`session`] holds the persistent state of a run
//! - [`events`] rolls random events and battle curses
//! - [`rewards`] pays out level rewards and shop purchases
//! - [`repository`] saves and loads runs
pub mod error;
pub mod events;
pub mod repository;
pub mod rewards;
pub mod runtime;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::{EventOutcome, roll_event};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveData, SaveRepository,
};
pub use rewards::{EquipmentReward, LevelRewards, grant_battle_rewards, purchase};
pub use runtime::{LevelReport, Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::{Difficulty, GameSession, PendingModifiers, RunStatus};
