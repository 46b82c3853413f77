//! Combat arithmetic.
//!
//! Pure functions shared by the player stat model and enemy combatants:
//!
//! - `mitigate`: shield halving
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `apply_heal`: HP restoration (clamped to max)

pub mod damage;

pub use damage::{apply_damage, apply_heal, mitigate};
