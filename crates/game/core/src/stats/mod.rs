//! Player stat model.
//!
//! ```text
//! [ BaseStats + Loadout ]      persisted on the player
//!          ↓  + Suppression    battle-scoped
//! [ DerivedStats ]             recomputed at every observation point
//!          ↓
//! [ damage / heal ]            combat::damage
//! ```
//!
//! Derived values are never stored, so a suppression cannot outlive the battle
//! that supplied it.

pub mod derived;
pub mod equipment;
pub mod player;

pub use derived::{ARMOR_HEALTH_BONUS, BaseStats, DerivedStats};
pub use equipment::{EquipmentKind, Loadout, Suppression};
pub use player::{DamageReport, PlayerCombatant};
