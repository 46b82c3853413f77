//! Hostile combatants: archetype table, per-battle instances, boss policy.

pub mod boss;
pub mod combatant;
pub mod roster;

pub use boss::{BossAction, BossDecision, BossDecisionPolicy};
pub use combatant::EnemyCombatant;
pub use roster::{Archetype, EnemyKind};
