//! Deterministic combat rules shared by the runtime and the client.
//!
//! `game-core` owns the stat model, enemy roster, boss policy, potions, and the
//! battle resolver. It performs no I/O: randomness arrives through
//! [`env::RandomSource`] and player decisions through
//! [`battle::DecisionProvider`], so every battle replays exactly under a fixed
//! seed and script.
pub mod battle;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod env;
pub mod error;
pub mod potion;
pub mod stats;

pub use battle::{
    ActionChoice, BattleEvent, BattleOutcome, BattleReport, BattleSession, BattleSetup,
    BattleView, CombatResolver, DecisionProvider, FirstMover, ScriptedProvider,
};
pub use config::GameConfig;
pub use enemy::{Archetype, BossAction, BossDecision, BossDecisionPolicy, EnemyCombatant, EnemyKind};
pub use env::{PcgRng, RandomSource, SequenceRng};
pub use error::{EquipError, ErrorSeverity, GameError, ParseKindError, SelectionError};
pub use potion::{PotionEffect, PotionInventory, PotionKind, PotionStack};
pub use stats::{
    BaseStats, DamageReport, DerivedStats, EquipmentKind, Loadout, PlayerCombatant, Suppression,
};
