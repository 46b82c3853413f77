//! Battle setup, the resolver state machine, and its narrated output.

pub mod event;
pub mod outcome;
pub mod provider;
pub mod resolver;
pub mod session;
pub mod setup;

pub use event::BattleEvent;
pub use outcome::{BattleOutcome, BattleReport};
pub use provider::{ActionChoice, BattleView, DecisionProvider, ScriptedProvider};
pub use resolver::CombatResolver;
pub use session::{BattleSession, EnemyParty};
pub use setup::{BattleSetup, FirstMover, Phase};
