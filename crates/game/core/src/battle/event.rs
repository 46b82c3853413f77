//! Narrated battle events.
//!
//! The resolver emits one record per observable step, in order. Frontends
//! render them; tests assert on them.

use super::outcome::BattleOutcome;
use super::setup::FirstMover;
use crate::enemy::EnemyKind;
use crate::error::SelectionError;
use crate::potion::PotionKind;
use crate::stats::EquipmentKind;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    BattleStarted {
        enemies: Vec<EnemyKind>,
        first_mover: FirstMover,
        double_health: bool,
        disabled: Option<EquipmentKind>,
        extra_actions: u32,
    },

    RoundStarted {
        turn: u32,
    },

    /// A top-level choice was malformed; the same slot is asked again.
    ChoiceRejected,

    PlayerAttacked {
        /// Party index of the target.
        target: usize,
        kind: EnemyKind,
        damage: u32,
        remaining: u32,
    },

    EnemyDefeated {
        target: usize,
        kind: EnemyKind,
    },

    PotionUsed {
        kind: PotionKind,
        healed: u32,
        health: u32,
        max_health: u32,
        attack: u32,
        left: u32,
    },

    /// A sub-selection failed; the action was dropped without effect.
    ActionCancelled {
        reason: SelectionError,
    },

    Skipped,

    EnemyAttacked {
        attacker: usize,
        kind: EnemyKind,
        raw: u32,
        dealt: u32,
        remaining: u32,
    },

    BossSummoned {
        kind: EnemyKind,
        requested: u32,
        /// Enemies actually added after clipping.
        count: u32,
    },

    PlayerDefeated,

    TurnLimitReached {
        limit: u32,
    },

    BattleEnded {
        outcome: BattleOutcome,
        turns: u32,
    },
}
