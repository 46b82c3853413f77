//! Boss action selection.
//!
//! The boss re-evaluates its options every time it acts, keyed only by how
//! many party members (itself included) are alive at that moment:
//!
//! | alive | draw         | outcome                                         |
//! |-------|--------------|-------------------------------------------------|
//! | ≥ 3   | none         | Attack                                          |
//! | 2     | `below(2)`   | 0 → Attack, 1 → Summon 1 Goust                  |
//! | ≤ 1   | `below(100)` | <34 Attack, <67 Summon 2 Batho, else 1 Goust    |
//!
//! Summons are clipped to the party's free capacity; a summon clipped to zero
//! becomes an attack.

use super::roster::EnemyKind;
use crate::config::GameConfig;
use crate::env::RandomSource;

/// What the boss does this action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BossAction {
    Attack,
    Summon {
        kind: EnemyKind,
        /// Count the branch asked for.
        requested: u32,
        /// Count that fits in the party; always ≥ 1.
        count: u32,
    },
}

/// A boss action together with the draw that selected it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDecision {
    /// `None` when the branch required no draw.
    pub roll: Option<u32>,
    pub action: BossAction,
    /// True when a summon branch was selected but had no room.
    pub degraded: bool,
}

/// Probabilistic boss decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BossDecisionPolicy {
    capacity: usize,
}

impl BossDecisionPolicy {
    /// Upper bound (exclusive) of the attack band in the lone-boss draw.
    pub const LONE_ATTACK_BELOW: u32 = 34;
    /// Upper bound (exclusive) of the Batho band in the lone-boss draw.
    pub const LONE_BATHO_BELOW: u32 = 67;
    /// Bathos requested by the lone-boss summon.
    pub const BATHO_SUMMON: u32 = 2;

    pub const fn new() -> Self {
        Self::with_capacity(GameConfig::MAX_PARTY)
    }

    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Choose the boss's action.
    ///
    /// `alive_count` counts living party members including the boss;
    /// `party_size` is the current length of the party used for clipping.
    pub fn decide(
        &self,
        alive_count: usize,
        party_size: usize,
        rng: &mut impl RandomSource,
    ) -> BossDecision {
        if alive_count >= 3 {
            return BossDecision {
                roll: None,
                action: BossAction::Attack,
                degraded: false,
            };
        }

        let (roll, intent) = if alive_count == 2 {
            let roll = rng.below(2);
            let intent = if roll == 0 {
                None
            } else {
                Some((EnemyKind::Goust, 1))
            };
            (roll, intent)
        } else {
            let roll = rng.below(100);
            let intent = if roll < Self::LONE_ATTACK_BELOW {
                None
            } else if roll < Self::LONE_BATHO_BELOW {
                Some((EnemyKind::Batho, Self::BATHO_SUMMON))
            } else {
                Some((EnemyKind::Goust, 1))
            };
            (roll, intent)
        };

        let Some((kind, requested)) = intent else {
            return BossDecision {
                roll: Some(roll),
                action: BossAction::Attack,
                degraded: false,
            };
        };

        let free = self.capacity.saturating_sub(party_size) as u32;
        let count = requested.min(free);
        if count == 0 {
            return BossDecision {
                roll: Some(roll),
                action: BossAction::Attack,
                degraded: true,
            };
        }

        BossDecision {
            roll: Some(roll),
            action: BossAction::Summon {
                kind,
                requested,
                count,
            },
            degraded: false,
        }
    }
}

impl Default for BossDecisionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
