//! Transient per-battle state.

use arrayvec::ArrayVec;

use super::setup::{BattleSetup, FirstMover};
use crate::config::GameConfig;
use crate::enemy::{EnemyCombatant, EnemyKind};
use crate::stats::Suppression;

/// Enemy party with a hard capacity of [`GameConfig::MAX_PARTY`].
pub type EnemyParty = ArrayVec<EnemyCombatant, { GameConfig::MAX_PARTY }>;

/// State owned by one battle and dropped with it.
///
/// Holds the battle-scoped modifiers (suppression, extra actions) so they can
/// never leak onto the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleSession {
    party: EnemyParty,
    turn: u32,
    first_mover: FirstMover,
    suppression: Suppression,
    extra_actions: u32,
}

impl BattleSession {
    /// Builds the initial party from `setup`, truncated to capacity.
    pub fn from_setup(setup: &BattleSetup, extra_actions: u32) -> Self {
        if setup.archetypes.len() > GameConfig::MAX_PARTY {
            tracing::warn!(
                requested = setup.archetypes.len(),
                capacity = GameConfig::MAX_PARTY,
                "enemy party truncated"
            );
        }

        let party = setup
            .archetypes
            .iter()
            .take(GameConfig::MAX_PARTY)
            .map(|&kind| {
                let mut enemy = EnemyCombatant::spawn(kind);
                if setup.double_health {
                    enemy.double_health();
                }
                enemy
            })
            .collect();

        Self {
            party,
            turn: 0,
            first_mover: setup.first_mover,
            suppression: setup.disabled,
            extra_actions,
        }
    }

    pub fn party(&self) -> &[EnemyCombatant] {
        &self.party
    }

    pub fn enemy_mut(&mut self, index: usize) -> Option<&mut EnemyCombatant> {
        self.party.get_mut(index)
    }

    pub fn party_len(&self) -> usize {
        self.party.len()
    }

    pub fn alive_count(&self) -> usize {
        self.party.iter().filter(|enemy| enemy.is_alive()).count()
    }

    /// Party indices of living enemies, in party order.
    ///
    /// Position in this list is the target number offered to the player.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.party
            .iter()
            .enumerate()
            .filter(|(_, enemy)| enemy.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    /// Drops defeated enemies, keeping the survivors' relative order.
    ///
    /// Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.party.len();
        self.party.retain(|enemy| enemy.is_alive());
        before - self.party.len()
    }

    pub fn is_cleared(&self) -> bool {
        self.party.iter().all(|enemy| !enemy.is_alive())
    }

    /// Appends up to `count` fresh enemies. Returns the number added.
    ///
    /// Summoned enemies are never health-doubled.
    pub fn summon(&mut self, kind: EnemyKind, count: u32) -> u32 {
        let mut added = 0;
        for _ in 0..count {
            if self.party.try_push(EnemyCombatant::spawn(kind)).is_err() {
                break;
            }
            added += 1;
        }
        added
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Starts the next round and returns its number.
    pub fn advance_turn(&mut self) -> u32 {
        self.turn = self.turn.saturating_add(1);
        self.turn
    }

    /// Overrides the round counter, e.g. when resuming near the turn limit.
    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    pub fn first_mover(&self) -> FirstMover {
        self.first_mover
    }

    pub fn suppression(&self) -> Suppression {
        self.suppression
    }

    pub fn extra_actions(&self) -> u32 {
        self.extra_actions
    }

    /// Hands out the battle's extra actions once; later calls return 0.
    pub fn take_extra_actions(&mut self) -> u32 {
        core::mem::take(&mut self.extra_actions)
    }
}
