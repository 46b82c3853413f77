//! Sources of player decisions.
//!
//! The resolver blocks on a [`DecisionProvider`] at every decision point, so
//! the same battle can be driven by a terminal, a script, or a test fixture.

use std::collections::VecDeque;

use super::event::BattleEvent;
use crate::enemy::EnemyCombatant;
use crate::potion::{PotionInventory, PotionStack};
use crate::stats::{PlayerCombatant, Suppression};

/// Top-level choice for one action slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionChoice {
    Attack,
    UsePotion,
    Skip,
    /// Leave the battle; ends it as aborted.
    Abort,
    /// Malformed input. The slot is asked again.
    Invalid,
}

/// Read-only battle state offered to a provider when a slot opens.
#[derive(Clone, Copy, Debug)]
pub struct BattleView<'a> {
    pub turn: u32,
    /// 1-based slot within the current player phase.
    pub slot: u32,
    pub slots: u32,
    pub player: &'a PlayerCombatant,
    pub suppression: Suppression,
    pub party: &'a [EnemyCombatant],
    pub potions: &'a PotionInventory,
}

impl BattleView<'_> {
    pub fn player_health(&self) -> u32 {
        self.player.current_health()
    }

    pub fn player_max_health(&self) -> u32 {
        self.player.effective_max_health(self.suppression)
    }

    pub fn player_attack(&self) -> u32 {
        self.player.effective_attack(self.suppression)
    }
}

pub trait DecisionProvider {
    fn choose_action(&mut self, view: &BattleView<'_>) -> ActionChoice;

    /// Picks a position in `targets` (living enemies, party order).
    ///
    /// `None` means the input could not be read as a position.
    fn choose_target(&mut self, targets: &[&EnemyCombatant]) -> Option<usize>;

    /// Picks a position in `potions` (non-empty stacks, kind order).
    fn choose_potion(&mut self, potions: &[PotionStack]) -> Option<usize>;

    /// Called for every event as it happens.
    fn observe(&mut self, _event: &BattleEvent) {}
}

impl<P: DecisionProvider + ?Sized> DecisionProvider for &mut P {
    fn choose_action(&mut self, view: &BattleView<'_>) -> ActionChoice {
        (**self).choose_action(view)
    }

    fn choose_target(&mut self, targets: &[&EnemyCombatant]) -> Option<usize> {
        (**self).choose_target(targets)
    }

    fn choose_potion(&mut self, potions: &[PotionStack]) -> Option<usize> {
        (**self).choose_potion(potions)
    }

    fn observe(&mut self, event: &BattleEvent) {
        (**self).observe(event)
    }
}

/// Replays queued decisions.
///
/// Once the action script runs out every further slot aborts, so a script
/// can never hang a battle. Target and potion picks default to the first
/// entry when their queues are empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    actions: VecDeque<ActionChoice>,
    targets: VecDeque<Option<usize>>,
    potions: VecDeque<Option<usize>>,
    observed: Vec<BattleEvent>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = ActionChoice>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Always attacks the first living enemy.
    pub fn attacking(rounds: usize) -> Self {
        Self::new(std::iter::repeat_n(ActionChoice::Attack, rounds))
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn with_potions(mut self, potions: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.potions = potions.into_iter().collect();
        self
    }

    /// Events seen through [`DecisionProvider::observe`].
    pub fn observed(&self) -> &[BattleEvent] {
        &self.observed
    }

    pub fn remaining_actions(&self) -> usize {
        self.actions.len()
    }
}

impl DecisionProvider for ScriptedProvider {
    fn choose_action(&mut self, _view: &BattleView<'_>) -> ActionChoice {
        self.actions.pop_front().unwrap_or(ActionChoice::Abort)
    }

    fn choose_target(&mut self, _targets: &[&EnemyCombatant]) -> Option<usize> {
        self.targets.pop_front().unwrap_or(Some(0))
    }

    fn choose_potion(&mut self, _potions: &[PotionStack]) -> Option<usize> {
        self.potions.pop_front().unwrap_or(Some(0))
    }

    fn observe(&mut self, event: &BattleEvent) {
        self.observed.push(event.clone());
    }
}
