//! The player combatant.
//!
//! Owned by the surrounding game session and borrowed mutably by a battle for
//! its duration. Only base stats, current health, the boss bonus, and the
//! loadout are stored; every effective value is derived on demand.

use super::derived::{BaseStats, DerivedStats};
use super::equipment::{EquipmentKind, Loadout, Suppression};
use crate::combat::{apply_damage, apply_heal, mitigate};
use crate::error::EquipError;

/// Result of routing raw damage through the stat model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Damage before mitigation.
    pub raw: u32,
    /// Damage actually subtracted from health (before the clamp to 0).
    pub dealt: u32,
    /// Health after the hit.
    pub remaining: u32,
}

/// The single player-controlled combatant.
///
/// Invariant: `0 ≤ current_health ≤ effective_max_health(suppression)` for the
/// suppression in force at every observation point.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCombatant {
    base: BaseStats,
    current_health: u32,
    equipment: Loadout,
}

impl PlayerCombatant {
    /// A fresh adventurer: 100 HP, 25 attack, no equipment.
    pub fn new() -> Self {
        Self::with_base(BaseStats::default())
    }

    /// Creates a player at full health for the given base stats.
    pub fn with_base(base: BaseStats) -> Self {
        Self {
            base,
            current_health: base.max_health,
            equipment: Loadout::new(),
        }
    }

    /// Rebuilds a player from persisted parts, clamping health into range.
    pub fn from_parts(base: BaseStats, current_health: u32, equipment: Loadout) -> Self {
        let mut player = Self {
            base,
            current_health,
            equipment,
        };
        player.current_health = player
            .current_health
            .min(player.effective_max_health(Suppression::NONE));
        player
    }

    // ===== read access =====

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn base_max_health(&self) -> u32 {
        self.base.max_health
    }

    pub fn base_attack(&self) -> u32 {
        self.base.attack
    }

    pub fn boss_attack_bonus(&self) -> u32 {
        self.base.boss_attack_bonus
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn equipment(&self) -> &Loadout {
        &self.equipment
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    // ===== derived stats =====

    pub fn derived(&self, suppression: Suppression) -> DerivedStats {
        DerivedStats::compute(&self.base, &self.equipment, suppression)
    }

    pub fn effective_max_health(&self, suppression: Suppression) -> u32 {
        self.derived(suppression).max_health
    }

    pub fn effective_attack(&self, suppression: Suppression) -> u32 {
        self.derived(suppression).attack
    }

    /// Extra action slots granted for a battle run under `suppression`.
    pub fn extra_action_grant(&self, suppression: Suppression) -> u32 {
        self.derived(suppression).extra_actions
    }

    // ===== health =====

    /// Routes raw damage through shield mitigation and subtracts it.
    pub fn take_damage(&mut self, incoming: u32, suppression: Suppression) -> DamageReport {
        let dealt = mitigate(incoming, self.derived(suppression).mitigation_halvings);
        self.current_health = apply_damage(self.current_health, dealt);
        DamageReport {
            raw: incoming,
            dealt,
            remaining: self.current_health,
        }
    }

    /// Heals up to the effective max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32, suppression: Suppression) -> u32 {
        let before = self.current_health;
        self.current_health = apply_heal(
            self.current_health,
            amount,
            self.effective_max_health(suppression),
        );
        self.current_health.saturating_sub(before)
    }

    pub fn restore_to_full(&mut self, suppression: Suppression) {
        self.current_health = self.effective_max_health(suppression);
    }

    // ===== permanent growth =====

    /// Raises base max health. Current health is untouched.
    pub fn increase_base_max_health(&mut self, amount: u32) {
        self.base.max_health = self.base.max_health.saturating_add(amount);
    }

    pub fn increase_base_attack(&mut self, amount: u32) {
        self.base.attack = self.base.attack.saturating_add(amount);
    }

    pub fn add_boss_attack_bonus(&mut self, amount: u32) {
        self.base.boss_attack_bonus = self.base.boss_attack_bonus.saturating_add(amount);
    }

    // ===== equipment =====

    /// Adds equipment, failing without mutation when the loadout is full.
    pub fn add_equipment(&mut self, kind: EquipmentKind) -> Result<(), EquipError> {
        self.equipment.add(kind)
    }

    pub fn equipment_count(&self, kind: EquipmentKind) -> u32 {
        self.equipment.count(kind)
    }
}

impl Default for PlayerCombatant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, RandomSource};

    fn equipped(kinds: &[EquipmentKind]) -> PlayerCombatant {
        let mut player = PlayerCombatant::new();
        for &kind in kinds {
            player.add_equipment(kind).unwrap();
        }
        player.restore_to_full(Suppression::NONE);
        player
    }

    #[test]
    fn two_shields_quarter_incoming_damage() {
        let mut player = equipped(&[EquipmentKind::Shield, EquipmentKind::Shield]);
        let report = player.take_damage(100, Suppression::NONE);
        assert_eq!(report.dealt, 25);
        assert_eq!(report.remaining, 75);
    }

    #[test]
    fn disabled_shield_takes_full_damage() {
        let mut player = equipped(&[EquipmentKind::Shield, EquipmentKind::Shield]);
        let report = player.take_damage(60, Suppression::of(EquipmentKind::Shield));
        assert_eq!(report.dealt, 60);
        assert_eq!(player.current_health(), 40);
    }

    #[test]
    fn armor_raises_max_and_restore_fills_it() {
        let mut player = equipped(&[EquipmentKind::Armor]);
        assert_eq!(player.effective_max_health(Suppression::NONE), 200);
        assert_eq!(player.current_health(), 200);

        player.restore_to_full(Suppression::of(EquipmentKind::Armor));
        assert_eq!(player.current_health(), 100);
    }

    #[test]
    fn heal_reports_restored_amount() {
        let mut player = PlayerCombatant::new();
        player.take_damage(30, Suppression::NONE);
        assert_eq!(player.heal(50, Suppression::NONE), 30);
        assert_eq!(player.current_health(), 100);
    }

    #[test]
    fn full_inventory_reports_without_mutation() {
        let mut player = equipped(&[
            EquipmentKind::Sword,
            EquipmentKind::Shoes,
            EquipmentKind::Shoes,
        ]);
        let before = player.clone();
        assert!(player.add_equipment(EquipmentKind::Armor).is_err());
        assert_eq!(player, before);
        assert_eq!(player.extra_action_grant(Suppression::NONE), 2);
    }

    #[test]
    fn from_parts_clamps_overfull_health() {
        let player = PlayerCombatant::from_parts(BaseStats::new(100, 25), 999, Loadout::new());
        assert_eq!(player.current_health(), 100);
    }

    #[test]
    fn health_stays_in_bounds_under_random_damage_and_healing() {
        let mut rng = PcgRng::seeded(2024);
        let suppressions = [
            Suppression::NONE,
            Suppression::of(EquipmentKind::Shield),
            Suppression::of(EquipmentKind::Armor),
        ];

        for trial in 0..50 {
            let mut player = equipped(&[EquipmentKind::Armor, EquipmentKind::Shield]);
            let suppression = suppressions[trial % suppressions.len()];
            player.restore_to_full(suppression);

            for _ in 0..40 {
                if rng.below(3) == 0 {
                    player.heal(rng.below(120), suppression);
                } else {
                    player.take_damage(rng.below(150), suppression);
                }
                assert!(player.current_health() <= player.effective_max_health(suppression));
            }
        }
    }
}
