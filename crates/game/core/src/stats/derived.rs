//! Derived stats - effective values computed from base stats and equipment.
//!
//! These are NOT stored - always recomputed from the base stats, the loadout,
//! and the battle's suppression whenever they are needed. Changing equipment or
//! lifting a suppression therefore takes effect immediately.

use super::equipment::{EquipmentKind, Loadout, Suppression};

/// Max health added per effective Armor.
pub const ARMOR_HEALTH_BONUS: u32 = 100;

/// Base stats persisted on the player between battles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_health: u32,
    pub attack: u32,
    /// Cumulative flat attack bonus; applies regardless of suppression.
    pub boss_attack_bonus: u32,
}

impl BaseStats {
    pub const fn new(max_health: u32, attack: u32) -> Self {
        Self {
            max_health,
            attack,
            boss_attack_bonus: 0,
        }
    }
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::new(100, 25)
    }
}

/// Effective combat statistics for one observation point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// `base + 100 × armor`
    pub max_health: u32,

    /// `base + floor(0.5 × base × swords) + boss_bonus`
    pub attack: u32,

    /// Number of times incoming damage is halved (effective shields).
    pub mitigation_halvings: u32,

    /// Extra action slots granted per battle (effective shoes).
    pub extra_actions: u32,
}

impl DerivedStats {
    /// Compute effective stats.
    ///
    /// Base formulas:
    /// - MaxHealth: base + 100 × Armor
    /// - Attack: base + floor(base × Sword / 2) + boss bonus
    /// - Mitigation: one halving per Shield
    /// - Extra actions: one per Shoes
    ///
    /// A suppressed kind contributes nothing.
    pub fn compute(base: &BaseStats, loadout: &Loadout, suppression: Suppression) -> Self {
        let armor = suppression.effective_count(loadout, EquipmentKind::Armor);
        let swords = suppression.effective_count(loadout, EquipmentKind::Sword);
        let shields = suppression.effective_count(loadout, EquipmentKind::Shield);
        let shoes = suppression.effective_count(loadout, EquipmentKind::Shoes);

        Self {
            max_health: effective_max_health(base.max_health, armor),
            attack: effective_attack(base.attack, swords, base.boss_attack_bonus),
            mitigation_halvings: shields,
            extra_actions: shoes,
        }
    }
}

/// `base + 100 × armor`, saturating.
pub fn effective_max_health(base_max_health: u32, armor: u32) -> u32 {
    base_max_health.saturating_add(ARMOR_HEALTH_BONUS.saturating_mul(armor))
}

/// `base + floor(0.5 × base × swords) + bonus`, saturating.
pub fn effective_attack(base_attack: u32, swords: u32, boss_attack_bonus: u32) -> u32 {
    let sword_bonus = base_attack.saturating_mul(swords) / 2;
    base_attack
        .saturating_add(sword_bonus)
        .saturating_add(boss_attack_bonus)
}
