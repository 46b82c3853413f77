use super::roster::EnemyKind;
use crate::combat::apply_damage;

/// A single hostile combatant.
///
/// Immutable after creation except for health and the one-time double-health
/// transform applied at party construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCombatant {
    kind: EnemyKind,
    max_health: u32,
    current_health: u32,
    attack: u32,
    doubled: bool,
}

impl EnemyCombatant {
    /// Fresh enemy at full health from the archetype table.
    pub fn spawn(kind: EnemyKind) -> Self {
        let archetype = kind.archetype();
        Self {
            kind,
            max_health: archetype.max_health,
            current_health: archetype.max_health,
            attack: archetype.attack,
            doubled: false,
        }
    }

    /// Doubles max and current health. A second call is a no-op.
    pub fn double_health(&mut self) {
        if self.doubled {
            return;
        }
        self.max_health = self.max_health.saturating_mul(2);
        self.current_health = self.current_health.saturating_mul(2);
        self.doubled = true;
    }

    /// Subtracts raw damage. Enemies have no mitigation.
    ///
    /// Returns health left.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.current_health = apply_damage(self.current_health, damage);
        self.current_health
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_boss(&self) -> bool {
        self.kind.is_boss()
    }

    pub fn is_doubled(&self) -> bool {
        self.doubled
    }
}
