//! Potions: kinds, their fixed effects, and the stacked inventory.

pub mod inventory;

pub use inventory::{PotionInventory, PotionStack};

use crate::error::ParseKindError;
use crate::stats::{PlayerCombatant, Suppression};

/// The four potion kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PotionKind {
    #[strum(to_string = "Strength Potion", serialize = "Strength")]
    Strength,
    #[strum(to_string = "Attacker Potion", serialize = "Attacker")]
    Attacker,
    #[strum(to_string = "Life Potion", serialize = "Life")]
    Life,
    #[strum(to_string = "Mystery Potion", serialize = "Mystery")]
    Mystery,
}

impl PotionKind {
    pub const COUNT: usize = 4;

    pub const fn all() -> [PotionKind; Self::COUNT] {
        [
            PotionKind::Strength,
            PotionKind::Attacker,
            PotionKind::Life,
            PotionKind::Mystery,
        ]
    }

    /// Single-word identifier used by the save format.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Attacker => "Attacker",
            Self::Life => "Life",
            Self::Mystery => "Mystery",
        }
    }

    /// Parse either the display name or the key (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, ParseKindError> {
        name.trim()
            .parse()
            .map_err(|_| ParseKindError::new("potion", name))
    }

    /// The fixed effect of drinking this potion.
    pub const fn effect(self) -> PotionEffect {
        match self {
            Self::Strength => PotionEffect {
                max_health: 20,
                heal: 20,
                attack: 0,
            },
            Self::Attacker => PotionEffect {
                max_health: 0,
                heal: 0,
                attack: 5,
            },
            Self::Life => PotionEffect {
                max_health: 0,
                heal: 50,
                attack: 0,
            },
            Self::Mystery => PotionEffect {
                max_health: 40,
                heal: 40,
                attack: 10,
            },
        }
    }
}

/// Permanent and immediate changes applied by a potion. No randomness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionEffect {
    /// Added to base max health.
    pub max_health: u32,
    /// Healed after the max-health increase, clamped to the effective max.
    pub heal: u32,
    /// Added to base attack.
    pub attack: u32,
}

impl PotionEffect {
    /// Applies the effect. Returns the health actually restored.
    pub fn apply(&self, player: &mut PlayerCombatant, suppression: Suppression) -> u32 {
        player.increase_base_max_health(self.max_health);
        let healed = player.heal(self.heal, suppression);
        player.increase_base_attack(self.attack);
        healed
    }
}
