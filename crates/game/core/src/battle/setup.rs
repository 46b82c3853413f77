use crate::enemy::EnemyKind;
use crate::stats::{EquipmentKind, Suppression};

/// Which side acts first in every round.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstMover {
    #[default]
    Player,
    EnemyParty,
}

/// One side of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Player,
    Enemy,
}

impl FirstMover {
    /// Phase order within a round.
    pub const fn phases(self) -> [Phase; 2] {
        match self {
            Self::Player => [Phase::Player, Phase::Enemy],
            Self::EnemyParty => [Phase::Enemy, Phase::Player],
        }
    }
}

/// Parameters for a single battle, supplied by the level and event layers.
///
/// The modifiers apply to exactly this battle; nothing here is written back to
/// the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSetup {
    /// Initial party, in order. Entries past party capacity are dropped.
    pub archetypes: Vec<EnemyKind>,
    pub first_mover: FirstMover,
    /// Doubles every initial enemy's health once, before any damage.
    pub double_health: bool,
    pub disabled: Suppression,
}

impl BattleSetup {
    pub fn new(archetypes: impl IntoIterator<Item = EnemyKind>, first_mover: FirstMover) -> Self {
        Self {
            archetypes: archetypes.into_iter().collect(),
            first_mover,
            double_health: false,
            disabled: Suppression::NONE,
        }
    }

    pub fn with_double_health(mut self, double_health: bool) -> Self {
        self.double_health = double_health;
        self
    }

    pub fn with_disabled(mut self, disabled: Option<EquipmentKind>) -> Self {
        self.disabled = Suppression::from_option(disabled);
        self
    }
}
