//! State of one run: the player, their belongings, and level progress.

use game_core::{
    BaseStats, BattleSetup, EquipmentKind, FirstMover, Loadout, PlayerCombatant, PotionInventory,
};

use crate::error::{Result, RuntimeError};
use crate::repository::{RepositoryError, SaveData};

/// Chosen at the start of a run and saved with it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Player moves first; events are always positive.
    #[default]
    Easy,
    /// Enemies move first; half of all events are negative.
    Hard,
}

impl Difficulty {
    pub const fn first_mover(self) -> FirstMover {
        match self {
            Self::Easy => FirstMover::Player,
            Self::Hard => FirstMover::EnemyParty,
        }
    }

    pub const fn has_negative_events(self) -> bool {
        matches!(self, Self::Hard)
    }

    /// Numeric code used in save files.
    pub const fn code(self) -> u32 {
        match self {
            Self::Easy => 0,
            Self::Hard => 1,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Easy),
            1 => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Modifiers set by negative events for the next battle only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingModifiers {
    pub double_health: bool,
    pub disabled: Option<EquipmentKind>,
}

impl PendingModifiers {
    pub fn is_empty(&self) -> bool {
        !self.double_health && self.disabled.is_none()
    }

    /// Applies the modifiers to a battle setup.
    pub fn apply(self, setup: BattleSetup) -> BattleSetup {
        setup
            .with_double_health(self.double_health)
            .with_disabled(self.disabled)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum RunStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Everything that persists between levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub player: PlayerCombatant,
    pub potions: PotionInventory,
    pub gold: u32,
    /// Level currently being played (1-based).
    pub level: u32,
    pub difficulty: Difficulty,
    /// Consumed by the next battle; never saved.
    pub pending: PendingModifiers,
    pub status: RunStatus,
    /// True once the current level has been resolved and the run may move on.
    pub level_cleared: bool,
}

impl GameSession {
    /// A fresh run at level 1.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            player: PlayerCombatant::new(),
            potions: PotionInventory::new(),
            gold: 0,
            level: 1,
            difficulty,
            pending: PendingModifiers::default(),
            status: RunStatus::InProgress,
            level_cleared: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != RunStatus::InProgress
    }

    /// Hands the pending modifiers to a battle and clears them.
    pub fn take_pending(&mut self) -> PendingModifiers {
        std::mem::take(&mut self.pending)
    }

    /// Spends `amount` gold if available.
    pub fn spend_gold(&mut self, amount: u32) -> Result<()> {
        if self.gold < amount {
            return Err(RuntimeError::InsufficientGold {
                price: amount,
                gold: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    /// Level a save should resume from.
    pub fn resume_level(&self) -> u32 {
        if self.level_cleared {
            self.level + 1
        } else {
            self.level
        }
    }

    pub fn to_save(&self) -> SaveData {
        SaveData {
            level: self.resume_level(),
            difficulty: self.difficulty,
            base_max_health: self.player.base_max_health(),
            current_health: self.player.current_health(),
            base_attack: self.player.base_attack(),
            gold: self.gold,
            boss_attack_bonus: self.player.boss_attack_bonus(),
            equipment: self.player.equipment().iter().collect(),
            potions: self.potions.listing(),
        }
    }

    pub fn from_save(data: &SaveData) -> std::result::Result<Self, RepositoryError> {
        let mut loadout = Loadout::new();
        for &kind in &data.equipment {
            loadout
                .add(kind)
                .map_err(|err| RepositoryError::CorruptedData(err.to_string()))?;
        }

        let base = BaseStats {
            max_health: data.base_max_health,
            attack: data.base_attack,
            boss_attack_bonus: data.boss_attack_bonus,
        };
        let player = PlayerCombatant::from_parts(base, data.current_health, loadout);

        let mut potions = PotionInventory::new();
        for stack in &data.potions {
            potions.add(stack.kind, stack.quantity);
        }

        Ok(Self {
            player,
            potions,
            gold: data.gold,
            level: data.level,
            difficulty: data.difficulty,
            pending: PendingModifiers::default(),
            status: RunStatus::InProgress,
            level_cleared: false,
        })
    }
}
