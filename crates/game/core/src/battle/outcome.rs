use super::event::BattleEvent;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    /// Every enemy was defeated.
    Victory,
    /// The player fell or the turn limit was exceeded.
    Defeat,
    /// The player declined to continue. Counts as neither win nor loss.
    Aborted,
}

impl BattleOutcome {
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory)
    }
}

/// Everything a caller learns from one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Final value of the round counter.
    pub turns: u32,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    pub fn is_victory(&self) -> bool {
        self.outcome.is_victory()
    }
}
