/// Combat constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Highest round number a battle may reach. Entering the round after this
    /// one is an unconditional defeat.
    pub turn_limit: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of enemies on the field at once (boss included).
    pub const MAX_PARTY: usize = 3;
    /// Maximum number of equipment pieces a player can carry.
    pub const MAX_EQUIPMENT: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_LIMIT: u32 = 50;

    pub fn new() -> Self {
        Self {
            turn_limit: Self::DEFAULT_TURN_LIMIT,
        }
    }

    pub fn with_turn_limit(turn_limit: u32) -> Self {
        Self { turn_limit }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
