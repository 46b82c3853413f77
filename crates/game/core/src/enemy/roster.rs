//! Fixed enemy archetype table.

use crate::error::ParseKindError;

/// Enemy kinds.
///
/// Only [`EnemyKind::Boss`] behaves differently in combat; everything else is
/// data looked up from [`EnemyKind::archetype`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    /// Weak: low health, low attack.
    Slim,
    /// Medium health and attack.
    Batho,
    /// Glass cannon: very low health, very high attack.
    Goust,
    /// Final boss with summoning.
    Boss,
}

/// Base stats for an enemy kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub max_health: u32,
    pub attack: u32,
}

impl EnemyKind {
    pub const COUNT: usize = 4;

    pub const fn all() -> [EnemyKind; Self::COUNT] {
        [
            EnemyKind::Slim,
            EnemyKind::Batho,
            EnemyKind::Goust,
            EnemyKind::Boss,
        ]
    }

    /// Archetype table: kind → (base max health, base attack).
    pub const fn archetype(self) -> Archetype {
        let (max_health, attack) = match self {
            Self::Slim => (30, 10),
            Self::Batho => (60, 30),
            Self::Goust => (10, 80),
            Self::Boss => (300, 50),
        };
        Archetype { max_health, attack }
    }

    pub const fn is_boss(self) -> bool {
        matches!(self, Self::Boss)
    }

    pub fn parse(name: &str) -> Result<Self, ParseKindError> {
        name.trim()
            .parse()
            .map_err(|_| ParseKindError::new("enemy", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_table() {
        assert_eq!(
            EnemyKind::Slim.archetype(),
            Archetype {
                max_health: 30,
                attack: 10
            }
        );
        assert_eq!(EnemyKind::Batho.archetype().max_health, 60);
        assert_eq!(EnemyKind::Goust.archetype().attack, 80);
        assert_eq!(EnemyKind::Boss.archetype().max_health, 300);
        assert!(EnemyKind::Boss.is_boss());
        assert!(!EnemyKind::Goust.is_boss());
    }

    #[test]
    fn parse_names() {
        assert_eq!(EnemyKind::parse("batho"), Ok(EnemyKind::Batho));
        assert_eq!(EnemyKind::parse("Boss"), Ok(EnemyKind::Boss));
        assert!(EnemyKind::parse("Dragon").is_err());
    }
}
