//! The level catalog.
//!
//! A run is a fixed sequence of levels numbered from 1. Battle levels name the
//! opening enemy party; event levels roll on the random event table instead.

use game_core::{EnemyKind, GameConfig};

/// What happens on a level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelKind {
    Battle { enemies: Vec<EnemyKind> },
    Event,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub number: u32,
    pub kind: LevelKind,
    /// Winning this level also grants a random equipment piece.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus_equipment: bool,
}

impl LevelSpec {
    pub fn battle(number: u32, enemies: impl IntoIterator<Item = EnemyKind>) -> Self {
        Self {
            number,
            kind: LevelKind::Battle {
                enemies: enemies.into_iter().collect(),
            },
            bonus_equipment: false,
        }
    }

    pub fn event(number: u32) -> Self {
        Self {
            number,
            kind: LevelKind::Event,
            bonus_equipment: false,
        }
    }

    pub fn with_bonus_equipment(mut self) -> Self {
        self.bonus_equipment = true;
        self
    }

    /// Opening party for battle levels, `None` for event levels.
    pub fn enemies(&self) -> Option<&[EnemyKind]> {
        match &self.kind {
            LevelKind::Battle { enemies } => Some(enemies),
            LevelKind::Event => None,
        }
    }

    pub fn is_battle(&self) -> bool {
        matches!(self.kind, LevelKind::Battle { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("level catalog is empty")]
    Empty,

    #[error("level at position {position} is numbered {number}, expected {expected}")]
    OutOfSequence {
        position: usize,
        number: u32,
        expected: u32,
    },

    #[error("battle level {number} has {count} enemies (allowed 1..={max})")]
    PartySize { number: u32, count: usize, max: usize },
}

/// Validated, contiguous list of levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    /// Validates numbering (1, 2, 3, …) and battle party sizes.
    pub fn new(levels: Vec<LevelSpec>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (position, level) in levels.iter().enumerate() {
            let expected = position as u32 + 1;
            if level.number != expected {
                return Err(CatalogError::OutOfSequence {
                    position,
                    number: level.number,
                    expected,
                });
            }
            let count = level.enemies().map_or(1, <[EnemyKind]>::len);
            if count == 0 || count > GameConfig::MAX_PARTY {
                return Err(CatalogError::PartySize {
                    number: level.number,
                    count,
                    max: GameConfig::MAX_PARTY,
                });
            }
        }

        Ok(Self { levels })
    }

    /// The standard twelve-level run ending in the boss.
    pub fn builtin() -> Self {
        use EnemyKind::{Batho, Boss, Slim};

        Self {
            levels: vec![
                LevelSpec::battle(1, [Slim]),
                LevelSpec::battle(2, [Slim, Slim]),
                LevelSpec::event(3),
                LevelSpec::battle(4, [Batho]).with_bonus_equipment(),
                LevelSpec::battle(5, [Batho, Slim]),
                LevelSpec::battle(6, [Batho, Slim, Slim]),
                LevelSpec::event(7),
                LevelSpec::battle(8, [Batho, Batho]).with_bonus_equipment(),
                LevelSpec::battle(9, [Batho, Batho, Slim]),
                LevelSpec::battle(10, [Batho, Batho, Batho]),
                LevelSpec::event(11),
                LevelSpec::battle(12, [Boss]),
            ],
        }
    }

    pub fn get(&self, number: u32) -> Option<&LevelSpec> {
        let index = number.checked_sub(1)? as usize;
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of the last level; clearing it wins the run.
    pub fn final_level(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(
            LevelCatalog::new(catalog.iter().cloned().collect()),
            Ok(catalog.clone())
        );
        assert_eq!(catalog.final_level(), 12);
        assert_eq!(catalog.get(12).and_then(LevelSpec::enemies), Some(&[EnemyKind::Boss][..]));
        assert!(!catalog.get(3).is_some_and(LevelSpec::is_battle));

        let bonus: Vec<_> = catalog
            .iter()
            .filter(|level| level.bonus_equipment)
            .map(|level| level.number)
            .collect();
        assert_eq!(bonus, vec![4, 8]);
    }

    #[test]
    fn get_is_one_based() {
        let catalog = LevelCatalog::builtin();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(13).is_none());
        assert_eq!(catalog.get(1).map(|level| level.number), Some(1));
    }

    #[test]
    fn rejects_gaps_and_oversized_parties() {
        let gap = vec![LevelSpec::event(1), LevelSpec::event(3)];
        assert_eq!(
            LevelCatalog::new(gap),
            Err(CatalogError::OutOfSequence {
                position: 1,
                number: 3,
                expected: 2
            })
        );

        let crowded = vec![LevelSpec::battle(1, [EnemyKind::Slim; 4])];
        assert!(matches!(
            LevelCatalog::new(crowded),
            Err(CatalogError::PartySize { count: 4, .. })
        ));
        assert_eq!(LevelCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }
}
