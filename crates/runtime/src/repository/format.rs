//! Flat-key save format.
//!
//! One `KEY value` pair per line:
//!
//! ```text
//! LEVEL 5
//! DIFFICULTY 1
//! PLAYER_BASE_MAXHP 120
//! PLAYER_CURRENTHP 95
//! PLAYER_BASE_ATTACK 30
//! PLAYER_GOLD 0
//! PLAYER_BOSS_BONUS 30
//! EQUIPMENT_COUNT 2
//! EQUIPMENT Shield
//! EQUIPMENT Sword
//! POTION_COUNT 1
//! POTION Life 2
//! ```
//!
//! `EQUIPMENT` and `POTION` lines are only honored up to the preceding count.
//! Unknown keys are ignored; malformed values are rejected.

use game_core::{EquipmentKind, GameConfig, PotionKind, PotionStack};

use super::{RepositoryError, Result};
use crate::session::Difficulty;

/// Everything persisted about a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveData {
    /// Next level to play.
    pub level: u32,
    pub difficulty: Difficulty,
    pub base_max_health: u32,
    pub current_health: u32,
    pub base_attack: u32,
    pub gold: u32,
    pub boss_attack_bonus: u32,
    pub equipment: Vec<EquipmentKind>,
    pub potions: Vec<PotionStack>,
}

impl SaveData {
    pub fn encode(&self) -> String {
        let mut out = String::new();
        let mut line = |key: &str, value: &dyn std::fmt::Display| {
            out.push_str(key);
            out.push(' ');
            out.push_str(&value.to_string());
            out.push('\n');
        };

        line("LEVEL", &self.level);
        line("DIFFICULTY", &self.difficulty.code());
        line("PLAYER_BASE_MAXHP", &self.base_max_health);
        line("PLAYER_CURRENTHP", &self.current_health);
        line("PLAYER_BASE_ATTACK", &self.base_attack);
        line("PLAYER_GOLD", &self.gold);
        line("PLAYER_BOSS_BONUS", &self.boss_attack_bonus);

        line("EQUIPMENT_COUNT", &self.equipment.len());
        for kind in &self.equipment {
            line("EQUIPMENT", kind);
        }

        line("POTION_COUNT", &self.potions.len());
        for stack in &self.potions {
            line(
                "POTION",
                &format_args!("{} {}", stack.kind.key(), stack.quantity),
            );
        }
        out
    }

    pub fn decode(text: &str) -> Result<Self> {
        let mut level = None;
        let mut difficulty = None;
        let mut base_max_health = None;
        let mut current_health = None;
        let mut base_attack = None;
        let mut gold = None;
        let mut boss_attack_bonus = None;
        let mut equipment = Vec::new();
        let mut potions = Vec::new();
        let mut equipment_left = 0u32;
        let mut potions_left = 0u32;

        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let Some(key) = fields.next() else {
                continue;
            };

            match key {
                "LEVEL" => level = Some(number(key, fields.next())?),
                "DIFFICULTY" => {
                    let code = number(key, fields.next())?;
                    difficulty = Some(Difficulty::from_code(code).ok_or_else(|| {
                        RepositoryError::CorruptedData(format!("unknown difficulty {code}"))
                    })?);
                }
                "PLAYER_BASE_MAXHP" => base_max_health = Some(number(key, fields.next())?),
                "PLAYER_CURRENTHP" => current_health = Some(number(key, fields.next())?),
                "PLAYER_BASE_ATTACK" => base_attack = Some(number(key, fields.next())?),
                "PLAYER_GOLD" => gold = Some(number(key, fields.next())?),
                "PLAYER_BOSS_BONUS" => boss_attack_bonus = Some(number(key, fields.next())?),
                "EQUIPMENT_COUNT" => equipment_left = number(key, fields.next())?,
                "EQUIPMENT" if equipment_left > 0 => {
                    let name = value(key, fields.next())?;
                    equipment.push(EquipmentKind::parse(name).map_err(corrupted)?);
                    equipment_left -= 1;
                }
                "POTION_COUNT" => potions_left = number(key, fields.next())?,
                "POTION" if potions_left > 0 => {
                    let name = value(key, fields.next())?;
                    let kind = PotionKind::parse(name).map_err(corrupted)?;
                    let quantity = number(key, fields.next())?;
                    potions.push(PotionStack { kind, quantity });
                    potions_left -= 1;
                }
                _ => tracing::debug!(key, "ignoring save line"),
            }
        }

        if equipment.len() > GameConfig::MAX_EQUIPMENT {
            return Err(RepositoryError::CorruptedData(format!(
                "{} equipment pieces exceed capacity {}",
                equipment.len(),
                GameConfig::MAX_EQUIPMENT
            )));
        }

        let level = level.ok_or(RepositoryError::MissingKey("LEVEL"))?;
        if level == 0 {
            return Err(RepositoryError::CorruptedData("level 0".into()));
        }

        Ok(Self {
            level,
            difficulty: difficulty.ok_or(RepositoryError::MissingKey("DIFFICULTY"))?,
            base_max_health: base_max_health
                .ok_or(RepositoryError::MissingKey("PLAYER_BASE_MAXHP"))?,
            current_health: current_health.ok_or(RepositoryError::MissingKey("PLAYER_CURRENTHP"))?,
            base_attack: base_attack.ok_or(RepositoryError::MissingKey("PLAYER_BASE_ATTACK"))?,
            gold: gold.ok_or(RepositoryError::MissingKey("PLAYER_GOLD"))?,
            boss_attack_bonus: boss_attack_bonus
                .ok_or(RepositoryError::MissingKey("PLAYER_BOSS_BONUS"))?,
            equipment,
            potions,
        })
    }
}

fn value<'a>(key: &str, field: Option<&'a str>) -> Result<&'a str> {
    field.ok_or_else(|| RepositoryError::CorruptedData(format!("{key} has no value")))
}

fn number(key: &str, field: Option<&str>) -> Result<u32> {
    let raw = value(key, field)?;
    raw.parse()
        .map_err(|_| RepositoryError::CorruptedData(format!("{key} value `{raw}` is not a number")))
}

fn corrupted(err: game_core::ParseKindError) -> RepositoryError {
    RepositoryError::CorruptedData(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SaveData {
        SaveData {
            level: 5,
            difficulty: Difficulty::Hard,
            base_max_health: 120,
            current_health: 95,
            base_attack: 30,
            gold: 0,
            boss_attack_bonus: 30,
            equipment: vec![EquipmentKind::Shield, EquipmentKind::Sword],
            potions: vec![PotionStack {
                kind: PotionKind::Life,
                quantity: 2,
            }],
        }
    }

    #[test]
    fn encodes_flat_keys_in_order() {
        let text = sample().encode();
        let keys: Vec<_> = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "LEVEL",
                "DIFFICULTY",
                "PLAYER_BASE_MAXHP",
                "PLAYER_CURRENTHP",
                "PLAYER_BASE_ATTACK",
                "PLAYER_GOLD",
                "PLAYER_BOSS_BONUS",
                "EQUIPMENT_COUNT",
                "EQUIPMENT",
                "EQUIPMENT",
                "POTION_COUNT",
                "POTION",
            ]
        );
        assert!(text.contains("DIFFICULTY 1\n"));
        assert!(text.contains("POTION Life 2\n"));
    }

    #[test]
    fn decodes_what_it_encodes() {
        assert_eq!(SaveData::decode(&sample().encode()).unwrap(), sample());
    }

    #[test]
    fn entries_beyond_count_and_unknown_keys_are_ignored() {
        let text = "\
LEVEL 2
DIFFICULTY 0
PLAYER_BASE_MAXHP 100
PLAYER_CURRENTHP 100
PLAYER_BASE_ATTACK 25
PLAYER_GOLD 3
PLAYER_BOSS_BONUS 0
FAVORITE_COLOR blue
EQUIPMENT_COUNT 1
EQUIPMENT Armor
EQUIPMENT Shoes
POTION_COUNT 0
POTION Mystery 9
";
        let data = SaveData::decode(text).unwrap();
        assert_eq!(data.equipment, vec![EquipmentKind::Armor]);
        assert!(data.potions.is_empty());
        assert_eq!(data.gold, 3);
        assert_eq!(data.difficulty, Difficulty::Easy);
    }

    #[test]
    fn missing_and_malformed_values() {
        assert!(matches!(
            SaveData::decode("DIFFICULTY 0\n"),
            Err(RepositoryError::MissingKey("LEVEL"))
        ));

        let bad_number = sample().encode().replace("PLAYER_GOLD 0", "PLAYER_GOLD lots");
        assert!(matches!(
            SaveData::decode(&bad_number),
            Err(RepositoryError::CorruptedData(_))
        ));

        let bad_kind = sample().encode().replace("EQUIPMENT Sword", "EQUIPMENT Bow");
        assert!(matches!(
            SaveData::decode(&bad_kind),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
