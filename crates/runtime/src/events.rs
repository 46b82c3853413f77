//! Random events rolled on event levels.
//!
//! On Hard difficulty each event first rolls `below(4)`; 0 or 1 selects the
//! negative table. Otherwise (and always on Easy) the positive table is used.
//!
//! | table    | roll | effect                                                   |
//! |----------|------|----------------------------------------------------------|
//! | positive | 1    | random equipment piece (lost if inventory full)          |
//! | positive | 2    | +30 boss attack bonus                                    |
//! | positive | 3    | nothing                                                  |
//! | positive | 4    | treasure chest: Strength, Attacker, Life potion          |
//! | negative | 0    | trap: `20 + below(30)` damage                            |
//! | negative | 1    | robbery: `1 + below(gold)` gold                          |
//! | negative | 2    | next battle's enemies have double health                 |
//! | negative | 3    | a random owned equipment kind is disabled next battle    |

use game_content::{EQUIPMENT_REWARDS, TREASURE_CHEST, draw};
use game_core::{EquipmentKind, PotionKind, RandomSource, Suppression};

use crate::session::GameSession;

pub const BOSS_BONUS: u32 = 30;
pub const TRAP_BASE_DAMAGE: u32 = 20;
pub const TRAP_DAMAGE_SPREAD: u32 = 30;
/// Damage dealt by the equipment curse when there is nothing to curse.
pub const CURSED_SPIRIT_DAMAGE: u32 = 25;

/// What an event did, for narration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    FoundEquipment { kind: EquipmentKind, added: bool },
    BossBonus { amount: u32 },
    Nothing,
    TreasureChest { potions: Vec<PotionKind> },
    Trap { damage: u32, remaining: u32 },
    Robbed { amount: u32 },
    RobberyFoiled,
    DoubleHealthCurse,
    EquipmentCurse { kind: EquipmentKind },
    CursedSpirit { damage: u32, remaining: u32 },
}

impl EventOutcome {
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Self::Trap { .. }
                | Self::Robbed { .. }
                | Self::RobberyFoiled
                | Self::DoubleHealthCurse
                | Self::EquipmentCurse { .. }
                | Self::CursedSpirit { .. }
        )
    }
}

/// Rolls and applies one event to the session.
pub fn roll_event(session: &mut GameSession, rng: &mut impl RandomSource) -> EventOutcome {
    let outcome = if session.difficulty.has_negative_events() && rng.below(4) < 2 {
        negative_event(session, rng)
    } else {
        positive_event(session, rng)
    };

    if outcome.is_negative() {
        tracing::info!(?outcome, level = session.level, "negative event");
    } else {
        tracing::info!(?outcome, level = session.level, "positive event");
    }
    outcome
}

fn positive_event(session: &mut GameSession, rng: &mut impl RandomSource) -> EventOutcome {
    match rng.below(4) + 1 {
        1 => {
            let Some(kind) = draw(&EQUIPMENT_REWARDS, rng) else {
                return EventOutcome::Nothing;
            };
            let added = match session.player.add_equipment(kind) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(%kind, %err, "found equipment discarded");
                    false
                }
            };
            EventOutcome::FoundEquipment { kind, added }
        }
        2 => {
            session.player.add_boss_attack_bonus(BOSS_BONUS);
            EventOutcome::BossBonus { amount: BOSS_BONUS }
        }
        3 => EventOutcome::Nothing,
        _ => {
            for kind in TREASURE_CHEST {
                session.potions.add(kind, 1);
            }
            EventOutcome::TreasureChest {
                potions: TREASURE_CHEST.to_vec(),
            }
        }
    }
}

fn negative_event(session: &mut GameSession, rng: &mut impl RandomSource) -> EventOutcome {
    match rng.below(4) {
        0 => {
            let damage = TRAP_BASE_DAMAGE + rng.below(TRAP_DAMAGE_SPREAD);
            let report = session.player.take_damage(damage, Suppression::NONE);
            EventOutcome::Trap {
                damage: report.dealt,
                remaining: report.remaining,
            }
        }
        1 => {
            if session.gold == 0 {
                return EventOutcome::RobberyFoiled;
            }
            let amount = if session.gold > 1 {
                1 + rng.below(session.gold)
            } else {
                1
            };
            session.gold -= amount;
            EventOutcome::Robbed { amount }
        }
        2 => {
            session.pending.double_health = true;
            EventOutcome::DoubleHealthCurse
        }
        _ => {
            let owned = session.player.equipment().as_slice();
            match draw(owned, rng) {
                Some(kind) => {
                    session.pending.disabled = Some(kind);
                    EventOutcome::EquipmentCurse { kind }
                }
                None => {
                    let report = session
                        .player
                        .take_damage(CURSED_SPIRIT_DAMAGE, Suppression::NONE);
                    EventOutcome::CursedSpirit {
                        damage: report.dealt,
                        remaining: report.remaining,
                    }
                }
            }
        }
    }
}
