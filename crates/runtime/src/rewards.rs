//! Rewards for clearing battle levels, and the shop.

use game_content::{COMPLETION_GOLD, EQUIPMENT_REWARDS, LevelSpec, POTION_REWARDS, ShopItem, draw};
use game_core::{EquipmentKind, PotionKind, RandomSource, Suppression};

use crate::error::Result;
use crate::session::GameSession;

/// Equipment granted by a bonus level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentReward {
    pub kind: EquipmentKind,
    /// False when the inventory was full and the piece was discarded.
    pub added: bool,
}

/// What a won battle level paid out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelRewards {
    pub potion: Option<PotionKind>,
    pub equipment: Option<EquipmentReward>,
    /// Gold for clearing the final level.
    pub gold: u32,
}

/// One random potion, plus equipment on bonus levels and gold on the last.
pub fn grant_battle_rewards(
    session: &mut GameSession,
    level: &LevelSpec,
    final_level: bool,
    rng: &mut impl RandomSource,
) -> LevelRewards {
    let mut rewards = LevelRewards::default();

    if let Some(kind) = draw(&POTION_REWARDS, rng) {
        session.potions.add(kind, 1);
        rewards.potion = Some(kind);
    }

    if level.bonus_equipment
        && let Some(kind) = draw(&EQUIPMENT_REWARDS, rng)
    {
        let added = match session.player.add_equipment(kind) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%kind, %err, "bonus equipment discarded");
                false
            }
        };
        rewards.equipment = Some(EquipmentReward { kind, added });
    }

    if final_level {
        session.gold += COMPLETION_GOLD;
        rewards.gold = COMPLETION_GOLD;
    }

    tracing::info!(level = level.number, ?rewards, "level rewards");
    rewards
}

/// Buys one shop item. Fails without any change when gold is short.
pub fn purchase(session: &mut GameSession, item: ShopItem) -> Result<()> {
    session.spend_gold(item.price())?;
    item.effect().apply(&mut session.player, Suppression::NONE);
    tracing::info!(%item, gold = session.gold, "purchased");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use crate::session::Difficulty;
    use game_core::SequenceRng;

    #[test]
    fn bonus_level_grants_potion_and_equipment() {
        let mut session = GameSession::new(Difficulty::Easy);
        let level = LevelSpec::battle(4, [game_core::EnemyKind::Batho]).with_bonus_equipment();
        let mut rng = SequenceRng::new([3, 1]);

        let rewards = grant_battle_rewards(&mut session, &level, false, &mut rng);

        assert_eq!(rewards.potion, Some(PotionKind::Mystery));
        assert_eq!(
            rewards.equipment,
            Some(EquipmentReward {
                kind: EquipmentKind::Sword,
                added: true
            })
        );
        assert_eq!(rewards.gold, 0);
        assert_eq!(session.player.equipment_count(EquipmentKind::Sword), 1);
    }

    #[test]
    fn final_level_pays_gold() {
        let mut session = GameSession::new(Difficulty::Hard);
        let level = LevelSpec::battle(12, [game_core::EnemyKind::Boss]);
        let mut rng = SequenceRng::new([0]);

        let rewards = grant_battle_rewards(&mut session, &level, true, &mut rng);
        assert_eq!(rewards.gold, 1);
        assert_eq!(rewards.equipment, None);
        assert_eq!(session.gold, 1);
    }

    #[test]
    fn hamburger_raises_max_and_heals() {
        let mut session = GameSession::new(Difficulty::Easy);
        session.gold = 1;
        session.player.take_damage(50, Suppression::NONE);

        purchase(&mut session, ShopItem::Hamburger).unwrap();
        assert_eq!(session.player.base_max_health(), 120);
        assert_eq!(session.player.current_health(), 70);
        assert_eq!(session.gold, 0);

        assert!(matches!(
            purchase(&mut session, ShopItem::Coke),
            Err(RuntimeError::InsufficientGold { price: 1, gold: 0 })
        ));
        assert_eq!(session.player.base_attack(), 25);
    }
}
