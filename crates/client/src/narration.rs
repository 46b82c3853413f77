//! Text for everything the player sees.

use game_core::{
    BattleEvent, BattleOutcome, BattleView, EnemyCombatant, FirstMover, PotionKind, PotionStack,
    SelectionError, Suppression,
};
use runtime::{EventOutcome, GameSession, LevelRewards};

pub fn battle_event(event: &BattleEvent) -> String {
    match event {
        BattleEvent::BattleStarted {
            enemies,
            first_mover,
            double_health,
            disabled,
            extra_actions,
        } => {
            let mut lines = vec![
                "=== BATTLE BEGINS ===".to_owned(),
                format!("Enemies: {}", join(enemies.iter())),
            ];
            if *double_health {
                lines.push("Warning: Enemies have double HP in this battle!".to_owned());
            }
            if let Some(kind) = disabled {
                lines.push(format!(
                    "Warning: Your {kind} equipment is disabled in this battle!"
                ));
            }
            if *extra_actions > 0 {
                lines.push(format!(
                    "Your Shoes grant {extra_actions} extra action(s) this battle."
                ));
            }
            if *first_mover == FirstMover::EnemyParty {
                lines.push("The enemies strike first!".to_owned());
            }
            lines.join("\n")
        }
        BattleEvent::RoundStarted { turn } => format!("\n--- Turn {turn} ---"),
        BattleEvent::ChoiceRejected => "Invalid choice. Try again.".to_owned(),
        BattleEvent::PlayerAttacked {
            kind,
            damage,
            remaining,
            ..
        } => format!("You attack {kind} for {damage} damage! ({kind} HP: {remaining})"),
        BattleEvent::EnemyDefeated { kind, .. } => format!("{kind} is defeated!"),
        BattleEvent::PotionUsed {
            kind,
            health,
            max_health,
            attack,
            left,
            ..
        } => format!(
            "You used {kind}! {}\nHP: {health}/{max_health}, Attack: {attack} ({left} left)",
            potion_effect(*kind)
        ),
        BattleEvent::ActionCancelled { reason } => match reason {
            SelectionError::TargetOutOfRange { .. } => "Invalid choice. Attack cancelled.",
            SelectionError::PotionOutOfRange { .. } => "Invalid choice. Potion use cancelled.",
            SelectionError::NoPotions => "You have no potions!",
            SelectionError::PotionUnavailable => "Cannot use potion!",
        }
        .to_owned(),
        BattleEvent::Skipped => "You skip your turn.".to_owned(),
        BattleEvent::EnemyAttacked {
            kind,
            dealt,
            remaining,
            ..
        } => format!("{kind} attacks you for {dealt} damage! (HP: {remaining})"),
        BattleEvent::BossSummoned {
            kind,
            requested,
            count,
        } => {
            let summoned = if *count == 1 {
                format!("Boss summons a {kind}!")
            } else {
                format!("Boss summons {count} {kind}s!")
            };
            if count < requested {
                format!("{summoned} The arena cannot hold more.")
            } else {
                summoned
            }
        }
        BattleEvent::PlayerDefeated => "You collapse...".to_owned(),
        BattleEvent::TurnLimitReached { limit } => {
            format!("The battle dragged on past {limit} turns. You are overwhelmed by exhaustion.")
        }
        BattleEvent::BattleEnded { outcome, turns } => match outcome {
            BattleOutcome::Victory => format!("\n=== VICTORY! === ({turns} turns)"),
            BattleOutcome::Defeat => "\n=== DEFEAT ===".to_owned(),
            BattleOutcome::Aborted => "You flee from the battle.".to_owned(),
        },
    }
}

fn potion_effect(kind: PotionKind) -> String {
    let effect = kind.effect();
    let mut parts = Vec::new();
    if effect.max_health > 0 {
        parts.push(format!("Max HP +{}", effect.max_health));
    }
    if effect.heal > 0 {
        parts.push(format!("HP +{}", effect.heal));
    }
    if effect.attack > 0 {
        parts.push(format!("Attack +{}", effect.attack));
    }
    parts.join(", ")
}

/// Shown before the first decision of every round.
pub fn battle_status(view: &BattleView<'_>) -> String {
    let mut lines = vec![
        "=== Battle Status ===".to_owned(),
        format!(
            "Player HP: {}/{}  Attack: {}",
            view.player_health(),
            view.player_max_health(),
            view.player_attack()
        ),
        format!("Turn: {}", view.turn),
        "Enemies:".to_owned(),
    ];
    let living = view.party.iter().filter(|enemy| enemy.is_alive());
    for (position, enemy) in living.enumerate() {
        lines.push(format!("  {}. {}", position + 1, enemy_line(enemy)));
    }
    lines.push("====================".to_owned());
    lines.join("\n")
}

pub fn enemy_line(enemy: &EnemyCombatant) -> String {
    format!(
        "{} (HP: {}/{}, ATK: {})",
        enemy.kind(),
        enemy.current_health(),
        enemy.max_health(),
        enemy.attack()
    )
}

pub fn potion_line(stack: &PotionStack) -> String {
    format!("{} x{}", stack.kind, stack.quantity)
}

pub fn event_outcome(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::FoundEquipment { kind, added: true } => {
            format!("You found a {kind}! It has been added to your equipment.")
        }
        EventOutcome::FoundEquipment { kind, added: false } => {
            format!("You found a {kind}, but your equipment inventory is full!")
        }
        EventOutcome::BossBonus { amount } => {
            format!("A mysterious power fills you. Attack against the Boss +{amount}!")
        }
        EventOutcome::Nothing => "The room is quiet. Nothing happens.".to_owned(),
        EventOutcome::TreasureChest { potions } => format!(
            "You found a treasure chest containing: {}!",
            join(potions.iter())
        ),
        EventOutcome::Trap { damage, remaining } => {
            format!("You fell into a trap and took {damage} damage! (HP: {remaining})")
        }
        EventOutcome::Robbed { amount } => format!("A thief stole {amount} gold from you!"),
        EventOutcome::RobberyFoiled => {
            "A thief tried to rob you, but you have no gold!".to_owned()
        }
        EventOutcome::DoubleHealthCurse => {
            "A dark curse falls: enemies in the next battle will have double HP!".to_owned()
        }
        EventOutcome::EquipmentCurse { kind } => {
            format!("A curse seals your {kind}. It will not work in the next battle!")
        }
        EventOutcome::CursedSpirit { damage, remaining } => format!(
            "A cursed spirit finds nothing to curse and strikes you for {damage} damage! (HP: {remaining})"
        ),
    }
}

pub fn rewards(rewards: &LevelRewards) -> Vec<String> {
    let mut lines = vec!["\n=== Level Complete! ===".to_owned()];
    if let Some(potion) = rewards.potion {
        lines.push(format!("Reward: {potion} x1"));
    }
    match rewards.equipment {
        Some(reward) if reward.added => {
            lines.push(format!("Bonus Reward: {} equipment!", reward.kind));
        }
        Some(reward) => lines.push(format!(
            "Bonus Reward: {} equipment found, but your equipment inventory is full!",
            reward.kind
        )),
        None => {}
    }
    if rewards.gold > 0 {
        lines.push(format!("You earned {} gold coin(s)!", rewards.gold));
    }
    lines
}

pub fn player_status(session: &GameSession) -> String {
    let player = &session.player;
    let mut lines = vec![
        "\n=== Player Status ===".to_owned(),
        format!(
            "HP: {}/{}",
            player.current_health(),
            player.effective_max_health(Suppression::NONE)
        ),
        format!("Attack: {}", player.effective_attack(Suppression::NONE)),
        format!("Gold: {}", session.gold),
    ];
    if player.boss_attack_bonus() > 0 {
        lines.push(format!("Boss bonus: +{}", player.boss_attack_bonus()));
    }
    if !player.equipment().is_empty() {
        lines.push(format!("Equipment: {}", join(player.equipment().iter())));
    }
    if !session.potions.is_empty() {
        let potions: Vec<_> = session.potions.listing().iter().map(potion_line).collect();
        lines.push(format!("Potions: {}", potions.join(", ")));
    }
    lines.push("====================".to_owned());
    lines.join("\n")
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EnemyKind, EquipmentKind};
    use runtime::{Difficulty, EquipmentReward};

    #[test]
    fn battle_start_lists_enemies_and_warnings() {
        let text = battle_event(&BattleEvent::BattleStarted {
            enemies: vec![EnemyKind::Batho, EnemyKind::Slim],
            first_mover: FirstMover::EnemyParty,
            double_health: true,
            disabled: Some(EquipmentKind::Shoes),
            extra_actions: 0,
        });
        assert!(text.contains("Enemies: Batho, Slim"));
        assert!(text.contains("double HP"));
        assert!(text.contains("Shoes equipment is disabled"));
        assert!(text.contains("strike first"));
        assert!(!text.contains("extra action"));
    }

    #[test]
    fn clipped_summon_mentions_the_full_arena() {
        let full = battle_event(&BattleEvent::BossSummoned {
            kind: EnemyKind::Batho,
            requested: 2,
            count: 1,
        });
        assert_eq!(full, "Boss summons a Batho! The arena cannot hold more.");

        let both = battle_event(&BattleEvent::BossSummoned {
            kind: EnemyKind::Batho,
            requested: 2,
            count: 2,
        });
        assert_eq!(both, "Boss summons 2 Bathos!");
    }

    #[test]
    fn potion_narration_lists_only_nonzero_effects() {
        let text = battle_event(&BattleEvent::PotionUsed {
            kind: PotionKind::Attacker,
            healed: 0,
            health: 80,
            max_health: 100,
            attack: 30,
            left: 0,
        });
        assert!(text.starts_with("You used Attacker Potion! Attack +5\n"));
    }

    #[test]
    fn reward_lines() {
        let lines = rewards(&LevelRewards {
            potion: Some(PotionKind::Life),
            equipment: Some(EquipmentReward {
                kind: EquipmentKind::Sword,
                added: false,
            }),
            gold: 0,
        });
        assert_eq!(lines[1], "Reward: Life Potion x1");
        assert!(lines[2].contains("inventory is full"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn status_shows_potions_and_equipment() {
        let mut session = GameSession::new(Difficulty::Easy);
        session.player.add_equipment(EquipmentKind::Armor).unwrap();
        session.potions.add(PotionKind::Mystery, 2);

        let text = player_status(&session);
        assert!(text.contains("HP: 100/200"));
        assert!(text.contains("Equipment: Armor"));
        assert!(text.contains("Potions: Mystery Potion x2"));
    }
}
