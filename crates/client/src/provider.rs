//! Battle decisions typed by the player.

use std::io::{BufRead, Write};

use game_core::{
    ActionChoice, BattleEvent, BattleView, DecisionProvider, EnemyCombatant, PotionStack,
};

use crate::console::Console;
use crate::menu;
use crate::narration;

/// Reads decisions from the console and narrates every battle event on it.
///
/// End of input aborts the battle. Unreadable answers are passed on as
/// [`ActionChoice::Invalid`] or `None` so the resolver can reject them.
pub struct ConsoleProvider<'c, R, W> {
    console: &'c mut Console<R, W>,
}

impl<'c, R: BufRead, W: Write> ConsoleProvider<'c, R, W> {
    pub fn new(console: &'c mut Console<R, W>) -> Self {
        Self { console }
    }

    fn say(&mut self, text: impl AsRef<str>) {
        if let Err(err) = self.console.say(text) {
            tracing::warn!(%err, "failed to write narration");
        }
    }

    fn ask(&mut self, label: &str) -> Option<String> {
        match self.console.prompt(label) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(%err, "failed to read input");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> DecisionProvider for ConsoleProvider<'_, R, W> {
    fn choose_action(&mut self, view: &BattleView<'_>) -> ActionChoice {
        if view.slot == 1 {
            self.say(narration::battle_status(view));
        }

        if view.slots > 1 {
            self.say(format!("--- Player Turn (action {}/{}) ---", view.slot, view.slots));
        } else {
            self.say("--- Player Turn ---");
        }
        self.say("1. Attack\n2. Use Potion\n3. Skip\n4. Flee");

        match self.ask("Choose action (1-4): ") {
            Some(answer) => menu::parse_action(&answer),
            None => {
                tracing::info!("input closed during battle");
                ActionChoice::Abort
            }
        }
    }

    fn choose_target(&mut self, targets: &[&EnemyCombatant]) -> Option<usize> {
        self.say("Select target:");
        for (position, enemy) in targets.iter().enumerate() {
            self.say(format!("{}. {}", position + 1, narration::enemy_line(enemy)));
        }
        let answer = self.ask(&format!("Target (1-{}): ", targets.len()))?;
        menu::parse_position(&answer)
    }

    fn choose_potion(&mut self, potions: &[PotionStack]) -> Option<usize> {
        self.say("Available potions:");
        for (position, stack) in potions.iter().enumerate() {
            self.say(format!("{}. {}", position + 1, narration::potion_line(stack)));
        }
        let answer = self.ask(&format!("Potion (1-{}): ", potions.len()))?;
        menu::parse_position(&answer)
    }

    fn observe(&mut self, event: &BattleEvent) {
        self.say(narration::battle_event(event));
    }
}
