//! Menus and the level loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_content::{LevelCatalog, LevelSpec, ShopItem};
use game_core::BattleOutcome;
use runtime::{
    Difficulty, LevelReport, RunStatus, Runtime, RuntimeBuilder, RuntimeConfig, RuntimeError,
    SaveRepository,
};

use crate::console::Console;
use crate::menu::{self, LevelChoice, MainChoice, ShopChoice};
use crate::narration;
use crate::provider::ConsoleProvider;

/// Where control goes after a run or menu returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Play,
    MainMenu,
    /// Input closed.
    Quit,
}

/// The interactive game: main menu, runs, saves, and the shop.
pub struct App<R, W> {
    console: Console<R, W>,
    repository: Box<dyn SaveRepository>,
    config: RuntimeConfig,
    catalog: LevelCatalog,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, repository: Box<dyn SaveRepository>) -> Self {
        Self {
            console,
            repository,
            config: RuntimeConfig::default(),
            catalog: LevelCatalog::builtin(),
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_catalog(mut self, catalog: LevelCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Shows the main menu until the player exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say(
                "\n========================================\n\
                 \x20     THE GAUNTLET\n\
                 ========================================\n\
                 1. New Game\n\
                 2. Load Game\n\
                 3. Exit\n\
                 ========================================",
            )?;
            let Some(answer) = self.console.prompt("Select option (1-3): ")? else {
                return Ok(());
            };

            let flow = match MainChoice::parse(&answer) {
                Some(MainChoice::NewGame) => self.new_game()?,
                Some(MainChoice::LoadGame) => self.load_game()?,
                Some(MainChoice::Exit) => {
                    self.console.say("Thank you for playing! Goodbye!")?;
                    return Ok(());
                }
                None => {
                    self.console.say("Invalid choice. Please select 1-3.")?;
                    Flow::MainMenu
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn builder(&self) -> RuntimeBuilder {
        Runtime::builder()
            .config(self.config.clone())
            .catalog(self.catalog.clone())
    }

    fn new_game(&mut self) -> Result<Flow> {
        self.console.say(
            "\n=== Select Difficulty ===\n\
             1. Easy (Player acts first)\n\
             2. Hard (Enemy acts first, negative events possible)",
        )?;
        let Some(answer) = self.console.prompt("Select difficulty (1-2): ")? else {
            return Ok(Flow::Quit);
        };
        let difficulty = match menu::parse_difficulty(&answer) {
            Some(difficulty) => difficulty,
            None => {
                self.console.say("Invalid choice. Defaulting to Easy.")?;
                Difficulty::Easy
            }
        };

        let runtime = self.builder().new_game(difficulty).build()?;
        self.console.say(format!(
            "\n=== New Game Started ===\nDifficulty: {difficulty}\nYour journey begins..."
        ))?;
        self.play(runtime)
    }

    fn load_game(&mut self) -> Result<Flow> {
        self.console.say("\nLoading game...")?;
        let loaded = self
            .builder()
            .load(self.repository.as_ref())
            .and_then(RuntimeBuilder::build);

        let runtime = match loaded {
            Ok(runtime) => runtime,
            Err(RuntimeError::NoSave) => {
                self.console.say("No save file found!")?;
                return Ok(Flow::MainMenu);
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load game");
                self.console.say(format!("Failed to load game! ({err})"))?;
                return Ok(Flow::MainMenu);
            }
        };

        self.console.say(format!(
            "Game loaded successfully!\nCurrent Level: {}\nDifficulty: {}",
            runtime.session().level,
            runtime.session().difficulty
        ))?;
        self.play(runtime)
    }

    fn play(&mut self, mut runtime: Runtime) -> Result<Flow> {
        loop {
            let level = runtime.session().level;
            let is_battle = runtime
                .catalog()
                .get(level)
                .is_some_and(LevelSpec::is_battle);

            self.console.say(format!(
                "\n========================================\n\
                 \x20          LEVEL {level}/{}\n\
                 ========================================",
                runtime.catalog().len()
            ))?;
            self.console.say(if is_battle {
                "\n=== BATTLE LEVEL ==="
            } else {
                "\n=== EVENT LEVEL ==="
            })?;

            let report = {
                let mut provider = ConsoleProvider::new(&mut self.console);
                runtime.play_level(&mut provider)?
            };

            match report {
                LevelReport::Battle { report, rewards } => match report.outcome {
                    BattleOutcome::Victory => {
                        for line in rewards.iter().flat_map(narration::rewards) {
                            self.console.say(line)?;
                        }
                    }
                    BattleOutcome::Defeat => {
                        self.console.say(format!(
                            "\nGame Over! You have been defeated.\nYou reached Level {level}."
                        ))?;
                        return Ok(Flow::MainMenu);
                    }
                    BattleOutcome::Aborted => {
                        self.console
                            .say("You retreat. This level will be waiting for you.")?;
                    }
                },
                LevelReport::Event { outcome } => {
                    self.console.say(narration::event_outcome(&outcome))?;
                }
            }

            if runtime.status() == RunStatus::Won {
                return self.celebrate(&mut runtime);
            }

            self.console.say(narration::player_status(runtime.session()))?;
            match self.level_menu(&mut runtime)? {
                Flow::Play => {}
                other => return Ok(other),
            }
        }
    }

    fn level_menu(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        loop {
            self.console.say(
                "\n=== What would you like to do? ===\n\
                 1. Continue to next level\n\
                 2. Save game\n\
                 3. Visit shop\n\
                 4. Exit game",
            )?;
            let Some(answer) = self.console.prompt("Select option (1-4): ")? else {
                return Ok(Flow::Quit);
            };

            match LevelChoice::parse(&answer) {
                Some(LevelChoice::Continue) => {
                    if runtime.session().level_cleared {
                        runtime.advance()?;
                    }
                    return Ok(Flow::Play);
                }
                Some(LevelChoice::Save) => match runtime.save(self.repository.as_ref()) {
                    Ok(()) => self.console.say("Game saved successfully!")?,
                    Err(err) => {
                        tracing::warn!(%err, "failed to save game");
                        self.console.say(format!("Failed to save game! ({err})"))?;
                    }
                },
                Some(LevelChoice::Shop) => {
                    if self.shop(runtime)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Some(LevelChoice::Exit) => return Ok(Flow::MainMenu),
                None => self.console.say("Invalid choice. Please select 1-4.")?,
            }
        }
    }

    fn shop(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        let mut menu = String::from("\n=== SHOP ===");
        for (position, item) in ShopItem::all().iter().enumerate() {
            menu.push_str(&format!(
                "\n{}. {item} - {} (Cost: {} gold)",
                position + 1,
                item.description(),
                item.price()
            ));
        }
        menu.push_str(&format!("\n{}. Exit Shop\n============", ShopItem::COUNT + 1));
        self.console.say(menu)?;

        loop {
            let player = &runtime.session().player;
            self.console.say(format!(
                "Your gold: {}\nYour current stats:\n  Max HP: {}\n  Attack: {}",
                runtime.session().gold,
                player.effective_max_health(game_core::Suppression::NONE),
                player.effective_attack(game_core::Suppression::NONE)
            ))?;
            let label = format!("\nSelect item to purchase (1-{}): ", ShopItem::COUNT + 1);
            let Some(answer) = self.console.prompt(&label)? else {
                return Ok(Flow::Quit);
            };

            match ShopChoice::parse(&answer) {
                Some(ShopChoice::Buy(item)) => match runtime.buy(item) {
                    Ok(()) => self.console.say("Purchase successful!")?,
                    Err(RuntimeError::InsufficientGold { .. }) => {
                        self.console.say("Purchase failed! Insufficient gold.")?;
                    }
                    Err(err) => return Err(err.into()),
                },
                Some(ShopChoice::Leave) => {
                    self.console.say("Leaving shop...")?;
                    return Ok(Flow::Play);
                }
                None => self.console.say(format!(
                    "Invalid choice. Please select 1-{}.",
                    ShopItem::COUNT + 1
                ))?,
            }
        }
    }

    fn celebrate(&mut self, runtime: &mut Runtime) -> Result<Flow> {
        self.console.say(format!(
            "\n========================================\n\
             \x20       CONGRATULATIONS!\n\
             ========================================\n\
             You have completed all {} levels!",
            runtime.catalog().len()
        ))?;
        tracing::info!(gold = runtime.session().gold, "run completed");

        let Some(answer) = self
            .console
            .prompt("\nWould you like to visit the shop? (y/n): ")?
        else {
            return Ok(Flow::Quit);
        };
        if menu::parse_yes(&answer) && self.shop(runtime)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
        Ok(Flow::MainMenu)
    }
}
