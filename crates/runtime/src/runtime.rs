//! High-level run orchestrator.
//!
//! The runtime owns the session, the level catalog, and the random source, and
//! exposes a builder-based API for clients to play a run level by level.

use game_content::{LevelCatalog, LevelKind, ShopItem};
use game_core::{BattleReport, BattleSetup, CombatResolver, DecisionProvider, GameConfig, PcgRng};

use crate::error::{Result, RuntimeError};
use crate::events::{EventOutcome, roll_event};
use crate::repository::SaveRepository;
use crate::rewards::{LevelRewards, grant_battle_rewards, purchase};
use crate::session::{Difficulty, GameSession, RunStatus};

/// Runtime configuration shared across the orchestrator and battles.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for every random draw in the run.
    pub seed: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: 0,
        }
    }
}

/// What playing one level produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelReport {
    Battle {
        report: BattleReport,
        /// Present only for won battles.
        rewards: Option<LevelRewards>,
    },
    Event {
        outcome: EventOutcome,
    },
}

/// Main runtime that drives a run.
pub struct Runtime {
    config: RuntimeConfig,
    catalog: LevelCatalog,
    session: GameSession,
    rng: PcgRng,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn status(&self) -> RunStatus {
        self.session.status
    }

    /// Plays the current level.
    ///
    /// Battles consume the pending modifiers. A won battle grants rewards and
    /// clearing the final level wins the run; a lost battle ends it. An
    /// aborted battle leaves the level unplayed and re-arms the modifiers.
    pub fn play_level<P: DecisionProvider>(&mut self, provider: &mut P) -> Result<LevelReport> {
        if self.session.is_over() {
            return Err(RuntimeError::GameOver {
                status: self.session.status,
            });
        }
        if self.session.level_cleared {
            return Err(RuntimeError::LevelAlreadyCleared {
                level: self.session.level,
            });
        }

        let number = self.session.level;
        let level = self
            .catalog
            .get(number)
            .ok_or(RuntimeError::LevelOutOfRange {
                level: number,
                levels: self.catalog.len(),
            })?
            .clone();
        let final_level = number == self.catalog.final_level();

        tracing::info!(level = number, battle = level.is_battle(), "level started");

        let enemies = match &level.kind {
            LevelKind::Event => {
                let outcome = roll_event(&mut self.session, &mut self.rng);
                self.session.level_cleared = true;
                if final_level {
                    self.session.status = RunStatus::Won;
                }
                return Ok(LevelReport::Event { outcome });
            }
            LevelKind::Battle { enemies } => enemies.clone(),
        };

        let pending = self.session.take_pending();
        let setup = pending.apply(BattleSetup::new(
            enemies,
            self.session.difficulty.first_mover(),
        ));

        let session = &mut self.session;
        let report = CombatResolver::new(&mut session.player, &mut session.potions, &mut self.rng)
            .with_config(self.config.game_config.clone())
            .run(&setup, provider);

        let rewards = match report.outcome {
            game_core::BattleOutcome::Victory => {
                let rewards =
                    grant_battle_rewards(&mut self.session, &level, final_level, &mut self.rng);
                self.session.level_cleared = true;
                if final_level {
                    self.session.status = RunStatus::Won;
                    tracing::info!(gold = self.session.gold, "run won");
                }
                Some(rewards)
            }
            game_core::BattleOutcome::Defeat => {
                self.session.status = RunStatus::Lost;
                tracing::info!(level = number, turns = report.turns, "run lost");
                None
            }
            game_core::BattleOutcome::Aborted => {
                self.session.pending = pending;
                tracing::info!(level = number, "battle abandoned");
                None
            }
        };

        Ok(LevelReport::Battle { report, rewards })
    }

    /// Moves on to the next level after the current one was cleared.
    pub fn advance(&mut self) -> Result<u32> {
        if self.session.is_over() {
            return Err(RuntimeError::GameOver {
                status: self.session.status,
            });
        }
        if !self.session.level_cleared {
            return Err(RuntimeError::LevelNotCleared {
                level: self.session.level,
            });
        }
        self.session.level += 1;
        self.session.level_cleared = false;
        Ok(self.session.level)
    }

    pub fn buy(&mut self, item: ShopItem) -> Result<()> {
        purchase(&mut self.session, item)
    }

    pub fn save(&self, repository: &dyn SaveRepository) -> Result<()> {
        repository.save(&self.session.to_save())?;
        tracing::info!(level = self.session.resume_level(), "game saved");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: LevelCatalog,
    session: Option<GameSession>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: LevelCatalog::builtin(),
            session: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn catalog(mut self, catalog: LevelCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Start a fresh run.
    pub fn new_game(mut self, difficulty: Difficulty) -> Self {
        self.session = Some(GameSession::new(difficulty));
        self
    }

    pub fn session(mut self, session: GameSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Resume from the repository's save.
    pub fn load(mut self, repository: &dyn SaveRepository) -> Result<Self> {
        let data = repository.load()?.ok_or(RuntimeError::NoSave)?;
        self.session = Some(GameSession::from_save(&data)?);
        Ok(self)
    }

    pub fn build(self) -> Result<Runtime> {
        let session = self
            .session
            .unwrap_or_else(|| GameSession::new(Difficulty::default()));

        if session.level == 0 || session.level as usize > self.catalog.len() {
            return Err(RuntimeError::LevelOutOfRange {
                level: session.level,
                levels: self.catalog.len(),
            });
        }

        tracing::info!(
            seed = self.config.seed,
            level = session.level,
            difficulty = %session.difficulty,
            "runtime built"
        );

        Ok(Runtime {
            rng: PcgRng::seeded(self.config.seed),
            config: self.config,
            catalog: self.catalog,
            session,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
