//! The battle state machine.
//!
//! ```text
//! Setup ──► RoundLoop ──► Victory | Defeat | Aborted
//!             │
//!             ├─ terminal check, then turn > limit ⇒ Defeat
//!             ├─ turn += 1
//!             ├─ first mover's phase, prune, terminal check
//!             └─ second mover's phase, prune, terminal check
//! ```
//!
//! The round that crosses the limit is played out in full, so clearing the
//! party in that round still wins.
//!
//! Battle-scoped modifiers live in the [`BattleSession`], which is dropped on
//! every exit path; the player only ever sees permanent changes (damage,
//! healing, potion effects).

use super::event::BattleEvent;
use super::outcome::{BattleOutcome, BattleReport};
use super::provider::{ActionChoice, BattleView, DecisionProvider};
use super::session::BattleSession;
use super::setup::{BattleSetup, Phase};
use crate::config::GameConfig;
use crate::enemy::{BossAction, BossDecisionPolicy};
use crate::env::RandomSource;
use crate::error::SelectionError;
use crate::potion::PotionInventory;
use crate::stats::PlayerCombatant;

/// Control flow out of a player phase.
enum PhaseFlow {
    Continue,
    Abort,
}

/// Resolves one battle against a borrowed player and potion inventory.
pub struct CombatResolver<'a, R: RandomSource> {
    player: &'a mut PlayerCombatant,
    potions: &'a mut PotionInventory,
    rng: R,
    config: GameConfig,
    policy: BossDecisionPolicy,
    events: Vec<BattleEvent>,
}

impl<'a, R: RandomSource> CombatResolver<'a, R> {
    pub fn new(player: &'a mut PlayerCombatant, potions: &'a mut PotionInventory, rng: R) -> Self {
        Self {
            player,
            potions,
            rng,
            config: GameConfig::default(),
            policy: BossDecisionPolicy::new(),
            events: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets up and fights a battle to completion.
    pub fn run<P: DecisionProvider>(mut self, setup: &BattleSetup, provider: &mut P) -> BattleReport {
        let session = self.prepare(setup, provider);
        self.resolve(session, provider)
    }

    /// Setup state: heals the player and builds the party.
    pub fn prepare<P: DecisionProvider>(
        &mut self,
        setup: &BattleSetup,
        provider: &mut P,
    ) -> BattleSession {
        self.player.restore_to_full(setup.disabled);
        let extra_actions = self.player.extra_action_grant(setup.disabled);
        let session = BattleSession::from_setup(setup, extra_actions);

        tracing::info!(
            enemies = ?setup.archetypes,
            first_mover = %setup.first_mover,
            double_health = setup.double_health,
            disabled = ?setup.disabled.kind(),
            extra_actions,
            "battle started"
        );

        self.emit(
            provider,
            BattleEvent::BattleStarted {
                enemies: session.party().iter().map(|enemy| enemy.kind()).collect(),
                first_mover: setup.first_mover,
                double_health: setup.double_health,
                disabled: setup.disabled.kind(),
                extra_actions,
            },
        );
        session
    }

    /// Runs the round loop on a prepared session until a terminal state.
    pub fn resolve<P: DecisionProvider>(
        mut self,
        mut session: BattleSession,
        provider: &mut P,
    ) -> BattleReport {
        let outcome = 'battle: loop {
            if let Some(outcome) = self.terminal(&session) {
                break outcome;
            }
            if session.turn() > self.config.turn_limit {
                tracing::info!(
                    turn = session.turn(),
                    limit = self.config.turn_limit,
                    "turn limit exceeded"
                );
                self.emit(
                    provider,
                    BattleEvent::TurnLimitReached {
                        limit: self.config.turn_limit,
                    },
                );
                break BattleOutcome::Defeat;
            }

            let turn = session.advance_turn();
            self.emit(provider, BattleEvent::RoundStarted { turn });

            for phase in session.first_mover().phases() {
                match phase {
                    Phase::Player => {
                        if let PhaseFlow::Abort = self.player_phase(&mut session, provider) {
                            break 'battle BattleOutcome::Aborted;
                        }
                    }
                    Phase::Enemy => self.enemy_phase(&mut session, provider),
                }

                let pruned = session.prune();
                if pruned > 0 {
                    tracing::debug!(pruned, left = session.party_len(), "pruned enemies");
                }
                if let Some(outcome) = self.terminal(&session) {
                    break 'battle outcome;
                }
            }
        };

        let turns = session.turn();
        tracing::info!(%outcome, turns, "battle ended");
        self.emit(provider, BattleEvent::BattleEnded { outcome, turns });

        BattleReport {
            outcome,
            turns,
            events: self.events,
        }
    }

    fn terminal(&self, session: &BattleSession) -> Option<BattleOutcome> {
        if !self.player.is_alive() {
            Some(BattleOutcome::Defeat)
        } else if session.is_cleared() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }

    fn player_phase<P: DecisionProvider>(
        &mut self,
        session: &mut BattleSession,
        provider: &mut P,
    ) -> PhaseFlow {
        let slots = 1 + session.take_extra_actions();
        let mut slot = 1;

        while slot <= slots {
            if session.is_cleared() {
                break;
            }

            let view = BattleView {
                turn: session.turn(),
                slot,
                slots,
                player: &*self.player,
                suppression: session.suppression(),
                party: session.party(),
                potions: &*self.potions,
            };
            let choice = provider.choose_action(&view);
            tracing::debug!(turn = session.turn(), slot, %choice, "player choice");

            match choice {
                ActionChoice::Invalid => {
                    self.emit(provider, BattleEvent::ChoiceRejected);
                    continue;
                }
                ActionChoice::Abort => return PhaseFlow::Abort,
                ActionChoice::Skip => self.emit(provider, BattleEvent::Skipped),
                ActionChoice::Attack => self.player_attack(session, provider),
                ActionChoice::UsePotion => self.use_potion(session, provider),
            }
            slot += 1;
        }
        PhaseFlow::Continue
    }

    fn player_attack<P: DecisionProvider>(&mut self, session: &mut BattleSession, provider: &mut P) {
        let alive = session.alive_indices();
        let pick = if alive.len() == 1 {
            Some(0)
        } else {
            let targets: Vec<_> = alive.iter().map(|&index| &session.party()[index]).collect();
            provider.choose_target(&targets)
        };

        let Some(&target) = pick.and_then(|position| alive.get(position)) else {
            self.cancel(
                provider,
                SelectionError::TargetOutOfRange {
                    index: pick,
                    available: alive.len(),
                },
            );
            return;
        };

        let damage = self.player.effective_attack(session.suppression());
        let Some(enemy) = session.enemy_mut(target) else {
            return;
        };
        let remaining = enemy.take_damage(damage);
        let kind = enemy.kind();

        tracing::debug!(target, %kind, damage, remaining, "player attack");
        self.emit(
            provider,
            BattleEvent::PlayerAttacked {
                target,
                kind,
                damage,
                remaining,
            },
        );
        if remaining == 0 {
            self.emit(provider, BattleEvent::EnemyDefeated { target, kind });
        }
    }

    fn use_potion<P: DecisionProvider>(&mut self, session: &BattleSession, provider: &mut P) {
        let listing = self.potions.listing();
        if listing.is_empty() {
            self.cancel(provider, SelectionError::NoPotions);
            return;
        }

        let pick = provider.choose_potion(&listing);
        let Some(stack) = pick.and_then(|position| listing.get(position)) else {
            self.cancel(
                provider,
                SelectionError::PotionOutOfRange {
                    index: pick,
                    available: listing.len(),
                },
            );
            return;
        };

        let left = match self.potions.consume(stack.kind) {
            Ok(left) => left,
            Err(reason) => {
                self.cancel(provider, reason);
                return;
            }
        };

        let suppression = session.suppression();
        let healed = stack.kind.effect().apply(self.player, suppression);
        tracing::debug!(kind = %stack.kind, healed, left, "potion used");
        self.emit(
            provider,
            BattleEvent::PotionUsed {
                kind: stack.kind,
                healed,
                health: self.player.current_health(),
                max_health: self.player.effective_max_health(suppression),
                attack: self.player.effective_attack(suppression),
                left,
            },
        );
    }

    fn enemy_phase<P: DecisionProvider>(&mut self, session: &mut BattleSession, provider: &mut P) {
        // Enemies summoned during this phase first act next phase.
        let acting = session.party_len();

        for index in 0..acting {
            if !self.player.is_alive() {
                break;
            }
            let Some(enemy) = session.party().get(index) else {
                break;
            };
            if !enemy.is_alive() {
                continue;
            }

            if !enemy.is_boss() {
                self.enemy_attack(session, index, provider);
                continue;
            }

            let decision =
                self.policy
                    .decide(session.alive_count(), session.party_len(), &mut self.rng);
            tracing::debug!(roll = ?decision.roll, action = ?decision.action, "boss decision");
            if decision.degraded {
                tracing::warn!(party = session.party_len(), "boss summon degraded to attack");
            }

            match decision.action {
                BossAction::Attack => self.enemy_attack(session, index, provider),
                BossAction::Summon {
                    kind,
                    requested,
                    count,
                } => {
                    let added = session.summon(kind, count);
                    self.emit(
                        provider,
                        BattleEvent::BossSummoned {
                            kind,
                            requested,
                            count: added,
                        },
                    );
                }
            }
        }
    }

    fn enemy_attack<P: DecisionProvider>(
        &mut self,
        session: &BattleSession,
        index: usize,
        provider: &mut P,
    ) {
        let Some(enemy) = session.party().get(index) else {
            return;
        };
        let kind = enemy.kind();
        let report = self
            .player
            .take_damage(enemy.attack(), session.suppression());

        tracing::debug!(
            attacker = index,
            %kind,
            raw = report.raw,
            dealt = report.dealt,
            remaining = report.remaining,
            "enemy attack"
        );
        self.emit(
            provider,
            BattleEvent::EnemyAttacked {
                attacker: index,
                kind,
                raw: report.raw,
                dealt: report.dealt,
                remaining: report.remaining,
            },
        );
        if report.remaining == 0 {
            self.emit(provider, BattleEvent::PlayerDefeated);
        }
    }

    fn cancel<P: DecisionProvider>(&mut self, provider: &mut P, reason: SelectionError) {
        tracing::debug!(%reason, "action cancelled");
        self.emit(provider, BattleEvent::ActionCancelled { reason });
    }

    fn emit<P: DecisionProvider>(&mut self, provider: &mut P, event: BattleEvent) {
        provider.observe(&event);
        self.events.push(event);
    }
}
