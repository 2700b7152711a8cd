//! Match orchestrator.
//!
//! `Game` owns the roster, the phase and the `Ruleset`. It decides which
//! operations are legal in which phase, resolves player ids, and hands the
//! actual vote/action semantics to the ruleset.
//!
//! ## Phase transitions (`advance_phase`)
//!
//! | From            | To                                                        |
//! |-----------------|-----------------------------------------------------------|
//! | `DayDiscussion` | `DayAccusing`                                             |
//! | `DayAccusing`   | `DayBallot` on a unique accusation leader, else `Night`   |
//! | `DayBallot`     | `Night`, executing the accused on a strict majority       |
//! | `Night`         | `DayDiscussion`, killing the werewolves' unique target    |
//! | victory         | unchanged                                                 |
//!
//! After every transition the win check runs and may replace the new phase
//! with a victory phase.
//!
//! ## Concurrency
//!
//! Every operation is a single synchronous step. The host must serialize
//! calls to one `Game`.

use tracing::{debug, info};

use crate::core::{
    ConfigError, GamePhase, GameRng, MatchConfig, Player, PlayerId, Roster, RuleError, Status,
};
use crate::rules::{plurality, RuleEngine, Ruleset};

use super::status::GameStatus;

/// A running match.
#[derive(Clone, Debug)]
pub struct Game {
    roster: Roster,
    phase: GamePhase,
    rules: Ruleset,
    accused: Option<PlayerId>,
}

impl Game {
    /// Start a match in `DayDiscussion`.
    #[must_use]
    pub fn new(roster: Roster, rules: Ruleset) -> Self {
        Self {
            roster,
            phase: GamePhase::default(),
            rules,
            accused: None,
        }
    }

    /// Deal roles from `config` with a seeded shuffle and start a match.
    ///
    /// The same config and seed always produce the same roster.
    pub fn deal(config: &MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut roles = config.role_pool();
        GameRng::new(seed).shuffle(&mut roles);

        let roster = Roster::new(
            config
                .players
                .iter()
                .zip(roles)
                .map(|(id, role)| Player::new(id.clone(), role)),
        )?;

        let mut builder = Ruleset::builder();
        for &role in &config.special_roles {
            builder = builder.with_role(role)?;
        }

        info!(players = roster.len(), seed, "roles dealt");
        Ok(Self::new(roster, builder.build()))
    }

    /// Rebuild a match from a snapshot.
    pub fn from_status(status: GameStatus) -> Result<Self, ConfigError> {
        if let Some(accused) = &status.accused {
            if status.phase != GamePhase::DayBallot {
                return Err(ConfigError::StrayAccusation(status.phase));
            }
            if status.players.get(accused).is_none() {
                return Err(ConfigError::UnknownAccused(accused.clone()));
            }
        }

        Ok(Self {
            roster: status.players,
            phase: status.phase,
            rules: status.rules,
            accused: status.accused,
        })
    }

    /// Independent snapshot of the current state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            players: self.roster.clone(),
            rules: self.rules.clone(),
            phase: self.phase,
            accused: self.accused.clone(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    /// Player on trial during `DayBallot`.
    #[must_use]
    pub fn accused(&self) -> Option<&PlayerId> {
        self.accused.as_ref()
    }

    #[must_use]
    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    // === Phase Machine ===

    /// Move to the next phase, resolving the one being left.
    pub fn advance_phase(&mut self) -> GamePhase {
        let from = self.phase;
        let next = match from {
            GamePhase::DayDiscussion => GamePhase::DayAccusing,
            GamePhase::DayAccusing => {
                match plurality(self.rules.accusation_votes().values()).cloned() {
                    Some(accused) => {
                        info!(accused = %accused, "accusation goes to ballot");
                        self.accused = Some(accused);
                        GamePhase::DayBallot
                    }
                    None => GamePhase::Night,
                }
            }
            GamePhase::DayBallot => {
                if let Some(accused) = self.accused.take() {
                    self.resolve_ballot(&accused);
                }
                GamePhase::Night
            }
            GamePhase::Night => {
                self.resolve_night();
                GamePhase::DayDiscussion
            }
            GamePhase::VillagersVictory | GamePhase::WerewolvesVictory => return from,
        };

        self.phase = next;
        info!(from = %from, to = %next, "phase advanced");
        self.check_victory();
        self.phase
    }

    /// Execute the accused if confirming ballots are a strict majority.
    fn resolve_ballot(&mut self, accused: &PlayerId) {
        let cast = self.rules.ballot_votes().len();
        let confirms = self.rules.ballot_votes().values().filter(|v| **v).count();

        if cast > 0 && confirms * 2 > cast {
            if let Some(player) = self.roster.get_mut(accused) {
                player.set_status(Status::Dead);
            }
            info!(accused = %accused, confirms, cast, "accused executed");
        } else {
            info!(accused = %accused, confirms, cast, "accusation rejected");
        }
    }

    /// Kill the werewolves' target unless protected, then reset the round.
    fn resolve_night(&mut self) {
        if let Some(victim) = plurality(self.rules.werewolf_votes().values()).cloned() {
            match self.roster.get_mut(&victim) {
                Some(player) if player.status() == Status::Protected => {
                    info!(victim = %victim, "attack blocked by protection");
                }
                Some(player) => {
                    player.set_status(Status::Dead);
                    info!(victim = %victim, "werewolves killed");
                }
                None => {}
            }
        }
        self.rules.reset_actions(&mut self.roster);
    }

    fn check_victory(&mut self) {
        if let Some(end) = self.rules.end_game_conditions(&self.roster) {
            info!(phase = %end, "match over");
            self.phase = end;
            self.accused = None;
        }
    }

    fn require_phase(&self, operation: &'static str, phase: GamePhase) -> Result<(), RuleError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(RuleError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    // === Player Operations ===

    /// Run a night action. Returns the inspection result for clairvoyant
    /// and medium, `None` otherwise.
    pub fn perform_night_action(
        &mut self,
        actor_id: &PlayerId,
        target_id: &PlayerId,
    ) -> Result<Option<bool>, RuleError> {
        self.require_phase("perform_night_action", GamePhase::Night)?;

        let actor = self.roster.require(actor_id)?.clone();
        let target = self.roster.require_mut(target_id)?;
        self.rules.handle_night_action(&actor, target)
    }

    /// Cast an accusation vote.
    pub fn accuse_player(&mut self, voter_id: &PlayerId, target_id: &PlayerId) -> Result<(), RuleError> {
        self.require_phase("accuse_player", GamePhase::DayAccusing)?;

        let voter = self.roster.require(voter_id)?;
        let target = self.roster.require(target_id)?;
        self.rules.handle_accusation_vote(voter, target)
    }

    /// Vote to confirm (`true`) or reject the pending accusation.
    pub fn ballot_vote(&mut self, voter_id: &PlayerId, vote: bool) -> Result<(), RuleError> {
        self.require_phase("ballot_vote", GamePhase::DayBallot)?;

        let voter = self.roster.require(voter_id)?;
        self.rules.handle_ballot_vote(voter, vote)
    }

    /// Kill a player outside the normal flow, e.g. on disconnect.
    ///
    /// No-op for unknown or already dead players and once the match is over.
    /// Killing the accused during the ballot cancels the trial and moves
    /// straight to `Night`.
    pub fn kill_player(&mut self, player_id: &PlayerId) -> GamePhase {
        if self.phase.is_terminal() {
            return self.phase;
        }
        match self.roster.get(player_id) {
            Some(player) if player.is_alive() => {}
            _ => return self.phase,
        }

        self.rules.remove_player(player_id, self.phase);

        if self.phase == GamePhase::DayBallot && self.accused.as_ref() == Some(player_id) {
            debug!(player = %player_id, "accused removed, ballot cancelled");
            self.accused = None;
            self.phase = GamePhase::Night;
        }

        if let Some(player) = self.roster.get_mut(player_id) {
            player.set_status(Status::Dead);
        }
        info!(player = %player_id, phase = %self.phase, "player killed");

        self.check_victory();
        self.phase
    }
}
