//! Baseline rules: villagers, werewolves and the win check.
//!
//! `BaseRules` owns the three vote maps. Special roles are layered on top by
//! `Ruleset`; on its own `BaseRules` rejects them with `UnhandledRole`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GamePhase, Player, PlayerId, Role, Roster, RuleError};

use super::engine::{RoleSet, RuleEngine, VoteMap};

/// Vote bookkeeping for the two team roles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRules {
    accusation_votes: VoteMap<PlayerId>,
    ballot_votes: VoteMap<bool>,
    werewolf_votes: VoteMap<PlayerId>,
}

impl BaseRules {
    pub fn new() -> Self {
        Self::default()
    }

    fn werewolf_vote(&mut self, actor: &Player, target: &Player) -> Result<(), RuleError> {
        if !actor.is_alive() {
            return Err(RuleError::DeadActor(actor.id().clone()));
        }
        if self.werewolf_votes.contains_key(actor.id()) {
            return Err(RuleError::DuplicateVote(actor.id().clone()));
        }
        if target.is_evil() {
            return Err(RuleError::InvalidTarget {
                target: target.id().clone(),
                reason: "werewolves cannot target other werewolves",
            });
        }
        if !target.is_alive() {
            return Err(RuleError::DeadTarget(target.id().clone()));
        }

        debug!(actor = %actor.id(), target = %target.id(), "werewolf vote");
        self.werewolf_votes.insert(actor.id().clone(), target.id().clone());
        Ok(())
    }
}

/// Drop every vote cast against `target`.
fn purge_target(votes: &mut VoteMap<PlayerId>, target: &PlayerId) {
    let voters: Vec<PlayerId> = votes
        .iter()
        .filter(|(_, voted)| *voted == target)
        .map(|(voter, _)| voter.clone())
        .collect();
    for voter in voters {
        votes.remove(&voter);
    }
}

impl RuleEngine for BaseRules {
    fn accusation_votes(&self) -> &VoteMap<PlayerId> {
        &self.accusation_votes
    }

    fn ballot_votes(&self) -> &VoteMap<bool> {
        &self.ballot_votes
    }

    fn werewolf_votes(&self) -> &VoteMap<PlayerId> {
        &self.werewolf_votes
    }

    fn reset_actions(&mut self, _roster: &mut Roster) {
        self.accusation_votes = VoteMap::new();
        self.ballot_votes = VoteMap::new();
        self.werewolf_votes = VoteMap::new();
    }

    fn handle_accusation_vote(&mut self, accuser: &Player, accused: &Player) -> Result<(), RuleError> {
        if !accuser.is_alive() {
            return Err(RuleError::DeadActor(accuser.id().clone()));
        }
        if !accused.is_alive() {
            return Err(RuleError::DeadTarget(accused.id().clone()));
        }
        if self.accusation_votes.contains_key(accuser.id()) {
            return Err(RuleError::DuplicateVote(accuser.id().clone()));
        }

        debug!(accuser = %accuser.id(), accused = %accused.id(), "accusation vote");
        self.accusation_votes.insert(accuser.id().clone(), accused.id().clone());
        Ok(())
    }

    fn handle_ballot_vote(&mut self, voter: &Player, vote: bool) -> Result<(), RuleError> {
        if !voter.is_alive() {
            return Err(RuleError::DeadActor(voter.id().clone()));
        }
        if self.ballot_votes.contains_key(voter.id()) {
            return Err(RuleError::DuplicateVote(voter.id().clone()));
        }

        debug!(voter = %voter.id(), vote, "ballot vote");
        self.ballot_votes.insert(voter.id().clone(), vote);
        Ok(())
    }

    fn night_action_hook(
        &mut self,
        actor: &Player,
        target: &mut Player,
    ) -> Result<Option<bool>, RuleError> {
        if actor.role() == Role::Werewolf {
            self.werewolf_vote(actor, target)?;
        }
        Ok(None)
    }

    fn end_game_conditions(&self, roster: &Roster) -> Option<GamePhase> {
        let werewolves_alive = roster.alive().any(Player::is_evil);
        let villagers_alive = roster.alive().any(|p| !p.is_evil());

        if !werewolves_alive {
            Some(GamePhase::VillagersVictory)
        } else if !villagers_alive {
            Some(GamePhase::WerewolvesVictory)
        } else {
            None
        }
    }

    fn handled_roles(&self) -> RoleSet {
        Role::BASE.into_iter().collect()
    }

    fn remove_player(&mut self, player: &PlayerId, phase: GamePhase) {
        match phase {
            GamePhase::DayAccusing => {
                self.accusation_votes.remove(player);
                purge_target(&mut self.accusation_votes, player);
            }
            GamePhase::DayBallot => {
                self.ballot_votes.remove(player);
            }
            GamePhase::Night => {
                self.werewolf_votes.remove(player);
                purge_target(&mut self.werewolf_votes, player);
            }
            GamePhase::DayDiscussion
            | GamePhase::VillagersVictory
            | GamePhase::WerewolvesVictory => {}
        }
    }
}
