//! Escort: shields one living player from the werewolves for one night.
//!
//! At most one player holds `Status::Protected` at a time. The protection is
//! lifted when the night's actions are reset.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GamePhase, Player, PlayerId, Roster, RuleError, Status};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscortRules {
    acted: bool,
    protected: Option<PlayerId>,
}

impl EscortRules {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// The player shielded tonight, if any.
    #[must_use]
    pub fn protected(&self) -> Option<&PlayerId> {
        self.protected.as_ref()
    }

    /// Protect a living target until the next reset.
    pub fn act(&mut self, actor: &Player, target: &mut Player) -> Result<Option<bool>, RuleError> {
        if !actor.is_alive() {
            return Err(RuleError::DeadActor(actor.id().clone()));
        }
        if self.acted {
            return Err(RuleError::DuplicateVote(actor.id().clone()));
        }
        if !target.is_alive() {
            return Err(RuleError::DeadTarget(target.id().clone()));
        }
        if self.protected.is_some() {
            return Err(RuleError::InvalidTarget {
                target: target.id().clone(),
                reason: "another player is already protected tonight",
            });
        }

        self.acted = true;
        target.set_status(Status::Protected);
        self.protected = Some(target.id().clone());
        debug!(actor = %actor.id(), target = %target.id(), "escort protection");
        Ok(None)
    }

    /// Clear the acted flag and lift any protection still in place.
    pub fn reset(&mut self, roster: &mut Roster) {
        self.acted = false;
        if let Some(id) = self.protected.take() {
            if let Some(player) = roster.get_mut(&id) {
                if player.status() == Status::Protected {
                    player.set_status(Status::Alive);
                }
            }
        }
    }

    /// A protected player who is killed outright loses the protection slot.
    pub fn remove_player(&mut self, player: &PlayerId, phase: GamePhase) {
        if phase == GamePhase::Night && self.protected.as_ref() == Some(player) {
            self.protected = None;
        }
    }
}
