//! Medium: learns whether one dead player was a werewolf each night.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Player, RuleError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumRules {
    acted: bool,
}

impl MediumRules {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// Inspect a dead target. Returns whether it was evil.
    pub fn act(&mut self, actor: &Player, target: &Player) -> Result<Option<bool>, RuleError> {
        if !actor.is_alive() {
            return Err(RuleError::DeadActor(actor.id().clone()));
        }
        if self.acted {
            return Err(RuleError::DuplicateVote(actor.id().clone()));
        }
        if target.is_alive() {
            return Err(RuleError::LivingTarget(target.id().clone()));
        }

        self.acted = true;
        debug!(actor = %actor.id(), target = %target.id(), "medium inspection");
        Ok(Some(target.is_evil()))
    }

    pub fn reset(&mut self) {
        self.acted = false;
    }
}
