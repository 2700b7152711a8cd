//! Special-role handlers and the dispatch table that selects them.
//!
//! Each special role has its own handler with its own per-round state. A
//! `HandlerTable` holds at most one handler per role, always sorted by role,
//! so two tables enabling the same roles compare equal no matter what order
//! the roles were added in.

mod clairvoyant;
mod escort;
mod medium;

pub use clairvoyant::ClairvoyantRules;
pub use escort::EscortRules;
pub use medium::MediumRules;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GamePhase, Player, PlayerId, Role, Roster, RuleError};

/// Night-action handler for one special role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleHandler {
    Clairvoyant(ClairvoyantRules),
    Escort(EscortRules),
    Medium(MediumRules),
}

impl RoleHandler {
    /// Fresh handler for a special role. `None` for the base roles.
    #[must_use]
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Clairvoyant => Some(RoleHandler::Clairvoyant(ClairvoyantRules::new())),
            Role::Escort => Some(RoleHandler::Escort(EscortRules::new())),
            Role::Medium => Some(RoleHandler::Medium(MediumRules::new())),
            Role::Villager | Role::Werewolf => None,
        }
    }

    /// The role this handler acts for.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            RoleHandler::Clairvoyant(_) => Role::Clairvoyant,
            RoleHandler::Escort(_) => Role::Escort,
            RoleHandler::Medium(_) => Role::Medium,
        }
    }

    pub fn act(&mut self, actor: &Player, target: &mut Player) -> Result<Option<bool>, RuleError> {
        match self {
            RoleHandler::Clairvoyant(rules) => rules.act(actor, target),
            RoleHandler::Escort(rules) => rules.act(actor, target),
            RoleHandler::Medium(rules) => rules.act(actor, target),
        }
    }

    pub fn reset(&mut self, roster: &mut Roster) {
        match self {
            RoleHandler::Clairvoyant(rules) => rules.reset(),
            RoleHandler::Escort(rules) => rules.reset(roster),
            RoleHandler::Medium(rules) => rules.reset(),
        }
    }

    pub fn remove_player(&mut self, player: &PlayerId, phase: GamePhase) {
        if let RoleHandler::Escort(rules) = self {
            rules.remove_player(player, phase);
        }
    }
}

/// Role -> handler lookup, canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RoleHandler>", into = "Vec<RoleHandler>")]
pub struct HandlerTable {
    handlers: SmallVec<[RoleHandler; 3]>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler. Returns false (and keeps the existing one) if its role
    /// is already present.
    pub fn insert(&mut self, handler: RoleHandler) -> bool {
        match self.handlers.binary_search_by_key(&handler.role(), RoleHandler::role) {
            Ok(_) => false,
            Err(pos) => {
                self.handlers.insert(pos, handler);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<&RoleHandler> {
        self.handlers.iter().find(|h| h.role() == role)
    }

    pub fn get_mut(&mut self, role: Role) -> Option<&mut RoleHandler> {
        self.handlers.iter_mut().find(|h| h.role() == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleHandler> {
        self.handlers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RoleHandler> {
        self.handlers.iter_mut()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.handlers.iter().map(RoleHandler::role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl From<Vec<RoleHandler>> for HandlerTable {
    fn from(handlers: Vec<RoleHandler>) -> Self {
        let mut table = HandlerTable::new();
        for handler in handlers {
            table.insert(handler);
        }
        table
    }
}

impl From<HandlerTable> for Vec<RoleHandler> {
    fn from(table: HandlerTable) -> Self {
        table.handlers.into_vec()
    }
}
