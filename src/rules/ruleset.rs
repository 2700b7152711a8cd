//! The active rule configuration of one match.
//!
//! A `Ruleset` is `BaseRules` plus a dispatch table of special-role
//! handlers. Night actions go to the handler registered for the actor's
//! role; everything else is answered by `BaseRules`.
//!
//! ## Building
//!
//! ```
//! use werewolf_rules::core::Role;
//! use werewolf_rules::rules::{RuleEngine, Ruleset};
//!
//! let rules = Ruleset::builder().with_escort().with_medium().build();
//! assert!(rules.handled_roles().contains(Role::Escort));
//! assert!(!rules.handled_roles().contains(Role::Clairvoyant));
//!
//! // Order of registration does not matter.
//! assert_eq!(rules, Ruleset::builder().with_medium().with_escort().build());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GamePhase, Player, PlayerId, Role, Roster, RuleError};

use super::baseline::BaseRules;
use super::engine::{RoleSet, RuleEngine, VoteMap};
use super::roles::{ClairvoyantRules, EscortRules, HandlerTable, MediumRules, RoleHandler};

/// Baseline rules plus the enabled special-role handlers.
///
/// Equality is structural: same enabled roles and same round state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    base: BaseRules,
    handlers: HandlerTable,
}

impl Ruleset {
    /// Start a builder from the baseline rules.
    pub fn builder() -> RulesetBuilder {
        RulesetBuilder::new()
    }

    /// A ruleset with every special role enabled.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .with_clairvoyant()
            .with_escort()
            .with_medium()
            .build()
    }

    /// Special roles enabled on top of the baseline.
    #[must_use]
    pub fn enabled_roles(&self) -> RoleSet {
        self.handlers.roles().collect()
    }

    /// The player the escort shielded tonight, if any.
    #[must_use]
    pub fn protected_player(&self) -> Option<&PlayerId> {
        match self.handlers.get(Role::Escort) {
            Some(RoleHandler::Escort(rules)) => rules.protected(),
            _ => None,
        }
    }

    /// The handler registered for `role`, if any.
    #[must_use]
    pub fn handler(&self, role: Role) -> Option<&RoleHandler> {
        self.handlers.get(role)
    }
}

impl RuleEngine for Ruleset {
    fn accusation_votes(&self) -> &VoteMap<PlayerId> {
        self.base.accusation_votes()
    }

    fn ballot_votes(&self) -> &VoteMap<bool> {
        self.base.ballot_votes()
    }

    fn werewolf_votes(&self) -> &VoteMap<PlayerId> {
        self.base.werewolf_votes()
    }

    fn reset_actions(&mut self, roster: &mut Roster) {
        self.base.reset_actions(roster);
        for handler in self.handlers.iter_mut() {
            handler.reset(roster);
        }
    }

    fn handle_accusation_vote(&mut self, accuser: &Player, accused: &Player) -> Result<(), RuleError> {
        self.base.handle_accusation_vote(accuser, accused)
    }

    fn handle_ballot_vote(&mut self, voter: &Player, vote: bool) -> Result<(), RuleError> {
        self.base.handle_ballot_vote(voter, vote)
    }

    fn night_action_hook(
        &mut self,
        actor: &Player,
        target: &mut Player,
    ) -> Result<Option<bool>, RuleError> {
        match self.handlers.get_mut(actor.role()) {
            Some(handler) => handler.act(actor, target),
            None => self.base.night_action_hook(actor, target),
        }
    }

    fn end_game_conditions(&self, roster: &Roster) -> Option<GamePhase> {
        self.base.end_game_conditions(roster)
    }

    fn handled_roles(&self) -> RoleSet {
        let mut roles = self.base.handled_roles();
        for role in self.handlers.roles() {
            roles.insert(role);
        }
        roles
    }

    fn remove_player(&mut self, player: &PlayerId, phase: GamePhase) {
        self.base.remove_player(player, phase);
        for handler in self.handlers.iter_mut() {
            handler.remove_player(player, phase);
        }
    }
}

/// Assembles a `Ruleset` one special role at a time.
///
/// Adding the same role twice is a no-op.
#[derive(Clone, Debug, Default)]
pub struct RulesetBuilder {
    handlers: HandlerTable,
}

impl RulesetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clairvoyant(mut self) -> Self {
        self.handlers.insert(RoleHandler::Clairvoyant(ClairvoyantRules::new()));
        self
    }

    #[must_use]
    pub fn with_escort(mut self) -> Self {
        self.handlers.insert(RoleHandler::Escort(EscortRules::new()));
        self
    }

    #[must_use]
    pub fn with_medium(mut self) -> Self {
        self.handlers.insert(RoleHandler::Medium(MediumRules::new()));
        self
    }

    /// Enable a special role chosen at runtime.
    pub fn with_role(mut self, role: Role) -> Result<Self, ConfigError> {
        let handler = RoleHandler::for_role(role).ok_or(ConfigError::NotSpecial(role))?;
        self.handlers.insert(handler);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Ruleset {
        Ruleset {
            base: BaseRules::new(),
            handlers: self.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    #[test]
    fn test_baseline_only() {
        let mut rules = Ruleset::builder().build();
        let diana = Player::new("diana", Role::Clairvoyant);
        let mut bob = Player::new("bob", Role::Werewolf);

        assert!(rules.enabled_roles().is_empty());
        assert_eq!(rules.handled_roles().len(), 2);
        assert_eq!(
            rules.handle_night_action(&diana, &mut bob),
            Err(RuleError::UnhandledRole(Role::Clairvoyant))
        );
    }

    #[test]
    fn test_standard_handles_everything() {
        let rules = Ruleset::standard();
        let roles = rules.handled_roles();

        for role in Role::BASE.into_iter().chain(Role::SPECIAL) {
            assert!(roles.contains(role));
        }
    }

    #[test]
    fn test_dispatch_by_role() {
        let mut rules = Ruleset::standard();
        let diana = Player::new("diana", Role::Clairvoyant);
        let charlie = Player::new("charlie", Role::Escort);
        let bob = Player::new("bob", Role::Werewolf);
        let mut frank = Player::new("frank", Role::Werewolf);
        let mut alice = Player::new("alice", Role::Villager);

        assert_eq!(rules.handle_night_action(&diana, &mut frank), Ok(Some(true)));
        assert_eq!(rules.handle_night_action(&charlie, &mut alice), Ok(None));
        assert_eq!(rules.handle_night_action(&bob, &mut alice), Ok(None));

        assert_eq!(alice.status(), Status::Protected);
        assert_eq!(rules.protected_player(), Some(alice.id()));
        assert_eq!(rules.werewolf_votes().get(bob.id()), Some(alice.id()));
    }

    #[test]
    fn test_order_independent_equality() {
        let a = Ruleset::builder().with_clairvoyant().with_escort().with_medium().build();
        let b = Ruleset::builder().with_medium().with_clairvoyant().with_escort().build();
        let c = Ruleset::builder().with_medium().with_clairvoyant().build();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, Ruleset::standard());
    }

    #[test]
    fn test_duplicate_registration_is_idempotent() {
        let twice = Ruleset::builder().with_escort().with_escort().build();
        let once = Ruleset::builder().with_escort().build();

        assert_eq!(twice, once);
        assert_eq!(twice.enabled_roles().len(), 1);
    }

    #[test]
    fn test_with_role_rejects_base_roles() {
        assert!(matches!(
            Ruleset::builder().with_role(Role::Werewolf),
            Err(ConfigError::NotSpecial(Role::Werewolf))
        ));

        let rules = Ruleset::builder().with_role(Role::Medium).unwrap().build();
        assert_eq!(rules, Ruleset::builder().with_medium().build());
    }

    #[test]
    fn test_reset_clears_handlers_and_protection() {
        let mut rules = Ruleset::standard();
        let charlie = Player::new("charlie", Role::Escort);
        let mut roster = Roster::new([
            Player::new("alice", Role::Villager),
            Player::new("bob", Role::Werewolf),
            charlie.clone(),
        ])
        .unwrap();

        let alice = roster.get_mut(&"alice".into()).unwrap();
        rules.handle_night_action(&charlie, alice).unwrap();

        rules.reset_actions(&mut roster);

        assert_eq!(rules, Ruleset::standard());
        assert_eq!(roster.get(&"alice".into()).unwrap().status(), Status::Alive);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut rules = Ruleset::builder().with_escort().with_clairvoyant().build();
        let diana = Player::new("diana", Role::Clairvoyant);
        let mut bob = Player::new("bob", Role::Werewolf);
        rules.handle_night_action(&diana, &mut bob).unwrap();

        let json = serde_json::to_string(&rules).unwrap();
        let decoded: Ruleset = serde_json::from_str(&json).unwrap();

        assert_eq!(rules, decoded);
    }
}
