//! Rule engine trait: vote bookkeeping and night-action dispatch.
//!
//! The `Game` owns the roster and the phase; everything about *what* a vote
//! or a night action means is delegated to a `RuleEngine`.
//!
//! ## Implementation Notes
//!
//! - `night_action_hook` is only ever reached through `handle_night_action`,
//!   which has already checked the actor's role against `handled_roles`.
//! - Every handler validates before it mutates. An `Err` leaves the engine
//!   and the players untouched.
//! - Vote maps are keyed by `PlayerId`, never by `Player`.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GamePhase, Player, PlayerId, Role, Roster, RuleError};

/// Voter -> vote, one entry per voter per round.
pub type VoteMap<V> = OrdMap<PlayerId, V>;

/// Sorted, duplicate-free set of roles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleSet(SmallVec<[Role; 5]>);

impl RoleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a role. Returns false if it was already present.
    pub fn insert(&mut self, role: Role) -> bool {
        match self.0.binary_search(&role) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, role);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.binary_search(&role).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::new();
        for role in iter {
            set.insert(role);
        }
        set
    }
}

/// Vote and night-action rules for one match.
pub trait RuleEngine {
    /// Accusation votes cast this round (accuser -> accused).
    fn accusation_votes(&self) -> &VoteMap<PlayerId>;

    /// Ballot votes cast this round (voter -> confirm).
    fn ballot_votes(&self) -> &VoteMap<bool>;

    /// Werewolf night votes cast this round (werewolf -> victim).
    fn werewolf_votes(&self) -> &VoteMap<PlayerId>;

    /// Clear all round-scoped state. Any protected player goes back to alive.
    fn reset_actions(&mut self, roster: &mut Roster);

    /// Record `accuser`'s accusation against `accused`.
    fn handle_accusation_vote(&mut self, accuser: &Player, accused: &Player) -> Result<(), RuleError>;

    /// Record `voter`'s ballot on the pending accusation.
    fn handle_ballot_vote(&mut self, voter: &Player, vote: bool) -> Result<(), RuleError>;

    /// Run `actor`'s night action on `target`.
    ///
    /// Returns `Some(is_evil)` for inspection roles, `None` otherwise.
    fn handle_night_action(
        &mut self,
        actor: &Player,
        target: &mut Player,
    ) -> Result<Option<bool>, RuleError> {
        if !self.handled_roles().contains(actor.role()) {
            return Err(RuleError::UnhandledRole(actor.role()));
        }
        self.night_action_hook(actor, target)
    }

    /// Role-specific night action. Called by `handle_night_action` only.
    fn night_action_hook(
        &mut self,
        actor: &Player,
        target: &mut Player,
    ) -> Result<Option<bool>, RuleError>;

    /// The victory phase reached by `roster`, if any.
    fn end_game_conditions(&self, roster: &Roster) -> Option<GamePhase>;

    /// Roles this engine can dispatch night actions for.
    fn handled_roles(&self) -> RoleSet;

    /// Forget `player` in the round-scoped state relevant to `phase`.
    fn remove_player(&mut self, player: &PlayerId, phase: GamePhase);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_set_is_sorted_and_unique() {
        let set: RoleSet = [Role::Medium, Role::Villager, Role::Medium, Role::Werewolf]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Role::Villager, Role::Werewolf, Role::Medium]
        );
    }

    #[test]
    fn test_role_set_order_independent_equality() {
        let a: RoleSet = [Role::Escort, Role::Clairvoyant].into_iter().collect();
        let b: RoleSet = [Role::Clairvoyant, Role::Escort].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_role_set_insert_reports_new() {
        let mut set = RoleSet::new();
        assert!(set.insert(Role::Escort));
        assert!(!set.insert(Role::Escort));
        assert!(set.contains(Role::Escort));
        assert!(!set.contains(Role::Medium));
    }
}
