//! Error types.
//!
//! `RuleError` is returned by every in-match operation that can be refused.
//! A refused call never mutates the match.
//!
//! `ConfigError` covers everything that happens before a match runs: roster
//! assembly, role dealing, and rebuilding a match from a snapshot.

use thiserror::Error;

use super::phase::GamePhase;
use super::player::{PlayerId, Role};

/// Why an in-match operation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The operation is not legal in the current phase.
    #[error("{operation} is not allowed during {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: GamePhase,
    },

    /// The id does not resolve to a roster member.
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    /// A dead player tried to vote or act.
    #[error("{0} is dead and cannot act")]
    DeadActor(PlayerId),

    /// The target must be alive but is dead.
    #[error("{0} is dead and cannot be targeted")]
    DeadTarget(PlayerId),

    /// The target must be dead but is alive.
    #[error("{0} is alive and cannot be targeted")]
    LivingTarget(PlayerId),

    /// The actor already voted or acted this round.
    #[error("{0} has already acted this round")]
    DuplicateVote(PlayerId),

    /// Role-specific targeting rule violated.
    #[error("{target} is not a valid target: {reason}")]
    InvalidTarget {
        target: PlayerId,
        reason: &'static str,
    },

    /// The actor's role has no handler in the active ruleset.
    #[error("{0} is not handled by this ruleset")]
    UnhandledRole(Role),
}

/// Why a match could not be set up or reconstructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("player id {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("at least one werewolf is required")]
    NoWerewolves,

    #[error("{werewolves} werewolves and {specials} special roles do not fit {players} players with at least one villager-team player")]
    TooManyRoles {
        werewolves: usize,
        specials: usize,
        players: usize,
    },

    #[error("{0} is not a special role")]
    NotSpecial(Role),

    #[error("special role {0} listed more than once")]
    DuplicateRole(Role),

    #[error("pending accusation on {0}, who is not in the roster")]
    UnknownAccused(PlayerId),

    #[error("pending accusation outside the ballot phase ({0})")]
    StrayAccusation(GamePhase),

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}
