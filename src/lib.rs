//! # werewolf-rules
//!
//! Authoritative rules engine for a hidden-role social-deduction party game.
//!
//! The engine tracks players, the current phase of a round-based match,
//! votes and role-specific night actions, and decides victory. It knows
//! nothing about sockets, lobbies or rendering: a host resolves inbound
//! requests to player ids, calls into a `Game`, and broadcasts the
//! `GameStatus` snapshots it takes afterwards.
//!
//! ## Design Principles
//!
//! 1. **Single source of truth**: `Game` enforces phase legality itself, so
//!    callers never need to pre-filter requests.
//!
//! 2. **Composable roles**: special roles are enabled per match through
//!    `RulesetBuilder`. A role that was never enabled is rejected with
//!    `RuleError::UnhandledRole`.
//!
//! 3. **Cheap, independent snapshots**: roster and vote maps use `im`
//!    persistent structures, so `Game::status` is O(1) and never changes
//!    after the live match moves on.
//!
//! ## Modules
//!
//! - `core`: players, roles, roster, phases, errors, RNG, configuration
//! - `rules`: `RuleEngine` trait, baseline rules, special-role handlers, `Ruleset`
//! - `game`: `Game` orchestrator and `GameStatus` snapshots
//!
//! ## Example
//!
//! ```
//! use werewolf_rules::{Game, GamePhase, Player, PlayerId, Role, Roster, Ruleset};
//!
//! let roster = Roster::new([
//!     Player::new("alice", Role::Villager),
//!     Player::new("bob", Role::Werewolf),
//!     Player::new("charlie", Role::Escort),
//! ])
//! .unwrap();
//! let mut game = Game::new(roster, Ruleset::builder().with_escort().build());
//!
//! game.advance_phase(); // DayAccusing
//! game.advance_phase(); // no accusations: straight to Night
//! assert_eq!(game.phase(), GamePhase::Night);
//!
//! let bob = PlayerId::new("bob");
//! let alice = PlayerId::new("alice");
//! game.perform_night_action(&bob, &alice).unwrap();
//! game.perform_night_action(&PlayerId::new("charlie"), &alice).unwrap();
//!
//! assert_eq!(game.advance_phase(), GamePhase::DayDiscussion);
//! assert!(game.player(&alice).unwrap().is_alive());
//! ```

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GamePhase, GameRng, MatchConfig, Player, PlayerId, Role, Roster, RuleError,
    Status,
};

pub use crate::rules::{
    plurality, BaseRules, RoleHandler, RoleSet, RuleEngine, Ruleset, RulesetBuilder, VoteMap,
};

pub use crate::game::{Game, GameStatus};
