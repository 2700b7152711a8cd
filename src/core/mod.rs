//! Core types: players, roster, phases, errors, RNG and match configuration.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod roster;

pub use config::MatchConfig;
pub use error::{ConfigError, RuleError};
pub use phase::GamePhase;
pub use player::{Player, PlayerId, Role, Status};
pub use rng::GameRng;
pub use roster::Roster;
