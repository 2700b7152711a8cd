//! The match orchestrator and its snapshots.

#[allow(clippy::module_inception)]
mod game;
mod status;

pub use game::Game;
pub use status::GameStatus;
