//! Match phases.
//!
//! Four phases cycle during play:
//!
//! ```text
//! DayDiscussion -> DayAccusing -> DayBallot -> Night -> DayDiscussion
//!                        \______________________/^
//!                         (tie or no accusation)
//! ```
//!
//! The two victory phases are absorbing.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    DayDiscussion,
    DayAccusing,
    DayBallot,
    Night,
    VillagersVictory,
    WerewolvesVictory,
}

impl GamePhase {
    /// All six phases.
    pub const ALL: [GamePhase; 6] = [
        GamePhase::DayDiscussion,
        GamePhase::DayAccusing,
        GamePhase::DayBallot,
        GamePhase::Night,
        GamePhase::VillagersVictory,
        GamePhase::WerewolvesVictory,
    ];

    /// Is this a victory phase?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::VillagersVictory | GamePhase::WerewolvesVictory)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::DayDiscussion => "DayDiscussion",
            GamePhase::DayAccusing => "DayAccusing",
            GamePhase::DayBallot => "DayBallot",
            GamePhase::Night => "Night",
            GamePhase::VillagersVictory => "VillagersVictory",
            GamePhase::WerewolvesVictory => "WerewolvesVictory",
        };
        f.write_str(name)
    }
}
