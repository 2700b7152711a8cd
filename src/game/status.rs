//! Point-in-time match snapshots.
//!
//! A `GameStatus` is everything needed to rebuild an equivalent `Game`:
//! roster with live roles and statuses, the full rule configuration with its
//! round state, the phase, and the pending accusation. Taking one is O(1)
//! thanks to the `im` structures underneath, and it never changes after the
//! live game moves on.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GamePhase, PlayerId, Roster};
use crate::rules::Ruleset;

/// Self-sufficient snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub players: Roster,
    pub rules: Ruleset,
    pub phase: GamePhase,
    /// Player on trial. Only set during `DayBallot`.
    #[serde(default)]
    pub accused: Option<PlayerId>,
}

impl GameStatus {
    /// Encode for transmission to another process.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Role};

    fn status() -> GameStatus {
        GameStatus {
            players: Roster::new([
                Player::new("alice", Role::Villager),
                Player::new("bob", Role::Werewolf),
            ])
            .unwrap(),
            rules: Ruleset::standard(),
            phase: GamePhase::DayBallot,
            accused: Some(PlayerId::new("bob")),
        }
    }

    #[test]
    fn test_bincode_roundtrip() {
        let status = status();
        let bytes = status.to_bytes().unwrap();

        assert_eq!(GameStatus::from_bytes(&bytes).unwrap(), status);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            GameStatus::from_bytes(&[0xff, 0x01]),
            Err(ConfigError::Encoding(_))
        ));
    }
}
