//! Ordered, id-unique player collection.
//!
//! Backed by `im::Vector` so a `Game` can hand out snapshots in O(1): the
//! snapshot shares structure with the live roster and later mutation copies
//! only the touched chunk.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, RuleError};
use super::player::{Player, PlayerId};

/// The players of one match, in seating order.
///
/// Equality compares id, role and status of every seat, unlike `Player`
/// equality which only compares ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(players: impl IntoIterator<Item = Player>) -> Result<Self, ConfigError> {
        let mut out = Vector::new();
        for player in players {
            if out.iter().any(|p: &Player| p.id() == player.id()) {
                return Err(ConfigError::DuplicatePlayer(player.id().clone()));
            }
            out.push_back(player);
        }
        Ok(Self { players: out })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Look up a player by id for mutation.
    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// Look up a player, failing with `UnknownPlayer`.
    pub fn require(&self, id: &PlayerId) -> Result<&Player, RuleError> {
        self.get(id).ok_or_else(|| RuleError::UnknownPlayer(id.clone()))
    }

    /// Mutable `require`.
    pub fn require_mut(&mut self, id: &PlayerId) -> Result<&mut Player, RuleError> {
        self.get_mut(id).ok_or_else(|| RuleError::UnknownPlayer(id.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Players that are alive or protected.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    pub fn ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().map(Player::id)
    }
}

impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.players.len() == other.players.len()
            && self.players.iter().zip(other.players.iter()).all(|(a, b)| {
                a.id() == b.id() && a.role() == b.role() && a.status() == b.status()
            })
    }
}

impl Eq for Roster {}

impl TryFrom<Vec<Player>> for Roster {
    type Error = ConfigError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Self::new(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players.into_iter().collect()
    }
}
