//! Players, roles and liveness.
//!
//! ## Identity
//!
//! A `Player` is identified by its `PlayerId` alone. Role and status never
//! take part in equality or hashing: status changes mid-round while the
//! player is still being looked up in vote maps.
//!
//! ## Roles
//!
//! Two team roles are always present (`Villager`, `Werewolf`). The special
//! roles (`Clairvoyant`, `Escort`, `Medium`) are only playable when the
//! active `Ruleset` enables them.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Stable opaque player identifier.
///
/// The connection layer resolves a peer to one of these before calling into
/// the engine.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Player archetype. Fixed for the lifetime of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Base good-aligned role. No night action.
    Villager,
    /// Base evil-aligned role. Votes on a night victim.
    Werewolf,
    /// Learns whether a living player is evil.
    Clairvoyant,
    /// Shields a living player from the werewolves for one night.
    Escort,
    /// Learns whether a dead player was evil.
    Medium,
}

impl Role {
    /// The two team roles every ruleset handles.
    pub const BASE: [Role; 2] = [Role::Villager, Role::Werewolf];

    /// Roles that need an extension module to act.
    pub const SPECIAL: [Role; 3] = [Role::Clairvoyant, Role::Escort, Role::Medium];

    /// Is this role on the werewolf team?
    #[must_use]
    pub const fn is_evil(self) -> bool {
        matches!(self, Role::Werewolf)
    }

    /// Is this one of the optional special roles?
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Role::Clairvoyant | Role::Escort | Role::Medium)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Villager => "Villager",
            Role::Werewolf => "Werewolf",
            Role::Clairvoyant => "Clairvoyant",
            Role::Escort => "Escort",
            Role::Medium => "Medium",
        };
        f.write_str(name)
    }
}

/// Liveness of a player.
///
/// `Protected` only lasts until the night's actions are reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Alive,
    Protected,
    Dead,
}

/// A match participant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    role: Role,
    status: Status,
}

impl Player {
    /// Create a living player with the given role.
    pub fn new(id: impl Into<PlayerId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            status: Status::Alive,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Overwrite the status. The `Game` is the only intended caller.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Alive or protected.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status != Status::Dead
    }

    #[must_use]
    pub fn is_evil(&self) -> bool {
        self.role.is_evil()
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {:?})", self.id, self.role, self.status)
    }
}
