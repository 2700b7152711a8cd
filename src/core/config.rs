//! Match configuration.
//!
//! Hosts describe a match by the ids of the players who joined, how many of
//! them are werewolves, and which special roles are in play. Roles are dealt
//! from this description by `Game::deal`.
//!
//! ```
//! use werewolf_rules::core::{MatchConfig, Role};
//!
//! let config = MatchConfig::new(["alice", "bob", "charlie", "diana", "eve"])
//!     .with_werewolves(1)
//!     .with_role(Role::Escort);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.role_pool().len(), 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{PlayerId, Role};

/// Description of a match before roles are dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player ids in seating order.
    pub players: Vec<PlayerId>,

    /// Number of werewolves to deal.
    pub werewolves: usize,

    /// Special roles in play, one player each.
    #[serde(default)]
    pub special_roles: Vec<Role>,
}

impl MatchConfig {
    /// Configuration with one werewolf and no special roles.
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            werewolves: 1,
            special_roles: Vec::new(),
        }
    }

    /// Set the number of werewolves.
    #[must_use]
    pub fn with_werewolves(mut self, count: usize) -> Self {
        self.werewolves = count;
        self
    }

    /// Add a special role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.special_roles.push(role);
        self
    }

    /// Check the configuration can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        for (i, id) in self.players.iter().enumerate() {
            if self.players[..i].contains(id) {
                return Err(ConfigError::DuplicatePlayer(id.clone()));
            }
        }

        if self.werewolves == 0 {
            return Err(ConfigError::NoWerewolves);
        }

        for (i, &role) in self.special_roles.iter().enumerate() {
            if !role.is_special() {
                return Err(ConfigError::NotSpecial(role));
            }
            if self.special_roles[..i].contains(&role) {
                return Err(ConfigError::DuplicateRole(role));
            }
        }

        // Villager team needs at least one member.
        if self.werewolves >= self.players.len()
            || self.werewolves + self.special_roles.len() > self.players.len()
        {
            return Err(ConfigError::TooManyRoles {
                werewolves: self.werewolves,
                specials: self.special_roles.len(),
                players: self.players.len(),
            });
        }

        Ok(())
    }

    /// One role per player, before shuffling: werewolves, special roles,
    /// then villagers to fill.
    #[must_use]
    pub fn role_pool(&self) -> Vec<Role> {
        let mut pool = vec![Role::Werewolf; self.werewolves];
        pool.extend(self.special_roles.iter().copied());
        let villagers = self.players.len().saturating_sub(pool.len());
        pool.extend(std::iter::repeat(Role::Villager).take(villagers));
        pool
    }
}
