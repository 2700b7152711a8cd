//! Shared fixtures for integration tests.

#![allow(dead_code)]

use werewolf_rules::{Game, GamePhase, Player, PlayerId, Role, Roster, Ruleset};

/// Seven-player table: two werewolves, one of each special role, two villagers.
pub fn roster() -> Roster {
    Roster::new([
        Player::new("alice", Role::Villager),
        Player::new("bob", Role::Werewolf),
        Player::new("charlie", Role::Escort),
        Player::new("diana", Role::Clairvoyant),
        Player::new("eve", Role::Medium),
        Player::new("frank", Role::Werewolf),
        Player::new("grace", Role::Villager),
    ])
    .unwrap()
}

/// Seven-player match with every special role enabled.
pub fn game() -> Game {
    Game::new(roster(), Ruleset::standard())
}

pub fn id(name: &str) -> PlayerId {
    PlayerId::new(name)
}

/// Advance until `phase` is reached, at most one full cycle.
pub fn advance_to(game: &mut Game, phase: GamePhase) {
    for _ in 0..4 {
        if game.phase() == phase {
            return;
        }
        game.advance_phase();
    }
    assert_eq!(game.phase(), phase, "could not reach {phase}");
}
