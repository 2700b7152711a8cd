//! Snapshot independence and reconstruction.

mod common;

use common::{advance_to, game, id};
use werewolf_rules::{Game, GamePhase, GameStatus, RuleEngine, Status};

/// Mutating the live game never changes an earlier snapshot.
#[test]
fn test_snapshot_is_independent() {
    let mut game = game();
    advance_to(&mut game, GamePhase::Night);
    game.perform_night_action(&id("bob"), &id("alice")).unwrap();

    let snapshot = game.status();

    game.perform_night_action(&id("charlie"), &id("grace")).unwrap();
    game.kill_player(&id("eve"));
    game.advance_phase();

    assert_eq!(snapshot.phase, GamePhase::Night);
    assert_eq!(snapshot.players.get(&id("alice")).unwrap().status(), Status::Alive);
    assert_eq!(snapshot.players.get(&id("grace")).unwrap().status(), Status::Alive);
    assert_eq!(snapshot.players.get(&id("eve")).unwrap().status(), Status::Alive);
    assert_eq!(snapshot.rules.werewolf_votes().get(&id("bob")), Some(&id("alice")));
    assert_eq!(snapshot.rules.protected_player(), None);

    assert_eq!(game.player(&id("alice")).unwrap().status(), Status::Dead);
}

/// A game rebuilt mid-ballot resolves the trial the same way.
#[test]
fn test_from_status_mid_ballot() {
    let mut game = game();
    advance_to(&mut game, GamePhase::DayAccusing);
    game.accuse_player(&id("alice"), &id("bob")).unwrap();
    game.advance_phase();
    game.ballot_vote(&id("alice"), true).unwrap();
    game.ballot_vote(&id("grace"), true).unwrap();

    let mut rebuilt = Game::from_status(game.status()).unwrap();
    assert_eq!(rebuilt.status(), game.status());

    assert_eq!(rebuilt.advance_phase(), game.advance_phase());
    assert_eq!(rebuilt.status(), game.status());
    assert_eq!(rebuilt.player(&id("bob")).unwrap().status(), Status::Dead);
}

/// A snapshot survives the wire and rebuilds an equivalent game.
#[test]
fn test_bytes_roundtrip_rebuilds_game() {
    let mut game = game();
    advance_to(&mut game, GamePhase::Night);
    game.perform_night_action(&id("bob"), &id("alice")).unwrap();
    game.perform_night_action(&id("charlie"), &id("alice")).unwrap();
    game.perform_night_action(&id("diana"), &id("frank")).unwrap();

    let bytes = game.status().to_bytes().unwrap();
    let mut rebuilt = Game::from_status(GameStatus::from_bytes(&bytes).unwrap()).unwrap();

    assert_eq!(rebuilt.status(), game.status());
    assert_eq!(rebuilt.rules().protected_player(), Some(&id("alice")));

    rebuilt.advance_phase();
    assert_eq!(rebuilt.player(&id("alice")).unwrap().status(), Status::Alive);
}

/// JSON is accepted too, for hosts that broadcast text.
#[test]
fn test_json_roundtrip() {
    let mut game = game();
    advance_to(&mut game, GamePhase::DayAccusing);
    game.accuse_player(&id("alice"), &id("frank")).unwrap();

    let json = serde_json::to_string(&game.status()).unwrap();
    let decoded: GameStatus = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, game.status());
}
