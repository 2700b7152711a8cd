//! Dealing matches from a `MatchConfig`.

use werewolf_rules::{ConfigError, Game, GamePhase, MatchConfig, Role, RuleEngine};

fn table() -> MatchConfig {
    MatchConfig::new(["alice", "bob", "charlie", "diana", "eve", "frank", "grace"])
        .with_werewolves(2)
        .with_role(Role::Clairvoyant)
        .with_role(Role::Escort)
        .with_role(Role::Medium)
}

#[test]
fn test_deal_assigns_every_role() {
    let game = Game::deal(&table(), 7).unwrap();

    let mut roles: Vec<Role> = game.players().iter().map(|p| p.role()).collect();
    roles.sort();
    assert_eq!(
        roles,
        vec![
            Role::Villager,
            Role::Villager,
            Role::Werewolf,
            Role::Werewolf,
            Role::Clairvoyant,
            Role::Escort,
            Role::Medium,
        ]
    );

    let ids: Vec<&str> = game.players().ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["alice", "bob", "charlie", "diana", "eve", "frank", "grace"]);
    assert_eq!(game.phase(), GamePhase::DayDiscussion);
}

#[test]
fn test_deal_enables_configured_roles_only() {
    let config = MatchConfig::new(["a", "b", "c", "d"]).with_role(Role::Medium);
    let game = Game::deal(&config, 1).unwrap();

    let handled = game.rules().handled_roles();
    assert!(handled.contains(Role::Medium));
    assert!(!handled.contains(Role::Escort));
    assert!(!handled.contains(Role::Clairvoyant));
}

#[test]
fn test_same_seed_same_deal() {
    let a = Game::deal(&table(), 99).unwrap();
    let b = Game::deal(&table(), 99).unwrap();

    assert_eq!(a.status(), b.status());
}

#[test]
fn test_seeds_vary_the_deal() {
    let deals: Vec<Vec<Role>> = (0..8)
        .map(|seed| {
            Game::deal(&table(), seed)
                .unwrap()
                .players()
                .iter()
                .map(|p| p.role())
                .collect()
        })
        .collect();

    assert!(deals.iter().any(|d| d != &deals[0]));
}

#[test]
fn test_invalid_config_rejected() {
    let config = MatchConfig::new(["a", "b"]).with_werewolves(2);
    assert!(matches!(
        Game::deal(&config, 0),
        Err(ConfigError::TooManyRoles { .. })
    ));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "players": ["alice", "bob", "charlie", "diana"],
        "werewolves": 1,
        "special_roles": ["Escort"]
    }"#;
    let config: MatchConfig = serde_json::from_str(json).unwrap();
    let game = Game::deal(&config, 3).unwrap();

    assert_eq!(game.players().len(), 4);
    assert_eq!(game.rules().enabled_roles().len(), 1);
}
