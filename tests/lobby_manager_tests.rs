mod common;

use common::ids;
use wizard_engine::domain::{Color, MatchConfig};
use wizard_engine::engine::{
    ActionKind, ActionOutcome, EngineError, ManagerError, MatchManager, PlayerAction,
    PlayerActionKind,
};
use wizard_engine::infra::DeterministicRng;
use wizard_engine::lobby::{LobbyError, MatchLobby};

#[test]
fn lobby_registration_is_idempotent() {
    let mut lobby = MatchLobby::new();
    lobby.register("alice").unwrap();
    lobby.register("bob").unwrap();
    let players = lobby.register("alice").unwrap().to_vec();

    assert_eq!(players, vec!["alice".to_string(), "bob".to_string()]);
    assert!(lobby.unregister("bob"));
    assert!(!lobby.unregister("bob"));
    assert_eq!(lobby.players().len(), 1);
}

#[test]
fn lobby_start_requires_registered_requester_and_enough_players() {
    let config = MatchConfig::default();
    let mut lobby = MatchLobby::new();
    lobby.register("alice").unwrap();

    assert_eq!(
        lobby
            .start("alice", &config, DeterministicRng::from_seed(1))
            .err(),
        Some(LobbyError::NotEnoughPlayers {
            min: 2,
            registered: 1
        })
    );

    lobby.register("bob").unwrap();
    assert_eq!(
        lobby
            .start("carol", &config, DeterministicRng::from_seed(1))
            .err(),
        Some(LobbyError::NotRegistered("carol".into()))
    );

    let engine = lobby
        .start("bob", &config, DeterministicRng::from_seed(1))
        .unwrap();
    assert!(lobby.is_started());
    assert_eq!(engine.state().player_ids(), vec!["alice".to_string(), "bob".to_string()]);

    assert_eq!(lobby.register("dave").err(), Some(LobbyError::AlreadyStarted));
    assert!(matches!(
        lobby.start("alice", &config, DeterministicRng::from_seed(1)),
        Err(LobbyError::AlreadyStarted)
    ));
}

#[test]
fn lobby_surfaces_engine_config_errors() {
    let config = MatchConfig::default().with_total_rounds(40);
    let mut lobby = MatchLobby::new();
    lobby.register("alice").unwrap();
    lobby.register("bob").unwrap();

    assert!(matches!(
        lobby.start("alice", &config, DeterministicRng::from_seed(1)),
        Err(LobbyError::Engine(EngineError::InvalidConfig(_)))
    ));
    assert!(!lobby.is_started());
}

#[test]
fn manager_routes_actions_by_match_id() {
    let mut manager: MatchManager<DeterministicRng> = MatchManager::new();
    let config = MatchConfig::default().with_total_rounds(2);

    let first = manager
        .create_match(ids(3), &config, DeterministicRng::from_seed(10))
        .unwrap();
    let second = manager
        .create_match(ids(4), &config, DeterministicRng::from_seed(20))
        .unwrap();
    assert_ne!(first, second);
    assert_eq!(manager.match_ids(), vec![first, second]);

    let next = manager.engine(first).unwrap().next_action().unwrap();
    let before_second = manager.engine(second).unwrap().state().clone();

    let kind = match next.action {
        ActionKind::SelectTrump => PlayerActionKind::SelectTrump(Color::Elves),
        _ => PlayerActionKind::SetForecast(0),
    };
    let outcome = manager
        .apply(first, PlayerAction::new(next.player_id.clone(), kind))
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Accepted);

    assert_eq!(manager.engine(second).unwrap().state(), &before_second);
    assert_ne!(manager.engine(first).unwrap().next_action(), Some(next));
}

#[test]
fn manager_reports_unknown_match_and_engine_errors() {
    let mut manager: MatchManager<DeterministicRng> = MatchManager::default();
    let id = manager
        .create_match(ids(2), &MatchConfig::default(), DeterministicRng::from_seed(3))
        .unwrap();

    let action = PlayerAction::new("p1", PlayerActionKind::SetForecast(0));
    assert_eq!(
        manager.apply(id + 100, action),
        Err(ManagerError::MatchNotFound(id + 100))
    );
    assert!(matches!(
        manager.apply(id, PlayerAction::new("ghost", PlayerActionKind::SetForecast(0))),
        Err(ManagerError::Engine(EngineError::PlayerNotFound(_)))
    ));

    assert!(matches!(
        manager.create_match(ids(1), &MatchConfig::default(), DeterministicRng::from_seed(3)),
        Err(ManagerError::Engine(EngineError::NotEnoughPlayers))
    ));

    assert!(manager.remove_match(id).is_some());
    assert!(!manager.has_match(id));
}
