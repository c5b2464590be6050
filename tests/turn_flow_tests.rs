//! End-to-end turn flow scenarios driven through the orchestrator.

use contagion::{
    CureStatus, Disease, DrawEvent, EngineError, EventCard, EventPlay, Game, GameConfig,
    GameStatus, InfectionCard, InfectionEvent, Phase, PlayerCard, Role, ACTIONS_PER_TURN,
    HAND_LIMIT,
};
use contagion::map;

fn two_player_game() -> Game {
    Game::new(
        &GameConfig::new(2, 4)
            .with_seed(42)
            .with_roles(vec![Role::Scientist, Role::Researcher]),
    )
    .unwrap()
}

#[test]
fn test_fresh_game_snapshot() {
    let game = two_player_game();
    let state = game.state();

    assert_eq!(game.phase(), Phase::Actions);
    assert_eq!(game.actions_remaining(), ACTIONS_PER_TURN);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.status(), GameStatus::Ongoing);

    for player in &state.players {
        assert_eq!(player.city, map::ATLANTA);
    }
    for color in Disease::ALL {
        assert_eq!(state.cures[color], CureStatus::Uncured);
        assert_eq!(state.cube_supply[color], 24);
    }
}

#[test]
fn test_direct_flight_end_to_end() {
    let mut state = two_player_game().state().clone();
    state.players[0].hand = vec![PlayerCard::City(map::CHICAGO)];
    let mut game = Game::from_state(state);

    game.perform_action("direct-flight:Chicago").unwrap();

    let state = game.state();
    assert_eq!(state.players[0].city, map::CHICAGO);
    assert_eq!(game.actions_remaining(), 3);
    assert!(!state.players[0].holds_city_card(map::CHICAGO));
    assert!(state
        .player_discard
        .contains(&PlayerCard::City(map::CHICAGO)));
}

#[test]
fn test_reserve_exhaustion_loses() {
    let mut state = two_player_game().state().clone();
    state.phase = Phase::Infect;
    state.cube_supply[Disease::Blue] = 0;
    // Force the top infection card to name a blue city.
    state.infection_deck.push_front(InfectionCard(map::PARIS));

    let mut game = Game::from_state(state);
    let report = game.infect_cities().unwrap();

    assert_eq!(game.status(), GameStatus::Lost);
    assert!(report
        .events
        .contains(&InfectionEvent::SupplyExhausted { color: Disease::Blue }));
}

#[test]
fn test_eighth_outbreak_loses() {
    let mut state = two_player_game().state().clone();
    state.phase = Phase::Infect;
    state.outbreak_count = 7;
    state.infection_deck.push_front(InfectionCard(map::PARIS));
    state.board.get_mut(&map::PARIS).unwrap().cubes[Disease::Blue] = 3;
    state.cube_supply[Disease::Blue] -= 3;

    let mut game = Game::from_state(state);
    let report = game.infect_cities().unwrap();

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.state().outbreak_count, 8);
    assert!(report.events.contains(&InfectionEvent::OutbreakLimitReached));
}

#[test]
fn test_double_epidemic_draw() {
    let mut state = two_player_game().state().clone();
    state.phase = Phase::Draw;
    state.player_deck.push_front(PlayerCard::Epidemic);
    state.player_deck.push_front(PlayerCard::Epidemic);

    let mut game = Game::from_state(state);
    let report = game.draw_cards().unwrap();

    assert_eq!(report.epidemics(), 2);
    assert_eq!(game.state().infection_rate_position, 2);

    let bottoms = report
        .events
        .iter()
        .filter(|e| matches!(e, DrawEvent::BottomCardInfected { .. }))
        .count();
    let intensifies = report
        .events
        .iter()
        .filter(|e| matches!(e, DrawEvent::Intensified { .. }))
        .count();
    assert_eq!(bottoms, 2);
    assert_eq!(intensifies, 2);
}

#[test]
fn test_cure_counts_quoted_in_error() {
    // Player 0 is the Scientist, so the requirement is 4, not 5.
    let mut state = two_player_game().state().clone();
    state.players[0].hand = vec![
        PlayerCard::City(map::PARIS),
        PlayerCard::City(map::LONDON),
        PlayerCard::City(map::MADRID),
    ];

    let mut game = Game::from_state(state.clone());
    let err = game.perform_action("discover-cure:blue").unwrap_err();
    assert_eq!(
        err,
        EngineError::Rule("curing blue requires 4 blue city cards (have 3)".to_string())
    );

    // With exactly the required count it succeeds.
    state.players[0].hand.push(PlayerCard::City(map::MILAN));
    let mut game = Game::from_state(state);
    game.perform_action("discover-cure:blue").unwrap();
    assert!(game.state().cures[Disease::Blue].is_cured());
}

#[test]
fn test_hand_limit_holds_draw_phase() {
    let mut state = two_player_game().state().clone();
    state.phase = Phase::Draw;
    // Seven in hand, two incoming.
    state.players[0].hand = [
        map::PARIS,
        map::LONDON,
        map::MADRID,
        map::MILAN,
        map::ESSEN,
        map::TOKYO,
        map::OSAKA,
    ]
    .map(PlayerCard::City)
    .to_vec();
    state.player_deck.push_front(PlayerCard::City(map::LAGOS));
    state.player_deck.push_front(PlayerCard::City(map::LIMA));

    let mut game = Game::from_state(state);
    game.draw_cards().unwrap();

    // Holds in Draw until the discard resolves.
    assert_eq!(game.phase(), Phase::Draw);
    assert!(matches!(
        game.infect_cities().unwrap_err(),
        EngineError::PhaseViolation { .. }
    ));

    game.resolve_hand_limit(0, &[0, 1]).unwrap();
    assert_eq!(game.phase(), Phase::Infect);
    assert_eq!(game.state().players[0].hand.len(), HAND_LIMIT);
}

#[test]
fn test_one_quiet_night_skips_infection() {
    let mut state = two_player_game().state().clone();
    state.players[1]
        .hand
        .push(PlayerCard::Event(EventCard::OneQuietNight));
    state.phase = Phase::Infect;

    let mut game = Game::from_state(state);
    // Played outside the player's own turn, mid-phase, at no action cost.
    game.play_event(1, &EventPlay::OneQuietNight).unwrap();

    let report = game.infect_cities().unwrap();
    assert_eq!(report.events, vec![InfectionEvent::PhaseSkipped]);
    assert_eq!(game.state().infection_discard.len(), 0);
    // The turn still handed off.
    assert_eq!(game.current_player(), 1);
    assert!(!game.state().skip_next_infection);
}

#[test]
fn test_win_by_fourth_cure() {
    let mut state = two_player_game().state().clone();
    state.cures[Disease::Yellow] = CureStatus::Cured;
    state.cures[Disease::Black] = CureStatus::Cured;
    state.cures[Disease::Red] = CureStatus::Eradicated;
    state.players[0].hand = vec![
        PlayerCard::City(map::PARIS),
        PlayerCard::City(map::LONDON),
        PlayerCard::City(map::MADRID),
        PlayerCard::City(map::MILAN),
        PlayerCard::City(map::ESSEN),
    ];

    let mut game = Game::from_state(state);
    game.perform_action("discover-cure:blue").unwrap();

    assert_eq!(game.status(), GameStatus::Won);
    // Terminal: everything else is rejected.
    assert_eq!(
        game.perform_action("drive-ferry:Chicago").unwrap_err(),
        EngineError::GameOver
    );
}

#[test]
fn test_turn_rotation_wraps() {
    let mut game = two_player_game();

    for turn in 0..2 {
        assert_eq!(game.current_player(), turn % 2);
        for _ in 0..2 {
            game.perform_action("drive-ferry:Chicago").unwrap();
            game.perform_action("drive-ferry:Atlanta").unwrap();
        }
        game.draw_cards().unwrap();
        if game.status() != GameStatus::Ongoing {
            return;
        }
        if game.phase() == Phase::Draw {
            let p = game.current_player();
            let len = game.state().players[p].hand.len();
            let indices: Vec<usize> = (HAND_LIMIT..len).collect();
            game.resolve_hand_limit(p, &indices).unwrap();
        }
        game.infect_cities().unwrap();
        if game.status() != GameStatus::Ongoing {
            return;
        }
    }

    // Back to player 0 on turn 3.
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.state().turn_number, 3);
}
