//! The four ordinary movement actions.
//!
//! Each validates its own legality condition, relocates the current
//! player, and costs one action. Relocation runs the Medic passive.

use super::{gate, relocate, spend_action};
use crate::error::EngineError;
use crate::map::{self, CityId};
use crate::state::GameState;

/// Move to a city connected to the current one.
pub fn drive_ferry(state: &GameState, dest: CityId) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let from = state.players[player].city;
    if !map::neighbors(from).contains(&dest) {
        return Err(EngineError::rule(format!(
            "{dest} is not connected to {from}"
        )));
    }

    let mut next = state.clone();
    relocate(&mut next, player, dest);
    spend_action(&mut next);
    Ok(next)
}

/// Discard the destination's city card to fly there.
pub fn direct_flight(state: &GameState, dest: CityId) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    if state.players[player].city == dest {
        return Err(EngineError::rule(format!("already in {dest}")));
    }
    let Some(card_idx) = state.players[player].find_city_card(dest) else {
        return Err(EngineError::rule(format!(
            "a direct flight to {dest} requires its city card"
        )));
    };

    let mut next = state.clone();
    let card = next.players[player].hand.remove(card_idx);
    next.player_discard.push_front(card);
    relocate(&mut next, player, dest);
    spend_action(&mut next);
    Ok(next)
}

/// Discard the current city's card to fly anywhere.
pub fn charter_flight(state: &GameState, dest: CityId) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let from = state.players[player].city;
    if from == dest {
        return Err(EngineError::rule(format!("already in {dest}")));
    }
    let Some(card_idx) = state.players[player].find_city_card(from) else {
        return Err(EngineError::rule(format!(
            "a charter flight out of {from} requires the {from} card"
        )));
    };

    let mut next = state.clone();
    let card = next.players[player].hand.remove(card_idx);
    next.player_discard.push_front(card);
    relocate(&mut next, player, dest);
    spend_action(&mut next);
    Ok(next)
}

/// Move between two research stations.
pub fn shuttle_flight(state: &GameState, dest: CityId) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let from = state.players[player].city;
    if from == dest {
        return Err(EngineError::rule(format!("already in {dest}")));
    }
    if !state.has_station(from) {
        return Err(EngineError::rule(format!(
            "a shuttle flight requires a research station in {from}"
        )));
    }
    if !state.has_station(dest) {
        return Err(EngineError::rule(format!(
            "a shuttle flight requires a research station in {dest}"
        )));
    }

    let mut next = state.clone();
    relocate(&mut next, player, dest);
    spend_action(&mut next);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{new_game, GameConfig};
    use crate::state::{PlayerCard, Role};

    fn fresh() -> GameState {
        new_game(
            &GameConfig::new(2, 4)
                .with_seed(42)
                .with_roles(vec![Role::Scientist, Role::Researcher]),
        )
        .unwrap()
    }

    #[test]
    fn test_drive_ferry_adjacent() {
        let state = fresh();
        let next = drive_ferry(&state, map::CHICAGO).unwrap();

        assert_eq!(next.players[0].city, map::CHICAGO);
        assert_eq!(next.actions_remaining, 3);
        // No card cost.
        assert_eq!(next.players[0].hand.len(), state.players[0].hand.len());
    }

    #[test]
    fn test_drive_ferry_rejects_distant_city() {
        let state = fresh();
        let err = drive_ferry(&state, map::TOKYO).unwrap_err();
        assert_eq!(
            err,
            EngineError::rule("Tokyo is not connected to Atlanta")
        );
    }

    #[test]
    fn test_direct_flight_discards_card() {
        let mut state = fresh();
        state.players[0].hand = vec![PlayerCard::City(map::TOKYO)];

        let next = direct_flight(&state, map::TOKYO).unwrap();

        assert_eq!(next.players[0].city, map::TOKYO);
        assert_eq!(next.actions_remaining, 3);
        assert!(!next.players[0].holds_city_card(map::TOKYO));
        assert!(next.player_discard.contains(&PlayerCard::City(map::TOKYO)));
    }

    #[test]
    fn test_direct_flight_requires_card() {
        let mut state = fresh();
        state.players[0].hand.retain(|c| !c.is_city(map::TOKYO));

        let err = direct_flight(&state, map::TOKYO).unwrap_err();
        assert!(matches!(err, EngineError::Rule(_)));
    }

    #[test]
    fn test_charter_flight_uses_current_city_card() {
        let mut state = fresh();
        state.players[0].hand = vec![PlayerCard::City(map::ATLANTA)];

        let next = charter_flight(&state, map::SYDNEY).unwrap();

        assert_eq!(next.players[0].city, map::SYDNEY);
        assert!(!next.players[0].holds_city_card(map::ATLANTA));
        assert!(next
            .player_discard
            .contains(&PlayerCard::City(map::ATLANTA)));
    }

    #[test]
    fn test_charter_flight_requires_current_city_card() {
        let mut state = fresh();
        state.players[0].hand.retain(|c| !c.is_city(map::ATLANTA));

        assert!(charter_flight(&state, map::SYDNEY).is_err());
    }

    #[test]
    fn test_shuttle_flight_needs_both_stations() {
        let mut state = fresh();
        // Atlanta has the starting station; Paris has none yet.
        assert!(shuttle_flight(&state, map::PARIS).is_err());

        state.board.get_mut(&map::PARIS).unwrap().has_station = true;
        let next = shuttle_flight(&state, map::PARIS).unwrap();
        assert_eq!(next.players[0].city, map::PARIS);
    }

    #[test]
    fn test_gate_blocks_movement() {
        let mut state = fresh();
        state.actions_remaining = 0;
        assert!(drive_ferry(&state, map::CHICAGO).is_err());
    }
}
