//! Sharing knowledge: passing city cards between co-located players.

use super::{gate, spend_action};
use crate::error::EngineError;
use crate::map::CityId;
use crate::state::{GameState, HAND_LIMIT};

/// Give the card naming `city` to another player in the same city.
pub fn share_give(
    state: &GameState,
    receiver: usize,
    city: CityId,
) -> Result<GameState, EngineError> {
    transfer(state, state.current_player, receiver, city)
}

/// Take the card naming `city` from another player in the same city.
pub fn share_take(state: &GameState, giver: usize, city: CityId) -> Result<GameState, EngineError> {
    transfer(state, giver, state.current_player, city)
}

fn transfer(
    state: &GameState,
    giver: usize,
    receiver: usize,
    city: CityId,
) -> Result<GameState, EngineError> {
    gate(state)?;
    if giver == receiver {
        return Err(EngineError::rule("cannot share a card with yourself"));
    }
    for idx in [giver, receiver] {
        if idx >= state.player_count() {
            return Err(EngineError::rule(format!("no player {idx}")));
        }
    }

    let location = state.players[giver].city;
    if location != state.players[receiver].city {
        return Err(EngineError::rule(
            "both players must be in the same city to share knowledge",
        ));
    }
    if city != location && !state.players[giver].role.shares_any_card() {
        return Err(EngineError::rule(format!(
            "only the {location} card can be shared here"
        )));
    }
    let Some(card_idx) = state.players[giver].find_city_card(city) else {
        return Err(EngineError::rule(format!(
            "player {giver} does not hold the {city} card"
        )));
    };
    if state.players[receiver].hand.len() >= HAND_LIMIT {
        return Err(EngineError::rule(format!(
            "player {receiver}'s hand is full"
        )));
    }

    let mut next = state.clone();
    let card = next.players[giver].hand.remove(card_idx);
    next.players[receiver].hand.push(card);
    spend_action(&mut next);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map;
    use crate::setup::{new_game, GameConfig};
    use crate::state::{PlayerCard, Role};

    fn fresh(giver_role: Role) -> GameState {
        let mut state = new_game(
            &GameConfig::new(2, 4)
                .with_seed(42)
                .with_roles(vec![giver_role, Role::Scientist]),
        )
        .unwrap();
        state.players[0].hand = vec![PlayerCard::City(map::ATLANTA)];
        state.players[1].hand = vec![PlayerCard::City(map::PARIS)];
        state
    }

    #[test]
    fn test_give_current_city_card() {
        let state = fresh(Role::Medic);
        let next = share_give(&state, 1, map::ATLANTA).unwrap();

        assert!(!next.players[0].holds_city_card(map::ATLANTA));
        assert!(next.players[1].holds_city_card(map::ATLANTA));
        assert_eq!(next.actions_remaining, 3);
    }

    #[test]
    fn test_take_from_other_player() {
        let mut state = fresh(Role::Medic);
        state.players[1].hand = vec![PlayerCard::City(map::ATLANTA)];

        let next = share_take(&state, 1, map::ATLANTA).unwrap();

        assert!(next.players[0].holds_city_card(map::ATLANTA));
        assert!(!next.players[1].holds_city_card(map::ATLANTA));
    }

    #[test]
    fn test_card_must_match_location() {
        let mut state = fresh(Role::Medic);
        state.players[0].hand = vec![PlayerCard::City(map::PARIS)];

        let err = share_give(&state, 1, map::PARIS).unwrap_err();
        assert_eq!(
            err,
            EngineError::rule("only the Atlanta card can be shared here")
        );
    }

    #[test]
    fn test_researcher_gives_any_card() {
        let mut state = fresh(Role::Researcher);
        state.players[0].hand = vec![PlayerCard::City(map::PARIS)];

        let next = share_give(&state, 1, map::PARIS).unwrap();
        assert!(next.players[1].holds_city_card(map::PARIS));
    }

    #[test]
    fn test_researcher_rule_applies_to_giver_not_taker() {
        // Taking from a non-Researcher still demands the location card.
        let mut state = fresh(Role::Researcher);
        state.players[1].hand = vec![PlayerCard::City(map::PARIS)];

        assert!(share_take(&state, 1, map::PARIS).is_err());
    }

    #[test]
    fn test_players_must_share_city() {
        let mut state = fresh(Role::Medic);
        state.players[1].city = map::CHICAGO;

        assert!(share_give(&state, 1, map::ATLANTA).is_err());
    }

    #[test]
    fn test_receiver_hand_limit() {
        let mut state = fresh(Role::Medic);
        state.players[1].hand = vec![PlayerCard::City(map::PARIS); HAND_LIMIT];

        let err = share_give(&state, 1, map::ATLANTA).unwrap_err();
        assert_eq!(err, EngineError::rule("player 1's hand is full"));
    }

    #[test]
    fn test_giver_must_hold_card() {
        let mut state = fresh(Role::Medic);
        state.players[0].hand.clear();

        assert!(share_give(&state, 1, map::ATLANTA).is_err());
    }

    #[test]
    fn test_bad_player_index() {
        let state = fresh(Role::Medic);
        assert!(share_give(&state, 5, map::ATLANTA).is_err());
        assert!(share_give(&state, 0, map::ATLANTA).is_err());
    }
}
