//! Discovering cures.

use super::{check_eradication, check_win, gate, medic_passive, spend_action};
use crate::error::EngineError;
use crate::state::{CureStatus, Disease, GameState};

/// Discover the cure for `color` at a research station.
///
/// Discards the first N matching city cards from the hand (N = 5, or 4
/// for the Scientist), keeping the rest in order. The resolution order is
/// load-bearing: cure first, then the Medic passive re-runs for every
/// Medic pawn (a fresh cure can retroactively clear their city), then the
/// eradication check against the post-passive board, then the win check.
pub fn discover_cure(state: &GameState, color: Disease) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let pawn = &state.players[player];

    if !state.has_station(pawn.city) {
        return Err(EngineError::rule(format!(
            "discovering a cure requires a research station in {}",
            pawn.city
        )));
    }
    if state.cures[color].is_cured() {
        return Err(EngineError::rule(format!("{color} is already cured")));
    }

    let required = pawn.role.cure_cards_required();
    let held = pawn
        .hand
        .iter()
        .filter(|c| c.color() == Some(color))
        .count();
    if held < required {
        return Err(EngineError::rule(format!(
            "curing {color} requires {required} {color} city cards (have {held})"
        )));
    }

    let mut next = state.clone();

    // Discard exactly the first `required` matching cards, order-stable.
    let mut discarded = 0;
    let mut kept = Vec::with_capacity(next.players[player].hand.len());
    for card in next.players[player].hand.drain(..) {
        if discarded < required && card.color() == Some(color) {
            discarded += 1;
            next.player_discard.push_front(card);
        } else {
            kept.push(card);
        }
    }
    next.players[player].hand = kept;

    next.cures[color] = CureStatus::Cured;
    log::debug!("{color} cured");

    for idx in 0..next.players.len() {
        medic_passive(&mut next, idx);
    }
    check_eradication(&mut next, color);
    check_win(&mut next);
    spend_action(&mut next);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{self, CityId};
    use crate::setup::{new_game, GameConfig};
    use crate::state::{GameStatus, PlayerCard, Role};

    const BLUE_CARDS: [CityId; 5] = [
        map::PARIS,
        map::LONDON,
        map::MADRID,
        map::MILAN,
        map::ESSEN,
    ];

    fn fresh(role: Role) -> GameState {
        let mut state = new_game(
            &GameConfig::new(2, 4)
                .with_seed(42)
                .with_roles(vec![role, Role::Researcher]),
        )
        .unwrap();
        state.players[0].hand = BLUE_CARDS.map(PlayerCard::City).to_vec();
        state
    }

    #[test]
    fn test_cure_with_exact_cards() {
        let state = fresh(Role::Medic);
        let next = discover_cure(&state, Disease::Blue).unwrap();

        assert_eq!(next.cures[Disease::Blue], CureStatus::Cured);
        assert!(next.players[0].hand.is_empty());
        assert_eq!(next.player_discard.len(), 5);
        assert_eq!(next.actions_remaining, 3);
    }

    #[test]
    fn test_one_card_short_quotes_counts() {
        let mut state = fresh(Role::Medic);
        state.players[0].hand.pop();

        let err = discover_cure(&state, Disease::Blue).unwrap_err();
        assert_eq!(
            err,
            EngineError::rule("curing blue requires 5 blue city cards (have 4)")
        );
    }

    #[test]
    fn test_scientist_needs_four() {
        let mut state = fresh(Role::Scientist);
        state.players[0].hand.pop();

        let next = discover_cure(&state, Disease::Blue).unwrap();
        assert_eq!(next.cures[Disease::Blue], CureStatus::Cured);
        assert!(next.players[0].hand.is_empty());
    }

    #[test]
    fn test_requires_station() {
        let mut state = fresh(Role::Medic);
        state.players[0].city = map::PARIS;

        let err = discover_cure(&state, Disease::Blue).unwrap_err();
        assert!(matches!(err, EngineError::Rule(_)));
    }

    #[test]
    fn test_cannot_cure_twice() {
        let mut state = fresh(Role::Medic);
        state.cures[Disease::Blue] = CureStatus::Cured;

        assert!(discover_cure(&state, Disease::Blue).is_err());
    }

    #[test]
    fn test_discard_is_order_stable() {
        let mut state = fresh(Role::Scientist);
        // Interleave: blue, yellow, blue, blue, yellow, blue, blue.
        state.players[0].hand = vec![
            PlayerCard::City(map::PARIS),
            PlayerCard::City(map::LAGOS),
            PlayerCard::City(map::LONDON),
            PlayerCard::City(map::MADRID),
            PlayerCard::City(map::LIMA),
            PlayerCard::City(map::MILAN),
            PlayerCard::City(map::ESSEN),
        ];

        let next = discover_cure(&state, Disease::Blue).unwrap();

        // The first four blue cards went, Essen stayed, order preserved.
        assert_eq!(
            next.players[0].hand,
            vec![
                PlayerCard::City(map::LAGOS),
                PlayerCard::City(map::LIMA),
                PlayerCard::City(map::ESSEN),
            ]
        );
    }

    #[test]
    fn test_cure_with_no_cubes_eradicates() {
        let state = fresh(Role::Medic);
        // No blue cubes anywhere.
        let next = discover_cure(&state, Disease::Blue).unwrap();
        assert_eq!(next.cures[Disease::Blue], CureStatus::Eradicated);
    }

    #[test]
    fn test_cure_medic_retrigger_then_eradication() {
        let mut state = fresh(Role::Scientist);
        // The Medic is player 1, standing on the only blue cubes.
        state.players[1] = crate::state::Player::new(Role::Medic, map::CHICAGO);
        state.board.get_mut(&map::CHICAGO).unwrap().cubes[Disease::Blue] = 2;
        state.cube_supply[Disease::Blue] -= 2;

        let next = discover_cure(&state, Disease::Blue).unwrap();

        // Curing re-ran the passive, which emptied the board, which
        // promoted the fresh cure straight to eradicated.
        assert_eq!(next.cubes_at(map::CHICAGO, Disease::Blue), 0);
        assert_eq!(next.cures[Disease::Blue], CureStatus::Eradicated);
        assert_eq!(next.cube_supply[Disease::Blue], 24);
    }

    #[test]
    fn test_cure_with_remaining_cubes_stays_cured() {
        let mut state = fresh(Role::Medic);
        state.board.get_mut(&map::TOKYO).unwrap().cubes[Disease::Blue] = 1;
        state.cube_supply[Disease::Blue] -= 1;

        let next = discover_cure(&state, Disease::Blue).unwrap();
        assert_eq!(next.cures[Disease::Blue], CureStatus::Cured);
    }

    #[test]
    fn test_fourth_cure_wins() {
        let mut state = fresh(Role::Medic);
        state.cures[Disease::Yellow] = CureStatus::Cured;
        state.cures[Disease::Black] = CureStatus::Eradicated;
        state.cures[Disease::Red] = CureStatus::Cured;

        let next = discover_cure(&state, Disease::Blue).unwrap();
        assert_eq!(next.status, GameStatus::Won);
    }
}
