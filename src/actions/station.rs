//! Research station construction.

use super::{gate, spend_action};
use crate::error::EngineError;
use crate::map::CityId;
use crate::state::{GameState, MAX_STATIONS};

/// Build a research station in the current city.
///
/// Costs the current city's card unless the role is exempt. At the
/// six-station cap an explicit `demolish` target is required; naming one
/// below the cap is rejected just like omitting one at the cap.
pub fn build_station(
    state: &GameState,
    demolish: Option<CityId>,
) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let city = state.players[player].city;

    let mut next = state.clone();
    if !state.players[player].role.builds_without_card() {
        let Some(card_idx) = state.players[player].find_city_card(city) else {
            return Err(EngineError::rule(format!(
                "building in {city} requires the {city} city card"
            )));
        };
        let card = next.players[player].hand.remove(card_idx);
        next.player_discard.push_front(card);
    }

    place_station(&mut next, city, demolish)?;
    spend_action(&mut next);
    Ok(next)
}

/// Place a station at `city`, enforcing the six-station cap.
///
/// Shared by the build action and the Government Grant event.
pub(crate) fn place_station(
    state: &mut GameState,
    city: CityId,
    demolish: Option<CityId>,
) -> Result<(), EngineError> {
    if state.has_station(city) {
        return Err(EngineError::rule(format!(
            "{city} already has a research station"
        )));
    }

    match (state.stations_maxed(), demolish) {
        (true, None) => Err(EngineError::rule(format!(
            "{MAX_STATIONS} research stations are already on the board; name one to demolish"
        ))),
        (false, Some(target)) => Err(EngineError::rule(format!(
            "cannot demolish {target}: fewer than {MAX_STATIONS} stations exist"
        ))),
        (true, Some(target)) => {
            if !state.has_station(target) {
                return Err(EngineError::rule(format!(
                    "{target} has no research station to demolish"
                )));
            }
            if let Some(entry) = state.board.get_mut(&target) {
                entry.has_station = false;
            }
            if let Some(entry) = state.board.get_mut(&city) {
                entry.has_station = true;
            }
            Ok(())
        }
        (false, None) => {
            if let Some(entry) = state.board.get_mut(&city) {
                entry.has_station = true;
            }
            Ok(())
        }
    }
}
