//! Treating disease cubes.

use super::{check_eradication, gate, spend_action};
use crate::error::EngineError;
use crate::state::{Disease, GameState};

/// Remove cubes of `color` from the current city.
///
/// One cube normally; every cube once the color is cured; every cube
/// regardless of cure status for the Medic. Fails if the city holds no
/// cubes of the color.
pub fn treat_disease(state: &GameState, color: Disease) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let city = state.players[player].city;

    let present = state.cubes_at(city, color);
    if present == 0 {
        return Err(EngineError::rule(format!("no {color} cubes in {city}")));
    }

    let removed = if state.players[player].role.treats_all_cubes() || state.cures[color].is_cured()
    {
        present
    } else {
        1
    };

    let mut next = state.clone();
    if let Some(entry) = next.board.get_mut(&city) {
        entry.cubes[color] -= removed;
    }
    next.cube_supply[color] += removed;
    check_eradication(&mut next, color);
    spend_action(&mut next);
    Ok(next)
}
