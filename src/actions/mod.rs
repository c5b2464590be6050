//! Action resolution engine.
//!
//! One pure transform per player action. Every transform takes the
//! current snapshot plus parameters and returns a complete new snapshot
//! or a typed failure; nothing here mutates caller-visible state.
//!
//! All actions share one precondition gate, checked in a fixed order
//! (first failure wins): the game is ongoing, the phase is Actions, and
//! actions remain. Passing the gate, every successful action costs
//! exactly one action. Event cards bypass this gate entirely (see
//! `events`).

pub mod cure;
pub mod movement;
pub mod share;
pub mod special;
pub mod station;
pub mod treat;

pub use cure::discover_cure;
pub use movement::{charter_flight, direct_flight, drive_ferry, shuttle_flight};
pub use share::{share_give, share_take};
pub use special::{
    dispatcher_move_other, dispatcher_summon, operations_move, retrieve_event, MoveKind,
};
pub use station::build_station;
pub use treat::treat_disease;

use crate::error::EngineError;
use crate::map::CityId;
use crate::state::{CureStatus, Disease, GameState, GameStatus, Phase};

/// The shared precondition gate. Checks, in order: the game is ongoing,
/// the phase is Actions, and at least one action remains.
pub(crate) fn gate(state: &GameState) -> Result<(), EngineError> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }
    if state.phase != Phase::Actions {
        return Err(EngineError::PhaseViolation {
            expected: Phase::Actions,
            actual: state.phase,
        });
    }
    if state.actions_remaining == 0 {
        return Err(EngineError::rule("no actions remaining this turn"));
    }
    Ok(())
}

/// Spend the one action a successful transform costs.
pub(crate) fn spend_action(state: &mut GameState) {
    state.actions_remaining -= 1;
}

/// Move a pawn and run the Medic passive at the destination.
///
/// Every relocation in the engine funnels through here — ordinary moves,
/// Dispatcher moves, the Operations Expert jump, and Airlift — so the
/// passive can never be skipped or declined.
pub(crate) fn relocate(state: &mut GameState, player: usize, dest: CityId) {
    state.players[player].city = dest;
    medic_passive(state, player);
}

/// If the pawn is the Medic, clear every cured color's cubes from the
/// pawn's current city and return them to the reserve.
pub(crate) fn medic_passive(state: &mut GameState, player: usize) {
    if !state.players[player].role.clears_cured_on_move() {
        return;
    }
    let city = state.players[player].city;
    for color in Disease::ALL {
        if state.cures[color].is_cured() && state.cubes_at(city, color) > 0 {
            log::debug!("medic passive clears {color} from {city}");
            remove_all_cubes(state, city, color);
        }
    }
}

/// Return every cube of `color` at `city` to the reserve, promoting the
/// cure to eradicated if that emptied the board of the color.
pub(crate) fn remove_all_cubes(state: &mut GameState, city: CityId, color: Disease) {
    let count = state.cubes_at(city, color);
    if count == 0 {
        return;
    }
    if let Some(entry) = state.board.get_mut(&city) {
        entry.cubes[color] = 0;
    }
    state.cube_supply[color] += count;
    check_eradication(state, color);
}

/// Promote a cured color to eradicated once its last cube leaves the
/// board. Eradication is permanent; no cube of the color is placed again.
pub(crate) fn check_eradication(state: &mut GameState, color: Disease) {
    if state.cures[color] == CureStatus::Cured && state.cubes_on_board(color) == 0 {
        state.cures[color] = CureStatus::Eradicated;
        log::debug!("{color} eradicated");
    }
}

/// Set `status = Won` once all four colors are cured or eradicated.
pub(crate) fn check_win(state: &mut GameState) {
    if Disease::ALL.iter().all(|&c| state.cures[c].is_cured()) {
        state.status = GameStatus::Won;
    }
}
