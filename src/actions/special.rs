//! Role-specific actions: Dispatcher, Operations Expert, and
//! Contingency Planner.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{gate, relocate, spend_action};
use crate::error::EngineError;
use crate::map::{self, CityId};
use crate::state::{EventCard, GameState, PlayerCard};

/// The four movement types the Dispatcher can perform on another pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Drive,
    Direct,
    Charter,
    Shuttle,
}

impl MoveKind {
    /// Token vocabulary name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveKind::Drive => "drive",
            MoveKind::Direct => "direct",
            MoveKind::Charter => "charter",
            MoveKind::Shuttle => "shuttle",
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drive" => Ok(MoveKind::Drive),
            "direct" => Ok(MoveKind::Direct),
            "charter" => Ok(MoveKind::Charter),
            "shuttle" => Ok(MoveKind::Shuttle),
            _ => Err(()),
        }
    }
}

fn require_dispatcher(state: &GameState) -> Result<(), EngineError> {
    if !state.current().role.moves_other_pawns() {
        return Err(EngineError::rule(
            "only the dispatcher can move other players' pawns",
        ));
    }
    Ok(())
}

fn require_pawn(state: &GameState, pawn: usize) -> Result<(), EngineError> {
    if pawn >= state.player_count() {
        return Err(EngineError::rule(format!("no player {pawn}")));
    }
    Ok(())
}

/// Dispatcher: move any pawn to the city occupied by another pawn, at no
/// card cost.
pub fn dispatcher_summon(
    state: &GameState,
    pawn: usize,
    to_pawn: usize,
) -> Result<GameState, EngineError> {
    gate(state)?;
    require_dispatcher(state)?;
    require_pawn(state, pawn)?;
    require_pawn(state, to_pawn)?;
    if pawn == to_pawn {
        return Err(EngineError::rule(
            "summoning a pawn to its own city does nothing",
        ));
    }

    let dest = state.players[to_pawn].city;
    let mut next = state.clone();
    relocate(&mut next, pawn, dest);
    spend_action(&mut next);
    Ok(next)
}

/// Dispatcher: execute one of the four movement types on another pawn's
/// behalf. A required city card may come from the Dispatcher's hand or
/// the moved player's hand (the Dispatcher's is checked first).
pub fn dispatcher_move_other(
    state: &GameState,
    pawn: usize,
    kind: MoveKind,
    dest: CityId,
) -> Result<GameState, EngineError> {
    gate(state)?;
    require_dispatcher(state)?;
    require_pawn(state, pawn)?;
    if pawn == state.current_player {
        return Err(EngineError::rule(
            "use the ordinary movement actions for your own pawn",
        ));
    }

    let from = state.players[pawn].city;
    if from == dest {
        return Err(EngineError::rule(format!("player {pawn} is already in {dest}")));
    }

    let mut next = state.clone();
    match kind {
        MoveKind::Drive => {
            if !map::neighbors(from).contains(&dest) {
                return Err(EngineError::rule(format!(
                    "{dest} is not connected to {from}"
                )));
            }
        }
        MoveKind::Direct => {
            discard_from_either(&mut next, pawn, dest)?;
        }
        MoveKind::Charter => {
            discard_from_either(&mut next, pawn, from)?;
        }
        MoveKind::Shuttle => {
            if !state.has_station(from) || !state.has_station(dest) {
                return Err(EngineError::rule(format!(
                    "a shuttle flight requires research stations in both {from} and {dest}"
                )));
            }
        }
    }

    relocate(&mut next, pawn, dest);
    spend_action(&mut next);
    Ok(next)
}

/// Discard the card naming `city` from the Dispatcher's hand, or failing
/// that from the moved player's hand.
fn discard_from_either(
    next: &mut GameState,
    pawn: usize,
    city: CityId,
) -> Result<(), EngineError> {
    let dispatcher = next.current_player;
    for holder in [dispatcher, pawn] {
        if let Some(idx) = next.players[holder].find_city_card(city) {
            let card = next.players[holder].hand.remove(idx);
            next.player_discard.push_front(card);
            return Ok(());
        }
    }
    Err(EngineError::rule(format!(
        "neither the dispatcher nor player {pawn} holds the {city} card"
    )))
}

/// Operations Expert: once per turn, from a research station, discard any
/// city card to move anywhere.
pub fn operations_move(
    state: &GameState,
    dest: CityId,
    discard: CityId,
) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let pawn = &state.players[player];

    if !pawn.role.has_station_jump() {
        return Err(EngineError::rule(
            "only the operations expert can jump from a research station",
        ));
    }
    if pawn.special_move_used {
        return Err(EngineError::rule(
            "the special move has already been used this turn",
        ));
    }
    if !state.has_station(pawn.city) {
        return Err(EngineError::rule(format!(
            "the special move requires a research station in {}",
            pawn.city
        )));
    }
    if pawn.city == dest {
        return Err(EngineError::rule(format!("already in {dest}")));
    }
    let Some(card_idx) = pawn.find_city_card(discard) else {
        return Err(EngineError::rule(format!(
            "no {discard} city card to discard"
        )));
    };

    let mut next = state.clone();
    let card = next.players[player].hand.remove(card_idx);
    next.player_discard.push_front(card);
    next.players[player].special_move_used = true;
    relocate(&mut next, player, dest);
    spend_action(&mut next);
    Ok(next)
}

/// Contingency Planner: retrieve a named event card from the player
/// discard into the stored slot.
pub fn retrieve_event(state: &GameState, event: EventCard) -> Result<GameState, EngineError> {
    gate(state)?;
    let player = state.current_player;
    let pawn = &state.players[player];

    if !pawn.role.stores_events() {
        return Err(EngineError::rule(
            "only the contingency planner can retrieve event cards",
        ));
    }
    if let Some(stored) = pawn.stored_event {
        return Err(EngineError::rule(format!(
            "an event card ({stored}) is already stored"
        )));
    }
    let Some(idx) = state
        .player_discard
        .iter()
        .position(|c| *c == PlayerCard::Event(event))
    else {
        return Err(EngineError::rule(format!(
            "{event} is not in the player discard"
        )));
    };

    let mut next = state.clone();
    next.player_discard.remove(idx);
    next.players[player].stored_event = Some(event);
    spend_action(&mut next);
    Ok(next)
}
