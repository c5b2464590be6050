//! Event card effects.
//!
//! Event cards are playable during any phase by whichever player holds
//! them, without consuming an action and without the Actions-phase gate;
//! the only preconditions are that the game is ongoing and the card is
//! actually held (in hand, or in the Contingency Planner's stored slot).
//!
//! A card played from the hand goes to the player discard; a card played
//! from the stored slot is removed from the game.

use serde::{Deserialize, Serialize};

use crate::actions::relocate;
use crate::actions::station::place_station;
use crate::error::EngineError;
use crate::map::CityId;
use crate::state::{EventCard, GameState, PlayerCard};

/// Parameters for playing one event card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPlay {
    /// Move any pawn to any city. No adjacency or card checks.
    Airlift { pawn: usize, city: CityId },
    /// Place a research station free of card cost. The six-station
    /// demolition rule applies.
    GovernmentGrant {
        city: CityId,
        demolish: Option<CityId>,
    },
    /// Skip the next infection phase.
    OneQuietNight,
    /// Permanently remove the named city's card from the infection
    /// discard.
    ResilientPopulation { city: CityId },
    /// Reorder the top cards of the infection deck. `order[i]` is the
    /// current index (0 = top) of the card that should end up at
    /// position `i`; it must be a permutation of the inspected window.
    Forecast { order: Vec<usize> },
}

impl EventPlay {
    /// The event card this play consumes.
    #[must_use]
    pub fn card(&self) -> EventCard {
        match self {
            EventPlay::Airlift { .. } => EventCard::Airlift,
            EventPlay::GovernmentGrant { .. } => EventCard::GovernmentGrant,
            EventPlay::OneQuietNight => EventCard::OneQuietNight,
            EventPlay::ResilientPopulation { .. } => EventCard::ResilientPopulation,
            EventPlay::Forecast { .. } => EventCard::Forecast,
        }
    }
}

/// Cards inspected by Forecast.
pub const FORECAST_WINDOW: usize = 6;

/// Play an event card held by `player`.
pub fn play_event(
    state: &GameState,
    player: usize,
    play: &EventPlay,
) -> Result<GameState, EngineError> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }
    if player >= state.player_count() {
        return Err(EngineError::rule(format!("no player {player}")));
    }

    let card = play.card();
    let in_hand = state.players[player].find_event_card(card);
    let in_slot = state.players[player].stored_event == Some(card);
    if in_hand.is_none() && !in_slot {
        return Err(EngineError::rule(format!(
            "player {player} does not hold {card}"
        )));
    }

    let mut next = state.clone();
    apply(&mut next, play)?;

    // Consume the card: hand copies are discarded, the stored copy is
    // removed from the game.
    if let Some(idx) = in_hand {
        let spent = next.players[player].hand.remove(idx);
        next.player_discard.push_front(spent);
    } else {
        next.players[player].stored_event = None;
        next.removed_player_cards.push_back(PlayerCard::Event(card));
    }

    log::debug!("player {player} played {card}");
    Ok(next)
}

fn apply(next: &mut GameState, play: &EventPlay) -> Result<(), EngineError> {
    match play {
        EventPlay::Airlift { pawn, city } => {
            if *pawn >= next.player_count() {
                return Err(EngineError::rule(format!("no player {pawn}")));
            }
            if next.players[*pawn].city == *city {
                return Err(EngineError::rule(format!(
                    "player {pawn} is already in {city}"
                )));
            }
            relocate(next, *pawn, *city);
            Ok(())
        }
        EventPlay::GovernmentGrant { city, demolish } => place_station(next, *city, *demolish),
        EventPlay::OneQuietNight => {
            if next.skip_next_infection {
                return Err(EngineError::rule(
                    "the next infection phase is already being skipped",
                ));
            }
            next.skip_next_infection = true;
            Ok(())
        }
        EventPlay::ResilientPopulation { city } => {
            let Some(idx) = next
                .infection_discard
                .iter()
                .position(|c| c.city() == *city)
            else {
                return Err(EngineError::rule(format!(
                    "{city} is not in the infection discard"
                )));
            };
            let removed = next.infection_discard.remove(idx);
            next.removed_infection_cards.push_back(removed);
            Ok(())
        }
        EventPlay::Forecast { order } => {
            let window = next.infection_deck.len().min(FORECAST_WINDOW);
            if order.len() != window {
                return Err(EngineError::rule(format!(
                    "forecast must reorder exactly the top {window} cards (got {})",
                    order.len()
                )));
            }
            let mut seen = [false; FORECAST_WINDOW];
            for &idx in order {
                if idx >= window || seen[idx] {
                    return Err(EngineError::rule(format!(
                        "forecast order must be a permutation of 0..{window}"
                    )));
                }
                seen[idx] = true;
            }

            let top: Vec<_> = (0..window)
                .filter_map(|_| next.infection_deck.pop_front())
                .collect();
            for &idx in order.iter().rev() {
                next.infection_deck.push_front(top[idx]);
            }
            Ok(())
        }
    }
}
