//! Draw phase and epidemic resolution.
//!
//! The current player draws exactly two cards. City and event cards join
//! the hand; an epidemic resolves immediately and in full — rate step,
//! bottom-card infection through the cascade engine, intensify reshuffle —
//! before the next card is even looked at. Running out of player cards
//! loses the game.
//!
//! If the hand ends over the limit the phase holds until the caller
//! resolves the discard; `resolve_hand_limit` is the only way forward.

use crate::error::EngineError;
use crate::infection::{run_cascade, InfectionReport};
use crate::map::CityId;
use crate::state::{
    Disease, GameState, GameStatus, Phase, PlayerCard, HAND_LIMIT, INFECTION_RATE_TABLE,
};

/// Player cards drawn per Draw phase.
pub const CARDS_PER_DRAW: u8 = 2;

/// One step of a Draw-phase resolution, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawEvent {
    /// A card was drawn into the current player's hand.
    CardDrawn { card: PlayerCard },
    /// An epidemic card came up and is being resolved.
    EpidemicDrawn,
    /// The infection rate marker moved.
    RateIncreased { position: usize },
    /// The bottom infection card was flipped for the epidemic.
    BottomCardInfected { city: CityId, color: Disease },
    /// The infection discard was reshuffled onto the deck.
    Intensified { cards: usize },
    /// Fewer than two cards remained. Game lost.
    DeckExhausted,
    /// The hand ended over the limit; the phase holds for a discard.
    HandLimitExceeded { player: usize, hand_size: usize },
}

/// Ordered record of a Draw-phase resolution, including any infection
/// cascades the epidemics set off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Draw-level events in the order they occurred.
    pub events: Vec<DrawEvent>,
    /// Cube placements and outbreaks caused by epidemic bottom cards.
    pub infection: InfectionReport,
}

impl DrawReport {
    /// Number of epidemics resolved this draw.
    #[must_use]
    pub fn epidemics(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::EpidemicDrawn))
            .count()
    }
}

/// Resolve the Draw phase: draw two player cards, resolving epidemics in
/// full as they appear.
///
/// Deck exhaustion and mid-epidemic losses are successful transitions
/// that set `status = Lost`.
pub fn draw_player_cards(state: &GameState) -> Result<(GameState, DrawReport), EngineError> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }
    if state.phase != Phase::Draw {
        return Err(EngineError::PhaseViolation {
            expected: Phase::Draw,
            actual: state.phase,
        });
    }
    if state.cards_drawn >= CARDS_PER_DRAW {
        return Err(EngineError::rule(
            "player cards already drawn this turn; resolve the hand limit or infect",
        ));
    }

    let mut next = state.clone();
    let mut report = DrawReport::default();

    if next.player_deck.len() < CARDS_PER_DRAW as usize {
        next.status = GameStatus::Lost;
        next.cards_drawn = CARDS_PER_DRAW;
        report.events.push(DrawEvent::DeckExhausted);
        log::debug!("player deck exhausted; game lost");
        return Ok((next, report));
    }

    for _ in 0..CARDS_PER_DRAW {
        if next.status != GameStatus::Ongoing {
            break;
        }
        let Some(card) = next.player_deck.pop_front() else {
            break;
        };
        next.cards_drawn += 1;

        match card {
            PlayerCard::Epidemic => resolve_epidemic(&mut next, &mut report),
            other => {
                next.players[next.current_player].hand.push(other);
                report.events.push(DrawEvent::CardDrawn { card: other });
            }
        }
    }

    let player = next.current_player;
    let hand_size = next.players[player].hand.len();
    if next.status == GameStatus::Ongoing && hand_size > HAND_LIMIT {
        report.events.push(DrawEvent::HandLimitExceeded { player, hand_size });
    }

    Ok((next, report))
}

/// Resolve one epidemic card: step the rate, infect from the bottom of
/// the infection deck, then intensify.
fn resolve_epidemic(state: &mut GameState, report: &mut DrawReport) {
    report.events.push(DrawEvent::EpidemicDrawn);
    state.player_discard.push_front(PlayerCard::Epidemic);

    // 1. The rate marker steps forward, saturating at the table's end.
    state.infection_rate_position =
        (state.infection_rate_position + 1).min(INFECTION_RATE_TABLE.len() - 1);
    report.events.push(DrawEvent::RateIncreased {
        position: state.infection_rate_position,
    });

    // 2. Bottom card of the infection deck: three cubes, one cascade scope.
    if let Some(card) = state.infection_deck.pop_back() {
        state.infection_discard.push_front(card);
        report.events.push(DrawEvent::BottomCardInfected {
            city: card.city(),
            color: card.color(),
        });
        log::debug!("epidemic strikes {}", card.city());
        run_cascade(state, card.city(), card.color(), 3, &mut report.infection);
    }

    if state.status != GameStatus::Ongoing {
        return;
    }

    // 3. Intensify: the whole discard, shuffled, goes back on top.
    let mut pile: Vec<_> = state.infection_discard.iter().copied().collect();
    state.rng.shuffle(&mut pile);
    report.events.push(DrawEvent::Intensified { cards: pile.len() });
    state.infection_discard.clear();
    for card in pile.into_iter().rev() {
        state.infection_deck.push_front(card);
    }
}

/// Discard the listed hand indices to resolve a hand-limit overflow.
///
/// Indices address `players[player].hand`; the result must fit the hand
/// limit. Discarded cards go to the player discard.
pub fn resolve_hand_limit(
    state: &GameState,
    player: usize,
    indices: &[usize],
) -> Result<GameState, EngineError> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }
    let Some(pawn) = state.players.get(player) else {
        return Err(EngineError::rule(format!("no player {player}")));
    };
    if !pawn.over_hand_limit() {
        return Err(EngineError::rule(format!(
            "player {player} holds {} cards and is within the hand limit",
            pawn.hand.len()
        )));
    }

    let mut sorted: Vec<usize> = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != indices.len() {
        return Err(EngineError::rule("duplicate discard indices"));
    }
    if let Some(&bad) = sorted.iter().find(|&&i| i >= pawn.hand.len()) {
        return Err(EngineError::rule(format!(
            "discard index {bad} out of range for a hand of {}",
            pawn.hand.len()
        )));
    }
    if pawn.hand.len() - sorted.len() > HAND_LIMIT {
        return Err(EngineError::rule(format!(
            "discarding {} cards still leaves more than {HAND_LIMIT}",
            sorted.len()
        )));
    }

    let mut next = state.clone();
    for &i in sorted.iter().rev() {
        let card = next.players[player].hand.remove(i);
        next.player_discard.push_front(card);
    }
    Ok(next)
}
