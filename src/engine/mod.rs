//! Turn-phase orchestrator.
//!
//! [`Game`] holds the only mutable reference to the current snapshot.
//! Every operation runs a pure transform, replaces the held snapshot
//! with the result, and auto-advances the phase when its completion
//! condition is met:
//!
//! `Actions(4..=1) -> Actions(0) -> Draw -> Infect -> next player`
//!
//! Draw holds until both cards are resolved and no hand is over the
//! limit. Once the status leaves Ongoing the orchestrator is inert.

pub mod token;

pub use token::{parse_token, ActionToken};

use crate::actions;
use crate::draw::{self, DrawReport, CARDS_PER_DRAW};
use crate::error::EngineError;
use crate::events::{self, EventPlay};
use crate::infection::{self, InfectionReport};
use crate::map::{self, CityId};
use crate::setup::{self, GameConfig};
use crate::state::{Disease, GameState, GameStatus, Phase, HAND_LIMIT};

/// Actions granted at the start of each player's turn.
pub const ACTIONS_PER_TURN: u8 = 4;

/// The turn-phase orchestrator. Owns the game snapshot.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Create a new game from a config.
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        Ok(Self {
            state: setup::new_game(config)?,
        })
    }

    /// Wrap an existing snapshot (restored or hand-built).
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    // === Read-only accessors ===

    /// The full current snapshot. Callers must not mutate game state
    /// through copies of this; all mutation goes through the operations.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Index of the current player.
    #[must_use]
    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    /// Actions left this turn.
    #[must_use]
    pub fn actions_remaining(&self) -> u8 {
        self.state.actions_remaining
    }

    /// Win/loss status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    // === Operations ===

    /// Parse and perform one action for the current player.
    pub fn perform_action(&mut self, token: &str) -> Result<(), EngineError> {
        let parsed = token::parse_token(token)?;
        let next = self.dispatch(&parsed)?;
        self.state = next;
        self.advance_after_action();
        Ok(())
    }

    /// Resolve the Draw phase for the current player.
    pub fn draw_cards(&mut self) -> Result<DrawReport, EngineError> {
        let (next, report) = draw::draw_player_cards(&self.state)?;
        self.state = next;
        self.advance_after_draw();
        Ok(report)
    }

    /// Resolve the Infect phase and hand the turn to the next player.
    pub fn infect_cities(&mut self) -> Result<InfectionReport, EngineError> {
        let (next, report) = infection::infect_cities(&self.state)?;
        self.state = next;
        self.advance_after_infect();
        Ok(report)
    }

    /// Play an event card held by `player`. Allowed in any phase.
    pub fn play_event(&mut self, player: usize, play: &EventPlay) -> Result<(), EngineError> {
        self.state = events::play_event(&self.state, player, play)?;
        Ok(())
    }

    /// Discard down to the hand limit after an over-draw, then resume
    /// normal phase advancement.
    pub fn resolve_hand_limit(
        &mut self,
        player: usize,
        indices: &[usize],
    ) -> Result<(), EngineError> {
        self.state = draw::resolve_hand_limit(&self.state, player, indices)?;
        self.advance_after_draw();
        Ok(())
    }

    fn dispatch(&self, parsed: &ActionToken) -> Result<GameState, EngineError> {
        let state = &self.state;
        match parsed {
            ActionToken::DriveFerry(city) => actions::drive_ferry(state, *city),
            ActionToken::DirectFlight(city) => actions::direct_flight(state, *city),
            ActionToken::CharterFlight(city) => actions::charter_flight(state, *city),
            ActionToken::ShuttleFlight(city) => actions::shuttle_flight(state, *city),
            ActionToken::BuildStation(demolish) => actions::build_station(state, *demolish),
            ActionToken::Treat(color) => actions::treat_disease(state, *color),
            ActionToken::ShareGive { player, city } => actions::share_give(state, *player, *city),
            ActionToken::ShareTake { player, city } => actions::share_take(state, *player, *city),
            ActionToken::DiscoverCure(color) => actions::discover_cure(state, *color),
            ActionToken::DispatcherSummon { pawn, to_pawn } => {
                actions::dispatcher_summon(state, *pawn, *to_pawn)
            }
            ActionToken::DispatcherMoveOther { pawn, kind, city } => {
                actions::dispatcher_move_other(state, *pawn, *kind, *city)
            }
            ActionToken::OperationsMove { city, discard } => {
                actions::operations_move(state, *city, *discard)
            }
            ActionToken::RetrieveEvent(event) => actions::retrieve_event(state, *event),
        }
    }

    // === Phase advancement ===

    fn advance_after_action(&mut self) {
        if self.state.is_over() {
            return;
        }
        if self.state.phase == Phase::Actions && self.state.actions_remaining == 0 {
            self.state.phase = Phase::Draw;
            self.state.cards_drawn = 0;
            log::debug!("actions spent; advancing to draw");
        }
    }

    fn advance_after_draw(&mut self) {
        if self.state.is_over() {
            return;
        }
        if self.state.phase == Phase::Draw
            && self.state.cards_drawn >= CARDS_PER_DRAW
            && self.state.players.iter().all(|p| !p.over_hand_limit())
        {
            self.state.phase = Phase::Infect;
            log::debug!("cards drawn; advancing to infect");
        }
    }

    fn advance_after_infect(&mut self) {
        if self.state.is_over() {
            return;
        }
        let next_player = (self.state.current_player + 1) % self.state.player_count();
        self.state.current_player = next_player;
        self.state.phase = Phase::Actions;
        self.state.actions_remaining = ACTIONS_PER_TURN;
        self.state.cards_drawn = 0;
        self.state.turn_number += 1;
        self.state.skip_next_infection = false;
        self.state.players[next_player].special_move_used = false;
        log::debug!("turn {} begins for player {next_player}", self.state.turn_number);
    }

    // === Legal action enumeration ===

    /// Enumerate the action tokens the current player could legally
    /// perform right now. Empty outside the Actions phase.
    #[must_use]
    pub fn available_actions(&self) -> Vec<String> {
        let state = &self.state;
        if state.is_over() || state.phase != Phase::Actions || state.actions_remaining == 0 {
            return Vec::new();
        }

        let player = state.current();
        let here = player.city;
        let mut out = Vec::new();

        for &city in map::neighbors(here) {
            out.push(format!("drive-ferry:{city}"));
        }
        for card in &player.hand {
            if let Some(city) = card.city() {
                if city != here {
                    out.push(format!("direct-flight:{city}"));
                }
            }
        }
        if player.holds_city_card(here) {
            for city in CityId::all().filter(|&c| c != here) {
                out.push(format!("charter-flight:{city}"));
            }
        }
        if state.has_station(here) {
            for city in state.station_cities() {
                if city != here {
                    out.push(format!("shuttle-flight:{city}"));
                }
            }
        }

        if !state.has_station(here)
            && (player.role.builds_without_card() || player.holds_city_card(here))
        {
            if state.stations_maxed() {
                for city in state.station_cities() {
                    out.push(format!("build-station:{city}"));
                }
            } else {
                out.push("build-station".to_string());
            }
        }

        for color in Disease::ALL {
            if state.cubes_at(here, color) > 0 {
                out.push(format!("treat:{color}"));
            }
        }

        if state.has_station(here) {
            for color in Disease::ALL {
                if state.cures[color].is_cured() {
                    continue;
                }
                let held = player
                    .hand
                    .iter()
                    .filter(|c| c.color() == Some(color))
                    .count();
                if held >= player.role.cure_cards_required() {
                    out.push(format!("discover-cure:{color}"));
                }
            }
        }

        self.push_share_actions(&mut out);
        self.push_role_actions(&mut out);
        out
    }

    fn push_share_actions(&self, out: &mut Vec<String>) {
        let state = &self.state;
        let me = state.current_player;
        let player = state.current();
        let here = player.city;

        for (i, other) in state.players.iter().enumerate() {
            if i == me || other.city != here {
                continue;
            }
            if other.hand.len() < HAND_LIMIT {
                if player.role.shares_any_card() {
                    for card in &player.hand {
                        if let Some(city) = card.city() {
                            out.push(format!("share-give:{i}:{city}"));
                        }
                    }
                } else if player.holds_city_card(here) {
                    out.push(format!("share-give:{i}:{here}"));
                }
            }
            if player.hand.len() < HAND_LIMIT {
                if other.role.shares_any_card() {
                    for card in &other.hand {
                        if let Some(city) = card.city() {
                            out.push(format!("share-take:{i}:{city}"));
                        }
                    }
                } else if other.holds_city_card(here) {
                    out.push(format!("share-take:{i}:{here}"));
                }
            }
        }
    }

    fn push_role_actions(&self, out: &mut Vec<String>) {
        let state = &self.state;
        let me = state.current_player;
        let player = state.current();

        if player.role.moves_other_pawns() {
            for (i, pawn) in state.players.iter().enumerate() {
                for (j, target) in state.players.iter().enumerate() {
                    if i != j && pawn.city != target.city {
                        out.push(format!("dispatcher-summon:{i}:{j}"));
                    }
                }
            }
            for (i, pawn) in state.players.iter().enumerate() {
                if i == me {
                    continue;
                }
                for &city in map::neighbors(pawn.city) {
                    out.push(format!("dispatcher-move-other:{i}:drive:{city}"));
                }
                if state.has_station(pawn.city) {
                    for city in state.station_cities() {
                        if city != pawn.city {
                            out.push(format!("dispatcher-move-other:{i}:shuttle:{city}"));
                        }
                    }
                }
            }
        }

        if player.role.has_station_jump()
            && !player.special_move_used
            && state.has_station(player.city)
        {
            for card in &player.hand {
                if let Some(discard) = card.city() {
                    for dest in CityId::all().filter(|&c| c != player.city) {
                        out.push(format!("operations-move:{dest}:{discard}"));
                    }
                }
            }
        }

        if player.role.stores_events() && player.stored_event.is_none() {
            let mut seen = Vec::new();
            for card in &state.player_discard {
                if let crate::state::PlayerCard::Event(event) = card {
                    if !seen.contains(event) {
                        seen.push(*event);
                        out.push(format!("retrieve-event:{event}"));
                    }
                }
            }
        }
    }
}
