//! The canonical game snapshot.
//!
//! `GameState` is an explicit value: every transform takes a reference and
//! returns a complete new snapshot, and the orchestrator replaces the one
//! it owns. Decks and discards are persistent vectors so the wholesale
//! replacement stays cheap through structural sharing.
//!
//! Beyond construction, this module carries only simple queries; all rule
//! logic lives in the action, infection, draw, and event transforms.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::map::{self, CityId};
use crate::state::board::{CityState, CUBES_PER_COLOR, MAX_STATIONS};
use crate::state::cards::{InfectionCard, PlayerCard};
use crate::state::disease::{Disease, DiseaseMap};
use crate::state::player::Player;
use crate::state::rng::GameRng;
use crate::state::CureStatus;

/// Cards drawn per infection phase, indexed by `infection_rate_position`.
pub const INFECTION_RATE_TABLE: [usize; 7] = [2, 2, 2, 3, 3, 4, 4];

/// The three phases of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The current player spends up to four actions.
    Actions,
    /// The current player draws two player cards.
    Draw,
    /// Infection cards are drawn and cubes placed.
    Infect,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Actions => "actions",
            Phase::Draw => "draw",
            Phase::Infect => "infect",
        })
    }
}

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

/// Complete game state.
///
/// Exclusively owned by the orchestrator and replaced wholesale on every
/// transition; no transform mutates a caller-visible snapshot in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Per-city cube counts and station flags.
    pub board: FxHashMap<CityId, CityState>,
    /// Player pawns, in turn order.
    pub players: Vec<Player>,
    /// Cure progress per disease color.
    pub cures: DiseaseMap<CureStatus>,
    /// Cubes remaining in reserve per color. Reserve + on-board = 24.
    pub cube_supply: DiseaseMap<u8>,

    /// Player deck; front is the top.
    pub player_deck: Vector<PlayerCard>,
    /// Player discard; front is the most recent discard.
    pub player_discard: Vector<PlayerCard>,
    /// Infection deck; front is the top, back is the bottom.
    pub infection_deck: Vector<InfectionCard>,
    /// Infection discard; front is the most recent discard.
    pub infection_discard: Vector<InfectionCard>,
    /// Player cards removed from the game permanently.
    pub removed_player_cards: Vector<PlayerCard>,
    /// Infection cards removed from the game permanently.
    pub removed_infection_cards: Vector<InfectionCard>,

    /// Outbreaks so far. Reaching 8 loses the game.
    pub outbreak_count: u8,
    /// Index into [`INFECTION_RATE_TABLE`]; steps up once per epidemic.
    pub infection_rate_position: usize,

    /// Current phase.
    pub phase: Phase,
    /// Actions left in the current Actions phase.
    pub actions_remaining: u8,
    /// Index of the current player.
    pub current_player: usize,
    /// Turn counter, incremented on each hand-off.
    pub turn_number: u32,
    /// Player cards resolved in the current Draw phase.
    pub cards_drawn: u8,
    /// Set by One Quiet Night; consumed by the next infection phase.
    pub skip_next_infection: bool,

    /// Win/loss status. Terminal once non-Ongoing.
    pub status: GameStatus,

    /// Injected deterministic randomness.
    pub rng: GameRng,
}

impl GameState {
    /// Build the pre-setup skeleton: clean board, full reserves, empty
    /// decks. `setup::new_game` populates players and decks.
    #[must_use]
    pub(crate) fn empty(seed: u64) -> Self {
        let mut board = FxHashMap::default();
        for city in CityId::all() {
            board.insert(city, CityState::default());
        }

        Self {
            board,
            players: Vec::new(),
            cures: DiseaseMap::default(),
            cube_supply: DiseaseMap::with_value(CUBES_PER_COLOR),
            player_deck: Vector::new(),
            player_discard: Vector::new(),
            infection_deck: Vector::new(),
            infection_discard: Vector::new(),
            removed_player_cards: Vector::new(),
            removed_infection_cards: Vector::new(),
            outbreak_count: 0,
            infection_rate_position: 0,
            phase: Phase::Actions,
            actions_remaining: 4,
            current_player: 0,
            turn_number: 1,
            cards_drawn: 0,
            skip_next_infection: false,
            status: GameStatus::Ongoing,
            rng: GameRng::new(seed),
        }
    }

    // === Queries ===

    /// The current player's pawn.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Cards drawn per infection phase at the current rate position.
    #[must_use]
    pub fn infection_rate(&self) -> usize {
        INFECTION_RATE_TABLE[self.infection_rate_position]
    }

    /// Cubes of `color` at `city`.
    #[must_use]
    pub fn cubes_at(&self, city: CityId, color: Disease) -> u8 {
        self.board[&city].cubes[color]
    }

    /// Total cubes of `color` across the whole board.
    #[must_use]
    pub fn cubes_on_board(&self, color: Disease) -> u32 {
        self.board
            .values()
            .map(|c| u32::from(c.cubes[color]))
            .sum()
    }

    /// Research station present at `city`.
    #[must_use]
    pub fn has_station(&self, city: CityId) -> bool {
        self.board[&city].has_station
    }

    /// Cities with a research station, in catalog order.
    #[must_use]
    pub fn station_cities(&self) -> Vec<CityId> {
        CityId::all().filter(|c| self.has_station(*c)).collect()
    }

    /// Number of research stations on the board.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.board.values().filter(|c| c.has_station).count()
    }

    /// True if no more stations may be placed without demolishing one.
    #[must_use]
    pub fn stations_maxed(&self) -> bool {
        self.station_count() >= MAX_STATIONS
    }

    /// True once the game has been won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    /// True if a Quarantine Specialist pawn protects `city` (her city
    /// and every adjacent city).
    #[must_use]
    pub fn quarantined(&self, city: CityId) -> bool {
        self.players.iter().any(|p| {
            p.role.quarantines_neighbors()
                && (p.city == city || map::neighbors(p.city).contains(&city))
        })
    }
}
