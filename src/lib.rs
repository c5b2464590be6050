//! # contagion
//!
//! A deterministic rules engine for a cooperative, card-driven
//! outbreak-containment board game.
//!
//! ## Design Principles
//!
//! 1. **Pure transforms**: every rule is a function
//!    `(state, params) -> Result<state, error>` returning a complete new
//!    snapshot. Nothing mutates caller-visible state in place.
//!
//! 2. **One owner**: the [`Game`] orchestrator holds the only mutable
//!    reference to the snapshot, replaces it on every transition, and
//!    auto-advances phases. Snapshots are explicit values, never hidden
//!    module state, so many games can coexist in one process.
//!
//! 3. **Injected randomness**: deck shuffling is the only
//!    nondeterministic input, seeded at setup and carried inside the
//!    snapshot. Same seed, same game.
//!
//! 4. **Capability-table roles**: seven roles bend the rules through
//!    queries like `cure_cards_required()` and `treats_all_cubes()`
//!    rather than conditionals scattered through the actions.
//!
//! ## Modules
//!
//! - `map`: static board catalog (48 cities, colors, adjacency)
//! - `state`: the snapshot and its leaf types
//! - `setup`: game creation
//! - `actions`: one pure transform per player action
//! - `infection`: infect-phase draws and outbreak cascades
//! - `draw`: draw-phase and epidemic resolution
//! - `events`: the five one-off event cards
//! - `engine`: orchestrator, action tokens, phase advancement
//! - `error`: the typed error surface

pub mod actions;
pub mod draw;
pub mod engine;
pub mod error;
pub mod events;
pub mod infection;
pub mod map;
pub mod setup;
pub mod state;

// Re-export the public surface.
pub use crate::engine::{parse_token, ActionToken, Game, ACTIONS_PER_TURN};

pub use crate::error::EngineError;

pub use crate::state::{
    CityState, CureStatus, Disease, DiseaseMap, EventCard, GameRng, GameRngState, GameState,
    GameStatus, InfectionCard, Phase, Player, PlayerCard, Role, CUBES_PER_COLOR,
    CURE_CARDS_REQUIRED, HAND_LIMIT, INFECTION_RATE_TABLE, MAX_STATIONS, OUTBREAK_THRESHOLD,
};

pub use crate::map::{city, city_id, neighbors, of_color, CityDef, CityId};

pub use crate::setup::{new_game, GameConfig};

pub use crate::actions::{
    build_station, charter_flight, direct_flight, discover_cure, dispatcher_move_other,
    dispatcher_summon, drive_ferry, operations_move, retrieve_event, share_give, share_take,
    shuttle_flight, treat_disease, MoveKind,
};

pub use crate::infection::{
    infect_cities, InfectionEvent, InfectionReport, Prevented, OUTBREAK_LIMIT,
};

pub use crate::draw::{
    draw_player_cards, resolve_hand_limit, DrawEvent, DrawReport, CARDS_PER_DRAW,
};

pub use crate::events::{play_event, EventPlay, FORECAST_WINDOW};
