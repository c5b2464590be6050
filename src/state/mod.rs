//! Game state model: the canonical snapshot and the leaf types it is
//! built from.
//!
//! Everything here is data plus simple queries; rule logic lives in the
//! `actions`, `infection`, `draw`, and `events` transforms.

pub mod board;
pub mod cards;
pub mod disease;
pub mod game;
pub mod player;
pub mod rng;

pub use board::{CityState, CureStatus, CUBES_PER_COLOR, MAX_STATIONS, OUTBREAK_THRESHOLD};
pub use cards::{EventCard, InfectionCard, PlayerCard};
pub use disease::{Disease, DiseaseMap};
pub use game::{GameState, GameStatus, Phase, INFECTION_RATE_TABLE};
pub use player::{Player, Role, CURE_CARDS_REQUIRED, HAND_LIMIT};
pub use rng::{GameRng, GameRngState};
