//! Per-city board state: disease cubes and research stations.

use serde::{Deserialize, Serialize};

use crate::state::disease::{Disease, DiseaseMap};

/// Cubes of one color a city can hold before it outbreaks.
pub const OUTBREAK_THRESHOLD: u8 = 3;

/// Research stations allowed on the board at once.
pub const MAX_STATIONS: usize = 6;

/// Cube reserve per disease color.
pub const CUBES_PER_COLOR: u8 = 24;

/// Cure progress for one disease color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CureStatus {
    /// No cure discovered yet.
    #[default]
    Uncured,
    /// Cure discovered; cubes may still be on the board.
    Cured,
    /// Cured with zero cubes anywhere. No cube of this color is ever
    /// placed again.
    Eradicated,
}

impl CureStatus {
    /// Cured or eradicated.
    #[must_use]
    pub const fn is_cured(self) -> bool {
        !matches!(self, CureStatus::Uncured)
    }
}

/// The state of one city on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityState {
    /// Cube counts per disease color, each in [0, 3].
    pub cubes: DiseaseMap<u8>,
    /// Research station present.
    pub has_station: bool,
}

impl CityState {
    /// Cubes of one color at this city.
    #[must_use]
    pub fn cubes_of(&self, color: Disease) -> u8 {
        self.cubes[color]
    }

    /// True if placing another cube of `color` would outbreak.
    #[must_use]
    pub fn at_threshold(&self, color: Disease) -> bool {
        self.cubes[color] >= OUTBREAK_THRESHOLD
    }
}
