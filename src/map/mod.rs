//! Board catalog: cities, colors, and adjacency.
//!
//! Pure static data plus lookup functions. The rest of the engine refers
//! to cities by `CityId` (an index into the catalog) and resolves names,
//! colors, and connections through this module.

pub mod catalog;
pub mod city;

pub use catalog::{CITIES, CITY_COUNT};
pub use city::{city, city_id, neighbors, of_color, CityDef, CityId};

// Named ids for the full board, re-exported for tests and setup code.
pub use catalog::ids::*;
