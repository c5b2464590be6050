//! Disease colors and per-color data storage.
//!
//! ## Disease
//!
//! One of the four disease colors on the board. Every city belongs to
//! exactly one color; cubes, cures, and reserves are all tracked per color.
//!
//! ## DiseaseMap
//!
//! Array-backed per-color storage with O(1) access. Supports iteration
//! and indexing by `Disease`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A disease color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Blue,
    Yellow,
    Black,
    Red,
}

impl Disease {
    /// All four colors, in canonical order.
    pub const ALL: [Disease; 4] = [Disease::Blue, Disease::Yellow, Disease::Black, Disease::Red];

    /// Number of colors.
    pub const COUNT: usize = 4;

    /// Canonical index of this color (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase color name, matching the action-token vocabulary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Disease::Blue => "blue",
            Disease::Yellow => "yellow",
            Disease::Black => "black",
            Disease::Red => "red",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Disease::Blue),
            "yellow" => Ok(Disease::Yellow),
            "black" => Ok(Disease::Black),
            "red" => Ok(Disease::Red),
            _ => Err(()),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a fixed array with one entry per disease color.
///
/// ## Example
///
/// ```
/// use contagion::state::{Disease, DiseaseMap};
///
/// let mut supply: DiseaseMap<u8> = DiseaseMap::with_value(24);
/// assert_eq!(supply[Disease::Blue], 24);
///
/// supply[Disease::Red] -= 3;
/// assert_eq!(supply[Disease::Red], 21);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseMap<T> {
    data: [T; Disease::COUNT],
}

impl<T> DiseaseMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Disease) -> T) -> Self {
        Self {
            data: Disease::ALL.map(factory),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Disease, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Disease, &T)> {
        Disease::ALL.iter().map(move |&d| (d, &self.data[d.index()]))
    }
}

impl<T: Default> Default for DiseaseMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Disease> for DiseaseMap<T> {
    type Output = T;

    fn index(&self, color: Disease) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Disease> for DiseaseMap<T> {
    fn index_mut(&mut self, color: Disease) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_round_trip() {
        for color in Disease::ALL {
            assert_eq!(color.as_str().parse::<Disease>(), Ok(color));
        }
        assert!("purple".parse::<Disease>().is_err());
    }

    #[test]
    fn test_disease_display() {
        assert_eq!(format!("{}", Disease::Black), "black");
    }

    #[test]
    fn test_map_factory() {
        let map = DiseaseMap::new(|d| d.index() as i32 * 10);

        assert_eq!(map[Disease::Blue], 0);
        assert_eq!(map[Disease::Yellow], 10);
        assert_eq!(map[Disease::Black], 20);
        assert_eq!(map[Disease::Red], 30);
    }

    #[test]
    fn test_map_mutation() {
        let mut map: DiseaseMap<u8> = DiseaseMap::with_value(24);

        map[Disease::Red] = 0;
        assert_eq!(map[Disease::Red], 0);
        assert_eq!(map[Disease::Blue], 24);
    }

    #[test]
    fn test_map_iter() {
        let map = DiseaseMap::new(|d| d.index());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (Disease::Blue, &0));
        assert_eq!(pairs[3], (Disease::Red, &3));
    }

    #[test]
    fn test_map_serialization() {
        let map: DiseaseMap<u8> = DiseaseMap::with_value(24);
        let json = serde_json::to_string(&map).unwrap();
        let back: DiseaseMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
