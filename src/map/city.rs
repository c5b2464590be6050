//! City identification and catalog lookup.

use serde::{Deserialize, Serialize};

use super::catalog::{CITIES, CITY_COUNT};
use crate::state::Disease;

/// Compact city identifier: an index into the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u8);

impl CityId {
    /// Catalog index of this city.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every city on the board.
    pub fn all() -> impl Iterator<Item = CityId> {
        (0..CITY_COUNT as u8).map(CityId)
    }

    /// The city's display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        city(self).name
    }

    /// The city's disease color.
    #[must_use]
    pub fn color(self) -> Disease {
        city(self).color
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of one city.
#[derive(Debug)]
pub struct CityDef {
    /// Display name, as used in action tokens.
    pub name: &'static str,
    /// Disease color this city belongs to.
    pub color: Disease,
    /// Cities directly connected to this one. Symmetric.
    pub adjacent: &'static [CityId],
}

/// Look up a city's static definition.
#[must_use]
pub fn city(id: CityId) -> &'static CityDef {
    &CITIES[id.index()]
}

/// Resolve a city name to its id. Case-insensitive.
#[must_use]
pub fn city_id(name: &str) -> Option<CityId> {
    CITIES
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
        .map(|i| CityId(i as u8))
}

/// Cities directly connected to `id`.
#[must_use]
pub fn neighbors(id: CityId) -> &'static [CityId] {
    city(id).adjacent
}

/// All cities of one disease color.
pub fn of_color(color: Disease) -> impl Iterator<Item = CityId> {
    CityId::all().filter(move |&c| c.color() == color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map;

    #[test]
    fn test_city_count() {
        assert_eq!(CITY_COUNT, 48);
        assert_eq!(CityId::all().count(), 48);
    }

    #[test]
    fn test_twelve_cities_per_color() {
        for color in Disease::ALL {
            assert_eq!(of_color(color).count(), 12, "{color} must have 12 cities");
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(city_id("Atlanta"), Some(map::ATLANTA));
        assert_eq!(city_id("atlanta"), Some(map::ATLANTA));
        assert_eq!(city_id("Ho Chi Minh City"), Some(map::HO_CHI_MINH_CITY));
        assert_eq!(city_id("Gotham"), None);
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(map::ATLANTA.color(), Disease::Blue);
        assert_eq!(map::LAGOS.color(), Disease::Yellow);
        assert_eq!(map::TEHRAN.color(), Disease::Black);
        assert_eq!(map::SYDNEY.color(), Disease::Red);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for a in CityId::all() {
            for &b in neighbors(a) {
                assert!(
                    neighbors(b).contains(&a),
                    "{} -> {} has no return edge",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn test_no_self_loops_or_duplicates() {
        for a in CityId::all() {
            let adj = neighbors(a);
            assert!(!adj.contains(&a), "{} connects to itself", a.name());
            for (i, &b) in adj.iter().enumerate() {
                assert!(!adj[i + 1..].contains(&b), "{} lists {} twice", a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_known_connections() {
        assert!(neighbors(map::ATLANTA).contains(&map::CHICAGO));
        assert!(neighbors(map::ATLANTA).contains(&map::WASHINGTON));
        assert!(neighbors(map::ATLANTA).contains(&map::MIAMI));
        assert_eq!(neighbors(map::ATLANTA).len(), 3);
        assert_eq!(neighbors(map::SANTIAGO), &[map::LIMA]);
        assert_eq!(neighbors(map::ISTANBUL).len(), 6);
    }

    #[test]
    fn test_city_id_serde() {
        let json = serde_json::to_string(&map::MADRID).unwrap();
        let back: CityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map::MADRID);
    }
}
