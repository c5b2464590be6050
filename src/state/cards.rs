//! Card types: player deck, infection deck, and event cards.
//!
//! Cards are tagged variants rather than loosely-typed records so every
//! transform can match exhaustively on the shape it is handed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::map::CityId;
use crate::state::Disease;

/// A card in the player deck, a hand, or the player discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCard {
    /// A city card, usable for flights, building, sharing, and curing.
    City(CityId),
    /// A one-off event card.
    Event(EventCard),
    /// An epidemic card. Never enters a hand; resolved on draw.
    Epidemic,
}

impl PlayerCard {
    /// The named city, if this is a city card.
    #[must_use]
    pub fn city(self) -> Option<CityId> {
        match self {
            PlayerCard::City(c) => Some(c),
            _ => None,
        }
    }

    /// The city's disease color, if this is a city card.
    #[must_use]
    pub fn color(self) -> Option<Disease> {
        self.city().map(CityId::color)
    }

    /// True if this card names `city`.
    #[must_use]
    pub fn is_city(self, city: CityId) -> bool {
        self.city() == Some(city)
    }
}

impl std::fmt::Display for PlayerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerCard::City(c) => write!(f, "{c}"),
            PlayerCard::Event(e) => write!(f, "{e}"),
            PlayerCard::Epidemic => f.write_str("Epidemic"),
        }
    }
}

/// The five event cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCard {
    /// Move any pawn to any city.
    Airlift,
    /// Build a research station anywhere, free of card cost.
    GovernmentGrant,
    /// Skip the next infection phase.
    OneQuietNight,
    /// Remove one card from the infection discard permanently.
    ResilientPopulation,
    /// Inspect and reorder the top of the infection deck.
    Forecast,
}

impl EventCard {
    /// All five event cards.
    pub const ALL: [EventCard; 5] = [
        EventCard::Airlift,
        EventCard::GovernmentGrant,
        EventCard::OneQuietNight,
        EventCard::ResilientPopulation,
        EventCard::Forecast,
    ];

    /// Kebab-case name, matching the action-token vocabulary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventCard::Airlift => "airlift",
            EventCard::GovernmentGrant => "government-grant",
            EventCard::OneQuietNight => "one-quiet-night",
            EventCard::ResilientPopulation => "resilient-population",
            EventCard::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for EventCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCard {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCard::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or(())
    }
}

/// A card in the infection deck or discard. Names a city; the disease
/// color follows from the city.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionCard(pub CityId);

impl InfectionCard {
    /// The named city.
    #[must_use]
    pub const fn city(self) -> CityId {
        self.0
    }

    /// The disease color placed when this card is drawn.
    #[must_use]
    pub fn color(self) -> Disease {
        self.0.color()
    }
}

impl std::fmt::Display for InfectionCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
