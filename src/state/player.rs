//! Player pawns and the role capability table.
//!
//! Seven roles bend roughly ten action rules between them. Rather than
//! scattering `if role == ...` branches through the action transforms,
//! every exception is a capability query on [`Role`], so each rule lives
//! in one place and can be tested per role.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::map::CityId;
use crate::state::cards::{EventCard, PlayerCard};

/// Number of cards needed to cure a disease, absent role overrides.
pub const CURE_CARDS_REQUIRED: usize = 5;

/// Maximum hand size. The Contingency Planner's stored slot is exempt.
pub const HAND_LIMIT: usize = 7;

/// A player role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ContingencyPlanner,
    Dispatcher,
    Medic,
    OperationsExpert,
    QuarantineSpecialist,
    Researcher,
    Scientist,
}

impl Role {
    /// All seven roles.
    pub const ALL: [Role; 7] = [
        Role::ContingencyPlanner,
        Role::Dispatcher,
        Role::Medic,
        Role::OperationsExpert,
        Role::QuarantineSpecialist,
        Role::Researcher,
        Role::Scientist,
    ];

    /// Kebab-case role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::ContingencyPlanner => "contingency-planner",
            Role::Dispatcher => "dispatcher",
            Role::Medic => "medic",
            Role::OperationsExpert => "operations-expert",
            Role::QuarantineSpecialist => "quarantine-specialist",
            Role::Researcher => "researcher",
            Role::Scientist => "scientist",
        }
    }

    // === Capability table ===

    /// Cards of one color needed to discover a cure.
    #[must_use]
    pub const fn cure_cards_required(self) -> usize {
        match self {
            Role::Scientist => 4,
            _ => CURE_CARDS_REQUIRED,
        }
    }

    /// Treating removes every cube of the color, cured or not.
    #[must_use]
    pub const fn treats_all_cubes(self) -> bool {
        matches!(self, Role::Medic)
    }

    /// Moving this pawn clears cured diseases at the destination.
    #[must_use]
    pub const fn clears_cured_on_move(self) -> bool {
        matches!(self, Role::Medic)
    }

    /// Builds research stations without discarding the city card.
    #[must_use]
    pub const fn builds_without_card(self) -> bool {
        matches!(self, Role::OperationsExpert)
    }

    /// May give any city card when sharing, not just the current city's.
    #[must_use]
    pub const fn shares_any_card(self) -> bool {
        matches!(self, Role::Researcher)
    }

    /// May move other pawns and summon pawns together.
    #[must_use]
    pub const fn moves_other_pawns(self) -> bool {
        matches!(self, Role::Dispatcher)
    }

    /// Once per turn: from a station, discard any city card to go anywhere.
    #[must_use]
    pub const fn has_station_jump(self) -> bool {
        matches!(self, Role::OperationsExpert)
    }

    /// May store one event card retrieved from the player discard.
    #[must_use]
    pub const fn stores_events(self) -> bool {
        matches!(self, Role::ContingencyPlanner)
    }

    /// Prevents infection-engine placements in and around her city.
    #[must_use]
    pub const fn quarantines_neighbors(self) -> bool {
        matches!(self, Role::QuarantineSpecialist)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL.into_iter().find(|r| r.as_str() == s).ok_or(())
    }
}

/// One player pawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player's role.
    pub role: Role,
    /// Current city.
    pub city: CityId,
    /// Hand of city and event cards.
    pub hand: Vec<PlayerCard>,
    /// Contingency Planner's stored event. Exempt from the hand limit.
    pub stored_event: Option<EventCard>,
    /// Role special move already used this turn (Operations Expert).
    pub special_move_used: bool,
}

impl Player {
    /// Create a pawn at the given city.
    #[must_use]
    pub fn new(role: Role, city: CityId) -> Self {
        Self {
            role,
            city,
            hand: Vec::new(),
            stored_event: None,
            special_move_used: false,
        }
    }

    /// Position of the card naming `city` in this hand.
    #[must_use]
    pub fn find_city_card(&self, city: CityId) -> Option<usize> {
        self.hand.iter().position(|c| c.is_city(city))
    }

    /// True if the hand holds the card naming `city`.
    #[must_use]
    pub fn holds_city_card(&self, city: CityId) -> bool {
        self.find_city_card(city).is_some()
    }

    /// Position of an event card in this hand.
    #[must_use]
    pub fn find_event_card(&self, event: EventCard) -> Option<usize> {
        self.hand
            .iter()
            .position(|c| *c == PlayerCard::Event(event))
    }

    /// True if the hand is over the limit. The stored slot never counts.
    #[must_use]
    pub fn over_hand_limit(&self) -> bool {
        self.hand.len() > HAND_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("pilot".parse::<Role>().is_err());
    }

    #[test]
    fn test_cure_cards_required() {
        assert_eq!(Role::Scientist.cure_cards_required(), 4);
        for role in Role::ALL {
            if role != Role::Scientist {
                assert_eq!(role.cure_cards_required(), 5, "{role}");
            }
        }
    }

    #[test]
    fn test_capability_table_is_exclusive() {
        // Each override belongs to exactly one role.
        assert_eq!(Role::ALL.iter().filter(|r| r.treats_all_cubes()).count(), 1);
        assert_eq!(Role::ALL.iter().filter(|r| r.builds_without_card()).count(), 1);
        assert_eq!(Role::ALL.iter().filter(|r| r.shares_any_card()).count(), 1);
        assert_eq!(Role::ALL.iter().filter(|r| r.moves_other_pawns()).count(), 1);
        assert_eq!(Role::ALL.iter().filter(|r| r.stores_events()).count(), 1);
        assert_eq!(
            Role::ALL.iter().filter(|r| r.quarantines_neighbors()).count(),
            1
        );
    }

    #[test]
    fn test_find_city_card() {
        let mut player = Player::new(Role::Medic, map::ATLANTA);
        player.hand.push(PlayerCard::Event(EventCard::Airlift));
        player.hand.push(PlayerCard::City(map::CHICAGO));

        assert_eq!(player.find_city_card(map::CHICAGO), Some(1));
        assert!(player.holds_city_card(map::CHICAGO));
        assert!(!player.holds_city_card(map::MIAMI));
        assert_eq!(player.find_event_card(EventCard::Airlift), Some(0));
    }

    #[test]
    fn test_hand_limit() {
        let mut player = Player::new(Role::Scientist, map::ATLANTA);
        for _ in 0..7 {
            player.hand.push(PlayerCard::City(map::PARIS));
        }
        assert!(!player.over_hand_limit());

        player.hand.push(PlayerCard::City(map::LONDON));
        assert!(player.over_hand_limit());

        // The stored slot does not count against the limit.
        player.hand.pop();
        player.stored_event = Some(EventCard::Forecast);
        assert!(!player.over_hand_limit());
    }
}
