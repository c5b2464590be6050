//! The static board: 48 cities, 12 per color, with symmetric adjacency.

use super::city::{CityDef, CityId};
use crate::state::Disease;

/// Number of cities on the board.
pub const CITY_COUNT: usize = 48;

/// Named ids for every city. Indices match [`CITIES`].
pub mod ids {
    use super::CityId;

    // Blue
    pub const SAN_FRANCISCO: CityId = CityId(0);
    pub const CHICAGO: CityId = CityId(1);
    pub const ATLANTA: CityId = CityId(2);
    pub const MONTREAL: CityId = CityId(3);
    pub const NEW_YORK: CityId = CityId(4);
    pub const WASHINGTON: CityId = CityId(5);
    pub const LONDON: CityId = CityId(6);
    pub const MADRID: CityId = CityId(7);
    pub const PARIS: CityId = CityId(8);
    pub const ESSEN: CityId = CityId(9);
    pub const MILAN: CityId = CityId(10);
    pub const ST_PETERSBURG: CityId = CityId(11);

    // Yellow
    pub const LOS_ANGELES: CityId = CityId(12);
    pub const MEXICO_CITY: CityId = CityId(13);
    pub const MIAMI: CityId = CityId(14);
    pub const BOGOTA: CityId = CityId(15);
    pub const LIMA: CityId = CityId(16);
    pub const SANTIAGO: CityId = CityId(17);
    pub const BUENOS_AIRES: CityId = CityId(18);
    pub const SAO_PAULO: CityId = CityId(19);
    pub const LAGOS: CityId = CityId(20);
    pub const KINSHASA: CityId = CityId(21);
    pub const JOHANNESBURG: CityId = CityId(22);
    pub const KHARTOUM: CityId = CityId(23);

    // Black
    pub const ALGIERS: CityId = CityId(24);
    pub const ISTANBUL: CityId = CityId(25);
    pub const CAIRO: CityId = CityId(26);
    pub const MOSCOW: CityId = CityId(27);
    pub const BAGHDAD: CityId = CityId(28);
    pub const RIYADH: CityId = CityId(29);
    pub const TEHRAN: CityId = CityId(30);
    pub const KARACHI: CityId = CityId(31);
    pub const MUMBAI: CityId = CityId(32);
    pub const DELHI: CityId = CityId(33);
    pub const CHENNAI: CityId = CityId(34);
    pub const KOLKATA: CityId = CityId(35);

    // Red
    pub const BEIJING: CityId = CityId(36);
    pub const SEOUL: CityId = CityId(37);
    pub const SHANGHAI: CityId = CityId(38);
    pub const TOKYO: CityId = CityId(39);
    pub const OSAKA: CityId = CityId(40);
    pub const TAIPEI: CityId = CityId(41);
    pub const HONG_KONG: CityId = CityId(42);
    pub const BANGKOK: CityId = CityId(43);
    pub const JAKARTA: CityId = CityId(44);
    pub const HO_CHI_MINH_CITY: CityId = CityId(45);
    pub const MANILA: CityId = CityId(46);
    pub const SYDNEY: CityId = CityId(47);
}

use ids::*;

/// The full board. Index with `CityId::index()`.
pub static CITIES: [CityDef; CITY_COUNT] = [
    CityDef {
        name: "San Francisco",
        color: Disease::Blue,
        adjacent: &[CHICAGO, LOS_ANGELES, TOKYO, MANILA],
    },
    CityDef {
        name: "Chicago",
        color: Disease::Blue,
        adjacent: &[SAN_FRANCISCO, LOS_ANGELES, MEXICO_CITY, ATLANTA, MONTREAL],
    },
    CityDef {
        name: "Atlanta",
        color: Disease::Blue,
        adjacent: &[CHICAGO, WASHINGTON, MIAMI],
    },
    CityDef {
        name: "Montreal",
        color: Disease::Blue,
        adjacent: &[CHICAGO, NEW_YORK, WASHINGTON],
    },
    CityDef {
        name: "New York",
        color: Disease::Blue,
        adjacent: &[MONTREAL, WASHINGTON, LONDON, MADRID],
    },
    CityDef {
        name: "Washington",
        color: Disease::Blue,
        adjacent: &[ATLANTA, MONTREAL, NEW_YORK, MIAMI],
    },
    CityDef {
        name: "London",
        color: Disease::Blue,
        adjacent: &[NEW_YORK, MADRID, PARIS, ESSEN],
    },
    CityDef {
        name: "Madrid",
        color: Disease::Blue,
        adjacent: &[NEW_YORK, LONDON, PARIS, ALGIERS, SAO_PAULO],
    },
    CityDef {
        name: "Paris",
        color: Disease::Blue,
        adjacent: &[LONDON, MADRID, ESSEN, MILAN, ALGIERS],
    },
    CityDef {
        name: "Essen",
        color: Disease::Blue,
        adjacent: &[LONDON, PARIS, MILAN, ST_PETERSBURG],
    },
    CityDef {
        name: "Milan",
        color: Disease::Blue,
        adjacent: &[ESSEN, PARIS, ISTANBUL],
    },
    CityDef {
        name: "St. Petersburg",
        color: Disease::Blue,
        adjacent: &[ESSEN, MOSCOW, ISTANBUL],
    },
    CityDef {
        name: "Los Angeles",
        color: Disease::Yellow,
        adjacent: &[SAN_FRANCISCO, CHICAGO, MEXICO_CITY, SYDNEY],
    },
    CityDef {
        name: "Mexico City",
        color: Disease::Yellow,
        adjacent: &[LOS_ANGELES, CHICAGO, MIAMI, BOGOTA, LIMA],
    },
    CityDef {
        name: "Miami",
        color: Disease::Yellow,
        adjacent: &[ATLANTA, WASHINGTON, MEXICO_CITY, BOGOTA],
    },
    CityDef {
        name: "Bogota",
        color: Disease::Yellow,
        adjacent: &[MEXICO_CITY, MIAMI, LIMA, BUENOS_AIRES, SAO_PAULO],
    },
    CityDef {
        name: "Lima",
        color: Disease::Yellow,
        adjacent: &[MEXICO_CITY, BOGOTA, SANTIAGO],
    },
    CityDef {
        name: "Santiago",
        color: Disease::Yellow,
        adjacent: &[LIMA],
    },
    CityDef {
        name: "Buenos Aires",
        color: Disease::Yellow,
        adjacent: &[BOGOTA, SAO_PAULO],
    },
    CityDef {
        name: "Sao Paulo",
        color: Disease::Yellow,
        adjacent: &[BOGOTA, BUENOS_AIRES, MADRID, LAGOS],
    },
    CityDef {
        name: "Lagos",
        color: Disease::Yellow,
        adjacent: &[SAO_PAULO, KINSHASA, KHARTOUM],
    },
    CityDef {
        name: "Kinshasa",
        color: Disease::Yellow,
        adjacent: &[LAGOS, KHARTOUM, JOHANNESBURG],
    },
    CityDef {
        name: "Johannesburg",
        color: Disease::Yellow,
        adjacent: &[KINSHASA, KHARTOUM],
    },
    CityDef {
        name: "Khartoum",
        color: Disease::Yellow,
        adjacent: &[LAGOS, KINSHASA, JOHANNESBURG, CAIRO],
    },
    CityDef {
        name: "Algiers",
        color: Disease::Black,
        adjacent: &[MADRID, PARIS, ISTANBUL, CAIRO],
    },
    CityDef {
        name: "Istanbul",
        color: Disease::Black,
        adjacent: &[MILAN, ST_PETERSBURG, MOSCOW, ALGIERS, CAIRO, BAGHDAD],
    },
    CityDef {
        name: "Cairo",
        color: Disease::Black,
        adjacent: &[ALGIERS, ISTANBUL, BAGHDAD, RIYADH, KHARTOUM],
    },
    CityDef {
        name: "Moscow",
        color: Disease::Black,
        adjacent: &[ST_PETERSBURG, ISTANBUL, TEHRAN],
    },
    CityDef {
        name: "Baghdad",
        color: Disease::Black,
        adjacent: &[ISTANBUL, CAIRO, RIYADH, KARACHI, TEHRAN],
    },
    CityDef {
        name: "Riyadh",
        color: Disease::Black,
        adjacent: &[CAIRO, BAGHDAD, KARACHI],
    },
    CityDef {
        name: "Tehran",
        color: Disease::Black,
        adjacent: &[MOSCOW, BAGHDAD, KARACHI, DELHI],
    },
    CityDef {
        name: "Karachi",
        color: Disease::Black,
        adjacent: &[BAGHDAD, RIYADH, TEHRAN, DELHI, MUMBAI],
    },
    CityDef {
        name: "Mumbai",
        color: Disease::Black,
        adjacent: &[KARACHI, DELHI, CHENNAI],
    },
    CityDef {
        name: "Delhi",
        color: Disease::Black,
        adjacent: &[TEHRAN, KARACHI, MUMBAI, CHENNAI, KOLKATA],
    },
    CityDef {
        name: "Chennai",
        color: Disease::Black,
        adjacent: &[MUMBAI, DELHI, KOLKATA, BANGKOK, JAKARTA],
    },
    CityDef {
        name: "Kolkata",
        color: Disease::Black,
        adjacent: &[DELHI, CHENNAI, BANGKOK, HONG_KONG],
    },
    CityDef {
        name: "Beijing",
        color: Disease::Red,
        adjacent: &[SHANGHAI, SEOUL],
    },
    CityDef {
        name: "Seoul",
        color: Disease::Red,
        adjacent: &[BEIJING, SHANGHAI, TOKYO],
    },
    CityDef {
        name: "Shanghai",
        color: Disease::Red,
        adjacent: &[BEIJING, SEOUL, TOKYO, TAIPEI, HONG_KONG],
    },
    CityDef {
        name: "Tokyo",
        color: Disease::Red,
        adjacent: &[SEOUL, SHANGHAI, OSAKA, SAN_FRANCISCO],
    },
    CityDef {
        name: "Osaka",
        color: Disease::Red,
        adjacent: &[TOKYO, TAIPEI],
    },
    CityDef {
        name: "Taipei",
        color: Disease::Red,
        adjacent: &[SHANGHAI, OSAKA, MANILA, HONG_KONG],
    },
    CityDef {
        name: "Hong Kong",
        color: Disease::Red,
        adjacent: &[SHANGHAI, TAIPEI, KOLKATA, BANGKOK, HO_CHI_MINH_CITY, MANILA],
    },
    CityDef {
        name: "Bangkok",
        color: Disease::Red,
        adjacent: &[KOLKATA, CHENNAI, HONG_KONG, HO_CHI_MINH_CITY, JAKARTA],
    },
    CityDef {
        name: "Jakarta",
        color: Disease::Red,
        adjacent: &[CHENNAI, BANGKOK, HO_CHI_MINH_CITY, SYDNEY],
    },
    CityDef {
        name: "Ho Chi Minh City",
        color: Disease::Red,
        adjacent: &[JAKARTA, BANGKOK, HONG_KONG, MANILA],
    },
    CityDef {
        name: "Manila",
        color: Disease::Red,
        adjacent: &[SAN_FRANCISCO, HONG_KONG, HO_CHI_MINH_CITY, TAIPEI, SYDNEY],
    },
    CityDef {
        name: "Sydney",
        color: Disease::Red,
        adjacent: &[JAKARTA, MANILA, LOS_ANGELES],
    },
];
