//! Action token parsing.
//!
//! Action tokens are colon-delimited strings: a verb plus its operands,
//! e.g. `drive-ferry:Chicago` or `dispatcher-move-other:1:drive:Washington`.
//!
//! Structural problems — an unknown verb, wrong operand count, a
//! non-numeric player index — are `MalformedToken`. A well-formed token
//! naming an unknown city, color, or event card is a domain-rule
//! violation, the same class as any other bad action parameter.

use crate::actions::MoveKind;
use crate::error::EngineError;
use crate::map::{self, CityId};
use crate::state::{Disease, EventCard};

/// A parsed action token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionToken {
    DriveFerry(CityId),
    DirectFlight(CityId),
    CharterFlight(CityId),
    ShuttleFlight(CityId),
    BuildStation(Option<CityId>),
    Treat(Disease),
    ShareGive { player: usize, city: CityId },
    ShareTake { player: usize, city: CityId },
    DiscoverCure(Disease),
    DispatcherSummon { pawn: usize, to_pawn: usize },
    DispatcherMoveOther {
        pawn: usize,
        kind: MoveKind,
        city: CityId,
    },
    OperationsMove { city: CityId, discard: CityId },
    RetrieveEvent(EventCard),
}

/// Parse a colon-delimited action token.
pub fn parse_token(token: &str) -> Result<ActionToken, EngineError> {
    let parts: Vec<&str> = token.split(':').collect();
    let verb = parts[0];
    let args = &parts[1..];

    match verb {
        "drive-ferry" => Ok(ActionToken::DriveFerry(one_city(token, args)?)),
        "direct-flight" => Ok(ActionToken::DirectFlight(one_city(token, args)?)),
        "charter-flight" => Ok(ActionToken::CharterFlight(one_city(token, args)?)),
        "shuttle-flight" => Ok(ActionToken::ShuttleFlight(one_city(token, args)?)),
        "build-station" => match args {
            [] => Ok(ActionToken::BuildStation(None)),
            [demolish] => Ok(ActionToken::BuildStation(Some(resolve_city(demolish)?))),
            _ => Err(arity(token, "takes at most one operand")),
        },
        "treat" => match args {
            [color] => Ok(ActionToken::Treat(resolve_color(color)?)),
            _ => Err(arity(token, "takes exactly one disease color")),
        },
        "share-give" => {
            let (player, city) = index_and_city(token, args)?;
            Ok(ActionToken::ShareGive { player, city })
        }
        "share-take" => {
            let (player, city) = index_and_city(token, args)?;
            Ok(ActionToken::ShareTake { player, city })
        }
        "discover-cure" => match args {
            [color] => Ok(ActionToken::DiscoverCure(resolve_color(color)?)),
            _ => Err(arity(token, "takes exactly one disease color")),
        },
        "dispatcher-summon" => match args {
            [pawn, to_pawn] => Ok(ActionToken::DispatcherSummon {
                pawn: parse_index(token, pawn)?,
                to_pawn: parse_index(token, to_pawn)?,
            }),
            _ => Err(arity(token, "takes two player indices")),
        },
        "dispatcher-move-other" => match args {
            [pawn, kind, city] => Ok(ActionToken::DispatcherMoveOther {
                pawn: parse_index(token, pawn)?,
                kind: kind.parse::<MoveKind>().map_err(|()| {
                    EngineError::malformed(
                        token,
                        format!("`{kind}` is not one of drive|direct|charter|shuttle"),
                    )
                })?,
                city: resolve_city(city)?,
            }),
            _ => Err(arity(token, "takes a player index, a move kind, and a city")),
        },
        "operations-move" => match args {
            [city, discard] => Ok(ActionToken::OperationsMove {
                city: resolve_city(city)?,
                discard: resolve_city(discard)?,
            }),
            _ => Err(arity(token, "takes a destination and a card to discard")),
        },
        "retrieve-event" => match args {
            [event] => Ok(ActionToken::RetrieveEvent(resolve_event(event)?)),
            _ => Err(arity(token, "takes exactly one event card name")),
        },
        other => Err(EngineError::malformed(
            token,
            format!("unknown action `{other}`"),
        )),
    }
}

fn arity(token: &str, reason: &str) -> EngineError {
    EngineError::malformed(token, reason.to_string())
}

fn one_city(token: &str, args: &[&str]) -> Result<CityId, EngineError> {
    match args {
        [city] => resolve_city(city),
        _ => Err(arity(token, "takes exactly one city")),
    }
}

fn index_and_city(token: &str, args: &[&str]) -> Result<(usize, CityId), EngineError> {
    match args {
        [player, city] => Ok((parse_index(token, player)?, resolve_city(city)?)),
        _ => Err(arity(token, "takes a player index and a city")),
    }
}

fn parse_index(token: &str, raw: &str) -> Result<usize, EngineError> {
    raw.parse().map_err(|_| {
        EngineError::malformed(token, format!("`{raw}` is not a player index"))
    })
}

fn resolve_city(name: &str) -> Result<CityId, EngineError> {
    map::city_id(name).ok_or_else(|| EngineError::rule(format!("no such city: {name}")))
}

fn resolve_color(name: &str) -> Result<Disease, EngineError> {
    name.parse()
        .map_err(|()| EngineError::rule(format!("no such disease color: {name}")))
}

fn resolve_event(name: &str) -> Result<EventCard, EngineError> {
    name.parse()
        .map_err(|()| EngineError::rule(format!("no such event card: {name}")))
}
