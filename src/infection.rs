//! Infection and outbreak engine.
//!
//! Draws infection cards during the Infect phase and owns the cube
//! placement rules every other part of the engine funnels through: the
//! 3-cube ceiling, outbreak cascades, eradication and quarantine
//! exemptions, and the two loss conditions (8th outbreak, empty reserve).
//!
//! Cascades run on an explicit work-list with a per-cascade visited set,
//! so a city never outbreaks twice in one cascade no matter how many
//! paths revisit it, and the cascade chain is recorded directly in
//! propagation order instead of being reconstructed from board diffs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::EngineError;
use crate::map::{self, CityId};
use crate::state::{
    CureStatus, Disease, GameState, GameStatus, Phase, OUTBREAK_THRESHOLD,
};

/// Outbreak count that loses the game.
pub const OUTBREAK_LIMIT: u8 = 8;

/// Why a required cube placement was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prevented {
    /// The color is eradicated; no cube of it is ever placed again.
    Eradicated,
    /// A Quarantine Specialist protects the city.
    Quarantined,
}

/// One step of an infection resolution, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfectionEvent {
    /// An infection card came off the deck.
    CardDrawn { city: CityId, color: Disease },
    /// A cube moved from the reserve onto the board.
    CubePlaced { city: CityId, color: Disease },
    /// A placement was skipped.
    PlacementPrevented {
        city: CityId,
        color: Disease,
        reason: Prevented,
    },
    /// A city at the cube ceiling spilled over to its neighbors.
    Outbreak { city: CityId, color: Disease },
    /// The reserve ran dry on a required placement. Game lost.
    SupplyExhausted { color: Disease },
    /// The 8th outbreak. Game lost.
    OutbreakLimitReached,
    /// One Quiet Night consumed; the phase did nothing.
    PhaseSkipped,
}

/// Ordered record of everything an infection resolution did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionReport {
    /// Events in the order they occurred.
    pub events: Vec<InfectionEvent>,
}

impl InfectionReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: InfectionEvent) {
        self.events.push(event);
    }

    /// Cities that outbroke, in cascade order.
    #[must_use]
    pub fn outbreaks(&self) -> Vec<CityId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                InfectionEvent::Outbreak { city, .. } => Some(*city),
                _ => None,
            })
            .collect()
    }

    /// Total cubes placed during this resolution.
    #[must_use]
    pub fn cubes_placed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, InfectionEvent::CubePlaced { .. }))
            .count()
    }
}

/// Resolve the Infect phase: draw `infection_rate` cards and place cubes,
/// cascading outbreaks as required.
///
/// A pending One Quiet Night makes the phase a recorded no-op and clears
/// the flag. Losses discovered mid-resolution are successful transitions
/// that set `status = Lost`; cards already drawn stay in the discard.
pub fn infect_cities(state: &GameState) -> Result<(GameState, InfectionReport), EngineError> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }
    if state.phase != Phase::Infect {
        return Err(EngineError::PhaseViolation {
            expected: Phase::Infect,
            actual: state.phase,
        });
    }

    let mut next = state.clone();
    let mut report = InfectionReport::new();

    if next.skip_next_infection {
        next.skip_next_infection = false;
        report.push(InfectionEvent::PhaseSkipped);
        log::debug!("infection phase skipped");
        return Ok((next, report));
    }

    let rate = next.infection_rate();
    for _ in 0..rate {
        if next.status != GameStatus::Ongoing {
            break;
        }
        let Some(card) = next.infection_deck.pop_front() else {
            break;
        };
        next.infection_discard.push_front(card);
        report.push(InfectionEvent::CardDrawn {
            city: card.city(),
            color: card.color(),
        });
        run_cascade(&mut next, card.city(), card.color(), 1, &mut report);
    }

    Ok((next, report))
}

/// Attempt `attempts` cube placements of `color` at `origin`, cascading
/// outbreaks across the board. One visited set covers the whole call, so
/// each city outbreaks at most once per cascade.
///
/// Used by the infect phase (one attempt per drawn card) and by epidemic
/// resolution (three attempts for the bottom card).
pub(crate) fn run_cascade(
    state: &mut GameState,
    origin: CityId,
    color: Disease,
    attempts: u8,
    report: &mut InfectionReport,
) {
    if state.cures[color] == CureStatus::Eradicated {
        report.push(InfectionEvent::PlacementPrevented {
            city: origin,
            color,
            reason: Prevented::Eradicated,
        });
        return;
    }

    // Pending placement attempts, processed in discovery order.
    let mut work: SmallVec<[CityId; 16]> = SmallVec::new();
    for _ in 0..attempts {
        work.push(origin);
    }
    let mut visited = rustc_hash::FxHashSet::default();
    let mut cursor = 0;

    while cursor < work.len() {
        let target = work[cursor];
        cursor += 1;

        if state.quarantined(target) {
            report.push(InfectionEvent::PlacementPrevented {
                city: target,
                color,
                reason: Prevented::Quarantined,
            });
            continue;
        }

        if state.cubes_at(target, color) < OUTBREAK_THRESHOLD {
            if state.cube_supply[color] == 0 {
                state.status = GameStatus::Lost;
                report.push(InfectionEvent::SupplyExhausted { color });
                log::debug!("{color} reserve exhausted at {target}; game lost");
                return;
            }
            state.cube_supply[color] -= 1;
            if let Some(city) = state.board.get_mut(&target) {
                city.cubes[color] += 1;
            }
            report.push(InfectionEvent::CubePlaced { city: target, color });
        } else {
            if !visited.insert(target) {
                continue;
            }
            state.outbreak_count += 1;
            report.push(InfectionEvent::Outbreak { city: target, color });
            log::debug!(
                "outbreak #{} at {target} ({color})",
                state.outbreak_count
            );
            if state.outbreak_count >= OUTBREAK_LIMIT {
                state.status = GameStatus::Lost;
                report.push(InfectionEvent::OutbreakLimitReached);
                return;
            }
            for &neighbor in map::neighbors(target) {
                work.push(neighbor);
            }
        }
    }
}
