//! Game creation.
//!
//! Builds the initial snapshot: pawns in Atlanta with its research
//! station, shuffled infection deck, and a player deck dealt into opening
//! hands before the epidemic cards are folded into stacked sub-piles so
//! each third of the game holds roughly one epidemic per pile.
//!
//! Setup places no disease cubes; every reserve starts at 24.

use im::Vector;

use crate::error::EngineError;
use crate::map::{self, CityId};
use crate::state::{EventCard, GameState, InfectionCard, PlayerCard, Player, Role};

/// Smallest supported player count.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported player count.
pub const MAX_PLAYERS: usize = 4;
/// Fewest epidemic cards in the player deck.
pub const MIN_DIFFICULTY: usize = 4;
/// Most epidemic cards in the player deck.
pub const MAX_DIFFICULTY: usize = 6;

/// Configuration for a new game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    players: usize,
    difficulty: usize,
    seed: u64,
    roles: Option<Vec<Role>>,
}

impl GameConfig {
    /// Configure a game for `players` pawns with `difficulty` epidemic
    /// cards in the player deck.
    #[must_use]
    pub fn new(players: usize, difficulty: usize) -> Self {
        Self {
            players,
            difficulty,
            seed: 0,
            roles: None,
        }
    }

    /// Set the RNG seed. Games with the same config replay identically.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Assign roles explicitly instead of dealing them at random.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }
}

/// Opening hand size for a given player count.
fn opening_hand_size(players: usize) -> usize {
    match players {
        2 => 4,
        3 => 3,
        _ => 2,
    }
}

/// Create the initial game snapshot from a config.
pub fn new_game(config: &GameConfig) -> Result<GameState, EngineError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&config.players) {
        return Err(EngineError::rule(format!(
            "player count must be between {MIN_PLAYERS} and {MAX_PLAYERS} (got {})",
            config.players
        )));
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&config.difficulty) {
        return Err(EngineError::rule(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY} epidemics (got {})",
            config.difficulty
        )));
    }

    let mut state = GameState::empty(config.seed);

    // Roles: explicit, or dealt from a shuffled pool.
    let roles = match &config.roles {
        Some(roles) => {
            if roles.len() != config.players {
                return Err(EngineError::rule(format!(
                    "expected {} roles, got {}",
                    config.players,
                    roles.len()
                )));
            }
            for (i, role) in roles.iter().enumerate() {
                if roles[..i].contains(role) {
                    return Err(EngineError::rule(format!("duplicate role {role}")));
                }
            }
            roles.clone()
        }
        None => {
            let mut pool = Role::ALL.to_vec();
            state.rng.shuffle(&mut pool);
            pool.truncate(config.players);
            pool
        }
    };

    for role in roles {
        state.players.push(Player::new(role, map::ATLANTA));
    }

    // Atlanta starts with the only research station.
    if let Some(atlanta) = state.board.get_mut(&map::ATLANTA) {
        atlanta.has_station = true;
    }

    // Infection deck: all 48 city cards, shuffled. No cubes are placed.
    let mut infection: Vec<InfectionCard> = CityId::all().map(InfectionCard).collect();
    state.rng.shuffle(&mut infection);
    state.infection_deck = infection.into_iter().collect();

    // Player deck: 48 city cards + 5 events, shuffled, opening hands
    // dealt, then epidemics folded into stacked sub-piles.
    let mut deck: Vec<PlayerCard> = CityId::all().map(PlayerCard::City).collect();
    deck.extend(EventCard::ALL.map(PlayerCard::Event));
    state.rng.shuffle(&mut deck);

    let hand_size = opening_hand_size(config.players);
    for player in &mut state.players {
        player.hand.extend(deck.drain(..hand_size));
    }

    state.player_deck = stack_epidemic_piles(&mut state, deck, config.difficulty);

    log::debug!(
        "new game: {} players, {} epidemics, seed {}",
        config.players,
        config.difficulty,
        config.seed
    );

    Ok(state)
}

/// Split the remaining deck into `epidemics` near-equal piles, shuffle one
/// epidemic card into each, and stack them front-to-back. The front of the
/// result is the top of the player deck.
fn stack_epidemic_piles(
    state: &mut GameState,
    deck: Vec<PlayerCard>,
    epidemics: usize,
) -> Vector<PlayerCard> {
    let base = deck.len() / epidemics;
    let extra = deck.len() % epidemics;

    let mut stacked = Vector::new();
    let mut rest = deck;
    for i in 0..epidemics {
        let take = base + usize::from(i < extra);
        let mut pile: Vec<PlayerCard> = rest.drain(..take).collect();
        pile.push(PlayerCard::Epidemic);
        state.rng.shuffle(&mut pile);
        stacked.extend(pile);
    }
    stacked
}
