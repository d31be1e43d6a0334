//! Game configuration and its validation errors.

use derive_more::{Display, Error};

use crate::constants::{DEFAULT_SIZE, MAX_SIZE};
use crate::render::Markers;

/// Rejected configuration. None of these are fatal to a running session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("This game only supports 1 or 2 players.")]
    PlayerCount { requested: u32 },
    #[display("Board size must be between 1 and {}, got {size}.", MAX_SIZE)]
    BoardSize { size: usize },
    #[display(
        "Player markers must be two distinct visible characters, got '{player_one}' and '{player_two}'."
    )]
    Markers { player_one: char, player_two: char },
}

/// Settings shared by every game in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub markers: Markers,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            markers: Markers::default(),
        }
    }
}

impl GameConfig {
    pub fn new(size: usize, player_one: char, player_two: char) -> Result<Self, ConfigError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize { size });
        }
        Ok(Self {
            size,
            markers: Markers::new(player_one, player_two)?,
        })
    }
}
