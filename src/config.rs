//! Player-count -> board configuration table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable per-game configuration, created once at setup time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: u8,
    pub board_radius: i8,
    pub shield_count: u8,
    pub warriors_per_player: u8,
    /// Carried but not enforced by the core; a host's own clock drives
    /// any timeout behavior.
    pub turn_timer_ms: Option<u32>,
}

impl GameConfig {
    /// Total hexes on a board of this config's radius: `3r^2 + 3r + 1`.
    pub fn total_board_hexes(&self) -> u32 {
        let r = self.board_radius as i32;
        (3 * r * r + 3 * r + 1) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BuilderError {
    #[error("player count must be between 2 and 6")]
    InvalidPlayerCount,
    #[error("could not place shields with a valid path to the throne for every player")]
    UnableToPlaceShields,
}

struct ConfigRow {
    radius: i8,
    shields: u8,
    warriors: u8,
}

/// Config table of spec.md §3, indexed by `player_count - 2`.
const TABLE: [ConfigRow; 5] = [
    ConfigRow { radius: 3, shields: 5, warriors: 5 }, // 2 players
    ConfigRow { radius: 5, shields: 4, warriors: 5 }, // 3 players
    ConfigRow { radius: 6, shields: 4, warriors: 4 }, // 4 players
    ConfigRow { radius: 7, shields: 3, warriors: 4 }, // 5 players
    ConfigRow { radius: 8, shields: 3, warriors: 4 }, // 6 players
];

/// Build a `GameConfig` for the given player count (2..=6).
pub fn config_for(player_count: u8, turn_timer_ms: Option<u32>) -> Result<GameConfig, BuilderError> {
    if !(2..=6).contains(&player_count) {
        return Err(BuilderError::InvalidPlayerCount);
    }
    let row = &TABLE[(player_count - 2) as usize];
    Ok(GameConfig {
        player_count,
        board_radius: row.radius,
        shield_count: row.shields,
        warriors_per_player: row.warriors,
        turn_timer_ms,
    })
}
