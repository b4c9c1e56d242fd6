//! Deterministic core rules engine for a turn-based, hex-grid, push-combat
//! strategy game. The crate exposes a pure value (`GameState`) and a small
//! set of functions over it; it performs no I/O and holds no global state.

mod apply;
mod combat;
mod config;
mod error;
mod event;
mod hex;
mod ids;
mod moves;
mod piece;
mod push;
mod setup;
mod state;
mod validate;
mod victory;

pub use apply::{apply_move, ApplyResult};
pub use combat::{calculate_combat, CombatOutcome, CombatResult};
pub use config::{config_for, BuilderError, GameConfig};
pub use error::ErrorKind;
pub use event::{EliminationCause, Event};
pub use hex::{AxialCoord, HexDirection, HexKey, ALL_DIRECTIONS};
pub use ids::{PieceId, PlayerId};
pub use moves::{get_reachable_hexes, get_valid_moves, ReachableHex};
pub use piece::{Piece, PieceKind, Player};
pub use push::{resolve_push, PushResult, Terminator};
pub use setup::create_initial_state;
pub use state::{GameState, Phase, WinCondition, STALEMATE_ROUNDS};
pub use validate::{validate_move, MoveCommand, ValidMove, ValidationResult};
pub use victory::check_win_conditions;
