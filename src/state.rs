//! The game state value and its lifecycle phases.

use crate::config::GameConfig;
use crate::ids::{IdGenerator, PieceId, PlayerId};
use crate::piece::{Piece, Player};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Lobby,
    Setup,
    Playing,
    /// Entered once `rounds_since_last_elimination` crosses
    /// `STALEMATE_ROUNDS`. The validator treats this identically to
    /// `Playing`; see DESIGN.md for why the phase exists but is otherwise
    /// inert in the core.
    Starvation,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    Throne,
    LastStanding,
}

/// Rounds with no elimination after which the game moves from `Playing`
/// into `Starvation`. Purely observable; the core does not resolve a
/// stalemate on its own (spec.md §9 open question).
pub const STALEMATE_ROUNDS: u32 = 50;

/// The full game state. Every successful move returns a new value; the
/// prior state is left unchanged. Structural sharing is an implementation
/// detail, not an observable guarantee.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: u64,
    pub phase: Phase,
    pub config: GameConfig,
    /// Turn order is the order of this list.
    pub players: Vec<Player>,
    pub pieces: Vec<Piece>,
    pub current_player_id: Option<PlayerId>,
    pub turn_number: u32,
    pub round_number: u32,
    pub rounds_since_last_elimination: u32,
    pub winner_id: Option<PlayerId>,
    pub win_condition: Option<WinCondition>,
    pub(crate) ids: IdGenerator,
}

impl GameState {
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }

    pub fn piece_at(&self, pos: crate::hex::AxialCoord) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == pos)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn jarl_of(&self, owner: PlayerId) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.owner == Some(owner) && matches!(p.kind, crate::piece::PieceKind::Jarl))
    }

    pub fn living_jarls(&self) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(|p| matches!(p.kind, crate::piece::PieceKind::Jarl))
    }
}

