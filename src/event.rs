//! The event log emitted by `apply_move`.

use crate::hex::AxialCoord;
use crate::ids::{PieceId, PlayerId};
use crate::state::WinCondition;
use serde::{Deserialize, Serialize};

/// Why a piece was removed from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationCause {
    /// Pushed off the board edge.
    Edge,
    /// Owner's Jarl was removed; the warrior starves with its leader.
    Starvation,
}

/// One entry in the ordered event log produced by a successful
/// `apply_move`. Events carry identifiers and coordinate copies only, never
/// references into the state (spec.md §3 "Ownership").
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Event {
    Move {
        piece_id: PieceId,
        from: AxialCoord,
        to: AxialCoord,
        has_momentum: bool,
    },
    Push {
        piece_id: PieceId,
        from: AxialCoord,
        to: AxialCoord,
        push_direction: crate::hex::HexDirection,
        depth: u32,
    },
    Eliminated {
        piece_id: PieceId,
        player_id: Option<PlayerId>,
        position: AxialCoord,
        cause: EliminationCause,
    },
    GameEnded {
        winner_id: PlayerId,
        win_condition: WinCondition,
    },
    TurnEnded {
        player_id: PlayerId,
        next_player_id: PlayerId,
        turn_number: u32,
    },
}
