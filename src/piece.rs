//! Piece and player entities.

use crate::hex::AxialCoord;
use crate::ids::{PieceId, PlayerId};
use serde::{Deserialize, Serialize};

/// The three piece kinds. Strength per spec.md §3: Jarl 2, Warrior 1,
/// Shield 0 (Shields never attack or move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Jarl,
    Warrior,
    Shield,
}

impl PieceKind {
    pub fn base_strength(self) -> i32 {
        match self {
            PieceKind::Jarl => 2,
            PieceKind::Warrior => 1,
            PieceKind::Shield => 0,
        }
    }
}

/// A piece on the board. Shields have no owner; Jarls and Warriors do.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub owner: Option<PlayerId>,
    pub position: AxialCoord,
}

impl Piece {
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }
}

/// A player entity. Cosmetic attributes (`display_color`) are carried
/// purely as pass-through data; the core never interprets them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub display_color: String,
    pub eliminated: bool,
}
