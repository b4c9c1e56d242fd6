//! Error taxonomy. Every fallible public function returns a tagged result
//! whose failure variant carries one of these; no error strings are meant
//! for end users, hosts localize from the variant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The validator's error taxonomy (spec.md §4.4, §6). Checks are
/// short-circuited in the order the variants are listed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ErrorKind {
    #[error("game is not in a playable phase")]
    GameNotPlaying,
    #[error("no piece with that id exists")]
    PieceNotFound,
    #[error("shields cannot move")]
    ShieldCannotMove,
    #[error("that piece does not belong to the acting player")]
    NotYourPiece,
    #[error("it is not the acting player's turn")]
    NotYourTurn,
    #[error("destination is off the board")]
    DestinationOffBoard,
    #[error("origin and destination are not on a straight line")]
    MoveNotStraightLine,
    #[error("warriors may only move 1 or 2 hexes")]
    InvalidDistanceWarrior,
    #[error("jarls may only move 1 or 2 hexes")]
    InvalidDistanceJarl,
    #[error("a jarl's 2-hex move requires a draft formation behind it")]
    JarlNeedsDraftForTwoHex,
    #[error("an intermediate hex on the path is occupied")]
    PathBlocked,
    #[error("warriors cannot enter the throne")]
    WarriorCannotEnterThrone,
    #[error("destination is occupied by a friendly piece")]
    DestinationOccupiedFriendly,
}
