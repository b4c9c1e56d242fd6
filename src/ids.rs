//! Unique-id generation for pieces and players.
//!
//! Ids are minted once, at setup time; no operation in this crate creates a
//! piece or player afterward, so the generator only needs to run during
//! `create_initial_state`. It is kept as an explicit value (rather than a
//! global counter) so the builder stays a pure function of its inputs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdGenerator {
    next_piece: u32,
    next_player: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_piece_id(&mut self) -> PieceId {
        let id = PieceId(self.next_piece);
        self.next_piece += 1;
        id
    }

    pub fn next_player_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_player);
        self.next_player += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_distinct() {
        let mut gen = IdGenerator::new();
        let a = gen.next_piece_id();
        let b = gen.next_piece_id();
        assert_ne!(a, b);
        assert!(a.0 < b.0);

        let p0 = gen.next_player_id();
        let p1 = gen.next_player_id();
        assert_ne!(p0, p1);
    }
}
