//! Push-chain resolution: chain detection and the three terminator-specific
//! resolution modes (spec.md §4.6).

use crate::event::{EliminationCause, Event};
use crate::hex::{AxialCoord, HexDirection};
use crate::ids::PieceId;
use crate::piece::PieceKind;
use crate::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    Empty,
    Shield,
    /// The throne, and only when the piece that would land there is a Jarl.
    Throne,
    Edge,
}

/// The result of resolving a push: the new state, the events it produced
/// (not including the triggering `Move`, which the caller assembles), and
/// the ids of any eliminated pieces.
pub struct PushResult {
    pub new_state: GameState,
    pub events: Vec<Event>,
    pub eliminated_piece_ids: Vec<PieceId>,
}

/// Detect the push chain starting at the defender's position and walking in
/// `push_direction`. Returns the ordered chain (defender first) and the
/// terminator that stopped it.
fn detect_chain(
    state: &GameState,
    defender_pos: AxialCoord,
    push_direction: HexDirection,
) -> (Vec<PieceId>, Terminator) {
    let radius = state.config.board_radius;
    let mut chain = Vec::new();
    let mut cursor = defender_pos;

    loop {
        let piece = state
            .piece_at(cursor)
            .expect("chain position must hold a piece");
        chain.push(piece.id);

        let next = cursor.neighbor(push_direction);
        if !next.is_on_board(radius) {
            return (chain, Terminator::Edge);
        }
        match state.piece_at(next) {
            None => {
                if next == AxialCoord::ORIGIN {
                    // An empty throne only blocks a Jarl; for any other
                    // piece it is ordinary empty ground (spec.md §4.6.1
                    // "key nuance").
                    let would_be_jarl = matches!(piece.kind, PieceKind::Jarl);
                    if would_be_jarl {
                        return (chain, Terminator::Throne);
                    }
                }
                return (chain, Terminator::Empty);
            }
            Some(occupant) => {
                if matches!(occupant.kind, PieceKind::Shield) {
                    return (chain, Terminator::Shield);
                }
                cursor = next;
            }
        }
    }
}

/// Resolve a combat `Push` outcome. `attacker_from` is the attacker's
/// current position; `defender_pos` is the hex the attacker is striking
/// into.
pub fn resolve_push(
    state: &GameState,
    attacker_id: PieceId,
    attacker_from: AxialCoord,
    defender_pos: AxialCoord,
    push_direction: HexDirection,
    has_momentum: bool,
) -> PushResult {
    let (chain, terminator) = detect_chain(state, defender_pos, push_direction);
    let mut new_state = state.clone();
    let mut events = Vec::new();

    let attacker = new_state.piece(attacker_id).copied().expect("attacker must exist");
    events.push(Event::Move {
        piece_id: attacker_id,
        from: attacker_from,
        to: defender_pos,
        has_momentum,
    });
    new_state.piece_mut(attacker_id).unwrap().position = defender_pos;
    let _ = attacker;

    let mut eliminated_piece_ids = Vec::new();

    match terminator {
        Terminator::Empty => {
            // Every chain member shifts one hex in the push direction.
            // Shift from the tail backward so no member overwrites a hex
            // before the piece there has moved off it.
            for (depth, &piece_id) in chain.iter().enumerate() {
                let pos = new_state.piece(piece_id).unwrap().position;
                let to = pos.neighbor(push_direction);
                new_state.piece_mut(piece_id).unwrap().position = to;
                events.push(Event::Push {
                    piece_id,
                    from: pos,
                    to,
                    push_direction,
                    depth: depth as u32,
                });
            }
        }
        Terminator::Edge => {
            let (&last, rest) = chain.split_last().expect("chain is never empty");
            for (depth, &piece_id) in rest.iter().enumerate() {
                let pos = new_state.piece(piece_id).unwrap().position;
                let to = pos.neighbor(push_direction);
                new_state.piece_mut(piece_id).unwrap().position = to;
                events.push(Event::Push {
                    piece_id,
                    from: pos,
                    to,
                    push_direction,
                    depth: depth as u32,
                });
            }

            let ejected = new_state.piece(last).copied().unwrap();
            new_state.pieces.retain(|p| p.id != last);
            events.push(Event::Eliminated {
                piece_id: last,
                player_id: ejected.owner,
                position: ejected.position,
                cause: EliminationCause::Edge,
            });
            eliminated_piece_ids.push(last);
        }
        Terminator::Shield | Terminator::Throne => {
            // Compression: only the attacker moves; the chain stays put.
        }
    }

    PushResult {
        new_state,
        events,
        eliminated_piece_ids,
    }
}
