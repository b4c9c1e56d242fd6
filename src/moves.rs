//! Move-space enumeration for UI/AI callers (spec.md §4.8).

use crate::combat::{calculate_combat, CombatResult};
use crate::hex::{AxialCoord, ALL_DIRECTIONS};
use crate::ids::PieceId;
use crate::piece::PieceKind;
use crate::state::GameState;
use crate::validate::{validate_move_for_query, MoveCommand};

/// One legal destination for a piece, with the combat outcome that would
/// result if the destination is occupied by an enemy.
#[derive(Clone, Copy, Debug)]
pub struct ReachableHex {
    pub destination: AxialCoord,
    pub combat_preview: Option<CombatResult>,
}

/// Every legal destination for `piece_id`, computed by probing the
/// validator against each candidate hex within 2 steps along the six
/// directions, skipping the current-player turn check since this is a
/// query rather than an attempted move. This mirrors the validator's other
/// rules exactly rather than duplicating them, so the two can never drift
/// apart.
pub fn get_reachable_hexes(state: &GameState, piece_id: PieceId) -> Vec<ReachableHex> {
    let Some(piece) = state.piece(piece_id) else {
        return Vec::new();
    };
    let Some(owner) = piece.owner else {
        return Vec::new();
    };
    if matches!(piece.kind, PieceKind::Shield) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for dir in ALL_DIRECTIONS {
        for steps in 1..=2i32 {
            let mut dest = piece.position;
            for _ in 0..steps {
                dest = dest.neighbor(dir);
            }
            if !dest.is_on_board(state.config.board_radius) {
                break;
            }
            let command = MoveCommand {
                piece_id,
                destination: dest,
            };
            let Ok(valid) = validate_move_for_query(state, owner, command) else {
                continue;
            };
            let final_dest = valid.adjusted_destination.unwrap_or(dest);
            let combat_preview = state.piece_at(final_dest).map(|defender| {
                calculate_combat(
                    state,
                    piece_id,
                    piece.position,
                    defender.id,
                    final_dest,
                    valid.direction,
                    valid.has_momentum,
                )
            });
            out.push(ReachableHex {
                destination: final_dest,
                combat_preview,
            });
        }
    }
    out
}

/// Every movable piece owned by `owner` paired with its reachable hexes.
/// Pieces with no legal destination are omitted.
pub fn get_valid_moves(state: &GameState, owner: crate::ids::PlayerId) -> Vec<(PieceId, Vec<ReachableHex>)> {
    state
        .pieces
        .iter()
        .filter(|p| p.owner == Some(owner) && !matches!(p.kind, PieceKind::Shield))
        .filter_map(|p| {
            let reachable = get_reachable_hexes(state, p.id);
            if reachable.is_empty() {
                None
            } else {
                Some((p.id, reachable))
            }
        })
        .collect()
}
