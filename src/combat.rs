//! Combat calculation: attack total vs. defense total (spec.md §4.5).

use crate::hex::{AxialCoord, HexDirection};
use crate::ids::PieceId;
use crate::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    Push,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatResult {
    pub attack_total: i32,
    pub defense_total: i32,
    pub outcome: CombatOutcome,
    /// Set only when `outcome == Push`; equal to the attack direction.
    pub push_direction: Option<HexDirection>,
}

/// Compute the outcome of an attack. `attacker_pos` is the hex the attacker
/// strikes from, which may differ from its current board position for a
/// 2-hex move being evaluated in advance (spec.md §4.5).
pub fn calculate_combat(
    state: &GameState,
    attacker_id: PieceId,
    attacker_pos: AxialCoord,
    defender_id: PieceId,
    defender_pos: AxialCoord,
    direction: HexDirection,
    has_momentum: bool,
) -> CombatResult {
    let attacker = state.piece(attacker_id).expect("attacker must exist");
    let defender = state.piece(defender_id).expect("defender must exist");

    let momentum_bonus = if has_momentum { 1 } else { 0 };
    let inline_support = friendly_walk_strength(state, attacker_pos, direction.opposite(), attacker.owner);
    let attack_total = attacker.kind.base_strength() + momentum_bonus + inline_support;

    let bracing = friendly_walk_strength(state, defender_pos, direction, defender.owner);
    let defense_total = defender.kind.base_strength() + bracing;

    if attack_total > defense_total {
        CombatResult {
            attack_total,
            defense_total,
            outcome: CombatOutcome::Push,
            push_direction: Some(direction),
        }
    } else {
        CombatResult {
            attack_total,
            defense_total,
            outcome: CombatOutcome::Blocked,
            push_direction: None,
        }
    }
}

/// Walk from `start` in `dir`, summing the strength of consecutive friendly
/// pieces (owned by `owner`). Stops at the first empty hex, enemy piece, or
/// off-board hex. No gaps permitted (unlike draft formation).
fn friendly_walk_strength(
    state: &GameState,
    start: AxialCoord,
    dir: HexDirection,
    owner: Option<crate::ids::PlayerId>,
) -> i32 {
    let mut total = 0;
    let mut cursor = start;
    loop {
        cursor = cursor.neighbor(dir);
        if !cursor.is_on_board(state.config.board_radius) {
            break;
        }
        match state.piece_at(cursor) {
            Some(p) if p.owner == owner && owner.is_some() => {
                total += p.kind.base_strength();
            }
            _ => break,
        }
    }
    total
}
