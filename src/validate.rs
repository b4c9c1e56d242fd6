//! Move validation: the ordered checks of spec.md §4.4.

use crate::error::ErrorKind;
use crate::hex::{line_direction, line_walk, AxialCoord, HexDirection};
use crate::ids::{PieceId, PlayerId};
use crate::piece::PieceKind;
use crate::state::{GameState, Phase};

/// The command a caller wants to perform: move (or attack into) `piece_id`
/// toward `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCommand {
    pub piece_id: PieceId,
    pub destination: AxialCoord,
}

/// A validator acceptance, including the momentum flag and an optional
/// throne-crossing clamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidMove {
    pub has_momentum: bool,
    pub adjusted_destination: Option<AxialCoord>,
    pub direction: HexDirection,
    pub distance: i32,
}

pub type ValidationResult = Result<ValidMove, ErrorKind>;

/// Run the validator's ordered checks (spec.md §4.4) and report the first
/// failure, or the accepted move's details.
pub fn validate_move(
    state: &GameState,
    acting_player: PlayerId,
    command: MoveCommand,
) -> ValidationResult {
    validate_move_inner(state, acting_player, command, true)
}

/// Same checks as `validate_move`, but skips the `NotYourTurn` check (spec.md
/// §4.8: reachability queries report a piece's legal destinations "ignoring
/// the turn check, since this is a query"). Used by `moves::get_reachable_hexes`.
pub(crate) fn validate_move_for_query(
    state: &GameState,
    acting_player: PlayerId,
    command: MoveCommand,
) -> ValidationResult {
    validate_move_inner(state, acting_player, command, false)
}

fn validate_move_inner(
    state: &GameState,
    acting_player: PlayerId,
    command: MoveCommand,
    enforce_turn: bool,
) -> ValidationResult {
    if !matches!(state.phase, Phase::Playing | Phase::Starvation) {
        return Err(ErrorKind::GameNotPlaying);
    }

    let piece = state.piece(command.piece_id).ok_or(ErrorKind::PieceNotFound)?;

    if matches!(piece.kind, PieceKind::Shield) {
        return Err(ErrorKind::ShieldCannotMove);
    }

    if piece.owner != Some(acting_player) {
        return Err(ErrorKind::NotYourPiece);
    }

    if enforce_turn && state.current_player_id != Some(acting_player) {
        return Err(ErrorKind::NotYourTurn);
    }

    if !command.destination.is_on_board(state.config.board_radius) {
        return Err(ErrorKind::DestinationOffBoard);
    }

    let origin = piece.position;
    let direction = line_direction(origin, command.destination).ok_or(ErrorKind::MoveNotStraightLine)?;

    let distance = origin.distance_to(command.destination);
    match piece.kind {
        PieceKind::Warrior => {
            if !(1..=2).contains(&distance) {
                return Err(ErrorKind::InvalidDistanceWarrior);
            }
        }
        PieceKind::Jarl => {
            if !(1..=2).contains(&distance) {
                return Err(ErrorKind::InvalidDistanceJarl);
            }
            if distance == 2 && !has_draft(state, piece, direction) {
                return Err(ErrorKind::JarlNeedsDraftForTwoHex);
            }
        }
        PieceKind::Shield => unreachable!("shields already rejected above"),
    }

    let path = line_walk(origin, command.destination);
    let path_clear = path[1..path.len() - 1]
        .iter()
        .all(|h| state.piece_at(*h).is_none());
    if !path_clear {
        return Err(ErrorKind::PathBlocked);
    }

    if matches!(piece.kind, PieceKind::Warrior) && command.destination == AxialCoord::ORIGIN {
        return Err(ErrorKind::WarriorCannotEnterThrone);
    }

    if let Some(occupant) = state.piece_at(command.destination) {
        if occupant.owner == Some(acting_player) {
            return Err(ErrorKind::DestinationOccupiedFriendly);
        }
    }

    let has_momentum = distance == 2;
    let mut adjusted_destination = None;
    if matches!(piece.kind, PieceKind::Jarl) && distance == 2 && command.destination != AxialCoord::ORIGIN {
        // A 2-hex Jarl move whose line crosses the throne without ending
        // there clamps to the throne (spec.md §4.4). Only intermediate hexes
        // count here: the origin endpoint is the Jarl's own starting hex, not
        // a crossing, so a Jarl moving away from the throne must not clamp.
        if path[1..path.len() - 1].iter().any(|h| *h == AxialCoord::ORIGIN) {
            adjusted_destination = Some(AxialCoord::ORIGIN);
        }
    }

    Ok(ValidMove {
        has_momentum,
        adjusted_destination,
        direction,
        distance,
    })
}

/// A Jarl moving in direction `d` has a draft iff walking opposite `d` from
/// the Jarl finds at least two friendly pieces before any enemy, shield, or
/// off-board hex. Gaps between friendlies are permitted.
fn has_draft(state: &GameState, jarl: &crate::piece::Piece, direction: HexDirection) -> bool {
    let opposite = direction.opposite();
    let mut friendly_count = 0;
    let mut cursor = jarl.position;
    loop {
        cursor = cursor.neighbor(opposite);
        if !cursor.is_on_board(state.config.board_radius) {
            break;
        }
        match state.piece_at(cursor) {
            None => continue, // gap: keep walking
            Some(occupant) => {
                if occupant.owner == jarl.owner {
                    friendly_count += 1;
                    if friendly_count >= 2 {
                        return true;
                    }
                } else {
                    break; // enemy or shield: terminate
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_for;
    use crate::ids::IdGenerator;
    use crate::piece::{Piece, Player};
    use crate::state::{GameState, Phase};

    fn make_state(pieces: Vec<Piece>, players: Vec<Player>, current: PlayerId) -> GameState {
        GameState {
            game_id: 1,
            phase: Phase::Playing,
            config: config_for(2, None).unwrap(),
            players,
            pieces,
            current_player_id: Some(current),
            turn_number: 1,
            round_number: 1,
            rounds_since_last_elimination: 0,
            winner_id: None,
            win_condition: None,
            ids: IdGenerator::new(),
        }
    }

    fn player(id: u32, name: &str) -> Player {
        Player {
            id: PlayerId(id),
            display_name: name.to_string(),
            display_color: "#fff".to_string(),
            eliminated: false,
        }
    }

    #[test]
    fn warrior_one_hex_move_is_valid_without_momentum() {
        let p1 = player(0, "P1");
        let p2 = player(1, "P2");
        let warrior = Piece {
            id: PieceId(0),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(1, 0),
        };
        let enemy = Piece {
            id: PieceId(1),
            kind: PieceKind::Warrior,
            owner: Some(p2.id),
            position: AxialCoord::new(-1, 0),
        };
        let state = make_state(vec![warrior, enemy], vec![p1.clone(), p2], p1.id);

        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: warrior.id,
                destination: AxialCoord::new(2, 0),
            },
        )
        .unwrap();
        assert!(!result.has_momentum);
        assert_eq!(result.distance, 1);
    }

    #[test]
    fn shield_cannot_move() {
        let p1 = player(0, "P1");
        let shield = Piece {
            id: PieceId(0),
            kind: PieceKind::Shield,
            owner: None,
            position: AxialCoord::new(1, 0),
        };
        let state = make_state(vec![shield], vec![p1.clone()], p1.id);
        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: shield.id,
                destination: AxialCoord::new(2, 0),
            },
        );
        assert_eq!(result, Err(ErrorKind::ShieldCannotMove));
    }

    #[test]
    fn jarl_draft_move_allows_two_hexes() {
        let p1 = player(0, "P1");
        let jarl = Piece {
            id: PieceId(0),
            kind: PieceKind::Jarl,
            owner: Some(p1.id),
            position: AxialCoord::new(0, 0),
        };
        let w1 = Piece {
            id: PieceId(1),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(-1, 0),
        };
        let w2 = Piece {
            id: PieceId(2),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(-2, 0),
        };
        let state = make_state(vec![jarl, w1, w2], vec![p1.clone()], p1.id);
        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: jarl.id,
                destination: AxialCoord::new(2, 0),
            },
        )
        .unwrap();
        assert!(result.has_momentum);
        assert!(result.adjusted_destination.is_none());
    }

    #[test]
    fn jarl_two_hex_without_draft_is_rejected() {
        let p1 = player(0, "P1");
        let jarl = Piece {
            id: PieceId(0),
            kind: PieceKind::Jarl,
            owner: Some(p1.id),
            position: AxialCoord::new(0, 0),
        };
        let state = make_state(vec![jarl], vec![p1.clone()], p1.id);
        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: jarl.id,
                destination: AxialCoord::new(2, 0),
            },
        );
        assert_eq!(result, Err(ErrorKind::JarlNeedsDraftForTwoHex));
    }

    #[test]
    fn jarl_crossing_throne_clamps_destination() {
        let p1 = player(0, "P1");
        let jarl = Piece {
            id: PieceId(0),
            kind: PieceKind::Jarl,
            owner: Some(p1.id),
            position: AxialCoord::new(-1, 0),
        };
        let w1 = Piece {
            id: PieceId(1),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(-2, 0),
        };
        let w2 = Piece {
            id: PieceId(2),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(-3, 0),
        };
        let state = make_state(vec![jarl, w1, w2], vec![p1.clone()], p1.id);
        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: jarl.id,
                destination: AxialCoord::new(1, 0),
            },
        )
        .unwrap();
        assert_eq!(result.adjusted_destination, Some(AxialCoord::ORIGIN));
    }

    #[test]
    fn warrior_cannot_enter_throne() {
        let p1 = player(0, "P1");
        let warrior = Piece {
            id: PieceId(0),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(-1, 0),
        };
        let state = make_state(vec![warrior], vec![p1.clone()], p1.id);
        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: warrior.id,
                destination: AxialCoord::ORIGIN,
            },
        );
        assert_eq!(result, Err(ErrorKind::WarriorCannotEnterThrone));
    }

    #[test]
    fn path_blocked_by_intervening_piece() {
        let p1 = player(0, "P1");
        let p2 = player(1, "P2");
        let warrior = Piece {
            id: PieceId(0),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(0, 0),
        };
        let blocker = Piece {
            id: PieceId(1),
            kind: PieceKind::Warrior,
            owner: Some(p2.id),
            position: AxialCoord::new(1, 0),
        };
        let state = make_state(vec![warrior, blocker], vec![p1.clone(), p2], p1.id);
        let result = validate_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: warrior.id,
                destination: AxialCoord::new(2, 0),
            },
        );
        assert_eq!(result, Err(ErrorKind::PathBlocked));
    }
}
