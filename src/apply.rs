//! Public entry point: validate, resolve combat, push, and advance the
//! turn in one atomic step (spec.md §4.9, §5).

use crate::combat::{calculate_combat, CombatOutcome};
use crate::error::ErrorKind;
use crate::event::Event;
use crate::ids::PlayerId;
use crate::push::resolve_push;
use crate::state::GameState;
use crate::validate::{validate_move, MoveCommand};
use crate::victory::{advance_turn, apply_post_move_bookkeeping, tick_stalemate_clock};

/// The outcome of a successful `apply_move`: the resulting state and the
/// ordered event log that produced it.
pub struct ApplyResult {
    pub state: GameState,
    pub events: Vec<Event>,
}

/// Validate and apply one player's move. On success, returns the new state
/// and the full ordered event log (spec.md §5): `Move`, any `Push`es, any
/// `Eliminated`s (edge-caused first, then cascading starvation), an
/// optional `GameEnded`, and finally `TurnEnded`. On failure the original
/// state is untouched and the caller receives the first failing check.
pub fn apply_move(
    state: &GameState,
    acting_player: PlayerId,
    command: MoveCommand,
) -> Result<ApplyResult, ErrorKind> {
    let valid = validate_move(state, acting_player, command)?;
    let piece = state.piece(command.piece_id).expect("validated piece must exist");
    let origin = piece.position;
    let destination = valid.adjusted_destination.unwrap_or(command.destination);

    let defender = state.piece_at(destination).copied();

    let (mut new_state, mut events, any_elimination) = match defender {
        None => {
            let mut new_state = state.clone();
            new_state.piece_mut(command.piece_id).unwrap().position = destination;
            let events = vec![Event::Move {
                piece_id: command.piece_id,
                from: origin,
                to: destination,
                has_momentum: valid.has_momentum,
            }];
            (new_state, events, false)
        }
        Some(defender) => {
            let combat = calculate_combat(
                state,
                command.piece_id,
                origin,
                defender.id,
                destination,
                valid.direction,
                valid.has_momentum,
            );
            match combat.outcome {
                CombatOutcome::Blocked => {
                    // The attacker halts on the hex adjacent to the
                    // defender along the attack line; for a 1-hex attempt
                    // that is its starting hex, so nothing moves and no
                    // `Move` event is emitted (spec.md §4.6.3).
                    let mut new_state = state.clone();
                    let mut events = Vec::new();
                    if valid.distance == 2 {
                        let halt_at = origin.neighbor(valid.direction);
                        new_state.piece_mut(command.piece_id).unwrap().position = halt_at;
                        events.push(Event::Move {
                            piece_id: command.piece_id,
                            from: origin,
                            to: halt_at,
                            has_momentum: valid.has_momentum,
                        });
                    }
                    (new_state, events, false)
                }
                CombatOutcome::Push => {
                    let push_result = resolve_push(
                        state,
                        command.piece_id,
                        origin,
                        destination,
                        valid.direction,
                        valid.has_momentum,
                    );
                    let any_elimination = !push_result.eliminated_piece_ids.is_empty();
                    (push_result.new_state, push_result.events, any_elimination)
                }
            }
        }
    };

    events.extend(apply_post_move_bookkeeping(&mut new_state, any_elimination));

    if !matches!(new_state.phase, crate::state::Phase::Ended) {
        let round_before = new_state.round_number;
        advance_turn(&mut new_state);
        let round_advanced = new_state.round_number != round_before;
        tick_stalemate_clock(&mut new_state, round_advanced);

        events.push(Event::TurnEnded {
            player_id: acting_player,
            next_player_id: new_state.current_player_id.expect("a living player remains"),
            turn_number: new_state.turn_number,
        });
    }

    Ok(ApplyResult {
        state: new_state,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_for;
    use crate::hex::AxialCoord;
    use crate::ids::{IdGenerator, PieceId};
    use crate::piece::{Piece, PieceKind, Player};
    use crate::state::Phase;

    fn player(id: u32) -> Player {
        Player {
            id: PlayerId(id),
            display_name: "P".into(),
            display_color: "#fff".into(),
            eliminated: false,
        }
    }

    fn state_with(pieces: Vec<Piece>, players: Vec<Player>, current: u32) -> GameState {
        GameState {
            game_id: 1,
            phase: Phase::Playing,
            config: config_for(2, None).unwrap(),
            current_player_id: Some(PlayerId(current)),
            players,
            pieces,
            turn_number: 1,
            round_number: 1,
            rounds_since_last_elimination: 0,
            winner_id: None,
            win_condition: None,
            ids: IdGenerator::new(),
        }
    }

    #[test]
    fn simple_move_emits_move_and_turn_ended() {
        let p1 = player(0);
        let p2 = player(1);
        let warrior = Piece {
            id: PieceId(0),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(1, 0),
        };
        let state = state_with(vec![warrior], vec![p1.clone(), p2], 0);

        let result = apply_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: warrior.id,
                destination: AxialCoord::new(2, 0),
            },
        )
        .unwrap();

        assert!(matches!(result.events[0], Event::Move { .. }));
        assert!(matches!(result.events.last().unwrap(), Event::TurnEnded { .. }));
        assert_eq!(result.state.current_player_id, Some(PlayerId(1)));
        assert_eq!(
            result.state.piece(warrior.id).unwrap().position,
            AxialCoord::new(2, 0)
        );
    }

    #[test]
    fn one_hex_blocked_attack_leaves_attacker_in_place_with_no_move_event() {
        let p1 = player(0);
        let p2 = player(1);
        let warrior = Piece {
            id: PieceId(0),
            kind: PieceKind::Warrior,
            owner: Some(p1.id),
            position: AxialCoord::new(-2, 0),
        };
        let defender = Piece {
            id: PieceId(1),
            kind: PieceKind::Warrior,
            owner: Some(p2.id),
            position: AxialCoord::new(-1, 0),
        };
        let state = state_with(vec![warrior, defender], vec![p1.clone(), p2], 0);

        let result = apply_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: warrior.id,
                destination: defender.position,
            },
        )
        .unwrap();

        assert_eq!(
            result.state.piece(warrior.id).unwrap().position,
            AxialCoord::new(-2, 0)
        );
        assert_eq!(
            result.state.piece(defender.id).unwrap().position,
            AxialCoord::new(-1, 0)
        );
        assert!(!result.events.iter().any(|e| matches!(e, Event::Move { .. })));
        assert!(matches!(result.events[0], Event::TurnEnded { .. }));
    }

    #[test]
    fn jarl_reaching_throne_ends_the_game() {
        let p1 = player(0);
        let p2 = player(1);
        let jarl = Piece {
            id: PieceId(0),
            kind: PieceKind::Jarl,
            owner: Some(p1.id),
            position: AxialCoord::new(1, 0),
        };
        let state = state_with(vec![jarl], vec![p1.clone(), p2], 0);

        let result = apply_move(
            &state,
            p1.id,
            MoveCommand {
                piece_id: jarl.id,
                destination: AxialCoord::ORIGIN,
            },
        )
        .unwrap();

        assert_eq!(result.state.phase, Phase::Ended);
        assert_eq!(result.state.winner_id, Some(p1.id));
        assert!(matches!(
            result.events.last().unwrap(),
            Event::GameEnded { winner_id, .. } if *winner_id == p1.id
        ));
    }
}
