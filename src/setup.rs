//! Initial-state builder: symmetric Jarl, shield, and warrior placement.

use crate::config::{config_for, BuilderError, GameConfig};
use crate::hex::{generate_all_board_hexes, line_walk, AxialCoord, HexKey, ALL_DIRECTIONS};
use crate::ids::IdGenerator;
use crate::piece::{Piece, PieceKind, Player};
use crate::state::{GameState, Phase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const DISPLAY_COLORS: [&str; 6] = [
    "#e63946", "#457b9d", "#2a9d8f", "#f4a261", "#9d4edd", "#ffb703",
];

const MAX_SHIELD_RETRIES: u32 = 500;

/// Build a fresh `GameState` for the given player display names (2..6 of
/// them), with an optional turn timer and an optional RNG seed. Given the
/// same inputs and seed this always returns the same state; without a seed
/// the result is still a valid state, just not reproducible.
pub fn create_initial_state(
    player_names: &[String],
    turn_timer_ms: Option<u32>,
    seed: Option<u64>,
) -> Result<GameState, BuilderError> {
    let config = config_for(player_names.len() as u8, turn_timer_ms)?;
    let mut rng: ChaCha8Rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_rng(rand::thread_rng()).expect("thread_rng never fails"),
    };

    let mut ids = IdGenerator::new();
    let mut occupied: HashSet<HexKey> = HashSet::new();

    let jarl_positions = place_jarls(config.board_radius, config.player_count);
    for p in &jarl_positions {
        occupied.insert(p.to_key());
    }

    let shields = place_shields(&config, &jarl_positions, &mut rng, &mut occupied)?;

    let mut players = Vec::with_capacity(config.player_count as usize);
    let mut pieces = Vec::new();

    for (i, name) in player_names.iter().enumerate() {
        let player_id = ids.next_player_id();
        players.push(Player {
            id: player_id,
            display_name: name.clone(),
            display_color: DISPLAY_COLORS[i % DISPLAY_COLORS.len()].to_string(),
            eliminated: false,
        });

        let jarl_id = ids.next_piece_id();
        pieces.push(Piece {
            id: jarl_id,
            kind: PieceKind::Jarl,
            owner: Some(player_id),
            position: jarl_positions[i],
        });
    }

    for s in &shields {
        occupied.insert(s.to_key());
        pieces.push(Piece {
            id: ids.next_piece_id(),
            kind: PieceKind::Shield,
            owner: None,
            position: *s,
        });
    }

    for (i, player) in players.iter().enumerate() {
        let warriors = place_warriors(
            jarl_positions[i],
            config.warriors_per_player,
            config.board_radius,
            &occupied,
        );
        for w in &warriors {
            occupied.insert(w.to_key());
            pieces.push(Piece {
                id: ids.next_piece_id(),
                kind: PieceKind::Warrior,
                owner: Some(player.id),
                position: *w,
            });
        }
    }

    let first_player = players[0].id;
    let game_id = rng.gen::<u64>();

    Ok(GameState {
        game_id,
        phase: Phase::Playing,
        config,
        players,
        pieces,
        current_player_id: Some(first_player),
        turn_number: 1,
        round_number: 1,
        rounds_since_last_elimination: 0,
        winner_id: None,
        win_condition: None,
        ids,
    })
}

/// Place `player_count` Jarls on the board edge, as angularly spread as the
/// hex grid allows (spec.md §4.3 step 1).
fn place_jarls(radius: i8, player_count: u8) -> Vec<AxialCoord> {
    let mut edge_hexes: Vec<AxialCoord> = generate_all_board_hexes(radius)
        .into_iter()
        .filter(|h| h.is_on_edge(radius))
        .collect();
    edge_hexes.sort_by_key(|h| (h.q, h.r));

    let n = player_count as usize;
    let mut used: HashSet<HexKey> = HashSet::new();
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
        let mut best: Option<(AxialCoord, f64)> = None;
        for &hex in &edge_hexes {
            if used.contains(&hex.to_key()) {
                continue;
            }
            let diff = angular_distance(hex.to_angle(), theta);
            if best.map(|(_, d)| diff < d).unwrap_or(true) {
                best = Some((hex, diff));
            }
        }
        let chosen = best.expect("more edge hexes than players at every supported radius").0;
        used.insert(chosen.to_key());
        result.push(chosen);
    }
    result
}

fn angular_distance(a: f64, b: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut diff = (a - b).abs() % two_pi;
    if diff > std::f64::consts::PI {
        diff = two_pi - diff;
    }
    diff
}

/// Generate the symmetry orbit of `seed` for `player_count` players. The
/// hex grid only admits exact rotational symmetries that divide 6 (2, 3,
/// 6-fold); for player counts that don't divide 6 evenly (4, 5) the
/// rotation step is rounded to the nearest whole hex-direction step, which
/// is the closest approximation the grid can represent.
fn shield_orbit(seed: AxialCoord, player_count: u8) -> Vec<AxialCoord> {
    if player_count == 2 {
        return vec![seed, seed.rotate(3)];
    }
    let step = ((6.0 / player_count as f64).round() as i32).max(1);
    let mut seen = HashSet::new();
    let mut orbit = Vec::new();
    for k in 0..player_count as i32 {
        let hex = seed.rotate(k * step);
        if seen.insert(hex.to_key()) {
            orbit.push(hex);
        }
    }
    orbit
}

/// Place the config's shields symmetrically, retrying with a new seed hex
/// until every Jarl has a clear path to the throne (spec.md §4.3 step 2,
/// §4.3.1).
fn place_shields(
    config: &GameConfig,
    jarl_positions: &[AxialCoord],
    rng: &mut ChaCha8Rng,
    global_occupied: &HashSet<HexKey>,
) -> Result<Vec<AxialCoord>, BuilderError> {
    let radius = config.board_radius;
    let mut interior: Vec<AxialCoord> = generate_all_board_hexes(radius)
        .into_iter()
        .filter(|h| {
            let d = h.distance_to(AxialCoord::ORIGIN);
            d >= 1 && d <= (radius - 1) as i32
        })
        .collect();
    interior.sort_by_key(|h| (h.q, h.r));

    for _attempt in 0..MAX_SHIELD_RETRIES {
        let mut candidates = interior.clone();
        shuffle(&mut candidates, rng);

        let mut used: HashSet<HexKey> = global_occupied.clone();
        let mut shields: Vec<AxialCoord> = Vec::new();
        let target = config.shield_count as usize;

        for &seed in &candidates {
            if shields.len() >= target {
                break;
            }
            if used.contains(&seed.to_key()) {
                continue;
            }
            let orbit: Vec<AxialCoord> = shield_orbit(seed, config.player_count)
                .into_iter()
                .filter(|h| h.is_on_board(radius) && !used.contains(&h.to_key()))
                .collect();
            if orbit.is_empty() {
                continue;
            }
            if shields.len() + orbit.len() <= target {
                for h in &orbit {
                    used.insert(h.to_key());
                }
                shields.extend(orbit);
            }
            // Otherwise this whole orbit would overshoot the target; skip it
            // and keep trying other seeds.
        }

        if shields.len() < target {
            // No remaining whole orbit fits; fill the remainder with the
            // individually-closest valid hexes (nearest to the throne).
            for &h in &interior {
                if shields.len() >= target {
                    break;
                }
                if !used.contains(&h.to_key()) {
                    used.insert(h.to_key());
                    shields.push(h);
                }
            }
        }

        let (ok, _blocked) = validate_shield_paths(jarl_positions, &shields);
        if ok {
            return Ok(shields);
        }
    }

    Err(BuilderError::UnableToPlaceShields)
}

/// Fisher-Yates shuffle driven by the supplied RNG, for deterministic but
/// seed-dependent seed-hex ordering.
fn shuffle(items: &mut [AxialCoord], rng: &mut ChaCha8Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Path-validation predicate of spec.md §4.3.1: a path to the throne exists
/// for a Jarl iff the straight line from it to the throne contains no
/// shield on any intermediate hex.
pub fn validate_shield_paths(
    jarl_positions: &[AxialCoord],
    shields: &[AxialCoord],
) -> (bool, Vec<usize>) {
    let shield_set: HashSet<HexKey> = shields.iter().map(|h| h.to_key()).collect();
    let mut blocked = Vec::new();
    for (i, &jarl) in jarl_positions.iter().enumerate() {
        let path = line_walk(jarl, AxialCoord::ORIGIN);
        let clear = path[1..path.len().saturating_sub(1)]
            .iter()
            .all(|h| !shield_set.contains(&h.to_key()));
        if !clear {
            blocked.push(i);
        }
    }
    (blocked.is_empty(), blocked)
}

/// Place `count` warriors for one Jarl: first extend the straight line
/// toward the throne, skipping blocked hexes, then fall back to a BFS
/// expansion from the Jarl for any warriors the line couldn't fit (spec.md
/// §4.3 step 3).
fn place_warriors(
    jarl: AxialCoord,
    count: u8,
    radius: i8,
    occupied: &HashSet<HexKey>,
) -> Vec<AxialCoord> {
    let mut placed = Vec::new();
    let mut taken: HashSet<HexKey> = occupied.clone();

    let path = line_walk(jarl, AxialCoord::ORIGIN);
    for hex in path.iter().skip(1) {
        if placed.len() >= count as usize {
            break;
        }
        if *hex == AxialCoord::ORIGIN {
            continue; // throne: never a warrior hex
        }
        if taken.contains(&hex.to_key()) {
            continue; // shield or other piece already there: skip along the line
        }
        taken.insert(hex.to_key());
        placed.push(*hex);
    }

    if placed.len() < count as usize {
        let mut queue = std::collections::VecDeque::new();
        let mut visited: HashSet<HexKey> = HashSet::new();
        visited.insert(jarl.to_key());
        queue.push_back(jarl);

        while let Some(cur) = queue.pop_front() {
            if placed.len() >= count as usize {
                break;
            }
            for dir in ALL_DIRECTIONS {
                let next = cur.neighbor(dir);
                if !next.is_on_board(radius) || visited.contains(&next.to_key()) {
                    continue;
                }
                visited.insert(next.to_key());
                if next != AxialCoord::ORIGIN && !taken.contains(&next.to_key()) {
                    taken.insert(next.to_key());
                    placed.push(next);
                    if placed.len() >= count as usize {
                        break;
                    }
                }
                queue.push_back(next);
            }
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Player {}", i + 1)).collect()
    }

    #[test]
    fn two_players_are_diametrically_opposite() {
        let jarls = place_jarls(3, 2);
        assert_eq!(jarls.len(), 2);
        assert_eq!(jarls[0].rotate(3), jarls[1]);
    }

    #[test]
    fn three_players_are_well_separated() {
        let jarls = place_jarls(5, 3);
        for i in 0..3 {
            for j in (i + 1)..3 {
                let diff = angular_distance(jarls[i].to_angle(), jarls[j].to_angle());
                assert!(diff > std::f64::consts::PI / 3.0, "separation {} too small", diff);
            }
        }
    }

    #[test]
    fn all_jarl_positions_on_edge_and_distinct() {
        for n in 2u8..=6 {
            let cfg = config_for(n, None).unwrap();
            let jarls = place_jarls(cfg.board_radius, n);
            assert_eq!(jarls.len(), n as usize);
            let mut seen = HashSet::new();
            for j in &jarls {
                assert!(j.is_on_edge(cfg.board_radius));
                assert!(seen.insert(j.to_key()));
            }
        }
    }

    #[test]
    fn create_initial_state_is_deterministic_with_seed() {
        let a = create_initial_state(&names(3), None, Some(42)).unwrap();
        let b = create_initial_state(&names(3), None, Some(42)).unwrap();
        let a_positions: Vec<_> = a.pieces.iter().map(|p| (p.kind, p.position)).collect();
        let b_positions: Vec<_> = b.pieces.iter().map(|p| (p.kind, p.position)).collect();
        assert_eq!(format!("{:?}", a_positions), format!("{:?}", b_positions));
    }

    #[test]
    fn create_initial_state_satisfies_global_invariants() {
        for n in 2u8..=6 {
            let state = create_initial_state(&names(n as usize), None, Some(7)).unwrap();
            let radius = state.config.board_radius;

            let mut seen = HashSet::new();
            for p in &state.pieces {
                assert!(p.position.is_on_board(radius));
                assert!(seen.insert(p.position.to_key()), "duplicate position {:?}", p.position);
                if !matches!(p.kind, PieceKind::Jarl) {
                    assert_ne!(p.position, AxialCoord::ORIGIN);
                }
            }

            let shield_count = state
                .pieces
                .iter()
                .filter(|p| matches!(p.kind, PieceKind::Shield))
                .count();
            assert_eq!(shield_count, state.config.shield_count as usize);

            let warrior_count = state
                .pieces
                .iter()
                .filter(|p| matches!(p.kind, PieceKind::Warrior))
                .count();
            assert_eq!(
                warrior_count,
                state.config.warriors_per_player as usize * n as usize
            );
        }
    }

    #[test]
    fn rejects_bad_player_count() {
        assert!(matches!(
            create_initial_state(&names(1), None, Some(1)),
            Err(BuilderError::InvalidPlayerCount)
        ));
    }
}
