//! Property-based checks of the structural invariants that must hold for
//! any position reachable by applying pseudo-legal moves from the start.

use proptest::prelude::*;

use rotary_chess::movegen::generate_moves;
use rotary_chess::position::Position;

/// Plays up to `len(path)` pseudo-legal moves from the starting position,
/// picking the `path[i] % count`-th move at each ply, and returns every
/// position visited along the way (including the start).
fn play_path(path: &[u8]) -> Vec<Position> {
    let mut position = Position::init();
    let mut visited = vec![position.clone()];
    for &choice in path {
        let moves = generate_moves(&position);
        if moves.is_empty() {
            break;
        }
        let index = choice as usize % moves.len();
        let mv = *moves.iter().nth(index).unwrap();
        position.apply_move(mv);
        position.rotate();
        visited.push(position.clone());
    }
    visited
}

proptest! {
    #[test]
    fn every_reachable_position_is_structurally_valid(path in prop::collection::vec(0u8..40, 0..12)) {
        for position in play_path(&path) {
            prop_assert!(position.is_position());
        }
    }

    #[test]
    fn rotating_twice_is_the_identity(path in prop::collection::vec(0u8..40, 0..8)) {
        for position in play_path(&path) {
            let mut twice = position.clone();
            twice.rotate();
            twice.rotate();
            prop_assert_eq!(twice, position);
        }
    }

    #[test]
    fn generated_moves_always_originate_on_a_mover_own_piece(path in prop::collection::vec(0u8..40, 0..8)) {
        for position in play_path(&path) {
            for mv in generate_moves(&position).iter() {
                prop_assert!(position.occupied_by(rotary_chess::position::Side::Ours).contains(mv.from));
            }
        }
    }

    #[test]
    fn generated_moves_never_capture_the_mover_own_piece(path in prop::collection::vec(0u8..40, 0..8)) {
        for position in play_path(&path) {
            for mv in generate_moves(&position).iter() {
                prop_assert!(!position.occupied_by(rotary_chess::position::Side::Ours).contains(mv.to));
            }
        }
    }
}
