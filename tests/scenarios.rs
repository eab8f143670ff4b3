//! Integration tests against concrete positions, exercising the public
//! position/move-generation surface end to end.
//!
//! Square notation (`Square::from_notation`) is only meaningful against a
//! position that has never been rotated — rotation is a genuine 180-degree
//! reflection, so file labels are not preserved across it. Tests that need
//! to find a move after a rotation filter by move properties instead.

use rotary_chess::movegen::{build_attack_map, generate_moves, king_in_check};
use rotary_chess::position::{CastlingRight, PieceKind, Position, Side};
use rotary_chess::{Move, MoveList, Square};

fn find_uci<'a>(moves: &'a MoveList, from: &str, to: &str) -> Move {
    let from = Square::from_notation(from);
    let to = Square::from_notation(to);
    *moves
        .iter()
        .find(|mv| mv.from == from && mv.to == to)
        .expect("move should be present among pseudo-legal moves")
}

fn apply_and_rotate(position: &mut Position, mv: Move) {
    position.apply_move(mv);
    position.rotate();
}

#[test]
fn starting_position_has_twenty_pseudo_legal_moves() {
    let position = Position::init();
    assert_eq!(generate_moves(&position).len(), 20);
}

#[test]
fn double_pawn_push_sets_en_passant_flag_on_the_far_rank() {
    let mut position = Position::init();
    let moves = generate_moves(&position);
    let push = find_uci(&moves, "e2", "e4");

    assert!(!position.en_passant_target(Side::Ours).is_valid());
    position.apply_move(push);
    let target = position.en_passant_target(Side::Ours);
    assert!(target.is_valid());
    assert_eq!(target.file(), Square::from_notation("e3").file());
}

#[test]
fn en_passant_capture_is_generated_and_removes_the_passed_pawn() {
    let mut position = Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();

    let first_ply = generate_moves(&position);
    let double_push = *first_ply
        .iter()
        .find(|mv| mv.piece == PieceKind::Pawn && mv.is_double_pawn_push())
        .expect("the lone pawn can double push");
    apply_and_rotate(&mut position, double_push);

    let second_ply = generate_moves(&position);
    let capture = *second_ply
        .iter()
        .find(|mv| mv.piece == PieceKind::Pawn && mv.is_en_passant())
        .expect("en passant capture should be pseudo-legally available");

    assert_eq!(position.pieces_of(Side::Theirs, PieceKind::Pawn).count_bits(), 1);
    position.apply_move(capture);
    assert_eq!(position.pieces_of(Side::Theirs, PieceKind::Pawn).count_bits(), 0);
}

#[test]
fn castling_kingside_clears_both_of_the_mover_own_rights() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = generate_moves(&position);
    let castle = find_uci(&moves, "e1", "g1");
    assert!(castle.is_castle_kingside());

    apply_and_rotate(&mut position, castle);
    assert!(!position.castling_right(Side::Theirs, CastlingRight::Kingside));
    assert!(!position.castling_right(Side::Theirs, CastlingRight::Queenside));
}

#[test]
fn rook_move_clears_only_its_own_side_castling_right() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = generate_moves(&position);
    let rook_move = find_uci(&moves, "a1", "a2");

    apply_and_rotate(&mut position, rook_move);
    assert!(!position.castling_right(Side::Theirs, CastlingRight::Queenside));
    assert!(position.castling_right(Side::Theirs, CastlingRight::Kingside));
}

#[test]
fn pawn_reaching_the_back_rank_generates_all_four_promotions() {
    let position = Position::from_fen("8/4P3/8/8/8/8/8/4K2k w - - 0 1").unwrap();
    let moves = generate_moves(&position);
    let promos: Vec<_> = moves
        .iter()
        .filter(|mv| mv.piece == PieceKind::Pawn && mv.is_promotion())
        .collect();
    assert_eq!(promos.len(), 4);
}

#[test]
fn king_in_check_reflects_the_opposing_attack_map() {
    let position = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
    assert!(king_in_check(&position, Side::Ours));
    assert!(build_attack_map(&position, Side::Theirs).contains(position.king_square(Side::Ours)));
}
