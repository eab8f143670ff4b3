//! Attack-map, check detection and game-state oracles. These are not
//! wired into [`super::generate_moves`] as a legality filter — this crate
//! generates pseudo-legal moves only — but they let a caller build one.

use super::sliders::attack_set;
use super::tables::{BISHOP_DIRS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, ROOK_DIRS};
use crate::bits::Bitboard;
use crate::moves::MoveList;
use crate::position::{PieceKind, Position, Side};

/// The union of every square `side` attacks in the current position,
/// irrespective of whose turn it is.
pub fn build_attack_map(position: &Position, side: Side) -> Bitboard {
    let occ = position.occupied();
    let mut attacks = Bitboard::EMPTY;

    let pawns = position.pieces_of(side, PieceKind::Pawn);
    for sq in pawns.iter() {
        attacks |= Bitboard(PAWN_ATTACKS[side.index()][sq.0 as usize]);
    }

    let knights = position.pieces_of(side, PieceKind::Knight);
    for sq in knights.iter() {
        attacks |= Bitboard(KNIGHT_ATTACKS[sq.0 as usize]);
    }

    let bishops_queens = position.pieces_of(side, PieceKind::Bishop) | position.pieces_of(side, PieceKind::Queen);
    for sq in bishops_queens.iter() {
        attacks |= attack_set(sq, occ, &BISHOP_DIRS);
    }

    let rooks_queens = position.pieces_of(side, PieceKind::Rook) | position.pieces_of(side, PieceKind::Queen);
    for sq in rooks_queens.iter() {
        attacks |= attack_set(sq, occ, &ROOK_DIRS);
    }

    let king_sq = position.king_square(side);
    if king_sq.is_valid() {
        attacks |= Bitboard(KING_ATTACKS[king_sq.0 as usize]);
    }

    attacks
}

/// Whether `side`'s king sits on a square attacked by the opposite side.
pub fn king_in_check(position: &Position, side: Side) -> bool {
    let king_sq = position.king_square(side);
    king_sq.is_valid() && build_attack_map(position, side.opposite()).contains(king_sq)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Continue,
    Checkmate,
    Stalemate,
}

/// Classifies the position from a caller-supplied legal move list (this
/// crate's own `generate_moves` returns pseudo-legal moves, so callers that
/// want a meaningful `Checkmate`/`Stalemate` result must filter first).
pub fn get_game_state(position: &Position, legal_moves: &MoveList) -> GameState {
    if !legal_moves.is_empty() {
        return GameState::Continue;
    }
    if king_in_check(position, Side::Ours) {
        GameState::Checkmate
    } else {
        GameState::Stalemate
    }
}
