//! King pseudo-legal moves plus castling. Castling here checks only that
//! the intervening squares are empty and the right is still held — it does
//! NOT check that the king's path is free of attacks; that is left to
//! legality filtering, which this crate does not perform (see
//! [`crate::movegen::king_in_check`] for an oracle a caller can use).

use super::tables::KING_ATTACKS;
use crate::bits::{Bitboard, Square};
use crate::moves::{Move, MoveList, FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE, FLAG_QUIET};
use crate::position::{CastlingRight, PieceKind, Position, Side};

const KINGSIDE_EMPTY_MASK: u64 = 0x60;
const QUEENSIDE_EMPTY_MASK: u64 = 0x0C;

pub(crate) fn generate(position: &Position, list: &mut MoveList) {
    let from = position.king_square(Side::Ours);
    if !from.is_valid() {
        return;
    }

    let targets = Bitboard(KING_ATTACKS[from.0 as usize]) & !position.occupied_by(Side::Ours);
    for to in targets.iter() {
        let flags = if position.occupied_by(Side::Theirs).contains(to) {
            FLAG_CAPTURE
        } else {
            FLAG_QUIET
        };
        list.append(Move {
            piece: PieceKind::King,
            from,
            to,
            flags,
        });
    }

    let occ = position.occupied().0;
    if position.castling_right(Side::Ours, CastlingRight::Kingside) && occ & KINGSIDE_EMPTY_MASK == 0
    {
        list.append(Move {
            piece: PieceKind::King,
            from,
            to: Square(6),
            flags: FLAG_CASTLE_KINGSIDE,
        });
    }
    if position.castling_right(Side::Ours, CastlingRight::Queenside)
        && occ & QUEENSIDE_EMPTY_MASK == 0
    {
        list.append(Move {
            piece: PieceKind::King,
            from,
            to: Square(2),
            flags: FLAG_CASTLE_QUEENSIDE,
        });
    }
}
