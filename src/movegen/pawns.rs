//! Pawn pseudo-legal moves: single/double pushes, diagonal captures,
//! en-passant, and promotions (plain and capturing).

use super::tables::{PAWN_ATTACKS, PAWN_MOVES};
use crate::bits::{Bitboard, Square};
use crate::moves::{
    Move, MoveList, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_PROMOTION,
    FLAG_QUIET,
};
use crate::position::{PieceKind, Position, Side};

pub(crate) fn generate(position: &Position, list: &mut MoveList) {
    let occ = position.occupied();
    let pawns = position.pieces_of(Side::Ours, PieceKind::Pawn);
    let ep_target = position.en_passant_target(Side::Theirs);

    for from in pawns.iter() {
        let idx = from.0 as usize;

        let attacks = Bitboard(PAWN_ATTACKS[Side::Ours.index()][idx]);
        let captures = attacks & position.occupied_by(Side::Theirs);
        for to in captures.iter() {
            emit(list, from, to, FLAG_CAPTURE);
        }
        if ep_target.is_valid() && attacks.contains(ep_target) {
            list.append(Move {
                piece: PieceKind::Pawn,
                from,
                to: ep_target,
                flags: FLAG_EN_PASSANT,
            });
        }

        let single_push_sq = Square(from.0 + 8);
        let single_open = !occ.contains(single_push_sq);
        let pushes = Bitboard(PAWN_MOVES[idx]) & !occ;
        for to in pushes.iter() {
            if to.0 == from.0 + 16 {
                if single_open {
                    list.append(Move {
                        piece: PieceKind::Pawn,
                        from,
                        to,
                        flags: FLAG_DOUBLE_PAWN_PUSH,
                    });
                }
            } else {
                emit(list, from, to, FLAG_QUIET);
            }
        }
    }
}

fn emit(list: &mut MoveList, from: Square, to: Square, base_flags: u8) {
    if to.rank() == 7 {
        for promo in 0b00..=0b11u8 {
            list.append(Move {
                piece: PieceKind::Pawn,
                from,
                to,
                flags: base_flags | FLAG_PROMOTION | promo,
            });
        }
    } else {
        list.append(Move {
            piece: PieceKind::Pawn,
            from,
            to,
            flags: base_flags,
        });
    }
}
