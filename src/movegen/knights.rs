//! Knight pseudo-legal moves: direct attack-table lookup, no blocker checks.

use super::tables::KNIGHT_ATTACKS;
use crate::bits::Bitboard;
use crate::moves::{Move, MoveList, FLAG_CAPTURE, FLAG_QUIET};
use crate::position::{PieceKind, Position, Side};

pub(crate) fn generate(position: &Position, list: &mut MoveList) {
    let knights = position.pieces_of(Side::Ours, PieceKind::Knight);
    for from in knights.iter() {
        let targets = Bitboard(KNIGHT_ATTACKS[from.0 as usize]) & !position.occupied_by(Side::Ours);
        for to in targets.iter() {
            let flags = if position.occupied_by(Side::Theirs).contains(to) {
                FLAG_CAPTURE
            } else {
                FLAG_QUIET
            };
            list.append(Move {
                piece: PieceKind::Knight,
                from,
                to,
                flags,
            });
        }
    }
}
