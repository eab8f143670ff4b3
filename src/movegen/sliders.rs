//! Bishop, rook and queen pseudo-legal moves, built from per-direction ray
//! attacks resolved against the full occupancy.

use super::tables::{ray_attacks, BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::bits::{Bitboard, Square};
use crate::moves::{Move, MoveList, FLAG_CAPTURE, FLAG_QUIET};
use crate::position::{PieceKind, Position, Side};

pub(crate) fn attack_set(from: Square, occupancy: Bitboard, dirs: &[usize]) -> Bitboard {
    let mut attacks = 0u64;
    for &dir in dirs {
        attacks |= ray_attacks(from.0 as usize, dir, occupancy.0);
    }
    Bitboard(attacks)
}

pub(crate) fn generate(position: &Position, list: &mut MoveList) {
    let occ = position.occupied();
    generate_for(position, list, PieceKind::Bishop, &BISHOP_DIRS, occ);
    generate_for(position, list, PieceKind::Rook, &ROOK_DIRS, occ);
    generate_for(position, list, PieceKind::Queen, &QUEEN_DIRS, occ);
}

fn generate_for(
    position: &Position,
    list: &mut MoveList,
    kind: PieceKind,
    dirs: &[usize],
    occ: Bitboard,
) {
    let pieces = position.pieces_of(Side::Ours, kind);
    for from in pieces.iter() {
        let targets = attack_set(from, occ, dirs) & !position.occupied_by(Side::Ours);
        for to in targets.iter() {
            let flags = if position.occupied_by(Side::Theirs).contains(to) {
                FLAG_CAPTURE
            } else {
                FLAG_QUIET
            };
            list.append(Move {
                piece: kind,
                from,
                to,
                flags,
            });
        }
    }
}
