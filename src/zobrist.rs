//! Zobrist hashing: a seeded xorshift64 PRNG fills per-(side, piece,
//! square) keys, per-castling-right keys, and one side-to-move key. The
//! table lives behind a `parking_lot::Mutex` rather than a `once_cell::Lazy`
//! because re-seeding is a supported operation, not a one-time init.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::position::{CastlingRight, Color, PieceKind, Position, Side};

struct Tables {
    piece: [[[u64; 64]; 6]; 2],
    castling: [[u64; 2]; 2],
    color: u64,
}

impl Tables {
    fn zeroed() -> Self {
        Tables {
            piece: [[[0u64; 64]; 6]; 2],
            castling: [[0u64; 2]; 2],
            color: 0,
        }
    }
}

static TABLES: Lazy<Mutex<Tables>> = Lazy::new(|| Mutex::new(Tables::zeroed()));

fn xorshift64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

fn fill(seed: u64) -> Tables {
    // xorshift64 has a fixed point at zero; never seed it with one.
    let mut state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
    let mut tables = Tables::zeroed();
    for side in tables.piece.iter_mut() {
        for piece in side.iter_mut() {
            for square in piece.iter_mut() {
                *square = xorshift64(&mut state);
            }
        }
    }
    for side in tables.castling.iter_mut() {
        for right in side.iter_mut() {
            *right = xorshift64(&mut state);
        }
    }
    tables.color = xorshift64(&mut state);
    tables
}

/// Seeds the Zobrist tables from the current wall-clock time. Call once
/// before the first [`hash_position`]; calling it again is defined but
/// produces a different (internally consistent) table, which invalidates
/// hashes computed under the previous seed.
pub fn hash_init() {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x2545_F491_4F6C_DD1D);
    hash_init_with_seed(seed);
}

/// Deterministic variant of [`hash_init`] for tests and benchmarks that
/// need reproducible hashes across runs.
pub fn hash_init_with_seed(seed: u64) {
    let tables = fill(seed);
    *TABLES.lock() = tables;
    #[cfg(feature = "logging")]
    log::trace!("zobrist tables reseeded with {seed}");
}

fn right_index(right: CastlingRight) -> usize {
    match right {
        CastlingRight::Kingside => 0,
        CastlingRight::Queenside => 1,
    }
}

/// Folds in every piece (including both kings), castling right, and the
/// side-to-move key. Positions stored in `Color::Black`-to-move frames are
/// rotated onto a scratch copy first, so a hash depends only on the
/// absolute arrangement, not which side happened to be `Ours`.
pub fn hash_position(position: &Position) -> u64 {
    let tables = TABLES.lock();

    let rotated;
    let view = if position.color == Color::Black {
        rotated = {
            let mut copy = position.clone();
            copy.rotate();
            copy
        };
        &rotated
    } else {
        position
    };

    let mut hash = if position.color == Color::Black {
        tables.color
    } else {
        0
    };

    for side in [Side::Ours, Side::Theirs] {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ] {
            for sq in view.pieces_of(side, kind).iter() {
                hash ^= tables.piece[side.index()][kind.index()][sq.0 as usize];
            }
        }
        let king_sq = view.king_square(side);
        if king_sq.is_valid() {
            hash ^= tables.piece[side.index()][PieceKind::King.index()][king_sq.0 as usize];
        }
        for right in [CastlingRight::Kingside, CastlingRight::Queenside] {
            if view.castling_right(side, right) {
                hash ^= tables.castling[side.index()][right_index(right)];
            }
        }
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_hash() {
        hash_init_with_seed(42);
        let position = Position::init();
        let a = hash_position(&position);
        hash_init_with_seed(42);
        let b = hash_position(&position);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_hash() {
        hash_init_with_seed(1);
        let position = Position::init();
        let a = hash_position(&position);
        hash_init_with_seed(2);
        let b = hash_position(&position);
        assert_ne!(a, b);
    }
}
