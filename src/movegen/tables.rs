//! Precomputed attack tables: knight/king deltas, pawn attacks and quiet
//! pushes (both built once for the mover's always-upward perspective), and
//! per-direction sliding rays resolved via nearest-blocker masking.

use once_cell::sync::Lazy;

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_E: usize = 1;
pub(crate) const DIR_S: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_SE: usize = 5;
pub(crate) const DIR_SW: usize = 6;
pub(crate) const DIR_NW: usize = 7;

pub(crate) const ROOK_DIRS: [usize; 4] = [DIR_N, DIR_E, DIR_S, DIR_W];
pub(crate) const BISHOP_DIRS: [usize; 4] = [DIR_NE, DIR_SE, DIR_SW, DIR_NW];
pub(crate) const QUEEN_DIRS: [usize; 8] = [
    DIR_N, DIR_E, DIR_S, DIR_W, DIR_NE, DIR_SE, DIR_SW, DIR_NW,
];

fn in_bounds(rank: isize, file: isize) -> bool {
    (0..8).contains(&rank) && (0..8).contains(&file)
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    const DELTAS: [(isize, isize); 8] = [
        (1, 2),
        (2, 1),
        (2, -1),
        (1, -2),
        (-1, -2),
        (-2, -1),
        (-2, 1),
        (-1, 2),
    ];
    let mut table = [0u64; 64];
    for sq in 0..64usize {
        let (r, f) = ((sq / 8) as isize, (sq % 8) as isize);
        let mut mask = 0u64;
        for (dr, df) in DELTAS {
            if in_bounds(r + dr, f + df) {
                mask |= 1u64 << ((r + dr) * 8 + f + df);
            }
        }
        table[sq] = mask;
    }
    table
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    const DELTAS: [(isize, isize); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    let mut table = [0u64; 64];
    for sq in 0..64usize {
        let (r, f) = ((sq / 8) as isize, (sq % 8) as isize);
        let mut mask = 0u64;
        for (dr, df) in DELTAS {
            if in_bounds(r + dr, f + df) {
                mask |= 1u64 << ((r + dr) * 8 + f + df);
            }
        }
        table[sq] = mask;
    }
    table
});

/// Indexed `[Side::index()]`: `0` attacks toward increasing ranks (the
/// mover's own pawns), `1` toward decreasing ranks (the opponent's, for
/// `build_attack_map`).
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 2];
    for sq in 0..64usize {
        let (r, f) = ((sq / 8) as isize, (sq % 8) as isize);
        for (side, dr) in [(0usize, 1isize), (1usize, -1isize)] {
            let mut mask = 0u64;
            if in_bounds(r + dr, f - 1) {
                mask |= 1u64 << ((r + dr) * 8 + f - 1);
            }
            if in_bounds(r + dr, f + 1) {
                mask |= 1u64 << ((r + dr) * 8 + f + 1);
            }
            table[side][sq] = mask;
        }
    }
    table
});

/// Quiet pawn pushes for the mover only: one square forward, plus two
/// squares forward from the second rank. Blocker checks happen at
/// generation time, not here.
pub(crate) static PAWN_MOVES: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut table = [0u64; 64];
    for sq in 0..64usize {
        let (r, f) = (sq / 8, sq % 8);
        let mut mask = 0u64;
        if r + 1 < 8 {
            mask |= 1u64 << ((r + 1) * 8 + f);
        }
        if r == 1 {
            mask |= 1u64 << ((r + 2) * 8 + f);
        }
        table[sq] = mask;
    }
    table
});

pub(crate) static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    const DELTAS: [(isize, isize); 8] = [
        (1, 0),
        (0, 1),
        (-1, 0),
        (0, -1),
        (1, 1),
        (-1, 1),
        (-1, -1),
        (1, -1),
    ];
    let mut rays = [[0u64; 64]; 8];
    for sq in 0..64usize {
        let (r, f) = ((sq / 8) as isize, (sq % 8) as isize);
        for (dir, (dr, df)) in DELTAS.iter().enumerate() {
            let mut mask = 0u64;
            let (mut nr, mut nf) = (r + dr, f + df);
            while in_bounds(nr, nf) {
                mask |= 1u64 << (nr * 8 + nf);
                nr += dr;
                nf += df;
            }
            rays[dir][sq] = mask;
        }
    }
    rays
});

fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

fn nearest_blocker(dir: usize, blockers: u64) -> Option<usize> {
    if blockers == 0 {
        None
    } else if is_increasing_dir(dir) {
        Some(blockers.trailing_zeros() as usize)
    } else {
        Some(63 - blockers.leading_zeros() as usize)
    }
}

/// Attacks from `from` in direction `dir`, stopping at (and including) the
/// nearest occupied square.
pub(crate) fn ray_attacks(from: usize, dir: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][from];
    let blockers = ray & occupancy;
    match nearest_blocker(dir, blockers) {
        None => ray,
        Some(idx) => ray ^ RAYS[dir][idx],
    }
}
