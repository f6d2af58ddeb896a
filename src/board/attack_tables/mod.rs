//! Attack tables for move generation and check detection.
//!
//! Leapers (knight, king, pawn) use fixed offset tables. Sliders walk a
//! precomputed ray per direction and cut it at the first occupied square,
//! which stays in the result so the caller can decide whether it is a capture.

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

/// Ray directions as (rank delta, file delta). The first four increase the
/// square index, the last four decrease it.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),   // north
    (0, 1),   // east
    (1, 1),   // north-east
    (1, -1),  // north-west
    (-1, 0),  // south
    (0, -1),  // west
    (-1, -1), // south-west
    (-1, 1),  // south-east
];

const ORTHOGONAL: [usize; 4] = [0, 1, 4, 5];
const DIAGONAL: [usize; 4] = [2, 3, 6, 7];

/// `RAYS[dir][sq]`: every square from `sq` (exclusive) to the board edge.
static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    for (dir, &(dr, df)) in DIRECTIONS.iter().enumerate() {
        for sq in 0..64 {
            let mut r = (sq / 8) as isize + dr;
            let mut f = (sq % 8) as isize + df;
            let mut mask = 0u64;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                mask |= 1u64 << (r * 8 + f);
                r += dr;
                f += df;
            }
            rays[dir][sq] = mask;
        }
    }
    rays
});

#[inline]
fn ray_attacks(dir: usize, square: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][square];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let first = if dir < 4 {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    };
    ray ^ RAYS[dir][first]
}

/// Get bishop attacks (diagonals only)
#[inline]
pub(crate) fn bishop_attacks(square: usize, occupancy: u64) -> u64 {
    DIAGONAL
        .iter()
        .fold(0, |acc, &dir| acc | ray_attacks(dir, square, occupancy))
}

/// Get rook attacks (ranks and files only)
#[inline]
pub(crate) fn rook_attacks(square: usize, occupancy: u64) -> u64 {
    ORTHOGONAL
        .iter()
        .fold(0, |acc, &dir| acc | ray_attacks(dir, square, occupancy))
}

/// Get queen attacks (all 8 directions)
#[inline]
pub(crate) fn queen_attacks(square: usize, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
