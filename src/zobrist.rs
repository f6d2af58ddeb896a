//! Zobrist hashing for chess positions.
//!
//! A position signature covers piece placement, side to move, castling
//! rights and the en passant file. The file only contributes when the side
//! to move can actually capture en passant, so a double push that nobody
//! can answer does not make the position distinct for repetition purposes.

use std::fmt;

use once_cell::sync::Lazy;
use rand::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceKind};

struct ZobristKeys {
    // piece_keys[color][kind][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    black_to_move_key: u64,
    // one key per castling-rights bit
    castling_keys: [u64; 4],
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1_234_567_890);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        let black_to_move_key = rng.gen();
        let castling_keys = rng.gen();
        let en_passant_keys = rng.gen();

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Canonical 64-bit key of a position, used for repetition detection.
///
/// Two boards that differ only in their move counters, or in an en passant
/// target no legal move can use, have the same signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSignature(u64);

impl PositionSignature {
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let keys = &*ZOBRIST;
        let mut hash = 0u64;

        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                for sq in board.pieces(color, kind) {
                    hash ^= keys.piece_keys[color.index()][kind.index()][sq.index()];
                }
            }
        }

        if board.side_to_move() == Color::Black {
            hash ^= keys.black_to_move_key;
        }

        let rights = board.castling_rights().as_u8();
        for (bit, key) in keys.castling_keys.iter().enumerate() {
            if rights & (1 << bit) != 0 {
                hash ^= key;
            }
        }

        if board.has_legal_en_passant() {
            if let Some(target) = board.en_passant_target() {
                hash ^= keys.en_passant_keys[target.file()];
            }
        }

        PositionSignature(hash)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PositionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositionSignature({:016x})", self.0)
    }
}

impl fmt::Display for PositionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
