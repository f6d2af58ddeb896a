//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

const PROMO_NONE: u16 = 0;
const PROMO_KNIGHT: u16 = 1;
const PROMO_BISHOP: u16 = 2;
const PROMO_ROOK: u16 = 3;
const PROMO_QUEEN: u16 = 4;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-14: promotion kind (0 = none)
///
/// Only origin, destination and promotion are stored. Whether a move is a
/// capture, en passant, castle or double push depends on the position it is
/// played in and is answered by [`Board`](crate::board::Board).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a move without promotion
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move::encode(from, to, PROMO_NONE)
    }

    /// Create a promotion move. Kinds that cannot be promoted to are stored
    /// as given and will never match a generated move.
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        let promo = match kind {
            PieceKind::Knight => PROMO_KNIGHT,
            PieceKind::Bishop => PROMO_BISHOP,
            PieceKind::Rook => PROMO_ROOK,
            PieceKind::Queen => PROMO_QUEEN,
            // 5-6 encode kinds no generated move carries
            PieceKind::Pawn => 5,
            PieceKind::King => 6,
        };
        Move::encode(from, to, promo)
    }

    #[inline]
    const fn encode(from: Square, to: Square, promo: u16) -> Self {
        Move(from.index() as u16 | ((to.index() as u16) << 6) | (promo << 12))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & 0x3F) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> 6) & 0x3F) as usize)
    }

    /// Get the promotion kind, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        match (self.0 >> 12) & 0x7 {
            PROMO_KNIGHT => Some(PieceKind::Knight),
            PROMO_BISHOP => Some(PieceKind::Bishop),
            PROMO_ROOK => Some(PieceKind::Rook),
            PROMO_QUEEN => Some(PieceKind::Queen),
            5 => Some(PieceKind::Pawn),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Same origin and destination, promotion replaced
    #[inline]
    #[must_use]
    pub const fn promoting_to(self, kind: PieceKind) -> Self {
        Move::with_promotion(self.from(), self.to(), kind)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

// Upper bound on legal moves in any chess position is 218.
pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES);
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_encoding_preserves_fields() {
        let mv = Move::with_promotion(sq("g7"), sq("h8"), PieceKind::Knight);
        assert_eq!(mv.from(), sq("g7"));
        assert_eq!(mv.to(), sq("h8"));
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));
        assert_eq!(mv.to_string(), "g7h8n");
    }

    #[test]
    fn test_promotion_is_part_of_identity() {
        let plain = Move::new(sq("a7"), sq("a8"));
        let queen = plain.promoting_to(PieceKind::Queen);
        let rook = plain.promoting_to(PieceKind::Rook);
        assert_ne!(plain, queen);
        assert_ne!(queen, rook);
        assert_eq!(plain.promotion(), None);
    }

    #[test]
    fn test_move_list_contains() {
        let mut list = MoveList::new();
        let mv = Move::new(sq("e2"), sq("e4"));
        assert!(!list.contains(mv));
        list.push(mv);
        assert!(list.contains(mv));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![mv]);
    }
}
