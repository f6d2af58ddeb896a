//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and colored pieces
//! - `Square` - range-checked board square
//! - `Bitboard` - 64-bit set of squares
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
