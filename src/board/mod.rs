//! Chess board representation and move rules.
//!
//! Uses bitboards for placement and lookup tables for attacks. Legal moves
//! are found by playing each candidate on a copy of the board and rejecting
//! those that leave the mover in check.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SanError, SquareError};
pub use fen::STARTING_FEN;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece,
    PieceKind, Square,
};
