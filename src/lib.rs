//! Chess rules: board representation, legal move generation, game status
//! and notation.
//!
//! ```
//! use chess_rules::{Session, Status};
//!
//! let mut session = Session::new();
//! for mv in ["f2f3", "e7e5", "g2g4"] {
//!     session.apply_uci(mv).unwrap();
//! }
//! assert_eq!(session.apply_san("Qh4#").unwrap(), Status::Checkmate);
//! ```

// Debug output through the `log` crate when the `logging` feature is on.
macro_rules! rules_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)+);
        }
    };
}

pub mod board;
pub mod game;
pub mod notation;
mod zobrist;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use game::{GameError, GameResult, PositionSignature, Session, Status};
