//! Move and game notation.
//!
//! - `uci` - coordinate move text (`e2e4`, `e7e8q`)
//! - `san` - standard algebraic notation (`Nf3`, `exd5`, `O-O`, `e8=Q#`)
//! - `pgn` - export of a whole game record

mod pgn;
mod san;
mod uci;

pub use pgn::{write_pgn, PgnMetadata};
pub use san::{parse_san, to_san};
pub use uci::parse_coordinate;
