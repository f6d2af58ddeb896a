//! Game status, results and position summaries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Occurrences of one position that end the game.
pub const REPETITION_LIMIT: u32 = 3;

/// State of a game after the last applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Active,
    Check,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawRepetition,
    DrawInsufficientMaterial,
}

impl Status {
    /// Work out the status of `board`, given how many times its position
    /// has occurred.
    ///
    /// Mate and stalemate come first, then the three draw rules, then check.
    #[must_use]
    pub fn evaluate(board: &Board, repetitions: u32) -> Status {
        let in_check = board.is_in_check();
        if board.legal_moves().is_empty() {
            return if in_check {
                Status::Checkmate
            } else {
                Status::Stalemate
            };
        }
        if board.is_insufficient_material() {
            Status::DrawInsufficientMaterial
        } else if board.halfmove_clock() >= FIFTY_MOVE_LIMIT {
            Status::DrawFiftyMove
        } else if repetitions >= REPETITION_LIMIT {
            Status::DrawRepetition
        } else if in_check {
            Status::Check
        } else {
            Status::Active
        }
    }

    /// True once no further moves may be played.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Active | Status::Check)
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            Status::Stalemate
                | Status::DrawFiftyMove
                | Status::DrawRepetition
                | Status::DrawInsufficientMaterial
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Active => "Active",
            Status::Check => "Check",
            Status::Checkmate => "Checkmate",
            Status::Stalemate => "Stalemate",
            Status::DrawFiftyMove => "Fifty-move rule",
            Status::DrawRepetition => "Threefold repetition",
            Status::DrawInsufficientMaterial => "Insufficient material",
        };
        f.write_str(text)
    }
}

/// Outcome of a game, as written in a PGN result tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Ongoing,
}

impl GameResult {
    /// Result implied by `status` with `side_to_move` to play.
    #[must_use]
    pub const fn from_status(status: Status, side_to_move: Color) -> Self {
        match status {
            Status::Checkmate => match side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            },
            Status::Active | Status::Check => GameResult::Ongoing,
            _ => GameResult::Draw,
        }
    }

    /// The PGN token: `1-0`, `0-1`, `1/2-1/2` or `*`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "White wins",
            GameResult::BlackWins => "Black wins",
            GameResult::Draw => "Draw",
            GameResult::Ongoing => "Game in progress",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the observable state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSummary {
    pub fen: String,
    pub side_to_move: Color,
    /// Plies applied since the session started
    pub move_count: usize,
    pub status: Status,
    pub legal_move_count: usize,
    pub in_check: bool,
    pub material_balance: i32,
}

impl fmt::Display for PositionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to move, ply {}, {} ({} legal moves, material {:+})",
            self.side_to_move,
            self.move_count,
            self.status,
            self.legal_move_count,
            self.material_balance
        )
    }
}
