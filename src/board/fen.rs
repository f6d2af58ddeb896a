use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number may be omitted and default to
    /// 0 and 1. The position is checked structurally (one king per side, no
    /// pawns on the back ranks) but not for how it could have been reached.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Board, STARTING_FEN};
    ///
    /// let board = Board::from_fen(STARTING_FEN).unwrap();
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        parse_placement(&mut board, parts[0])?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, kingside) = match c {
                    'K' => (Color::White, true),
                    'Q' => (Color::White, false),
                    'k' => (Color::Black, true),
                    'q' => (Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                board.castling_rights.set(color, kingside);
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let sq: Square = parts[3].parse().map_err(|_| invalid())?;
            // The target sits behind a pawn of the side that just moved.
            if sq.rank() != board.side_to_move.opponent().en_passant_rank() {
                return Err(invalid());
            }
            Some(sq)
        };

        if parts.len() == 6 {
            board.halfmove_clock = parse_counter("half-move clock", parts[4])?;
            board.fullmove_number = parse_counter("full-move number", parts[5])?;
        }

        validate_structure(&board)?;
        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for sq in (0..8).filter_map(|file| Square::new(rank, file)) {
                if let Some(piece) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0usize;
        let mut previous_was_digit = false;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                if previous_was_digit {
                    return Err(FenError::AdjacentDigits { rank: rank + 1 });
                }
                previous_was_digit = true;
                file += run as usize;
                continue;
            }
            previous_was_digit = false;
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let sq = Square::new(rank, file).ok_or(FenError::BadRankWidth {
                rank: rank + 1,
                files: file + 1,
            })?;
            board.set_piece(sq, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidCounter {
        field,
        found: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

/// Checks shared by FEN import and [`BoardBuilder`](super::BoardBuilder).
pub(crate) fn validate_structure(board: &Board) -> Result<(), FenError> {
    for color in Color::BOTH {
        let kings = board.pieces(color, PieceKind::King).popcount();
        if kings != 1 {
            return Err(FenError::InvalidKingCount {
                color,
                found: kings,
            });
        }
    }
    for color in Color::BOTH {
        if let Some(square) = board
            .pieces(color, PieceKind::Pawn)
            .iter()
            .find(|sq| sq.rank() == 0 || sq.rank() == 7)
        {
            return Err(FenError::PawnOnBackRank { square });
        }
    }
    Ok(())
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
