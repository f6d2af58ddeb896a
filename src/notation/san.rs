//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the standard human-readable chess notation used in scoresheets,
//! books, and GUIs. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_rules::board::Board;
//! use chess_rules::notation::{parse_san, to_san};
//!
//! let board = Board::new();
//! let mv = parse_san(&board, "Nf3").unwrap();
//! assert_eq!(to_san(&board, mv, &board.legal_moves()), "Nf3");
//! ```

use crate::board::{Board, Move, MoveList, PieceKind, SanError, Square};

/// Format `mv`, played on `board`, in SAN.
///
/// `legal` must be the legal moves of `board`; it is used to decide whether
/// the origin file or rank is needed to tell two same-kind pieces apart.
#[must_use]
pub fn to_san(board: &Board, mv: Move, legal: &MoveList) -> String {
    let Some(piece) = board.piece_at(mv.from()) else {
        return mv.to_string();
    };

    let mut san = String::new();
    if board.is_castling(mv) {
        san.push_str(if mv.to().file() > mv.from().file() {
            "O-O"
        } else {
            "O-O-O"
        });
    } else {
        let capture = board.is_capture(mv);
        if piece.kind == PieceKind::Pawn {
            if capture {
                san.push(mv.from().file_char());
            }
        } else {
            san.push(piece.kind.to_char().to_ascii_uppercase());
            let (file, rank) = disambiguation(board, mv, piece.kind, legal);
            if file {
                san.push(mv.from().file_char());
            }
            if rank {
                san.push(mv.from().rank_char());
            }
        }
        if capture {
            san.push('x');
        }
        san.push_str(&mv.to().to_string());
        if let Some(kind) = mv.promotion() {
            san.push('=');
            san.push(kind.to_char().to_ascii_uppercase());
        }
    }

    let after = board.after(mv);
    if after.is_checkmate() {
        san.push('#');
    } else if after.is_in_check() {
        san.push('+');
    }
    san
}

/// Which parts of the origin square are needed: (file, rank).
///
/// The file is preferred; the rank is used when the file is shared; both
/// when neither alone is unique.
fn disambiguation(board: &Board, mv: Move, kind: PieceKind, legal: &MoveList) -> (bool, bool) {
    let rivals: Vec<Square> = legal
        .iter()
        .filter(|other| other.to() == mv.to() && other.from() != mv.from())
        .filter(|other| board.piece_at(other.from()).map(|p| p.kind) == Some(kind))
        .map(|other| other.from())
        .collect();

    if rivals.is_empty() {
        return (false, false);
    }
    let shares_file = rivals.iter().any(|sq| sq.file() == mv.from().file());
    let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.from().rank());
    match (shares_file, shares_rank) {
        (false, _) => (true, false),
        (true, false) => (false, true),
        (true, true) => (true, true),
    }
}

impl Board {
    /// Format a legal move in SAN.
    #[must_use]
    pub fn san(&self, mv: Move) -> String {
        to_san(self, mv, &self.legal_moves())
    }
}

/// Components of a SAN move once the decorations are stripped.
struct SanParts {
    kind: PieceKind,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    to: Square,
    promotion: Option<PieceKind>,
}

/// Parse SAN text and find the single legal move on `board` it names.
///
/// Accepts `0-0` for `O-O`, an optional `x`, and trailing `+`, `#`, `!`
/// or `?` marks. A pawn reaching the last rank must name its piece.
pub fn parse_san(board: &Board, text: &str) -> Result<Move, SanError> {
    let san = text.trim().trim_end_matches(['+', '#', '!', '?']);
    if san.is_empty() {
        return Err(SanError::Empty);
    }

    let legal = board.legal_moves();
    let no_match = || SanError::NoMatchingMove {
        san: text.trim().to_string(),
    };

    let castle = match san {
        "O-O" | "0-0" => Some(true),
        "O-O-O" | "0-0-0" => Some(false),
        _ => None,
    };
    if let Some(kingside) = castle {
        return legal
            .iter()
            .copied()
            .find(|&mv| board.is_castling(mv) && (mv.to().file() > mv.from().file()) == kingside)
            .ok_or_else(no_match);
    }

    let parts = split_san(san)?;
    let mut matching = legal.iter().copied().filter(|&mv| {
        mv.to() == parts.to
            && mv.promotion() == parts.promotion
            && board.piece_at(mv.from()).map(|p| p.kind) == Some(parts.kind)
            && parts.from_file.map_or(true, |f| mv.from().file() == f)
            && parts.from_rank.map_or(true, |r| mv.from().rank() == r)
    });

    match (matching.next(), matching.next()) {
        (Some(mv), None) => Ok(mv),
        (None, _) => Err(no_match()),
        (Some(_), Some(_)) => Err(SanError::AmbiguousMove {
            san: text.trim().to_string(),
        }),
    }
}

fn split_san(san: &str) -> Result<SanParts, SanError> {
    let mut chars: Vec<char> = san.chars().filter(|&c| c != 'x').collect();

    let kind = match chars.first() {
        Some(&c) if c.is_ascii_uppercase() => {
            let kind = PieceKind::from_char(c).ok_or(SanError::InvalidPiece { char: c })?;
            chars.remove(0);
            kind
        }
        _ => PieceKind::Pawn,
    };

    // "e8=Q" or "e8Q"
    let mut promotion = None;
    if let Some(&last) = chars.last() {
        let after_equals = chars.len() > 2 && chars[chars.len() - 2] == '=';
        if last.is_ascii_alphabetic() && (last.is_ascii_uppercase() || after_equals) {
            let promo = PieceKind::from_char(last)
                .filter(|k| k.is_promotable())
                .ok_or(SanError::InvalidPromotion { char: last })?;
            promotion = Some(promo);
            chars.pop();
            if chars.last() == Some(&'=') {
                chars.pop();
            }
        }
    }

    let invalid_square = || SanError::InvalidSquare {
        notation: san.to_string(),
    };
    if chars.len() < 2 || chars.len() > 4 {
        return Err(invalid_square());
    }
    let split = chars.len() - 2;
    let dest: String = chars[split..].iter().collect();
    let to: Square = dest.parse().map_err(|_| invalid_square())?;

    let mut from_file = None;
    let mut from_rank = None;
    for &c in &chars[..split] {
        match c {
            'a'..='h' if from_file.is_none() => from_file = Some(c as usize - 'a' as usize),
            '1'..='8' if from_rank.is_none() => from_rank = Some(c as usize - '1' as usize),
            _ => return Err(invalid_square()),
        }
    }

    Ok(SanParts {
        kind,
        from_file,
        from_rank,
        to,
        promotion,
    })
}
