use std::str::FromStr;

use crate::board::{Move, MoveParseError, PieceKind, Square};

/// Parse coordinate move text: origin, destination and an optional
/// lowercase promotion letter (`q`, `r`, `b`, `n`).
///
/// Only the shape is checked. Whether the move is legal depends on the
/// position and is decided by [`Board::legal_moves`](crate::board::Board::legal_moves).
///
/// # Example
/// ```
/// use chess_rules::board::PieceKind;
/// use chess_rules::notation::parse_coordinate;
///
/// let mv = parse_coordinate("e7e8q").unwrap();
/// assert_eq!(mv.promotion(), Some(PieceKind::Queen));
/// assert!(parse_coordinate("e7e9").is_err());
/// ```
pub fn parse_coordinate(text: &str) -> Result<Move, MoveParseError> {
    let text = text.trim();
    let len = text.chars().count();
    if !(4..=5).contains(&len) {
        return Err(MoveParseError::InvalidLength { len });
    }
    let invalid_square = || MoveParseError::InvalidSquare {
        notation: text.to_string(),
    };
    if !text.is_ascii() {
        return Err(invalid_square());
    }

    let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
    let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(c) => {
            let kind = match c {
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            };
            Ok(Move::with_promotion(from, to, kind))
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}
