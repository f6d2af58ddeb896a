//! Errors returned by a game session.

use std::fmt;

use super::Status;
use crate::board::{MoveParseError, SanError};

/// Error type for rejected move submissions.
///
/// The session is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate move text is malformed
    InvalidMoveText(MoveParseError),
    /// SAN text is malformed or matches no single legal move
    InvalidSan(SanError),
    /// Well-formed move that is not legal in the current position
    IllegalMove { notation: String },
    /// The game has already ended
    GameOver { status: Status },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMoveText(err) => write!(f, "Invalid move text: {err}"),
            GameError::InvalidSan(err) => write!(f, "Invalid SAN: {err}"),
            GameError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}' in the current position")
            }
            GameError::GameOver { status } => {
                write!(f, "Game is over ({status}), no further moves accepted")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMoveText(err) => Some(err),
            GameError::InvalidSan(err) => Some(err),
            GameError::IllegalMove { .. } | GameError::GameOver { .. } => None,
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        GameError::InvalidMoveText(err)
    }
}

impl From<SanError> for GameError {
    fn from(err: SanError) -> Self {
        GameError::InvalidSan(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_illegal_move_message() {
        let err = GameError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_is_source() {
        let err: GameError = MoveParseError::InvalidLength { len: 2 }.into();
        assert!(matches!(err, GameError::InvalidMoveText(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_game_over_names_status() {
        let err = GameError::GameOver {
            status: Status::Checkmate,
        };
        assert!(err.to_string().contains("Checkmate"));
    }
}
