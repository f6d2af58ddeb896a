use std::collections::BTreeSet;

use super::{
    GameError, GameRecord, GameResult, PositionHistory, PositionSummary, PromotionPolicy,
    RulesConfig, Status,
};
use crate::board::{Board, Color, FenError, Move, MoveList, PieceKind};
use crate::notation::{parse_coordinate, parse_san, write_pgn, PgnMetadata};
use crate::zobrist::PositionSignature;

/// One game of chess: the current board plus everything needed to judge
/// repetition and to export the game afterwards.
///
/// Every `apply_*` call is atomic. On error the session is exactly as it
/// was before the call.
///
/// # Example
/// ```
/// use chess_rules::game::{Session, Status};
///
/// let mut session = Session::new();
/// session.apply_uci("e2e4").unwrap();
/// assert_eq!(session.apply_san("e5").unwrap(), Status::Active);
/// assert_eq!(session.move_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    config: RulesConfig,
    history: PositionHistory,
    record: GameRecord,
    status: Status,
}

impl Session {
    /// New game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_board(Board::new(), config)
    }

    /// New game from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_with_config(fen, RulesConfig::default())
    }

    pub fn from_fen_with_config(fen: &str, config: RulesConfig) -> Result<Self, FenError> {
        let board = Board::from_fen(fen)?;
        Ok(Self::from_board(board, config))
    }

    /// New game from an already validated board.
    #[must_use]
    pub fn from_board(board: Board, config: RulesConfig) -> Self {
        let mut history = PositionHistory::new();
        let repetitions = history.record(PositionSignature::of(&board));
        let status = Status::evaluate(&board, repetitions);
        rules_debug!("new session at {} ({})", board.to_fen(), status);
        Session {
            record: GameRecord::new(board.clone()),
            board,
            config,
            history,
            status,
        }
    }

    /// Moves the session will accept next.
    ///
    /// Empty once the game is over, drawn games included. Use
    /// [`Board::legal_moves`] on [`Session::board`] for the moves the
    /// position itself allows.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        self.board.legal_moves()
    }

    /// Legal moves in coordinate notation, sorted.
    #[must_use]
    pub fn legal_move_texts(&self) -> BTreeSet<String> {
        self.legal_moves().iter().map(Move::to_string).collect()
    }

    /// Apply a move given as a [`Move`] value.
    pub fn apply_move(&mut self, mv: Move) -> Result<Status, GameError> {
        self.apply_checked(mv, || mv.to_string())
    }

    /// Apply a move in coordinate notation such as `e2e4` or `e7e8q`.
    pub fn apply_uci(&mut self, text: &str) -> Result<Status, GameError> {
        let mv = parse_coordinate(text).map_err(|err| {
            rules_debug!("rejected move text {:?}: {}", text, err);
            GameError::from(err)
        })?;
        self.apply_checked(mv, || text.trim().to_string())
    }

    /// Apply a move in standard algebraic notation such as `Nf3` or `exd5`.
    pub fn apply_san(&mut self, text: &str) -> Result<Status, GameError> {
        self.ensure_running()?;
        let mv = parse_san(&self.board, text).map_err(|err| {
            rules_debug!("rejected SAN {:?}: {}", text, err);
            GameError::from(err)
        })?;
        self.apply_checked(mv, || text.trim().to_string())
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            rules_debug!("move submitted after game end ({})", self.status);
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        Ok(())
    }

    fn apply_checked(
        &mut self,
        mv: Move,
        notation: impl FnOnce() -> String,
    ) -> Result<Status, GameError> {
        self.ensure_running()?;
        let legal = self.board.legal_moves();
        let Some(mv) = self.resolve(mv, &legal) else {
            let notation = notation();
            rules_debug!("illegal move {} at {}", notation, self.board.to_fen());
            return Err(GameError::IllegalMove { notation });
        };
        Ok(self.commit(mv))
    }

    /// Match `mv` against the legal set, filling in a missing promotion
    /// piece when the policy allows it.
    fn resolve(&self, mv: Move, legal: &MoveList) -> Option<Move> {
        if legal.contains(mv) {
            return Some(mv);
        }
        let queen = mv.promoting_to(PieceKind::Queen);
        match self.config.promotion_policy {
            PromotionPolicy::DefaultQueen if mv.promotion().is_none() && legal.contains(queen) => {
                Some(queen)
            }
            _ => None,
        }
    }

    fn commit(&mut self, mv: Move) -> Status {
        self.board.play_unchecked(mv);
        self.record.push(mv);
        let repetitions = self.history.record(PositionSignature::of(&self.board));
        let previous = self.status;
        self.status = Status::evaluate(&self.board, repetitions);
        rules_debug!("applied {} -> {}", mv, self.board.to_fen());
        if previous != self.status {
            rules_debug!("status {} -> {}", previous, self.status);
        }
        self.status
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_status(self.status, self.board.side_to_move())
    }

    /// Current position as FEN.
    #[must_use]
    pub fn position_string(&self) -> String {
        self.board.to_fen()
    }

    /// Plies applied since the session started.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.record.len()
    }

    /// White material minus Black material.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.board.material_balance()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    #[must_use]
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    #[must_use]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    #[must_use]
    pub fn position_signature(&self) -> PositionSignature {
        PositionSignature::of(&self.board)
    }

    /// Occurrences of the current position, this one included.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.history.occurrence_count(self.position_signature())
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn summary(&self) -> PositionSummary {
        PositionSummary {
            fen: self.position_string(),
            side_to_move: self.side_to_move(),
            move_count: self.move_count(),
            status: self.status,
            legal_move_count: self.legal_moves().len(),
            in_check: self.board.is_in_check(),
            material_balance: self.material_balance(),
        }
    }

    /// The game so far as PGN, with the result taken from the current status.
    #[must_use]
    pub fn export_pgn(&self, metadata: &PgnMetadata) -> String {
        write_pgn(&self.record, metadata, self.result())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
