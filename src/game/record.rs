use crate::board::{Board, Move};

/// The moves of a game together with the position they were played from.
///
/// Append-only: moves are added by the owning session as they are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    start: Board,
    moves: Vec<Move>,
}

impl GameRecord {
    #[must_use]
    pub fn new(start: Board) -> Self {
        GameRecord {
            start,
            moves: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn starting_position(&self) -> &Board {
        &self.start
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Each move paired with the board it was played on, in order.
    pub fn replay(&self) -> impl Iterator<Item = (Board, Move)> + '_ {
        self.moves.iter().scan(self.start.clone(), |board, &mv| {
            let before = board.clone();
            board.play_unchecked(mv);
            Some((before, mv))
        })
    }

    /// The position after every recorded move.
    #[must_use]
    pub fn final_position(&self) -> Board {
        self.moves.iter().fold(self.start.clone(), |board, &mv| board.after(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_yields_positions_before_each_move() {
        let mut record = GameRecord::new(Board::new());
        for text in ["e2e4", "e7e5", "g1f3"] {
            record.push(text.parse().unwrap());
        }
        let replayed: Vec<(Board, Move)> = record.replay().collect();
        assert_eq!(replayed.len(), 3);
        assert_eq!(replayed[0].0, Board::new());
        assert_eq!(
            replayed[2].0.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
        );
        assert_eq!(
            record.final_position().to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }
}
