use std::collections::HashMap;

use crate::zobrist::PositionSignature;

/// Occurrence counts of every position reached in a game.
///
/// The starting position is recorded when the session is created, so it
/// takes part in repetition like any other.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    counts: HashMap<PositionSignature, u32>,
    sequence: Vec<PositionSignature>,
}

impl PositionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `signature` and return its new count.
    pub(crate) fn record(&mut self, signature: PositionSignature) -> u32 {
        self.sequence.push(signature);
        let count = self.counts.entry(signature).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// How many times `signature` has occurred so far.
    #[must_use]
    pub fn occurrence_count(&self, signature: PositionSignature) -> u32 {
        self.counts.get(&signature).copied().unwrap_or(0)
    }

    /// Signatures in the order the positions were reached.
    #[must_use]
    pub fn signatures(&self) -> &[PositionSignature] {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_counts_accumulate() {
        let mut history = PositionHistory::new();
        let start = PositionSignature::of(&Board::new());
        assert_eq!(history.occurrence_count(start), 0);
        assert_eq!(history.record(start), 1);
        assert_eq!(history.record(start), 2);
        assert_eq!(history.occurrence_count(start), 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_distinct_positions_counted_separately() {
        let mut history = PositionHistory::new();
        let a = PositionSignature::of(&Board::new());
        let b = PositionSignature::of(&Board::new().after("e2e4".parse().unwrap()));
        history.record(a);
        history.record(b);
        assert_eq!(history.occurrence_count(a), 1);
        assert_eq!(history.occurrence_count(b), 1);
        assert_eq!(history.signatures(), &[a, b]);
    }
}
