//! Rules configuration for a game session.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with a move that reaches the last rank without naming a
/// promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionPolicy {
    /// Treat `e7e8` as `e7e8q`.
    #[default]
    DefaultQueen,
    /// Reject the move as illegal; the caller must name the piece.
    Reject,
}

/// Configuration for a [`Session`](super::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    /// How a promotion without a named piece is handled
    pub promotion_policy: PromotionPolicy,
}

impl RulesConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_promotion_policy(mut self, policy: PromotionPolicy) -> Self {
        self.promotion_policy = policy;
        self
    }
}
