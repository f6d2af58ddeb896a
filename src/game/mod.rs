//! Game sessions: applying moves, tracking status and history.
//!
//! A [`Session`] owns its board, the list of moves played and the
//! occurrence count of every position reached. Sessions share nothing, so
//! independent games can run side by side.

mod config;
mod error;
mod history;
mod record;
mod session;
mod status;

#[cfg(test)]
mod tests;

pub use crate::zobrist::PositionSignature;
pub use config::{PromotionPolicy, RulesConfig};
pub use error::GameError;
pub use history::PositionHistory;
pub use record::GameRecord;
pub use session::Session;
pub use status::{GameResult, PositionSummary, Status, FIFTY_MOVE_LIMIT, REPETITION_LIMIT};
