//! Game history tracking for move review.
//!
//! This module provides:
//! - `types`: recorded entries and the review view handed to renderers
//! - `session`: session identifiers
//! - `tracker`: the append-only log and review cursor

mod session;
mod tracker;
mod types;

pub use session::SessionId;
pub use tracker::{DEFAULT_RECENT_MOVES, HistoryTracker, NO_MOVE_AVAILABLE};
pub use types::{DiceRecord, MoveRecord, ReviewState};
