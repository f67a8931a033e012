//! Data structures for recorded game history.

use chrono::{DateTime, Utc};

use crate::board::{BoardSnapshot, PlayerColor, PointIndex};

/// A single entry in the move log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRecord {
    /// A piece moved between two locations.
    Move {
        player: PlayerColor,
        from: PointIndex,
        to: PointIndex,
        timestamp: DateTime<Utc>,
    },
    /// A player rolled the dice to start their turn.
    TurnStart {
        player: PlayerColor,
        values: Vec<u8>,
        timestamp: DateTime<Utc>,
    },
}

impl MoveRecord {
    pub fn player(&self) -> PlayerColor {
        match self {
            MoveRecord::Move { player, .. } | MoveRecord::TurnStart { player, .. } => *player,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            MoveRecord::Move { timestamp, .. } | MoveRecord::TurnStart { timestamp, .. } => {
                *timestamp
            }
        }
    }

    /// Human-readable description, e.g. "White moved from 1 to 5".
    pub fn description(&self) -> String {
        match self {
            MoveRecord::TurnStart { player, values, .. } => {
                format!("{} rolled {:?}", player, values)
            }
            MoveRecord::Move {
                player, from, to, ..
            } => format!("{} moved from {} to {}", player, from, to),
        }
    }
}

/// Dice state at the moment an entry was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceRecord {
    pub values: Vec<u8>,
    pub used: Vec<bool>, // Parallel to `values`
}

impl DiceRecord {
    pub fn new(values: &[u8], used: &[bool]) -> Self {
        Self {
            values: values.to_vec(),
            used: used.to_vec(),
        }
    }

    /// A freshly rolled set with nothing consumed.
    pub fn unused(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            used: vec![false; values.len()],
        }
    }
}

/// What the review panel shows for the entry under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewState<'a> {
    pub board: &'a BoardSnapshot,
    pub dice: &'a DiceRecord,
    /// 1-based position for display.
    pub position: usize,
    pub total: usize,
}
