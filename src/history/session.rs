use std::fmt;

use chrono::{DateTime, Local};

/// Identifies one game's worth of recorded history.
///
/// Formatted as `game_<YYYYMMDD_HHMMSS>` from local time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn now() -> Self {
        Self::from_time(Local::now())
    }

    pub fn from_time(time: DateTime<Local>) -> Self {
        Self(format!("game_{}", time.format("%Y%m%d_%H%M%S")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
