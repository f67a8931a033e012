use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};

use crate::board::{LOCATION_COUNT, PointIndex};

pub const MAX_LOG_LINES: usize = 300;

/// Shared log panel contents, capped at `MAX_LOG_LINES`.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// A command typed on the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Roll,
    Pass,
    Move { from: PointIndex, to: PointIndex },
}

/// Parse `roll`, `pass` or `<from> <to>`.
pub fn parse_command(input: &str) -> Result<Command> {
    let parts: Vec<_> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => bail!("empty command"),
        [word] if word.eq_ignore_ascii_case("roll") || word.eq_ignore_ascii_case("r") => {
            Ok(Command::Roll)
        }
        [word] if word.eq_ignore_ascii_case("pass") || word.eq_ignore_ascii_case("p") => {
            Ok(Command::Pass)
        }
        [from, to] => Ok(Command::Move {
            from: parse_point(from)?,
            to: parse_point(to)?,
        }),
        _ => bail!("expected 'roll', 'pass' or '<from> <to>'"),
    }
}

fn parse_point(text: &str) -> Result<PointIndex> {
    let point: PointIndex = text
        .parse()
        .with_context(|| format!("'{}' is not a point number", text))?;

    if point >= LOCATION_COUNT {
        bail!("point {} is off the board", point);
    }

    Ok(point)
}
