use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    board::{Board, PlayerColor},
    dice::Dice,
    history::HistoryTracker,
};

use super::types::LogBuffer;

/// Main application state container.
pub struct App {
    pub(in crate::ui) board: Board,
    pub(in crate::ui) dice: Dice,
    pub(in crate::ui) rng: StdRng,
    pub(in crate::ui) tracker: HistoryTracker,
    pub(in crate::ui) current_player: PlayerColor,
    pub(in crate::ui) winner: Option<PlayerColor>,
    pub(in crate::ui) input: String,
    pub(in crate::ui) recent_moves: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(seed: Option<u64>, recent_moves: usize, logs: LogBuffer) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            board: Board::new(),
            dice: Dice::new(),
            rng,
            tracker: HistoryTracker::new(),
            current_player: PlayerColor::White,
            winner: None,
            input: String::new(),
            recent_moves,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!("Game {} started", self.tracker.session_id()));

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
