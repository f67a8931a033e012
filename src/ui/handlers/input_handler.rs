//! Input handling and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{
    app::App,
    types::{Command, InputStatus, parse_command},
};
use super::{GameHandler, ReviewHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.app.tracker.is_reviewing() {
            return self.handle_review_key(key);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).start_new_game();
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                ReviewHandler::new(self.app).enter_review_mode();
            }

            (KeyCode::Enter, _) => self.submit_input(),
            (KeyCode::Backspace, _) => {
                self.app.input.pop();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.app.input.push(c),
            _ => {}
        }
        false
    }

    fn handle_review_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q' | 'Q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ReviewHandler::new(self.app).exit_review_mode();
            }

            KeyCode::Esc => ReviewHandler::new(self.app).exit_review_mode(),
            KeyCode::Left | KeyCode::Up => ReviewHandler::new(self.app).previous(),
            KeyCode::Right | KeyCode::Down => ReviewHandler::new(self.app).next(),
            KeyCode::Home => ReviewHandler::new(self.app).first(),
            KeyCode::End => ReviewHandler::new(self.app).last(),

            _ => {}
        }

        false
    }

    fn submit_input(&mut self) {
        // A bare Enter rolls, so a turn can be played without typing "roll".
        let command = if self.app.input.trim().is_empty() {
            Ok(Command::Roll)
        } else {
            parse_command(&self.app.input)
        };

        match command {
            Ok(Command::Roll) => GameHandler::new(self.app).roll_dice(),
            Ok(Command::Pass) => GameHandler::new(self.app).pass_turn(),
            Ok(Command::Move { from, to }) => {
                GameHandler::new(self.app).apply_move(from, to);
            }
            Err(e) => {
                self.app
                    .log(format!("Input rejected: {:?} ({})", self.app.input, e));
                return;
            }
        }

        self.app.input.clear();
    }
}

/// Validation status of a partially typed command.
pub(in crate::ui) fn input_status(input: &str) -> InputStatus {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return InputStatus::Incomplete;
    }

    match parse_command(trimmed) {
        Ok(_) => InputStatus::Valid,
        Err(_) if trimmed.split_whitespace().count() == 1 => {
            if trimmed.chars().all(|c| c.is_ascii_digit()) {
                InputStatus::Incomplete
            } else if "roll".starts_with(trimmed) || "pass".starts_with(trimmed) {
                InputStatus::Incomplete
            } else {
                InputStatus::Invalid("unknown command")
            }
        }
        Err(_) if trimmed.split_whitespace().count() > 2 => InputStatus::Invalid("too many fields"),
        Err(_) => InputStatus::Invalid("points must be 0-27"),
    }
}
