//! Review mode state management.

use super::super::app::App;

/// Helper struct for browsing recorded history.
pub struct ReviewHandler<'a> {
    app: &'a mut App,
}

impl<'a> ReviewHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn enter_review_mode(&mut self) {
        if self.app.tracker.start_review_mode() {
            self.app.input.clear();
            self.app.log(format!(
                "Reviewing {} entries",
                self.app.tracker.move_count()
            ));
        } else {
            self.app.log("Nothing recorded yet");
        }
    }

    pub fn exit_review_mode(&mut self) {
        self.app.tracker.exit_review_mode();
        self.app.log("Back to live game");
    }

    pub fn previous(&mut self) {
        if self.app.tracker.move_to_previous() {
            self.log_position();
        }
    }

    pub fn next(&mut self) {
        if self.app.tracker.move_to_next() {
            self.log_position();
        }
    }

    pub fn first(&mut self) {
        if self.app.tracker.move_to_first() {
            self.log_position();
        }
    }

    pub fn last(&mut self) {
        if self.app.tracker.move_to_last() {
            self.log_position();
        }
    }

    fn log_position(&self) {
        let index = self.app.tracker.current_index();
        tracing::debug!(
            "Review cursor at {}: {}",
            index,
            self.app.tracker.move_description(index)
        );
    }
}
