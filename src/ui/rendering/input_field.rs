//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, handlers::input_status, types::InputStatus};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (border_color, subtitle) = match input_status(&self.input) {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let (text, help_text) = if self.tracker.is_reviewing() {
            (String::new(), "input paused while reviewing")
        } else {
            (
                format!("{}▌", self.input),
                "Enter = roll | <from> <to> = move | pass | Ctrl+Q = quit",
            )
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Input {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }
}
