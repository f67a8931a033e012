//! Log panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let logs = self.logs.lines();

        // Leave room for the border.
        let height = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(height);

        let lines: Vec<Line> = logs[start..]
            .iter()
            .map(|l| Line::styled(l.clone(), Style::default().fg(Color::Gray)))
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}
