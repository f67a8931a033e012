use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_game_status(&self, f: &mut Frame, area: Rect) {
        let (status_text, color) = if let Some(winner) = self.winner {
            (
                format!("{} wins! | Ctrl+N: new game | Ctrl+R: review", winner),
                Color::Green,
            )
        } else if self.tracker.is_reviewing() {
            let index = self.tracker.current_index();
            (
                format!(
                    "Review: {} | ←/→ step | Home/End | Esc: back",
                    self.tracker.move_description(index)
                ),
                Color::Yellow,
            )
        } else {
            (
                format!(
                    "{} to play | Ctrl+R: review | Ctrl+N: new game",
                    self.current_player
                ),
                Color::White,
            )
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("Game {}", self.tracker.session_id())),
                ),
            area,
        );
    }

    pub(in crate::ui) fn draw_dice(&self, f: &mut Frame, area: Rect) {
        let (values, used) = match self.tracker.review_state() {
            Some(state) => (state.dice.values.as_slice(), state.dice.used.as_slice()),
            None => (self.dice.values(), self.dice.used()),
        };

        let line = if values.is_empty() {
            Line::from(Span::styled(
                "Not rolled (Enter to roll)",
                Style::default().fg(Color::Gray),
            ))
        } else {
            let spans: Vec<Span> = values
                .iter()
                .zip(used)
                .map(|(value, used)| {
                    let style = if *used {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default().fg(Color::Black).bg(Color::White)
                    };
                    Span::styled(format!(" {} ", value), style)
                })
                .flat_map(|span| [span, Span::raw(" ")])
                .collect();
            Line::from(spans)
        };

        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Dice")),
            area,
        );
    }
}
