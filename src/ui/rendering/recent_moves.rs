use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use chrono::Local;

use crate::{board::PlayerColor, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_recent_moves(&self, f: &mut Frame, area: Rect) {
        let recent = self.tracker.most_recent_moves(self.recent_moves);
        let first_index = self.tracker.move_count() - recent.len();
        let cursor = self.tracker.current_index();

        let items: Vec<ListItem> = if self.tracker.move_count() == 0 {
            vec![ListItem::new("No moves yet")]
        } else {
            recent
                .iter()
                .enumerate()
                .map(|(offset, record)| {
                    let index = first_index + offset;
                    let text = format!(
                        "{:>3}. {} {}",
                        index + 1,
                        record.timestamp().with_timezone(&Local).format("%H:%M:%S"),
                        record.description()
                    );

                    let style = if self.tracker.is_reviewing() && cursor == index as isize {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        match record.player() {
                            PlayerColor::White => Style::default().fg(Color::White),
                            PlayerColor::Black => Style::default().fg(Color::Red),
                        }
                    };

                    ListItem::new(text).style(style)
                })
                .collect()
        };

        let title = format!("Recent moves (total: {})", self.tracker.move_count());

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
