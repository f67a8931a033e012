//! Board rendering for both the live game and reviewed snapshots.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::{BLACK_BAR, BLACK_HOME, PlayerColor, PointIndex, WHITE_BAR, WHITE_HOME},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let (points, title) = match self.tracker.review_state() {
            Some(state) => (
                state.board.points(),
                format!("Board (reviewing {}/{})", state.position, state.total),
            ),
            None => (self.board.points(), "Board".to_string()),
        };

        let top: Vec<PointIndex> = (13..=24).collect();
        let bottom: Vec<PointIndex> = (1..=12).rev().collect();

        let lines = vec![
            point_numbers(&top),
            point_row(points, &top),
            Line::from(""),
            point_row(points, &bottom),
            point_numbers(&bottom),
            Line::from(""),
            Line::from(vec![
                Span::raw(" Bar  "),
                piece_span(points, WHITE_BAR),
                Span::raw(" "),
                piece_span(points, BLACK_BAR),
                Span::raw("   Home  "),
                piece_span(points, WHITE_HOME),
                Span::raw(" "),
                piece_span(points, BLACK_HOME),
            ]),
        ];

        let border_style = if self.tracker.is_reviewing() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            ),
            area,
        );
    }
}

fn point_numbers(indices: &[PointIndex]) -> Line<'static> {
    let spans: Vec<Span> = indices
        .iter()
        .map(|i| Span::styled(format!("{:>4}", i), Style::default().fg(Color::DarkGray)))
        .collect();
    Line::from(spans)
}

fn point_row(points: &[Vec<PlayerColor>], indices: &[PointIndex]) -> Line<'static> {
    let spans: Vec<Span> = indices
        .iter()
        .flat_map(|&i| [Span::raw(" "), piece_span(points, i)])
        .collect();
    Line::from(spans)
}

/// Three-column cell such as "W 5", "B 2" or "  .".
fn piece_span(points: &[Vec<PlayerColor>], point: PointIndex) -> Span<'static> {
    let pieces = points.get(point).map(Vec::as_slice).unwrap_or(&[]);

    match pieces.first() {
        None => Span::styled("  .", Style::default().fg(Color::DarkGray)),
        Some(color) => {
            let (label, style) = match color {
                PlayerColor::White => ("W", Style::default().fg(Color::White)),
                PlayerColor::Black => ("B", Style::default().fg(Color::Red)),
            };
            Span::styled(
                format!("{}{:>2}", label, pieces.len()),
                style.add_modifier(Modifier::BOLD),
            )
        }
    }
}
