mod board;
mod input_field;
mod logs;
mod recent_moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // status
                Constraint::Length(10), // board
                Constraint::Length(3),  // dice
                Constraint::Min(0),
                Constraint::Length(3), // input
            ])
            .split(main_layout[0]);

        self.draw_game_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_dice(f, left_layout[2]);
        self.draw_input(f, left_layout[4]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.recent_moves.min(40) as u16 + 2),
                Constraint::Min(6), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_recent_moves(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }
}
