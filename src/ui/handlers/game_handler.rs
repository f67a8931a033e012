//! Live game state transitions.

use crate::{
    board::{PlayerColor, PointIndex},
    rules::MoveValidator,
};

use super::super::app::App;

/// Helper struct for playing the live game and feeding the history tracker.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_new_game(&mut self) {
        self.app.board.setup_initial_position();
        self.app.dice.reset();
        self.app.tracker.start_new_game();
        self.app.current_player = PlayerColor::White;
        self.app.winner = None;
        self.app.input.clear();

        self.app
            .log(format!("Game {} started", self.app.tracker.session_id()));
    }

    /// Roll for the current player and record the start of their turn.
    pub fn roll_dice(&mut self) {
        if self.app.winner.is_some() {
            self.app.log("Game is over, press Ctrl+N for a new game");
            return;
        }

        if self.app.dice.has_unused() {
            self.app.log("Dice already rolled, finish the turn or pass");
            return;
        }

        let (values, doubles) = self.app.dice.roll_with(&mut self.app.rng);
        self.app.tracker.record_turn_start(
            self.app.current_player,
            &self.app.board,
            self.app.dice.values(),
        );

        let suffix = if doubles { " (doubles)" } else { "" };
        self.app.log(format!(
            "{} rolled {:?}{}",
            self.app.current_player, values, suffix
        ));

        if !self.has_legal_moves() {
            self.app
                .log(format!("{} has no legal moves", self.app.current_player));
            self.end_turn();
        }
    }

    /// Move a piece of the current player if the rules allow it, consuming a die.
    pub fn apply_move(&mut self, from: PointIndex, to: PointIndex) -> bool {
        let player = self.app.current_player;

        if self.app.winner.is_some() {
            self.app.log("Game is over, press Ctrl+N for a new game");
            return false;
        }

        if !self.app.dice.has_unused() {
            self.app.log("Roll the dice first");
            return false;
        }

        let unused = self.app.dice.unused_values();
        let checked =
            MoveValidator::new(&self.app.board).find_die_for_move(player, from, to, &unused);
        let die = match checked {
            Ok(die) => die,
            Err(e) => {
                self.app.log(format!("Illegal move {} to {}: {}", from, to, e));
                return false;
            }
        };

        if !self.app.board.move_piece(from, to) {
            self.app.log(format!("Cannot move from {} to {}", from, to));
            return false;
        }

        self.app.dice.mark_used(die);
        self.app.tracker.record_move(
            player,
            from,
            to,
            &self.app.board,
            self.app.dice.values(),
            self.app.dice.used(),
        );
        self.app
            .log(format!("{} moved from {} to {}", player, from, to));

        if let Some(winner) = self.app.board.winner() {
            self.app.winner = Some(winner);
            self.app.dice.reset();
            self.app.log(format!("{} wins!", winner));
            return true;
        }

        if self.app.dice.all_used() {
            self.end_turn();
        } else if !self.has_legal_moves() {
            self.app
                .log(format!("{} has no legal moves left", player));
            self.end_turn();
        }

        true
    }

    /// Give up the remaining dice and hand over to the opponent.
    pub fn pass_turn(&mut self) {
        if !self.app.dice.is_rolled() {
            self.app.log("Roll the dice first");
            return;
        }

        self.app
            .log(format!("{} passed", self.app.current_player));
        self.end_turn();
    }

    fn has_legal_moves(&self) -> bool {
        let unused = self.app.dice.unused_values();
        !MoveValidator::new(&self.app.board)
            .valid_moves(self.app.current_player, &unused)
            .is_empty()
    }

    fn end_turn(&mut self) {
        self.app.dice.reset();
        self.app.current_player = self.app.current_player.opponent();
        self.app
            .log(format!("{} to roll", self.app.current_player));
    }
}
