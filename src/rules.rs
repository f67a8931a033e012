//! Move legality.
//!
//! White moves towards higher points and enters from its bar (25) on points
//! 1-6. Black moves towards lower points and enters from its bar (0) on
//! points 19-24. A point held by two or more opposing pieces is blocked.
//! Pieces jump over blocked points, so only the landing point is checked.

use anyhow::{Result, bail};

use crate::board::{Board, PlayerColor, PointIndex, WHITE_BAR};

/// A move as `(from, to)` locations.
pub type Move = (PointIndex, PointIndex);

/// Checks moves against a borrowed board.
pub struct MoveValidator<'a> {
    board: &'a Board,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Every legal move for any of the given dice, without duplicates.
    pub fn valid_moves(&self, color: PlayerColor, dice: &[u8]) -> Vec<Move> {
        let mut moves: Vec<Move> = dice
            .iter()
            .flat_map(|&die| self.valid_moves_for_die(color, die))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    pub fn valid_moves_for_die(&self, color: PlayerColor, die: u8) -> Vec<Move> {
        let die = usize::from(die);

        // Pieces on the bar must come in before anything else moves.
        if self.board.has_pieces_on_bar(color) {
            let entry = match color {
                PlayerColor::White => die,
                PlayerColor::Black => 25usize.saturating_sub(die),
            };
            return if self.is_valid_entry(entry, color) {
                vec![(color.bar(), entry)]
            } else {
                Vec::new()
            };
        }

        let bearing_off = self.board.can_bear_off(color);
        let mut moves = Vec::new();

        for from in 1..=24 {
            if self.board.top_piece(from) != Some(color) {
                continue;
            }

            if bearing_off && self.can_bear_off_with_die(from, die, color) {
                moves.push((from, color.bear_off_target()));
            }

            let to = match color {
                PlayerColor::White => from + die,
                PlayerColor::Black => from.saturating_sub(die),
            };
            if self.is_valid_move(from, to, color) {
                moves.push((from, to));
            }
        }

        moves
    }

    /// Whether a piece coming off the bar may land on `entry`.
    pub fn is_valid_entry(&self, entry: PointIndex, color: PlayerColor) -> bool {
        (1..=24).contains(&entry) && !self.is_blocked(entry, color)
    }

    /// Whether a piece of `color` on `from` may land on the playing point `to`.
    pub fn is_valid_move(&self, from: PointIndex, to: PointIndex, color: PlayerColor) -> bool {
        (1..=24).contains(&to)
            && self.board.top_piece(from) == Some(color)
            && !self.is_blocked(to, color)
    }

    /// Whether `die` bears a piece off from `from`.
    ///
    /// The exact pip count always works. A larger die only works for the
    /// piece furthest from home.
    pub fn can_bear_off_with_die(&self, from: PointIndex, die: usize, color: PlayerColor) -> bool {
        if !self.board.can_bear_off(color) {
            return false;
        }

        let (exact, mut further) = match color {
            PlayerColor::White if (19..=24).contains(&from) => (25 - from, 19..from),
            PlayerColor::Black if (1..=6).contains(&from) => (from, from + 1..7),
            _ => return false,
        };

        if die == exact {
            return true;
        }

        die > exact && !further.any(|p| self.board.count_pieces_at(p, color) > 0)
    }

    /// Pick the unused die that plays `from -> to`, or explain why none does.
    ///
    /// When bearing off with no exact die, the smallest larger die is used.
    pub fn find_die_for_move(
        &self,
        color: PlayerColor,
        from: PointIndex,
        to: PointIndex,
        available: &[u8],
    ) -> Result<u8> {
        if from > WHITE_BAR || to > WHITE_BAR {
            bail!("moves run between points 0 and 25");
        }

        if self.board.top_piece(from) != Some(color) {
            bail!("no {} piece on point {}", color, from);
        }

        let bar = color.bar();
        if self.board.has_pieces_on_bar(color) && from != bar {
            bail!("{} must enter from the bar first", color);
        }

        if from == bar {
            return self.entry_die(color, to, available);
        }

        if to == color.bear_off_target() {
            return self.bear_off_die(color, from, available);
        }

        let distance = match color {
            PlayerColor::White if to > from => to - from,
            PlayerColor::Black if to < from => from - to,
            _ => bail!("{} cannot move backwards from {} to {}", color, from, to),
        };
        let die = u8::try_from(distance)?;

        if !available.contains(&die) {
            bail!("no die shows {}", die);
        }
        if !self.is_valid_move(from, to, color) {
            bail!("point {} is blocked", to);
        }

        Ok(die)
    }

    fn entry_die(&self, color: PlayerColor, to: PointIndex, available: &[u8]) -> Result<u8> {
        let distance = match color {
            PlayerColor::White if (1..=6).contains(&to) => to,
            PlayerColor::Black if (19..=24).contains(&to) => 25 - to,
            PlayerColor::White => bail!("White enters on points 1-6"),
            PlayerColor::Black => bail!("Black enters on points 19-24"),
        };
        let die = u8::try_from(distance)?;

        if !available.contains(&die) {
            bail!("no die shows {}", die);
        }
        if !self.is_valid_entry(to, color) {
            bail!("point {} is blocked", to);
        }

        Ok(die)
    }

    fn bear_off_die(&self, color: PlayerColor, from: PointIndex, available: &[u8]) -> Result<u8> {
        if !self.board.can_bear_off(color) {
            bail!("{} still has pieces outside the home board", color);
        }

        let die = available
            .iter()
            .copied()
            .filter(|&die| self.can_bear_off_with_die(from, usize::from(die), color))
            .min();

        match die {
            Some(die) => Ok(die),
            None => bail!("no die bears off from point {}", from),
        }
    }

    fn is_blocked(&self, point: PointIndex, color: PlayerColor) -> bool {
        let pieces = self.board.pieces_at(point);
        pieces.len() >= 2 && pieces[0] != color
    }
}
