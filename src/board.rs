//! Backgammon board model.
//!
//! Locations 1-24 are the playing points. The four extra locations hold
//! pieces that are off the points:
//! - 0: Black's bar (also Black's bearing off target)
//! - 25: White's bar (also White's bearing off target)
//! - 26: Black's home (pieces borne off)
//! - 27: White's home (pieces borne off)
//!
//! White moves from 1 towards 24, Black from 24 towards 1.

use std::fmt;

/// Index of a board location (0-27).
pub type PointIndex = usize;

pub const BLACK_BAR: PointIndex = 0;
pub const WHITE_BAR: PointIndex = 25;
pub const BLACK_HOME: PointIndex = 26;
pub const WHITE_HOME: PointIndex = 27;

/// Total number of locations, playing points plus bars and homes.
pub const LOCATION_COUNT: usize = 28;

pub const PIECES_PER_PLAYER: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    /// Location a hit piece of this color is sent to.
    pub fn bar(self) -> PointIndex {
        match self {
            PlayerColor::White => WHITE_BAR,
            PlayerColor::Black => BLACK_BAR,
        }
    }

    /// Location this color's borne-off pieces are collected in.
    pub fn home(self) -> PointIndex {
        match self {
            PlayerColor::White => WHITE_HOME,
            PlayerColor::Black => BLACK_HOME,
        }
    }

    /// Target a move must name to bear a piece of this color off.
    pub fn bear_off_target(self) -> PointIndex {
        match self {
            PlayerColor::White => WHITE_BAR,
            PlayerColor::Black => BLACK_BAR,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerColor::White => "White",
            PlayerColor::Black => "Black",
        };
        write!(f, "{}", s)
    }
}

/// Live board state. Owns the occupancy of every location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    points: Vec<Vec<PlayerColor>>,
}

impl Board {
    /// Create a board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self {
            points: vec![Vec::new(); LOCATION_COUNT],
        };
        board.setup_initial_position();
        board
    }

    /// Create a board with nothing on it.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            points: vec![Vec::new(); LOCATION_COUNT],
        }
    }

    pub fn setup_initial_position(&mut self) {
        for point in self.points.iter_mut() {
            point.clear();
        }

        let layout = [
            (1, PlayerColor::White, 2),
            (12, PlayerColor::White, 5),
            (17, PlayerColor::White, 3),
            (19, PlayerColor::White, 5),
            (6, PlayerColor::Black, 5),
            (8, PlayerColor::Black, 3),
            (13, PlayerColor::Black, 5),
            (24, PlayerColor::Black, 2),
        ];

        for (point, color, count) in layout {
            self.points[point] = vec![color; count];
        }
    }

    /// Occupancy of every location, indexed by `PointIndex`.
    pub fn points(&self) -> &[Vec<PlayerColor>] {
        &self.points
    }

    /// Pieces at a location, empty for out-of-range indices.
    pub fn pieces_at(&self, point: PointIndex) -> &[PlayerColor] {
        self.points.get(point).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_pieces_at(&self, point: PointIndex, color: PlayerColor) -> usize {
        self.pieces_at(point).iter().filter(|&&p| p == color).count()
    }

    /// Color of the piece that would move next from `point`.
    pub fn top_piece(&self, point: PointIndex) -> Option<PlayerColor> {
        self.pieces_at(point).last().copied()
    }

    /// Place a piece directly, bypassing movement rules.
    #[cfg(test)]
    pub(crate) fn place_piece(&mut self, point: PointIndex, color: PlayerColor) {
        if let Some(stack) = self.points.get_mut(point) {
            stack.push(color);
        }
    }

    /// Move the top piece of `from` to `to`.
    ///
    /// Naming the player's bar as target bears the piece off into their home.
    /// Landing on a single opposing piece sends that piece to its bar.
    /// Returns false if the indices are out of range or `from` is empty.
    pub fn move_piece(&mut self, from: PointIndex, to: PointIndex) -> bool {
        if from > WHITE_BAR || to >= LOCATION_COUNT {
            return false;
        }

        let Some(color) = self.top_piece(from) else {
            return false;
        };

        if to == color.bear_off_target() {
            self.points[from].pop();
            self.points[color.home()].push(color);
            return true;
        }

        let is_playing_point = !matches!(to, BLACK_BAR | WHITE_BAR | BLACK_HOME | WHITE_HOME);
        if is_playing_point {
            let target = &self.points[to];
            if target.len() == 1 && target[0] != color {
                let hit = target[0];
                self.points[to].pop();
                self.points[hit.bar()].push(hit);
            }
        }

        self.points[from].pop();
        self.points[to].push(color);
        true
    }

    pub fn has_pieces_on_bar(&self, color: PlayerColor) -> bool {
        self.count_pieces_at(color.bar(), color) > 0
    }

    /// All pieces of `color` are in its home board and none on the bar.
    pub fn can_bear_off(&self, color: PlayerColor) -> bool {
        let mut outside = match color {
            PlayerColor::White => 1..=18,
            PlayerColor::Black => 7..=24,
        };

        if outside.any(|p| self.count_pieces_at(p, color) > 0) {
            return false;
        }

        !self.has_pieces_on_bar(color)
    }

    /// The player who has borne off all their pieces, if any.
    pub fn winner(&self) -> Option<PlayerColor> {
        if self.pieces_at(WHITE_HOME).len() == PIECES_PER_PLAYER {
            Some(PlayerColor::White)
        } else if self.pieces_at(BLACK_HOME).len() == PIECES_PER_PLAYER {
            Some(PlayerColor::Black)
        } else {
            None
        }
    }

    /// Take an owned copy of the current occupancy.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            points: self.points.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned copy of a board's occupancy at one point in time.
///
/// Shares no storage with the `Board` it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    points: Vec<Vec<PlayerColor>>,
}

impl BoardSnapshot {
    pub fn points(&self) -> &[Vec<PlayerColor>] {
        &self.points
    }

    pub fn pieces_at(&self, point: PointIndex) -> &[PlayerColor] {
        self.points.get(point).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_pieces_at(&self, point: PointIndex, color: PlayerColor) -> usize {
        self.pieces_at(point).iter().filter(|&&p| p == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let board = Board::new();

        for color in [PlayerColor::White, PlayerColor::Black] {
            let total: usize = (0..LOCATION_COUNT)
                .map(|point| board.count_pieces_at(point, color))
                .sum();
            assert_eq!(total, PIECES_PER_PLAYER);
        }
        assert_eq!(board.count_pieces_at(1, PlayerColor::White), 2);
        assert_eq!(board.count_pieces_at(13, PlayerColor::Black), 5);
        assert!(board.pieces_at(WHITE_HOME).is_empty());
    }

    #[test]
    fn test_pieces_at_out_of_range() {
        let board = Board::new();
        assert!(board.pieces_at(99).is_empty());
        assert_eq!(board.top_piece(99), None);
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::new();

        assert!(board.move_piece(1, 5));
        assert_eq!(board.count_pieces_at(1, PlayerColor::White), 1);
        assert_eq!(board.count_pieces_at(5, PlayerColor::White), 1);
    }

    #[test]
    fn test_move_from_empty_point_fails() {
        let mut board = Board::new();
        assert!(!board.move_piece(2, 5));
        assert!(!board.move_piece(26, 5));
        assert!(!board.move_piece(1, 28));
    }

    #[test]
    fn test_hit_sends_blot_to_bar() {
        let mut board = Board::empty();
        board.place_piece(3, PlayerColor::White);
        board.place_piece(5, PlayerColor::Black);

        assert!(board.move_piece(3, 5));
        assert_eq!(board.pieces_at(5), &[PlayerColor::White]);
        assert!(board.has_pieces_on_bar(PlayerColor::Black));
        assert_eq!(board.count_pieces_at(BLACK_BAR, PlayerColor::Black), 1);
    }

    #[test]
    fn test_no_hit_on_made_point() {
        let mut board = Board::empty();
        board.place_piece(3, PlayerColor::White);
        board.place_piece(5, PlayerColor::Black);
        board.place_piece(5, PlayerColor::Black);

        assert!(board.move_piece(3, 5));
        assert_eq!(board.count_pieces_at(5, PlayerColor::Black), 2);
        assert!(!board.has_pieces_on_bar(PlayerColor::Black));
    }

    #[test]
    fn test_bear_off_goes_home() {
        let mut board = Board::empty();
        board.place_piece(22, PlayerColor::White);
        board.place_piece(2, PlayerColor::Black);

        assert!(board.move_piece(22, WHITE_BAR));
        assert_eq!(board.count_pieces_at(WHITE_HOME, PlayerColor::White), 1);

        assert!(board.move_piece(2, BLACK_BAR));
        assert_eq!(board.count_pieces_at(BLACK_HOME, PlayerColor::Black), 1);
    }

    #[test]
    fn test_can_bear_off() {
        let mut board = Board::empty();
        board.place_piece(20, PlayerColor::White);
        assert!(board.can_bear_off(PlayerColor::White));

        board.place_piece(18, PlayerColor::White);
        assert!(!board.can_bear_off(PlayerColor::White));

        assert!(!Board::new().can_bear_off(PlayerColor::Black));
    }

    #[test]
    fn test_winner() {
        let mut board = Board::empty();
        assert_eq!(board.winner(), None);

        for _ in 0..PIECES_PER_PLAYER {
            board.place_piece(BLACK_HOME, PlayerColor::Black);
        }
        assert_eq!(board.winner(), Some(PlayerColor::Black));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new();
        let snapshot = board.snapshot();

        board.move_piece(1, 5);

        assert_eq!(snapshot.count_pieces_at(1, PlayerColor::White), 2);
        assert!(snapshot.pieces_at(5).is_empty());
    }

    #[test]
    fn test_player_color_display() {
        assert_eq!(PlayerColor::White.to_string(), "White");
        assert_eq!(PlayerColor::Black.opponent(), PlayerColor::White);
    }
}
