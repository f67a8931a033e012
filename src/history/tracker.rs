//! Append-only game log with a review cursor.

use chrono::Utc;
use tracing::{debug, info};

use crate::board::{Board, BoardSnapshot, PlayerColor, PointIndex};

use super::{
    session::SessionId,
    types::{DiceRecord, MoveRecord, ReviewState},
};

/// Number of entries the recent-moves panel shows by default.
pub const DEFAULT_RECENT_MOVES: usize = 5;

pub const NO_MOVE_AVAILABLE: &str = "No move available";

/// Records every roll and move of the current game for later review.
///
/// `moves`, `board_states` and `dice_history` always have the same length;
/// entry `i` of each describes the same moment. Recording is ignored while
/// reviewing so the log cannot change under the cursor.
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    moves: Vec<MoveRecord>,
    board_states: Vec<BoardSnapshot>,
    dice_history: Vec<DiceRecord>,
    session_id: SessionId,
    review_index: isize, // -1 outside review mode
    in_review_mode: bool,
}

impl HistoryTracker {
    pub fn new() -> Self {
        let session_id = SessionId::now();
        info!("Tracking new game {}", session_id);

        Self {
            moves: Vec::new(),
            board_states: Vec::new(),
            dice_history: Vec::new(),
            session_id,
            review_index: -1,
            in_review_mode: false,
        }
    }

    /// Drop all recorded history and start a fresh session.
    pub fn start_new_game(&mut self) {
        self.session_id = SessionId::now();
        self.moves.clear();
        self.board_states.clear();
        self.dice_history.clear();
        self.in_review_mode = false;
        self.review_index = -1;

        info!("Tracking new game {}", self.session_id);
    }

    /// Record a piece movement together with the board after the move.
    pub fn record_move(
        &mut self,
        player: PlayerColor,
        from: PointIndex,
        to: PointIndex,
        board: &Board,
        dice_values: &[u8],
        dice_used: &[bool],
    ) {
        if self.in_review_mode {
            debug!("Ignoring move while reviewing");
            return;
        }

        self.push(
            MoveRecord::Move {
                player,
                from,
                to,
                timestamp: Utc::now(),
            },
            board,
            DiceRecord::new(dice_values, dice_used),
        );
    }

    /// Record the dice roll that opens a player's turn.
    pub fn record_turn_start(&mut self, player: PlayerColor, board: &Board, dice_values: &[u8]) {
        if self.in_review_mode {
            debug!("Ignoring turn start while reviewing");
            return;
        }

        self.push(
            MoveRecord::TurnStart {
                player,
                values: dice_values.to_vec(),
                timestamp: Utc::now(),
            },
            board,
            DiceRecord::unused(dice_values),
        );
    }

    fn push(&mut self, record: MoveRecord, board: &Board, dice: DiceRecord) {
        debug!(
            index = self.moves.len(),
            session = %self.session_id,
            "{}",
            record.description()
        );

        self.moves.push(record);
        self.board_states.push(board.snapshot());
        self.dice_history.push(dice);
    }

    /// Board and dice under the review cursor, or `None` when not reviewing
    /// or nothing was recorded.
    ///
    /// A cursor outside the recorded range is read as the last entry.
    pub fn review_state(&self) -> Option<ReviewState<'_>> {
        if !self.in_review_mode || self.board_states.is_empty() {
            return None;
        }

        let total = self.board_states.len();
        let index = usize::try_from(self.review_index)
            .ok()
            .filter(|&i| i < total)
            .unwrap_or(total - 1);

        Some(ReviewState {
            board: &self.board_states[index],
            dice: &self.dice_history[index],
            position: index + 1,
            total,
        })
    }

    /// Describe the entry at `index`, or return `NO_MOVE_AVAILABLE` if there
    /// is none.
    pub fn move_description(&self, index: isize) -> String {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.moves.get(i))
            .map(MoveRecord::description)
            .unwrap_or_else(|| NO_MOVE_AVAILABLE.to_string())
    }

    /// Enter review mode at the most recent entry. Fails on empty history.
    pub fn start_review_mode(&mut self) -> bool {
        if self.board_states.is_empty() {
            return false;
        }

        self.in_review_mode = true;
        self.review_index = self.last_index();
        info!("Review started at entry {}", self.review_index + 1);
        true
    }

    pub fn exit_review_mode(&mut self) {
        if self.in_review_mode {
            info!("Review ended");
        }
        self.in_review_mode = false;
        self.review_index = -1;
    }

    pub fn move_to_previous(&mut self) -> bool {
        if !self.can_navigate() || self.review_index <= 0 {
            return false;
        }

        self.review_index -= 1;
        true
    }

    pub fn move_to_next(&mut self) -> bool {
        if !self.can_navigate() || self.review_index >= self.last_index() {
            return false;
        }

        self.review_index += 1;
        true
    }

    pub fn move_to_first(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }

        self.review_index = 0;
        true
    }

    pub fn move_to_last(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }

        self.review_index = self.last_index();
        true
    }

    fn can_navigate(&self) -> bool {
        self.in_review_mode && !self.board_states.is_empty()
    }

    fn last_index(&self) -> isize {
        self.board_states.len() as isize - 1
    }

    pub fn is_reviewing(&self) -> bool {
        self.in_review_mode
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Raw review cursor. Only meaningful while `is_reviewing()`; -1 otherwise.
    pub fn current_index(&self) -> isize {
        self.review_index
    }

    /// The last `count` entries in recording order. Empty for `count == 0`.
    pub fn most_recent_moves(&self, count: usize) -> &[MoveRecord] {
        let start = self.moves.len().saturating_sub(count);
        &self.moves[start..]
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn board_states(&self) -> &[BoardSnapshot] {
        &self.board_states
    }

    pub fn dice_history(&self) -> &[DiceRecord] {
        &self.dice_history
    }
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_parallel(tracker: &HistoryTracker) {
        assert_eq!(tracker.moves().len(), tracker.board_states().len());
        assert_eq!(tracker.moves().len(), tracker.dice_history().len());
    }

    /// Tracker with `n` alternating turn starts and moves.
    fn tracker_with_entries(n: usize) -> HistoryTracker {
        let mut tracker = HistoryTracker::new();
        let mut board = Board::new();

        for i in 0..n {
            if i % 2 == 0 {
                tracker.record_turn_start(PlayerColor::White, &board, &[3, 5]);
            } else {
                board.move_piece(1, 4);
                tracker.record_move(PlayerColor::White, 1, 4, &board, &[3, 5], &[true, false]);
            }
        }

        tracker
    }

    #[test]
    fn test_new_tracker_is_empty_and_live() {
        let tracker = HistoryTracker::new();

        assert_eq!(tracker.move_count(), 0);
        assert!(!tracker.is_reviewing());
        assert_eq!(tracker.current_index(), -1);
        assert!(tracker.session_id().as_str().starts_with("game_"));
        assert!(tracker.review_state().is_none());
    }

    #[test]
    fn test_recording_keeps_sequences_parallel() {
        let mut tracker = HistoryTracker::new();
        let board = Board::new();

        tracker.record_turn_start(PlayerColor::White, &board, &[4, 6]);
        assert_parallel(&tracker);

        tracker.record_move(PlayerColor::White, 1, 5, &board, &[4, 6], &[true, false]);
        assert_parallel(&tracker);

        tracker.record_turn_start(PlayerColor::Black, &board, &[2, 2, 2, 2]);
        assert_parallel(&tracker);
        assert_eq!(tracker.move_count(), 3);
    }

    #[test]
    fn test_turn_start_dice_are_unused() {
        let mut tracker = HistoryTracker::new();
        tracker.record_turn_start(PlayerColor::Black, &Board::new(), &[2, 2, 2, 2]);

        let dice = &tracker.dice_history()[0];
        assert_eq!(dice.values, vec![2, 2, 2, 2]);
        assert_eq!(dice.used, vec![false; 4]);
    }

    #[test]
    fn test_move_dice_are_copied() {
        let mut tracker = HistoryTracker::new();
        let mut values = vec![4, 6];
        let mut used = vec![true, false];

        tracker.record_move(PlayerColor::White, 1, 5, &Board::new(), &values, &used);
        values[0] = 1;
        used[1] = true;

        assert_eq!(tracker.dice_history()[0], DiceRecord::new(&[4, 6], &[true, false]));
    }

    #[test]
    fn test_recording_ignored_while_reviewing() {
        let mut tracker = tracker_with_entries(2);
        assert!(tracker.start_review_mode());

        let board = Board::new();
        tracker.record_turn_start(PlayerColor::Black, &board, &[1, 2]);
        tracker.record_move(PlayerColor::Black, 24, 22, &board, &[1, 2], &[false, true]);

        assert_eq!(tracker.move_count(), 2);
        assert_eq!(tracker.board_states().len(), 2);
        assert_eq!(tracker.dice_history().len(), 2);
    }

    #[test]
    fn test_start_new_game_clears_history() {
        let mut tracker = tracker_with_entries(4);
        tracker.start_review_mode();

        tracker.start_new_game();

        assert_eq!(tracker.move_count(), 0);
        assert!(tracker.board_states().is_empty());
        assert!(tracker.dice_history().is_empty());
        assert!(!tracker.is_reviewing());
        assert_eq!(tracker.current_index(), -1);
    }

    #[test]
    fn test_snapshot_isolated_from_live_board() {
        let mut tracker = HistoryTracker::new();
        let mut board = Board::new();

        board.move_piece(1, 5);
        tracker.record_move(PlayerColor::White, 1, 5, &board, &[4, 6], &[true, false]);
        let recorded = tracker.board_states()[0].clone();

        board.move_piece(12, 16);
        board.move_piece(5, 9);

        assert_eq!(tracker.board_states()[0], recorded);
        assert_eq!(tracker.board_states()[0].count_pieces_at(5, PlayerColor::White), 1);
        assert!(tracker.board_states()[0].pieces_at(16).is_empty());
    }

    #[test]
    fn test_start_review_on_empty_history_fails() {
        let mut tracker = HistoryTracker::new();

        assert!(!tracker.start_review_mode());
        assert!(!tracker.is_reviewing());
        assert_eq!(tracker.current_index(), -1);
    }

    #[test]
    fn test_start_review_begins_at_latest() {
        let mut tracker = tracker_with_entries(3);

        assert!(tracker.start_review_mode());
        assert!(tracker.is_reviewing());
        assert_eq!(tracker.current_index(), 2);
    }

    #[test]
    fn test_exit_review_resets_cursor() {
        let mut tracker = tracker_with_entries(3);
        tracker.start_review_mode();

        tracker.exit_review_mode();

        assert!(!tracker.is_reviewing());
        assert_eq!(tracker.current_index(), -1);
        assert!(tracker.review_state().is_none());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut tracker = tracker_with_entries(3);
        tracker.start_review_mode();

        assert!(!tracker.move_to_next());
        assert_eq!(tracker.current_index(), 2);

        assert!(tracker.move_to_previous());
        assert!(tracker.move_to_previous());
        assert_eq!(tracker.current_index(), 0);

        assert!(!tracker.move_to_previous());
        assert_eq!(tracker.current_index(), 0);

        assert!(tracker.move_to_next());
        assert_eq!(tracker.current_index(), 1);
    }

    #[test]
    fn test_first_and_last_round_trip() {
        let mut tracker = tracker_with_entries(5);
        tracker.start_review_mode();
        let start = tracker.current_index();

        assert!(tracker.move_to_first());
        assert_eq!(tracker.current_index(), 0);
        assert!(tracker.move_to_first());
        assert_eq!(tracker.current_index(), 0);

        assert!(tracker.move_to_last());
        assert_eq!(tracker.current_index(), start);
    }

    #[test]
    fn test_navigation_requires_review_mode() {
        let mut tracker = tracker_with_entries(3);

        assert!(!tracker.move_to_previous());
        assert!(!tracker.move_to_next());
        assert!(!tracker.move_to_first());
        assert!(!tracker.move_to_last());
        assert_eq!(tracker.current_index(), -1);
    }

    #[test]
    fn test_review_state_follows_cursor() {
        let mut tracker = tracker_with_entries(2);
        tracker.start_review_mode();

        let state = tracker.review_state().unwrap();
        assert_eq!(state.position, 2);
        assert_eq!(state.total, 2);
        assert_eq!(state.dice.used, vec![true, false]);
        assert_eq!(state.board.count_pieces_at(4, PlayerColor::White), 1);

        tracker.move_to_first();
        let state = tracker.review_state().unwrap();
        assert_eq!(state.position, 1);
        assert_eq!(state.dice.used, vec![false, false]);
        assert!(state.board.pieces_at(4).is_empty());
    }

    #[test]
    fn test_review_state_clamps_stale_cursor() {
        let mut tracker = tracker_with_entries(3);
        tracker.start_review_mode();

        tracker.review_index = 42;
        assert_eq!(tracker.review_state().unwrap().position, 3);

        tracker.review_index = -5;
        assert_eq!(tracker.review_state().unwrap().position, 3);
    }

    #[test]
    fn test_move_descriptions() {
        let mut tracker = HistoryTracker::new();
        let board = Board::new();

        tracker.record_turn_start(PlayerColor::White, &board, &[4, 6]);
        tracker.record_move(PlayerColor::White, 1, 5, &board, &[4, 6], &[true, false]);

        assert_eq!(tracker.move_description(0), "White rolled [4, 6]");
        assert_eq!(tracker.move_description(1), "White moved from 1 to 5");
        assert_eq!(tracker.move_description(2), "No move available");
        assert_eq!(tracker.move_description(-1), "No move available");
    }

    #[test]
    fn test_most_recent_moves() {
        let tracker = tracker_with_entries(5);

        let recent = tracker.most_recent_moves(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent, &tracker.moves()[3..5]);
    }

    #[test]
    fn test_most_recent_moves_short_history() {
        let tracker = tracker_with_entries(3);
        assert_eq!(tracker.most_recent_moves(DEFAULT_RECENT_MOVES).len(), 3);
        assert!(tracker.most_recent_moves(0).is_empty());

        let empty = HistoryTracker::new();
        assert!(empty.most_recent_moves(DEFAULT_RECENT_MOVES).is_empty());
    }
}
