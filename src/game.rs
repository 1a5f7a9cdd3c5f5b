//! Core match logic: outcome evaluation and per-match state.

use crate::board::{Board, Move};
use crate::common::{BoardError, Player};
use crate::config::BOARD_SIZE;

/// Result of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// Evaluate the board: a line (row, column or diagonal) whose signed
/// cell sum reaches the board size in absolute value is a win for the
/// player matching the sign. Scan order is rows 0..2, columns 0..2,
/// main diagonal, then anti-diagonal; the first full line found wins.
/// A full board with no winning line is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    let grid = board.grid();

    for row in grid.iter() {
        if let Some(winner) = line_winner(row.iter().map(|c| c.value()).sum()) {
            return Outcome::Win(winner);
        }
    }

    for col in 0..BOARD_SIZE {
        let sum = grid.iter().map(|row| row[col].value()).sum();
        if let Some(winner) = line_winner(sum) {
            return Outcome::Win(winner);
        }
    }

    let main_diag = (0..BOARD_SIZE).map(|i| grid[i][i].value()).sum();
    if let Some(winner) = line_winner(main_diag) {
        return Outcome::Win(winner);
    }

    let anti_diag = (0..BOARD_SIZE)
        .map(|i| grid[i][BOARD_SIZE - 1 - i].value())
        .sum();
    if let Some(winner) = line_winner(anti_diag) {
        return Outcome::Win(winner);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

fn line_winner(sum: i8) -> Option<Player> {
    if sum == BOARD_SIZE as i8 {
        Some(Player::One)
    } else if sum == -(BOARD_SIZE as i8) {
        Some(Player::Two)
    } else {
        None
    }
}

/// Mutable state of one match: the board plus whose turn it is.
/// Rebuilt from scratch for every match; nothing survives a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    board: Board,
    current: Player,
}

impl MatchState {
    /// Fresh match: empty board, player one to move.
    pub fn new() -> Self {
        MatchState {
            board: Board::new(),
            current: Player::One,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Apply one move for the current player, then evaluate. The turn
    /// passes to the opponent only while the match is still in
    /// progress, so `current` identifies the last mover at game over.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, BoardError> {
        self.board.apply(mv, self.current)?;
        let outcome = evaluate(&self.board);
        if outcome == Outcome::InProgress {
            self.current = self.current.opponent();
        }
        Ok(outcome)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        MatchState::new()
    }
}
