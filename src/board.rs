//! Game board state: a fixed 3x3 grid of cells.

use crate::common::{BoardError, Player};
use crate::config::BOARD_SIZE;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Signed value used by the outcome evaluator: Empty = 0,
    /// player one = +1, player two = -1.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Mark(p) => p.value(),
        }
    }
}

/// A candidate placement, zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

/// Main board state: a row-major grid of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Bounds-checked cell lookup; `None` when outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Immutable view of the full grid.
    pub fn grid(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Pure validity predicate: the move targets an empty cell inside
    /// the board. Never panics.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        matches!(self.cell(mv.row, mv.col), Some(cell) if cell.is_empty())
    }

    /// Place `player`'s mark at `mv`. Callers validate first; a bad
    /// move reports an error rather than corrupting the grid.
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(mv.row)
            .and_then(|row| row.get_mut(mv.col))
            .ok_or(BoardError::OutOfBounds)?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied);
        }
        *cell = Cell::Mark(player);
        Ok(())
    }

    /// Returns `true` when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }
}
