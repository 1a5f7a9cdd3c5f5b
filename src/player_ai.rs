use crate::board::{Board, Move};
use crate::common::Player;
use crate::console::Console;
use crate::player::MoveSource;
use std::io;

/// Computer move source: takes the first empty cell, scanning rows then
/// columns in increasing order. Deliberately weak; a stronger strategy
/// would be another [`MoveSource`] implementor.
pub struct ComputerPlayer;

impl ComputerPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for ComputerPlayer {
    fn select_move(
        &mut self,
        _console: &mut dyn Console,
        board: &Board,
        _player: Player,
    ) -> io::Result<Option<Move>> {
        for (r, row) in board.grid().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    return Ok(Some(Move::new(r, c)));
                }
            }
        }
        // Full board: no legal move. The session treats this as a draw.
        Ok(None)
    }
}
