use crate::board::{Board, Move};
use crate::common::Player;
use crate::console::Console;
use std::io;

/// Interface implemented by different move sources.
///
/// A source is selected once per match for each seat. Human sources
/// block on the console until they can return a legal move; the
/// computer source returns `None` when the board offers no empty cell.
pub trait MoveSource {
    /// Produce the next move for `player` given the current board.
    fn select_move(
        &mut self,
        console: &mut dyn Console,
        board: &Board,
        player: Player,
    ) -> io::Result<Option<Move>>;
}
