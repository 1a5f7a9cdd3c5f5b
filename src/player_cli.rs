use crate::board::{Board, Move};
use crate::common::Player;
use crate::console::Console;
use crate::player::MoveSource;
use std::io;

/// Human move source: prompts on the console until it receives a
/// parseable, legal move.
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode "row col" as two whitespace-separated 1-based numbers into a
/// zero-based [`Move`]. `None` on wrong arity, non-numeric input, or a
/// coordinate of zero; trailing tokens are ignored.
pub fn parse_move(input: &str) -> Option<Move> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    let col = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    Some(Move::new(row, col))
}

impl MoveSource for HumanPlayer {
    fn select_move(
        &mut self,
        console: &mut dyn Console,
        board: &Board,
        _player: Player,
    ) -> io::Result<Option<Move>> {
        // Unbounded retry: a human turn cannot fail, only stall.
        loop {
            let raw = console.ask("Place your mark at (row col): ")?;
            match parse_move(&raw) {
                Some(mv) if board.is_valid_move(mv) => return Ok(Some(mv)),
                Some(_) => console.print("That square is not available."),
                None => console.print("Enter two numbers, e.g. 1 3."),
            }
        }
    }
}
