//! Common types: players, game modes and board errors.

use core::fmt;

/// One of the two participants in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Plays "X" and always moves first.
    One,
    /// Plays "O"; human in PvP mode, computer in PvC mode.
    Two,
}

impl Player {
    /// The mark this player places on the board.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// Signed cell value used by the outcome evaluator.
    pub fn value(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "one"),
            Player::Two => write!(f, "two"),
        }
    }
}

/// How the second seat is filled for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Move coordinates fall outside the board.
    OutOfBounds,
    /// Target cell already holds a mark.
    CellOccupied,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "move is outside the board"),
            BoardError::CellOccupied => write!(f, "cell already holds a mark"),
        }
    }
}

impl std::error::Error for BoardError {}
