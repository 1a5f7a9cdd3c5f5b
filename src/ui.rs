//! Terminal presentation: ANSI escapes, splash banner and board
//! rendering. Everything here degrades to plain text when colors are
//! disabled; game logic never depends on the escapes being emitted.

use crate::board::{Board, Cell};
use crate::common::Player;
use crate::console::Console;

pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const CLEAR_SCREEN: &str = "\x1b[2J";
    pub const CURSOR_HOME: &str = "\x1b[H";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
}

const BANNER: [(&str, &str); 7] = [
    (ansi::GREEN, r" ______  ____   __      ______   ____    __      ______   ___     ___"),
    (ansi::RED, r"|      ||    | /  ]    |      | /    |  /  ]    |      | /   \   /  _]"),
    (ansi::YELLOW, r"|      | |  | /  /     |      ||  o  | /  /     |      ||     | /  [_"),
    (ansi::BLUE, r"|_|  |_| |  |/  /      |_|  |_||     |/  /      |_|  |_||  O  ||    _]"),
    (ansi::GREEN, r"  |  |   |  /   \_       |  |  |  _  /   \_       |  |  |     ||   [_"),
    (ansi::RED, r"  |  |   |  \     |      |  |  |  |  \     |      |  |  |     ||     |"),
    (ansi::YELLOW, r"  |__|  |____\____|      |__|  |__|__|\____|      |__|   \___/ |_____|"),
];

/// Rendering helper carrying the single presentation setting.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    colors: bool,
}

impl Screen {
    pub fn new(colors: bool) -> Self {
        Screen { colors }
    }

    /// Wrap `text` in a color escape, or pass it through untouched.
    pub fn paint(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Clear the terminal and park the cursor top-left.
    pub fn clear(&self, console: &mut dyn Console) {
        if self.colors {
            console.print(&format!(
                "{}{}{}",
                ansi::CLEAR_SCREEN,
                ansi::CURSOR_HOME,
                ansi::RESET
            ));
        }
    }

    /// The multicolor splash banner.
    pub fn banner(&self) -> String {
        let mut art = String::from("\n");
        for (color, line) in BANNER {
            art.push_str(&self.paint(line, color));
            art.push('\n');
        }
        art
    }

    /// Colorized mark for a player: green X, red O.
    pub fn mark(&self, player: Player) -> String {
        let color = match player {
            Player::One => ansi::GREEN,
            Player::Two => ansi::RED,
        };
        self.paint(&player.mark().to_string(), color)
    }

    /// Current board, one text row per board row, `_` for empty cells.
    pub fn render_board(&self, board: &Board) -> String {
        let mut lines = Vec::new();
        for row in board.grid() {
            let mut line = String::new();
            for cell in row {
                match cell {
                    Cell::Empty => line.push('_'),
                    Cell::Mark(p) => line.push_str(&self.mark(*p)),
                }
                line.push(' ');
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
