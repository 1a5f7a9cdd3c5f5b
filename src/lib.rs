mod board;
mod common;
mod config;
mod console;
mod game;
mod language;
mod logging;
mod menu;
mod player;
mod player_ai;
mod player_cli;
mod session;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use console::*;
pub use game::*;
pub use language::*;
pub use logging::init_logging;
pub use menu::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use session::*;
pub use ui::Screen;
