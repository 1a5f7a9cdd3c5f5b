//! One game session: repeated matches until the player declines a
//! replay, each match a loop of render / obtain move / apply /
//! evaluate until a terminal outcome.

use crate::board::Move;
use crate::common::{GameMode, Player};
use crate::console::Console;
use crate::game::{MatchState, Outcome};
use crate::language::Dictionary;
use crate::menu::Settings;
use crate::player::MoveSource;
use crate::player_ai::ComputerPlayer;
use crate::player_cli::HumanPlayer;
use crate::ui::Screen;
use std::io;

/// Runs matches for one menu selection. Move sources are chosen once at
/// construction; the per-match state lives only inside [`Self::run`].
pub struct GameSession<'a> {
    console: &'a mut dyn Console,
    screen: &'a Screen,
    dictionary: &'static Dictionary,
    source_one: Box<dyn MoveSource>,
    source_two: Box<dyn MoveSource>,
}

impl<'a> GameSession<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        screen: &'a Screen,
        settings: &Settings,
        mode: GameMode,
    ) -> Self {
        let source_two: Box<dyn MoveSource> = match mode {
            GameMode::PlayerVsPlayer => Box::new(HumanPlayer::new()),
            GameMode::PlayerVsComputer => Box::new(ComputerPlayer::new()),
        };
        GameSession {
            console,
            screen,
            dictionary: settings.language.dictionary(),
            source_one: Box::new(HumanPlayer::new()),
            source_two,
        }
    }

    /// Play matches until the replay question is answered with
    /// anything other than the configured confirmation character.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let (outcome, state) = self.play_match()?;
            self.show_summary(outcome, &state);
            if !self.ask_play_again()? {
                return Ok(());
            }
        }
    }

    /// One match from a fresh board to a terminal outcome.
    fn play_match(&mut self) -> anyhow::Result<(Outcome, MatchState)> {
        let mut state = MatchState::new();
        loop {
            self.screen.clear(self.console);
            self.console.print(&self.screen.render_board(state.board()));
            self.console
                .print(&format!("Player {} it is your turn", state.current()));

            let Some(mv) = self.next_move(&state)? else {
                // No legal move left for the source; equivalent to a
                // draw rather than a crash.
                log::warn!("move source returned no move on a live board");
                return Ok((Outcome::Draw, state));
            };

            let mover = state.current();
            let outcome = state.play(mv)?;
            log::debug!(
                "player {} played ({}, {}) -> {:?}",
                mover,
                mv.row,
                mv.col,
                outcome
            );
            if outcome != Outcome::InProgress {
                log::info!("match over: {:?}", outcome);
                return Ok((outcome, state));
            }
        }
    }

    fn next_move(&mut self, state: &MatchState) -> io::Result<Option<Move>> {
        let current = state.current();
        let source = match current {
            Player::One => self.source_one.as_mut(),
            Player::Two => self.source_two.as_mut(),
        };
        source.select_move(&mut *self.console, state.board(), current)
    }

    fn show_summary(&mut self, outcome: Outcome, state: &MatchState) {
        self.screen.clear(self.console);
        match outcome {
            Outcome::Win(winner) => self.console.print(&format!(
                "Winner is Player {} ({})",
                winner,
                self.screen.mark(winner)
            )),
            _ => self.console.print("The game is a draw!"),
        }
        self.console.print(&self.screen.render_board(state.board()));
        self.console.print("GAME OVER");
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        let answer = self.console.ask(self.dictionary.play_again_question)?;
        Ok(answer
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&self.dictionary.confirm)))
    }
}
