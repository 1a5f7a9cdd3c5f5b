//! Top-level interactive loop: main menu, settings and language
//! picker. Every invalid input re-prompts in an explicit loop; nothing
//! here recurses.

use crate::common::GameMode;
use crate::console::Console;
use crate::language::Language;
use crate::session::GameSession;
use crate::ui::{ansi, Screen};

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayPvp,
    PlayPvc,
    Settings,
    Exit,
}

impl MenuChoice {
    /// Map numeric input to a menu action; `None` re-prompts.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::PlayPvp),
            "2" => Some(MenuChoice::PlayPvc),
            "3" => Some(MenuChoice::Settings),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Settings menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChoice {
    ChangeLanguage,
    Back,
}

impl SettingsChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SettingsChoice::ChangeLanguage),
            "2" => Some(SettingsChoice::Back),
            _ => None,
        }
    }
}

fn parse_language(input: &str) -> Option<Language> {
    match input.trim() {
        "1" => Some(Language::English),
        "2" => Some(Language::Romanian),
        _ => None,
    }
}

/// Session-wide settings held by the menu and handed to each session.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub language: Language,
}

/// The application's top-level loop.
pub struct App<'a> {
    console: &'a mut dyn Console,
    screen: &'a Screen,
    settings: Settings,
}

impl<'a> App<'a> {
    pub fn new(console: &'a mut dyn Console, screen: &'a Screen, settings: Settings) -> Self {
        App {
            console,
            screen,
            settings,
        }
    }

    /// Loop over the main menu until the player picks Exit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let choice = self.main_menu()?;
            log::debug!("menu choice: {:?}", choice);
            match choice {
                MenuChoice::PlayPvp => self.play(GameMode::PlayerVsPlayer)?,
                MenuChoice::PlayPvc => self.play(GameMode::PlayerVsComputer)?,
                MenuChoice::Settings => self.settings_menu()?,
                MenuChoice::Exit => {
                    self.screen.clear(self.console);
                    return Ok(());
                }
            }
        }
    }

    fn play(&mut self, mode: GameMode) -> anyhow::Result<()> {
        GameSession::new(&mut *self.console, self.screen, &self.settings, mode).run()
    }

    fn main_menu(&mut self) -> anyhow::Result<MenuChoice> {
        loop {
            self.screen.clear(self.console);
            self.console.print(&self.screen.paint("MENU", ansi::YELLOW));
            self.console.print("1. Play Game (PvP)");
            self.console.print("2. Play Game (PvC)");
            self.console.print("3. Settings");
            self.console.print("4. Exit Game");
            let input = self.console.ask("Select an option: ")?;
            match MenuChoice::parse(&input) {
                Some(choice) => return Ok(choice),
                None => self.console.print(
                    &self
                        .screen
                        .paint("Invalid choice. Please try again.", ansi::RED),
                ),
            }
        }
    }

    fn settings_menu(&mut self) -> anyhow::Result<()> {
        loop {
            self.screen.clear(self.console);
            self.console.print("Settings Menu");
            self.console.print("1. Change Language");
            self.console.print("2. Back to Main Menu");
            let input = self.console.ask("Choose an option: ")?;
            match SettingsChoice::parse(&input) {
                Some(SettingsChoice::ChangeLanguage) => self.language_menu()?,
                Some(SettingsChoice::Back) => return Ok(()),
                None => self.console.print("Invalid choice."),
            }
        }
    }

    /// Language picker; invalid input falls back to the settings menu
    /// without changing the language.
    fn language_menu(&mut self) -> anyhow::Result<()> {
        self.screen.clear(self.console);
        self.console.print("Choose Language:");
        self.console.print("1. English");
        self.console.print("2. Romanian");
        let input = self.console.ask("Select language: ")?;
        match parse_language(&input) {
            Some(language) => {
                log::debug!("language changed to {:?}", language);
                self.settings.language = language;
            }
            None => self.console.print("Invalid choice. Returning to settings."),
        }
        Ok(())
    }

    /// Current settings, exposed for tests of the settings flow.
    pub fn settings(&self) -> Settings {
        self.settings
    }
}
