//! Localized string dictionaries. The game reads exactly two fields:
//! the replay question and the character that means "yes".

use clap::ValueEnum;

/// Languages the game ships dictionaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    English,
    Romanian,
}

/// Strings the session needs from a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    /// Replay confirmation question, printed verbatim as a prompt.
    pub play_again_question: &'static str,
    /// Lowercase character meaning "yes", matched case-insensitively
    /// against the first character of the answer.
    pub confirm: char,
}

const ENGLISH: Dictionary = Dictionary {
    play_again_question: "Play again (yes/no)? ",
    confirm: 'y',
};

const ROMANIAN: Dictionary = Dictionary {
    play_again_question: "Mai jucam o data (da/nu)? ",
    confirm: 'd',
};

impl Language {
    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Language::English => &ENGLISH,
            Language::Romanian => &ROMANIAN,
        }
    }
}
