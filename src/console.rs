//! Console I/O seam: the game never touches raw stream handles outside
//! this module, which keeps every interactive loop scriptable in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented console the game talks to.
pub trait Console {
    /// Write one line of output.
    fn print(&mut self, text: &str);

    /// Write `prompt` (no newline) and block for one line of input,
    /// returned without its trailing newline.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Real console over stdin/stdout.
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// In-memory console that answers prompts from a fixed script and
/// records everything printed. Lets tests drive the menu and session
/// loops end to end without a terminal.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed so far, prompts included.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Answers not yet consumed by a prompt.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}
