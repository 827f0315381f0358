//! Moves typed in by a person (or any other line-oriented source).

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::core::GameError;
use crate::rules::{Game, MoveOf};

use super::Strategy;

/// Prompts on `output`, reads one line from `input`, and parses it with
/// the game's own notation.
#[derive(Debug)]
pub struct InteractiveStrategy<R, W> {
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: "Enter a move: ".to_string(),
        }
    }

    /// Replace the default prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}

impl InteractiveStrategy<StdinLock<'static>, Stdout> {
    /// Read from the process's stdin, prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<G: Game, R: BufRead, W: Write> Strategy<G> for InteractiveStrategy<R, W> {
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, GameError> {
        let line = self.read_line()?;
        game.str_to_move(&line)
    }

    fn name(&self) -> &str {
        "Interactive"
    }
}
