//! Line-oriented prompt helpers.
//!
//! # Invariants
//! - End of input is reported as `None`, never as an error.
//! - Returned text is trimmed.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use todo_core::TodoId;

pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user.";
pub const INVALID_NUMBER_MESSAGE: &str = "Error: Please enter a valid number.";

/// Reads answers from `input` after writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompts and reads one trimmed line. `None` means input has ended.
    pub fn read_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Raw bytes so a non-UTF-8 line degrades to U+FFFD instead of failing.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            self.say(CANCELLED_MESSAGE)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompts until a valid id is entered or input ends.
    pub fn read_id(&mut self, prompt: &str) -> io::Result<Option<TodoId>> {
        loop {
            let Some(answer) = self.read_input(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<TodoId>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => self.say(INVALID_NUMBER_MESSAGE)?,
            }
        }
    }
}
