use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::stdout_io::{write_line, write_text};

/// Line-oriented request/response over any reader and writer.
///
/// End of input is reported as `None` and treated by callers as the user
/// cancelling the session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        write_line(&mut self.output, text)
    }

    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write_text(&mut self.output, prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Repeats `prompt` until `validator` accepts the answer, printing each
    /// rejection in between.
    pub fn prompt_until_valid<T, E, F>(&mut self, prompt: &str, validator: F) -> io::Result<Option<T>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match validator(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(error) => self.say(&error.to_string())?,
            }
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
