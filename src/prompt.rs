//! Line-oriented interactive prompts.
//!
//! A [`Prompter`] wraps any `BufRead` + `Write` pair, so the CLI hands it
//! stdin/stdout and tests hand it in-memory buffers. In non-interactive mode
//! every prompt fails with [`CcdsError::InputRequired`] before anything is
//! printed.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::errors::{CcdsError, Result};

/// Outcome of parsing one answer to a numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAnswer {
    /// Zero-based index of the chosen option.
    Selected(usize),
    /// Not a valid choice; the prompt is re-issued without comment.
    Rejected,
}

fn parse_menu_answer(input: &str, len: usize, default: Option<usize>) -> MenuAnswer {
    if input.is_empty() {
        return match default {
            Some(i) if i < len => MenuAnswer::Selected(i),
            _ => MenuAnswer::Rejected,
        };
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => MenuAnswer::Selected(n - 1),
        _ => MenuAnswer::Rejected,
    }
}

/// Interactive question/answer channel.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    interactive: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
            closed: false,
        }
    }

    /// Consume the prompter and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ensure_interactive(&self) -> Result<()> {
        if self.interactive {
            Ok(())
        } else {
            Err(CcdsError::InputRequired)
        }
    }

    fn print(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its line terminator. End of input reads as "".
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_answer(&mut self) -> Result<String> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            self.closed = true;
        }
        Ok(String::from_utf8_lossy(&line)
            .trim_end_matches(['\n', '\r'])
            .to_string())
    }

    /// Ask a `[y/N]` question. `y` accepts; `n` or an empty answer declines.
    /// Anything else re-asks.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.ensure_interactive()?;
        self.print(&format!("{question} [y/N]: "))?;
        loop {
            match self.read_answer()?.as_str() {
                "y" => return Ok(true),
                "n" | "" => return Ok(false),
                _ => self.print("Please answer [y/N]: ")?,
            }
        }
    }

    /// Ask a freeform question. Any answer, including "", is accepted.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.ensure_interactive()?;
        self.print(&format!("{label}: "))?;
        self.read_answer()
    }

    /// Present `options` as a 1-indexed menu and return the selection.
    ///
    /// Invalid answers re-issue the `Choose` line with no error text. When
    /// `default` is set, an empty answer selects that index and the prompt
    /// shows it as `[n]`.
    pub fn choose<T: Copy + Display>(
        &mut self,
        title: &str,
        options: &[T],
        default: Option<usize>,
    ) -> Result<T> {
        self.ensure_interactive()?;

        let mut menu = format!("{title}: \n");
        for (i, option) in options.iter().enumerate() {
            menu.push_str(&format!("{} - {option}\n", i + 1));
        }
        self.print(&menu)?;

        let choices = (1..=options.len())
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let line = match default {
            Some(i) => format!("Choose {choices} [{}]: ", i + 1),
            None => format!("Choose {choices}: "),
        };

        loop {
            self.print(&line)?;
            let answer = self.read_answer()?;
            match parse_menu_answer(&answer, options.len(), default) {
                MenuAnswer::Selected(i) => return Ok(options[i]),
                MenuAnswer::Rejected if self.closed => return Err(CcdsError::InputClosed),
                MenuAnswer::Rejected => {}
            }
        }
    }
}
