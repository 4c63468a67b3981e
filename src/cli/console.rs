//! Line-oriented console over any reader and writer.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt-and-read helper used by the menus.
///
/// Generic over its input and output so menus can be driven from a script
/// in tests and from stdin/stdout in the binaries.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line.
    ///
    /// Returns `None` once input is exhausted. The trailing line break is
    /// removed; other whitespace is kept.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let end = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(end);
        Ok(Some(line))
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Give back the output, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }
}
