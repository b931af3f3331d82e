//! Line-based terminal front end: a numbered menu read from stdin and an
//! output sink that writes narration to stdout.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use mf_fiction::{FictionResult, Menu, Output, Transcript};
use tracing::warn;

/// Prints the options as a numbered list and reads the player's pick.
pub struct TerminalMenu<R, W> {
    input: R,
    output: W,
}

impl TerminalMenu<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalMenu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Menu for TerminalMenu<R, W> {
    /// Re-asks until a number in range is entered. Closed input is an
    /// `UnexpectedEof` error.
    fn choose(&mut self, prompt: &str, options: &[String]) -> FictionResult<usize> {
        writeln!(self.output)?;
        writeln!(self.output, "{prompt}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{:>3}. {option}", i + 1)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
            }
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
                _ => writeln!(
                    self.output,
                    "Please enter a number from 1 to {}.",
                    options.len()
                )?,
            }
        }
    }
}

/// Writes narration to stdout and keeps a copy for `--transcript`.
pub struct Console {
    stdout: Stdout,
    copy: Transcript,
}

impl Console {
    pub fn new(copy: Transcript) -> Self {
        Self {
            stdout: io::stdout(),
            copy,
        }
    }
}

impl Output for Console {
    fn write(&mut self, text: &str) {
        if let Err(e) = self.stdout.write_all(text.as_bytes()) {
            warn!(error = %e, "stdout write failed");
        }
        self.copy.write(text);
    }
}
