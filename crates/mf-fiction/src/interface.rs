//! Collaborators at the edge of the engine: the menu that picks options and
//! the sink that receives narration.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::{FictionError, FictionResult};
use crate::narrator::wrap;
use crate::replay::ChoiceLog;

/// Presents a list of options and returns the one picked.
pub trait Menu {
    /// Show `options` under `prompt` and return the 0-based index chosen.
    ///
    /// Implementations must be deterministic given the same inputs so that
    /// choice logs replay faithfully.
    fn choose(&mut self, prompt: &str, options: &[String]) -> FictionResult<usize>;
}

/// Append-only text stream the narration is written to.
pub trait Output {
    /// Write text verbatim, including any ANSI escape codes.
    fn write(&mut self, text: &str);

    /// Write a paragraph wrapped at `width` columns, followed by a newline.
    fn paragraph(&mut self, text: &str, width: usize) {
        let mut wrapped = wrap(text, width);
        wrapped.push('\n');
        self.write(&wrapped);
    }
}

/// An output sink that keeps everything written to it.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// universe and read the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buffer: Rc<RefCell<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Output for Transcript {
    fn write(&mut self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }
}

/// A menu that answers from a recorded choice log.
#[derive(Debug, Clone, Default)]
pub struct ReplayMenu {
    choices: VecDeque<usize>,
}

impl ReplayMenu {
    /// Replay the given log from its first entry.
    pub fn new(log: &ChoiceLog) -> Self {
        Self {
            choices: log.iter().collect(),
        }
    }

    /// Replay 1-based choices given inline, handy for scripted tests.
    pub fn from_choices(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl Menu for ReplayMenu {
    fn choose(&mut self, _prompt: &str, options: &[String]) -> FictionResult<usize> {
        let choice = self
            .choices
            .pop_front()
            .ok_or(FictionError::ChoicesExhausted)?;
        if choice == 0 || choice > options.len() {
            return Err(FictionError::InvalidChoice {
                index: choice,
                options: options.len(),
            });
        }
        Ok(choice - 1)
    }
}
