//! Play the sample game from the keyboard or from a choice log.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use mf_fiction::{ReplayMenu, Transcript};

use super::NarratorArgs;
use crate::terminal::{Console, TerminalMenu};

pub fn run(
    replay: Option<&Path>,
    record: Option<&Path>,
    transcript: Option<&Path>,
    narrator: &NarratorArgs,
) -> Result<(), String> {
    // A saved session must replay at a width `mf check` can reproduce.
    let saving = record.is_some() || transcript.is_some();
    let interactive = replay.is_none() && !saving && io::stdout().is_terminal();
    let config = narrator.resolve(interactive)?;

    let saved = Transcript::new();
    let console = Console::new(saved.clone());
    let (log, outcome) = match replay {
        Some(path) => {
            let log = super::read_log(path)?;
            super::run_game(console, ReplayMenu::new(&log), config)?
        }
        None => super::run_game(console, TerminalMenu::stdin(), config)?,
    };

    if let Some(path) = record {
        fs::write(path, log.to_string())
            .map_err(|e| format!("cannot write choice log '{}': {e}", path.display()))?;
    }
    if let Some(path) = transcript {
        fs::write(path, saved.contents())
            .map_err(|e| format!("cannot write transcript '{}': {e}", path.display()))?;
    }

    super::finished(outcome)
}
