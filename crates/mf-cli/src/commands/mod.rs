pub mod check;
pub mod play;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use mf_fiction::{
    ChoiceLog, FictionError, FictionResult, Menu, NarratorConfig, Output, demo, turn,
};
use tracing::debug;

/// Narration settings shared by every command that runs a game.
#[derive(Args, Debug, Default)]
pub struct NarratorArgs {
    /// JSON file with narrator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap narration at this many columns (0 disables wrapping)
    #[arg(long)]
    width: Option<usize>,

    /// Style headings and echoed commands with ANSI codes
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Never emit ANSI codes
    #[arg(long)]
    no_color: bool,
}

impl NarratorArgs {
    /// Load the config file, if any, and apply the flags on top of it.
    ///
    /// Without a file or `--width`, an interactive session wraps at the
    /// terminal width.
    pub fn resolve(&self, interactive: bool) -> Result<NarratorConfig, String> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => NarratorConfig::default(),
        };

        if let Some(width) = self.width {
            config = config.with_wrap_width(width);
        } else if interactive && self.config.is_none() {
            if let Ok((columns, _)) = crossterm::terminal::size() {
                config = config.with_wrap_width(usize::from(columns).saturating_sub(1).max(20));
            }
        }

        if self.color {
            config = config.with_color(true);
        } else if self.no_color {
            config = config.with_color(false);
        }
        colored::control::set_override(config.color);

        debug!(?config, "narrator settings");
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<NarratorConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config '{}': {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config '{}': {e}", path.display()))
}

/// Read and parse a choice log file.
pub fn read_log(path: &Path) -> Result<ChoiceLog, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read choice log '{}': {e}", path.display()))?;
    text.parse().map_err(|e: FictionError| e.to_string())
}

/// Play the sample game to its end.
///
/// Returns the choices made along with how the game ended, so a caller can
/// save the log even when the game stopped early.
pub fn run_game(
    output: impl Output + 'static,
    menu: impl Menu + 'static,
    config: NarratorConfig,
) -> Result<(ChoiceLog, FictionResult<()>), String> {
    let mut universe = demo::build(output, menu)
        .map_err(|e| e.to_string())?
        .with_narrator(config);
    let outcome = turn(&mut universe, true);
    Ok((universe.choice_log().clone(), outcome))
}

/// Treat running out of choices as a normal end of the session.
pub fn finished(outcome: FictionResult<()>) -> Result<(), String> {
    match outcome {
        Ok(()) | Err(FictionError::ChoicesExhausted) => Ok(()),
        Err(FictionError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}
