use std::fs;
use std::path::Path;

use mf_fiction::{ReplayMenu, Transcript, compare_transcripts};

use super::NarratorArgs;

/// Replay `choices` and require the narration to equal `transcript`.
pub fn run(choices: &Path, transcript: &Path, narrator: &NarratorArgs) -> Result<(), String> {
    let log = super::read_log(choices)?;
    let expected = fs::read_to_string(transcript)
        .map_err(|e| format!("cannot read transcript '{}': {e}", transcript.display()))?;
    let config = narrator.resolve(false)?;

    let actual = Transcript::new();
    let (_, outcome) = super::run_game(actual.clone(), ReplayMenu::new(&log), config)?;
    super::finished(outcome)?;

    compare_transcripts(&expected, &actual.contents()).map_err(|mismatch| mismatch.to_string())?;
    println!("transcript matches");
    Ok(())
}
