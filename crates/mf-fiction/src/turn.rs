//! The turn loop.

use mf_core::NounId;
use tracing::{debug, info};

use crate::actions::ActionRegistry;
use crate::error::{FictionError, FictionResult};
use crate::narrator::describe_location;
use crate::sentence::{Command, disambiguate, enumerate};
use crate::universe::Universe;

/// Prompt shown above the top-level menu.
pub const PROMPT: &str = "What will you do?";

/// Run turns until an action ends the game.
///
/// With `introduce`, the introduction and a full description of the
/// starting location come first.
pub fn turn(universe: &mut Universe, introduce: bool) -> FictionResult<()> {
    if introduce {
        introduce_game(universe);
    }
    while !step(universe)? {}
    Ok(())
}

/// One turn: enumerate, let the player pick and disambiguate, perform.
///
/// Returns `true` when the performed action ended the game.
pub fn step(universe: &mut Universe) -> FictionResult<bool> {
    let actions = universe.actions();
    let sentences = enumerate(universe, &actions);
    debug!(sentences = sentences.len(), "enumerated turn");
    if sentences.is_empty() {
        return Err(FictionError::NoActions);
    }

    let rows: Vec<String> = sentences
        .iter()
        .map(|sentence| sentence.row(&actions))
        .collect();
    let index = universe.choose(PROMPT, &rows)?;
    let command = disambiguate(universe, &actions, &sentences[index])?;
    execute(universe, &actions, &command)
}

/// Echo and perform a resolved command.
pub fn execute(
    universe: &mut Universe,
    actions: &ActionRegistry,
    command: &Command,
) -> FictionResult<bool> {
    info!(command = %command.text, "execute");
    universe.echo(&command.text);
    actions[command.action].perform(universe, &command.arguments)
}

fn introduce_game(universe: &mut Universe) {
    let introduction = universe.introduction().to_string();
    if !introduction.is_empty() {
        universe.say(&introduction);
    }
    let player = universe.player();
    if let Some(room) = universe.world().root(player) {
        mark_visited(universe, room);
    }
    describe_location(universe, true);
}

/// Mark a room visited. Returns `true` if this is the first visit.
pub(crate) fn mark_visited(universe: &mut Universe, room: NounId) -> bool {
    match universe.world_mut()[room].components.room.as_mut() {
        Some(state) if !state.visited => {
            state.visited = true;
            true
        }
        _ => false,
    }
}
