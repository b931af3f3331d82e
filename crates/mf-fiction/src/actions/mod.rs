//! Action registry and the standard action library.

mod devices;
mod handling;
mod meta;
mod movement;
mod social;

use std::ops::Index;

use mf_core::{ComponentSet, Exit, NounId, World};

use crate::error::{FictionError, FictionResult};
use crate::narrator::{conjugate, subject};
use crate::possibility::{Action, Target};
use crate::universe::Universe;

pub use devices::{Close, Lock, Open, TurnOff, TurnOn, Unlock};
pub use handling::{Eat, PutDown, PutInto, PutOnto, Take, TakeOff, Wear};
pub use meta::{Examine, ListInventory, Look, Quit, Wait};
pub use movement::{Go, GoInto, Leave, Push, go, go_into, passable};
pub use social::Say;

/// Position of an action in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub usize);

/// Registered actions, in menu order.
#[derive(Default)]
pub struct ActionRegistry {
    actions: Vec<Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every standard action, in the order the menu lists them.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Look);
        registry.register(Go);
        registry.register(GoInto);
        registry.register(Leave);
        registry.register(Push);
        registry.register(Take);
        registry.register(PutDown);
        registry.register(PutInto);
        registry.register(PutOnto);
        registry.register(Open);
        registry.register(Close);
        registry.register(Unlock);
        registry.register(Lock);
        registry.register(TurnOn);
        registry.register(TurnOff);
        registry.register(Wear);
        registry.register(TakeOff);
        registry.register(Eat);
        registry.register(Examine);
        registry.register(Say);
        registry.register(ListInventory);
        registry.register(Wait);
        registry.register(Quit);
        registry
    }

    /// Add an action after the ones already registered.
    pub fn register(&mut self, action: impl Action + 'static) -> ActionId {
        let id = ActionId(self.actions.len());
        self.actions.push(Box::new(action));
        id
    }

    pub fn get(&self, id: ActionId) -> Option<&dyn Action> {
        self.actions.get(id.0).map(|action| action.as_ref())
    }

    /// Look an action up by name.
    pub fn find(&self, name: &str) -> Option<ActionId> {
        self.actions
            .iter()
            .position(|action| action.name() == name)
            .map(ActionId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &dyn Action)> + '_ {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| (ActionId(index), action.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Index<ActionId> for ActionRegistry {
    type Output = dyn Action;

    /// Panics if the ID was not issued by this registry.
    fn index(&self, id: ActionId) -> &Self::Output {
        self.actions[id.0].as_ref()
    }
}

// ---------------------------------------------------------------------------
// Helpers shared by the actions
// ---------------------------------------------------------------------------

/// The rendered argument at `index`, or an empty string.
fn part(parts: &[String], index: usize) -> &str {
    parts.get(index).map_or("", String::as_str)
}

/// Whether `target` is a noun whose components satisfy `check`.
fn noun_has(world: &World, target: &Target, check: impl Fn(&ComponentSet) -> bool) -> bool {
    target
        .noun()
        .is_some_and(|id| check(&world[id].components))
}

fn unexpected(action: &str, position: usize) -> FictionError {
    FictionError::UnexpectedArgument {
        action: action.to_string(),
        position,
    }
}

fn noun_arg(arguments: &[Target], position: usize, action: &str) -> FictionResult<NounId> {
    arguments
        .get(position)
        .and_then(Target::noun)
        .ok_or_else(|| unexpected(action, position))
}

fn exit_arg<'a>(arguments: &'a [Target], position: usize, action: &str) -> FictionResult<&'a Exit> {
    match arguments.get(position) {
        Some(Target::Exit(exit)) => Ok(exit),
        _ => Err(unexpected(action, position)),
    }
}

fn line_arg<'a>(
    arguments: &'a [Target],
    position: usize,
    action: &str,
) -> FictionResult<(NounId, &'a str)> {
    match arguments.get(position) {
        Some(Target::Line { speaker, said }) => Ok((*speaker, said.as_str())),
        _ => Err(unexpected(action, position)),
    }
}

/// Say "You take the lamp." with the verb agreeing with the player.
fn narrate(universe: &mut Universe, verb: &str, rest: &str) {
    let world = universe.world();
    let player = universe.player();
    let text = format!(
        "{} {} {rest}.",
        subject(world, player),
        conjugate(&world[player], verb)
    );
    universe.say(&text);
}
