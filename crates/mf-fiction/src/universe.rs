//! The universe: world graph, player, collaborators, and choice log.

use std::rc::Rc;

use colored::Colorize;
use mf_core::{Direction, Noun, NounId, Relationship, World};
use tracing::debug;

use crate::actions::ActionRegistry;
use crate::error::{FictionError, FictionResult};
use crate::interface::{Menu, Output};
use crate::narrator::NarratorConfig;
use crate::replay::ChoiceLog;

/// Everything one game session owns.
///
/// Game content populates the world through [`Universe::set_relationship`]
/// and [`Universe::set_exit`] before the first turn. After that, only
/// actions should mutate the world; [`Universe::world_mut`] is there for
/// their effect functions and is not checked at runtime.
pub struct Universe {
    world: World,
    player: NounId,
    introduction: String,
    narrator: NarratorConfig,
    actions: Rc<ActionRegistry>,
    output: Box<dyn Output>,
    menu: Box<dyn Menu>,
    log: ChoiceLog,
}

impl Universe {
    /// Create a universe around `player`, with the standard actions.
    ///
    /// The player starts detached; place them with
    /// [`Universe::set_relationship`].
    pub fn new(player: Noun, output: impl Output + 'static, menu: impl Menu + 'static) -> Self {
        let mut world = World::new();
        let player = world.add(player);
        Self {
            world,
            player,
            introduction: String::new(),
            narrator: NarratorConfig::default(),
            actions: Rc::new(ActionRegistry::standard()),
            output: Box::new(output),
            menu: Box::new(menu),
            log: ChoiceLog::new(),
        }
    }

    /// Set the text shown before the first turn.
    pub fn with_introduction(mut self, text: impl Into<String>) -> Self {
        self.introduction = text.into();
        self
    }

    /// Set the narrator configuration.
    pub fn with_narrator(mut self, narrator: NarratorConfig) -> Self {
        self.narrator = narrator;
        self
    }

    /// Replace the action registry.
    pub fn with_actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = Rc::new(actions);
        self
    }

    // -----------------------------------------------------------------------
    // World authoring
    // -----------------------------------------------------------------------

    /// Add a noun to the world.
    pub fn add(&mut self, noun: Noun) -> NounId {
        self.world.add(noun)
    }

    /// Place `child` under `parent`.
    pub fn set_relationship(
        &mut self,
        parent: NounId,
        child: NounId,
        relationship: Relationship,
    ) -> FictionResult<()> {
        self.world.set_parent(child, parent, relationship)?;
        Ok(())
    }

    /// Connect two locations.
    pub fn set_exit(
        &mut self,
        origin: NounId,
        destination: NounId,
        direction: Direction,
        one_way: bool,
    ) -> FictionResult<()> {
        self.world.connect(origin, destination, direction, one_way)?;
        Ok(())
    }

    /// Connect two locations through a door.
    pub fn set_exit_through(
        &mut self,
        origin: NounId,
        door: NounId,
        destination: NounId,
        direction: Direction,
        one_way: bool,
    ) -> FictionResult<()> {
        self.world
            .connect_through(origin, door, destination, direction, one_way)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> NounId {
        self.player
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn narrator(&self) -> &NarratorConfig {
        &self.narrator
    }

    /// A shared handle to the registered actions.
    pub fn actions(&self) -> Rc<ActionRegistry> {
        Rc::clone(&self.actions)
    }

    /// Every choice made so far, 1-based.
    pub fn choice_log(&self) -> &ChoiceLog {
        &self.log
    }

    /// What moves when the player goes somewhere: the vehicle the player is
    /// in, or the player.
    pub fn mover(&self) -> NounId {
        match self.world.parent(self.player) {
            Ok(parent) if self.world[parent].components.is_vehicle() => parent,
            _ => self.player,
        }
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    /// Write a wrapped paragraph.
    pub fn say(&mut self, text: &str) {
        self.output.paragraph(text, self.narrator.wrap_width);
    }

    /// Write text as is.
    pub fn write_raw(&mut self, text: &str) {
        self.output.write(text);
    }

    /// Write a heading line, bold when color is on.
    pub fn heading(&mut self, text: &str) {
        let line = if self.narrator.color {
            format!("{}\n", text.bold())
        } else {
            format!("{text}\n")
        };
        self.output.write(&line);
    }

    /// Echo a resolved command, if configured to.
    pub fn echo(&mut self, command: &str) {
        if !self.narrator.echo_commands {
            return;
        }
        let line = format!("> {command}");
        let line = if self.narrator.color {
            format!("{}\n", line.dimmed())
        } else {
            format!("{line}\n")
        };
        self.output.write(&line);
    }

    // -----------------------------------------------------------------------
    // Menu
    // -----------------------------------------------------------------------

    /// Ask the menu to pick one of `options` and record the choice.
    ///
    /// Returns the 0-based index.
    pub fn choose(&mut self, prompt: &str, options: &[String]) -> FictionResult<usize> {
        if options.is_empty() {
            return Err(FictionError::EmptyQuestion(prompt.to_string()));
        }
        let index = self.menu.choose(prompt, options)?;
        if index >= options.len() {
            return Err(FictionError::InvalidChoice {
                index: index + 1,
                options: options.len(),
            });
        }
        self.log.record(index + 1);
        debug!(prompt, choice = index + 1, "menu choice");
        Ok(index)
    }
}
