//! Actions about the game rather than the world.

use mf_core::{NounId, Relationship, World};

use super::{noun_arg, part};
use crate::domain::Domain;
use crate::error::FictionResult;
use crate::narrator::{be, definite, describe_location, indefinite, join_list, subject};
use crate::possibility::{Action, Target};
use crate::universe::Universe;

pub struct Look;

impl Action for Look {
    fn name(&self) -> &str {
        "look"
    }

    fn render(&self, _parts: &[String]) -> String {
        "look".to_string()
    }

    fn perform(&self, universe: &mut Universe, _arguments: &[Target]) -> FictionResult<bool> {
        describe_location(universe, true);
        Ok(false)
    }
}

pub struct Examine;

impl Action for Examine {
    fn name(&self) -> &str {
        "examine"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Visible]
    }

    fn ever_possible(&self, _world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Visible && target.noun().is_some()
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        target.noun() != Some(universe.player())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("examine {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let world = universe.world();
        let description = world[thing].description.resolve(world, thing);
        let text = if description.is_empty() {
            format!("You see nothing special about {}.", definite(world, thing))
        } else {
            description
        };
        universe.say(&text);
        Ok(false)
    }
}

/// List what the player carries and wears.
pub struct ListInventory;

impl ListInventory {
    fn listing(world: &World, player: NounId, relationship: &Relationship) -> Option<String> {
        let items: Vec<String> = world
            .children_by(player, relationship)
            .map(|item| indefinite(world, item))
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(format!(
            "{} {} {} {}.",
            subject(world, player),
            be(&world[player]),
            relationship.verb(),
            join_list(&items)
        ))
    }
}

impl Action for ListInventory {
    fn name(&self) -> &str {
        "inventory"
    }

    fn gate(&self, universe: &Universe) -> bool {
        universe
            .world()
            .children(universe.player())
            .any(|(_, relationship)| {
                matches!(relationship, Relationship::Carrying | Relationship::Wearing)
            })
    }

    fn render(&self, _parts: &[String]) -> String {
        "take inventory".to_string()
    }

    fn perform(&self, universe: &mut Universe, _arguments: &[Target]) -> FictionResult<bool> {
        let world = universe.world();
        let player = universe.player();
        let lines: Vec<String> = [Relationship::Carrying, Relationship::Wearing]
            .iter()
            .filter_map(|relationship| Self::listing(world, player, relationship))
            .collect();
        for line in lines {
            universe.say(&line);
        }
        Ok(false)
    }
}

pub struct Wait;

impl Action for Wait {
    fn name(&self) -> &str {
        "wait"
    }

    fn render(&self, _parts: &[String]) -> String {
        "wait".to_string()
    }

    fn perform(&self, universe: &mut Universe, _arguments: &[Target]) -> FictionResult<bool> {
        universe.say("Time passes.");
        Ok(false)
    }
}

/// End the game.
pub struct Quit;

impl Action for Quit {
    fn name(&self) -> &str {
        "quit"
    }

    fn render(&self, _parts: &[String]) -> String {
        "quit".to_string()
    }

    fn perform(&self, universe: &mut Universe, _arguments: &[Target]) -> FictionResult<bool> {
        universe.say("Goodbye.");
        Ok(true)
    }
}
