//! Getting around: exits, vehicles, and things that can be entered.

use mf_core::{Exit, NounId, NounKind, Relationship, World, WorldError};

use super::{exit_arg, narrate, noun_arg, noun_has, part};
use crate::domain::Domain;
use crate::error::FictionResult;
use crate::narrator::{definite, describe_location};
use crate::possibility::{Action, Target};
use crate::turn::mark_visited;
use crate::universe::Universe;

/// Where an exit really leads. Exits into a door continue through it in the
/// same direction; a closed door leads nowhere.
pub fn passable(world: &World, exit: &Exit) -> Option<NounId> {
    let destination = exit.destination;
    if world[destination].kind != NounKind::Door {
        return Some(destination);
    }
    if world[destination].components.is_closed() {
        return None;
    }
    world
        .exit(destination, &exit.direction)
        .map(|onward| onward.destination)
}

/// Move the mover along `exit`.
pub fn go(universe: &mut Universe, exit: &Exit) -> FictionResult<()> {
    let destination = passable(universe.world(), exit).ok_or_else(|| {
        WorldError::InvalidGraphOperation(format!("no way through going {}", exit.direction))
    })?;
    go_into(universe, destination)
}

/// Move the mover inside `destination`, describing the place on arrival.
pub fn go_into(universe: &mut Universe, destination: NounId) -> FictionResult<()> {
    let mover = universe.mover();
    universe
        .world_mut()
        .set_parent(mover, destination, Relationship::Containing)?;

    if universe.world().is_location(destination) {
        let first_visit = mark_visited(universe, destination);
        describe_location(universe, first_visit);
    } else {
        let place = definite(universe.world(), destination);
        narrate(universe, "get", &format!("into {place}"));
    }
    Ok(())
}

/// Go in a direction.
pub struct Go;

impl Action for Go {
    fn name(&self) -> &str {
        "go"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::ExitDirections]
    }

    fn ever_possible(&self, _world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::ExitDirections && matches!(target, Target::Exit(_))
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        match target {
            Target::Exit(exit) => passable(universe.world(), exit).is_some(),
            _ => false,
        }
    }

    fn render(&self, parts: &[String]) -> String {
        format!("go {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let exit = exit_arg(arguments, 0, self.name())?.clone();
        go(universe, &exit)?;
        Ok(false)
    }
}

/// Get into an enterable container or a vehicle.
pub struct GoInto;

impl Action for GoInto {
    fn name(&self) -> &str {
        "go into"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Immediate]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Immediate
            && noun_has(world, target, |c| {
                c.is_vehicle() || c.container.as_ref().is_some_and(|c| c.enterable)
            })
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        target.noun().is_some_and(|id| {
            id != universe.mover() && !universe.world()[id].components.is_closed()
        })
    }

    fn render(&self, parts: &[String]) -> String {
        format!("get into {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let destination = noun_arg(arguments, 0, self.name())?;
        go_into(universe, destination)?;
        Ok(false)
    }
}

/// Get out of whatever the player is in.
///
/// Uses the player rather than the mover, so a rider leaves the vehicle
/// instead of driving it.
pub struct Leave;

impl Action for Leave {
    fn name(&self) -> &str {
        "leave"
    }

    fn gate(&self, universe: &Universe) -> bool {
        let world = universe.world();
        world
            .parent(universe.player())
            .is_ok_and(|parent| !world.is_location(parent))
    }

    fn render(&self, _parts: &[String]) -> String {
        "get out".to_string()
    }

    fn perform(&self, universe: &mut Universe, _arguments: &[Target]) -> FictionResult<bool> {
        let player = universe.player();
        let world = universe.world();
        let inside = world.parent(player)?;
        let (outside, relationship) = world.parent_edge(inside)?;
        let relationship = relationship.clone();
        let place = definite(world, inside);

        universe
            .world_mut()
            .set_parent(player, outside, relationship)?;
        narrate(universe, "get", &format!("out of {place}"));
        Ok(false)
    }
}

/// Push something through an exit, following it.
pub struct Push;

impl Action for Push {
    fn name(&self) -> &str {
        "push"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Immediate, Domain::ExitDirections]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        match domain {
            Domain::Immediate => noun_has(world, target, |c| c.pushable.is_some()),
            Domain::ExitDirections => matches!(target, Target::Exit(_)),
            _ => false,
        }
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        match target {
            Target::Noun(id) => *id != universe.mover(),
            Target::Exit(exit) => passable(universe.world(), exit).is_some(),
            Target::Line { .. } => false,
        }
    }

    fn render(&self, parts: &[String]) -> String {
        format!("push {} {}", part(parts, 0), part(parts, 1))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let exit = exit_arg(arguments, 1, self.name())?.clone();
        if let Some(destination) = passable(universe.world(), &exit) {
            universe
                .world_mut()
                .set_parent(thing, destination, Relationship::Containing)?;
        }
        go(universe, &exit)?;
        Ok(false)
    }
}
