//! Doors, boxes, locks, and lights.

use mf_core::{NounId, Person, Relationship, World};

use super::{narrate, noun_arg, noun_has, part};
use crate::domain::{Domain, is_lit};
use crate::error::FictionResult;
use crate::narrator::{definite, describe_location, indefinite, join_list, subject};
use crate::possibility::{Action, Target};
use crate::universe::Universe;

fn with_noun(universe: &Universe, target: &Target, check: impl Fn(&World, NounId) -> bool) -> bool {
    target
        .noun()
        .is_some_and(|id| check(universe.world(), id))
}

pub struct Open;

impl Action for Open {
    fn name(&self) -> &str {
        "open"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Reachable && noun_has(world, target, |c| c.openable.is_some())
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        with_noun(universe, target, |world, id| {
            let components = &world[id].components;
            components.is_closed() && !components.is_locked()
        })
    }

    fn render(&self, parts: &[String]) -> String {
        format!("open {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        if let Some(openable) = universe.world_mut()[thing].components.openable.as_mut() {
            openable.closed = false;
        }
        let world = universe.world();
        let name = definite(world, thing);
        let revealed: Vec<String> = if world[thing].components.is_transparent() {
            Vec::new()
        } else {
            world
                .children_by(thing, &Relationship::Containing)
                .map(|child| indefinite(world, child))
                .collect()
        };

        narrate(universe, "open", &name);
        if !revealed.is_empty() {
            universe.say(&format!("Opening {name} reveals {}.", join_list(&revealed)));
        }
        Ok(false)
    }
}

pub struct Close;

impl Action for Close {
    fn name(&self) -> &str {
        "close"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Reachable && noun_has(world, target, |c| c.openable.is_some())
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        with_noun(universe, target, |world, id| !world[id].components.is_closed())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("close {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        if let Some(openable) = universe.world_mut()[thing].components.openable.as_mut() {
            openable.closed = true;
        }
        let name = definite(universe.world(), thing);
        narrate(universe, "close", &name);
        Ok(false)
    }
}

/// Turn a key in a lock. The wrong key is narrated, not an error.
fn turn_key(
    universe: &mut Universe,
    arguments: &[Target],
    action: &str,
    locked: bool,
) -> FictionResult<bool> {
    let thing = noun_arg(arguments, 0, action)?;
    let key = noun_arg(arguments, 1, action)?;
    let world = universe.world();
    let fits = world[thing]
        .components
        .lockable
        .as_ref()
        .is_some_and(|lock| lock.key == key);
    let thing_name = definite(world, thing);

    if !fits {
        let key_noun = &world[key];
        let negation = if key_noun.person == Person::Third && !key_noun.plural {
            "doesn't"
        } else {
            "don't"
        };
        let text = format!("{} {negation} fit {thing_name}.", subject(world, key));
        universe.say(&text);
        return Ok(false);
    }

    let key_name = definite(world, key);
    if let Some(lock) = universe.world_mut()[thing].components.lockable.as_mut() {
        lock.locked = locked;
    }
    narrate(universe, action, &format!("{thing_name} with {key_name}"));
    Ok(false)
}

pub struct Unlock;

impl Action for Unlock {
    fn name(&self) -> &str {
        "unlock"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable, Domain::Inventory]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        match domain {
            Domain::Reachable => noun_has(world, target, |c| c.lockable.is_some()),
            Domain::Inventory => target.noun().is_some(),
            _ => false,
        }
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        domain: Domain,
        target: &Target,
    ) -> bool {
        domain != Domain::Reachable
            || with_noun(universe, target, |world, id| world[id].components.is_locked())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("unlock {} with {}", part(parts, 0), part(parts, 1))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        turn_key(universe, arguments, self.name(), false)
    }
}

pub struct Lock;

impl Action for Lock {
    fn name(&self) -> &str {
        "lock"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable, Domain::Inventory]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        match domain {
            Domain::Reachable => noun_has(world, target, |c| c.lockable.is_some()),
            Domain::Inventory => target.noun().is_some(),
            _ => false,
        }
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        domain: Domain,
        target: &Target,
    ) -> bool {
        domain != Domain::Reachable
            || with_noun(universe, target, |world, id| {
                let components = &world[id].components;
                components.is_closed() && !components.is_locked()
            })
    }

    fn render(&self, parts: &[String]) -> String {
        format!("lock {} with {}", part(parts, 0), part(parts, 1))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        turn_key(universe, arguments, self.name(), true)
    }
}

/// Switch a light source, describing the surroundings if that changes
/// whether the player can see.
fn switch(universe: &mut Universe, arguments: &[Target], action: &str, on: bool) -> FictionResult<bool> {
    let thing = noun_arg(arguments, 0, action)?;
    let was_lit = is_lit(universe);
    if let Some(light) = universe.world_mut()[thing].components.light.as_mut() {
        light.on = on;
    }
    let name = definite(universe.world(), thing);
    let rest = if on { format!("on {name}") } else { format!("off {name}") };
    narrate(universe, "turn", &rest);
    if was_lit != is_lit(universe) {
        describe_location(universe, true);
    }
    Ok(false)
}

pub struct TurnOn;

impl Action for TurnOn {
    fn name(&self) -> &str {
        "turn on"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Reachable && noun_has(world, target, |c| c.light.is_some())
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        with_noun(universe, target, |world, id| !world[id].components.is_shining())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("turn on {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        switch(universe, arguments, self.name(), true)
    }
}

pub struct TurnOff;

impl Action for TurnOff {
    fn name(&self) -> &str {
        "turn off"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Reachable && noun_has(world, target, |c| c.light.is_some())
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        with_noun(universe, target, |world, id| world[id].components.is_shining())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("turn off {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        switch(universe, arguments, self.name(), false)
    }
}
