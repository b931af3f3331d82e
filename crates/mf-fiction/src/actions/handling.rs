//! Picking things up, putting them places, wearing and eating them.

use mf_core::{NounId, Relationship, World};

use super::{narrate, noun_arg, noun_has, part};
use crate::domain::Domain;
use crate::error::FictionResult;
use crate::narrator::definite;
use crate::possibility::{Action, Target};
use crate::universe::Universe;

/// Move `thing` under `parent` and narrate it as "You <verb> <rest>."
fn place(
    universe: &mut Universe,
    thing: NounId,
    parent: NounId,
    relationship: Relationship,
    verb: &str,
    rest: String,
) -> FictionResult<bool> {
    universe
        .world_mut()
        .set_parent(thing, parent, relationship)?;
    narrate(universe, verb, &rest);
    Ok(false)
}

/// A receptacle for the item chosen first: not the item itself and not
/// something inside it.
fn receives(universe: &Universe, sentence: &[Target], target: &Target) -> bool {
    let (Some(item), Some(receptacle)) = (sentence.first().and_then(Target::noun), target.noun())
    else {
        return false;
    };
    let world = universe.world();
    receptacle != item
        && !world.is_within(receptacle, item)
        && !world[receptacle].components.is_closed()
}

/// Pick something up.
pub struct Take;

impl Action for Take {
    fn name(&self) -> &str {
        "take"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Reachable && noun_has(world, target, |c| c.handleable.is_some())
    }

    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        _domain: Domain,
        target: &Target,
    ) -> bool {
        let world = universe.world();
        let player = universe.player();
        target.noun().is_some_and(|id| {
            world.parent(id).ok() != Some(player) && !world.is_within(player, id)
        })
    }

    fn render(&self, parts: &[String]) -> String {
        format!("take {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let player = universe.player();
        let name = definite(universe.world(), thing);
        let ended = place(universe, thing, player, Relationship::Carrying, "take", name)?;
        if let Some(handleable) = universe.world_mut()[thing].components.handleable.as_mut() {
            handleable.handled = true;
        }
        Ok(ended)
    }
}

/// Put something down where the player is.
pub struct PutDown;

impl Action for PutDown {
    fn name(&self) -> &str {
        "drop"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Inventory]
    }

    fn ever_possible(&self, _world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Inventory && target.noun().is_some()
    }

    fn render(&self, parts: &[String]) -> String {
        format!("drop {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let world = universe.world();
        let (parent, relationship) = world.parent_edge(universe.player())?;
        let relationship = relationship.clone();
        let name = definite(world, thing);
        place(universe, thing, parent, relationship, "drop", name)
    }
}

/// Put something carried into a container.
pub struct PutInto;

impl Action for PutInto {
    fn name(&self) -> &str {
        "put into"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Inventory, Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        match domain {
            Domain::Inventory => target.noun().is_some(),
            Domain::Reachable => noun_has(world, target, |c| c.container.is_some()),
            _ => false,
        }
    }

    fn possible_now(
        &self,
        universe: &Universe,
        sentence: &[Target],
        domain: Domain,
        target: &Target,
    ) -> bool {
        domain != Domain::Reachable || receives(universe, sentence, target)
    }

    fn render(&self, parts: &[String]) -> String {
        format!("put {} into {}", part(parts, 0), part(parts, 1))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let container = noun_arg(arguments, 1, self.name())?;
        let world = universe.world();
        let rest = format!(
            "{} into {}",
            definite(world, thing),
            definite(world, container)
        );
        place(universe, thing, container, Relationship::Containing, "put", rest)
    }
}

/// Put something carried onto a supporter.
pub struct PutOnto;

impl Action for PutOnto {
    fn name(&self) -> &str {
        "put onto"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Inventory, Domain::Reachable]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        match domain {
            Domain::Inventory => target.noun().is_some(),
            Domain::Reachable => noun_has(world, target, |c| c.supporter.is_some()),
            _ => false,
        }
    }

    fn possible_now(
        &self,
        universe: &Universe,
        sentence: &[Target],
        domain: Domain,
        target: &Target,
    ) -> bool {
        domain != Domain::Reachable || receives(universe, sentence, target)
    }

    fn render(&self, parts: &[String]) -> String {
        format!("put {} onto {}", part(parts, 0), part(parts, 1))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let supporter = noun_arg(arguments, 1, self.name())?;
        let world = universe.world();
        let rest = format!(
            "{} onto {}",
            definite(world, thing),
            definite(world, supporter)
        );
        place(universe, thing, supporter, Relationship::Supporting, "put", rest)
    }
}

pub struct Wear;

impl Action for Wear {
    fn name(&self) -> &str {
        "wear"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Inventory]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Inventory && noun_has(world, target, |c| c.wearable.is_some())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("wear {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let player = universe.player();
        let rest = format!("on {}", definite(universe.world(), thing));
        place(universe, thing, player, Relationship::Wearing, "put", rest)
    }
}

pub struct TakeOff;

impl Action for TakeOff {
    fn name(&self) -> &str {
        "take off"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Outfit]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Outfit && noun_has(world, target, |c| c.wearable.is_some())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("take off {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let player = universe.player();
        let rest = format!("off {}", definite(universe.world(), thing));
        place(universe, thing, player, Relationship::Carrying, "take", rest)
    }
}

/// Eat something carried. It leaves the world for good.
pub struct Eat;

impl Action for Eat {
    fn name(&self) -> &str {
        "eat"
    }

    fn domains(&self) -> &[Domain] {
        &[Domain::Inventory]
    }

    fn ever_possible(&self, world: &World, domain: Domain, target: &Target) -> bool {
        domain == Domain::Inventory && noun_has(world, target, |c| c.edible.is_some())
    }

    fn render(&self, parts: &[String]) -> String {
        format!("eat {}", part(parts, 0))
    }

    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool> {
        let thing = noun_arg(arguments, 0, self.name())?;
        let player = universe.player();
        let name = definite(universe.world(), thing);
        universe.world_mut().detach(player, thing)?;
        narrate(universe, "eat", &name);
        Ok(false)
    }
}
