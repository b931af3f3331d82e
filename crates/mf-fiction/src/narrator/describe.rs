//! Describing where the player is.

use mf_core::{NounId, Relationship, World};

use super::config::NarratorConfig;
use super::grammar::{be, indefinite, subject};
use crate::domain::{Domain, is_lit};
use crate::universe::Universe;

/// Describe what the player can see: a heading, the description when
/// `full` is set, the visible contents as a bulleted tree, and the exits.
pub fn describe_location(universe: &mut Universe, full: bool) {
    if !is_lit(universe) {
        universe.say("In darkness.");
        return;
    }
    let Some((origin, _)) = Domain::Visible.origin(universe) else {
        return;
    };

    let world = universe.world();
    let heading = subject(world, origin);
    let description = if full {
        world[origin].description.resolve(world, origin)
    } else {
        String::new()
    };
    let mut lines = Vec::new();
    list_contents(
        world,
        universe.narrator(),
        universe.player(),
        origin,
        0,
        &mut lines,
    );
    let exits: Vec<String> = world
        .exits(origin)
        .map(|exit| exit.direction.name().to_string())
        .collect();

    universe.heading(&heading);
    if !description.is_empty() {
        universe.say(&description);
    }
    for line in lines {
        universe.write_raw(&line);
        universe.write_raw("\n");
    }
    if !exits.is_empty() {
        universe.say(&format!("Exits: {}.", exits.join(", ")));
    }
}

/// Append bulleted lines for everything visible under `parent`, skipping
/// `hidden` and its subtree.
///
/// Each relationship gets a header such as `The box is containing:`, with
/// the children one level deeper.
pub fn list_contents(
    world: &World,
    config: &NarratorConfig,
    hidden: NounId,
    parent: NounId,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let mut relationships: Vec<&Relationship> = Vec::new();
    for (_, relationship) in world.children(parent) {
        if !relationships.contains(&relationship) {
            relationships.push(relationship);
        }
    }

    let pad = |level: usize| " ".repeat(config.indent * level);
    for relationship in relationships {
        if Domain::Visible.blocks(world, parent, relationship) {
            continue;
        }
        let children: Vec<NounId> = world
            .children_by(parent, relationship)
            .filter(|&child| child != hidden)
            .collect();
        if children.is_empty() {
            continue;
        }
        lines.push(format!(
            "{}{} {} {}:",
            pad(depth),
            subject(world, parent),
            be(&world[parent]),
            relationship.verb()
        ));
        for child in children {
            lines.push(format!(
                "{}{} {}",
                pad(depth + 1),
                config.bullet,
                indefinite(world, child)
            ));
            list_contents(world, config, hidden, child, depth + 2, lines);
        }
    }
}
