//! Search spaces for sentence arguments.
//!
//! Each domain walks the world graph from its own origin and yields the
//! candidates an action admits, grouped by the relationship that holds them
//! so nested containers turn into nested questions.

use mf_core::{NounId, NounKind, Relationship, World};

use crate::possibility::{Action, Target, admits};
use crate::universe::Universe;

/// A named search space for one sentence argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Things the player can touch.
    Reachable,
    /// Things the player can see. Empty in darkness.
    Visible,
    /// Things the player is carrying.
    Inventory,
    /// Things the player is wearing.
    Outfit,
    /// Things beside the mover.
    Immediate,
    /// Exits from the mover's location.
    ExitDirections,
    /// Lines that can be said to the noun chosen earlier in the sentence.
    Dialog,
}

/// One candidate, or several sharing a parent and relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single candidate.
    Leaf(Target),
    /// Two or more candidates held by `parent` through `relationship`.
    Group {
        parent: NounId,
        relationship: Relationship,
        members: Vec<Node>,
    },
}

impl Domain {
    /// Word standing in for an unresolved argument of this domain.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::ExitDirections => "some way",
            _ => "something",
        }
    }

    /// Word used when asking the player to resolve an argument.
    pub fn interrogative(self) -> &'static str {
        match self {
            Self::ExitDirections => "which way",
            _ => "what",
        }
    }

    /// Whether `parent` hides its `relationship` children from this domain.
    ///
    /// Closed containers block reach. Sight is blocked only when the
    /// container is also opaque.
    pub fn blocks(self, world: &World, parent: NounId, relationship: &Relationship) -> bool {
        if *relationship != Relationship::Containing {
            return false;
        }
        let components = &world[parent].components;
        match self {
            Self::Visible => components.is_closed() && !components.is_transparent(),
            _ => components.is_closed(),
        }
    }

    /// Where the search starts: a parent and the relationship whose children
    /// are the first candidates.
    ///
    /// `None` if the player (or mover) has no parent.
    pub fn origin(self, universe: &Universe) -> Option<(NounId, Relationship)> {
        let world = universe.world();
        match self {
            Self::Visible => {
                let mut current = universe.player();
                loop {
                    let (parent, relationship) = world.parent_edge(current).ok()?;
                    if world.is_location(parent) || self.blocks(world, parent, relationship) {
                        return Some((parent, relationship.clone()));
                    }
                    current = parent;
                }
            }
            Self::Immediate | Self::ExitDirections => world
                .parent_edge(universe.mover())
                .ok()
                .map(|(parent, relationship)| (parent, relationship.clone())),
            _ => world
                .parent_edge(universe.player())
                .ok()
                .map(|(parent, relationship)| (parent, relationship.clone())),
        }
    }

    /// Every candidate `action` admits in this domain, in traversal order.
    ///
    /// `sentence` holds the arguments already chosen to the left.
    pub fn candidates(
        self,
        universe: &Universe,
        action: &dyn Action,
        sentence: &[Target],
    ) -> Vec<Node> {
        let world = universe.world();
        let player = universe.player();
        match self {
            Self::Reachable | Self::Visible => {
                if !is_lit(universe) {
                    return match self {
                        Self::Visible => Vec::new(),
                        _ => self.groups(universe, action, sentence, player),
                    };
                }
                let Some((origin, relationship)) = self.origin(universe) else {
                    return Vec::new();
                };
                let mut nodes = Vec::new();
                for child in world.children_by(origin, &relationship) {
                    nodes.extend(self.collect(universe, action, sentence, child));
                }
                if world.is_location(origin) {
                    let mut doors = Vec::new();
                    for exit in world.exits(origin) {
                        let door = exit.destination;
                        if world[door].kind == NounKind::Door && !doors.contains(&door) {
                            doors.push(door);
                            nodes.extend(self.collect(universe, action, sentence, door));
                        }
                    }
                }
                nodes
            }
            Self::Inventory => self.leaves(
                universe,
                action,
                sentence,
                world.children_by(player, &Relationship::Carrying),
            ),
            Self::Outfit => self.leaves(
                universe,
                action,
                sentence,
                world.children_by(player, &Relationship::Wearing),
            ),
            Self::Immediate => match self.origin(universe) {
                Some((origin, relationship)) => self.leaves(
                    universe,
                    action,
                    sentence,
                    world.children_by(origin, &relationship),
                ),
                None => Vec::new(),
            },
            Self::ExitDirections => {
                let Some((origin, _)) = self.origin(universe) else {
                    return Vec::new();
                };
                world
                    .exits(origin)
                    .map(|exit| Target::Exit(exit.clone()))
                    .filter(|target| admits(action, universe, sentence, self, target))
                    .map(Node::Leaf)
                    .collect()
            }
            Self::Dialog => {
                let Some(speaker) = sentence.iter().find_map(Target::noun) else {
                    return Vec::new();
                };
                world[speaker]
                    .components
                    .dialog
                    .iter()
                    .flat_map(|dialog| dialog.lines.iter())
                    .map(|(said, _)| Target::Line {
                        speaker,
                        said: said.clone(),
                    })
                    .filter(|target| admits(action, universe, sentence, self, target))
                    .map(Node::Leaf)
                    .collect()
            }
        }
    }

    fn leaves(
        self,
        universe: &Universe,
        action: &dyn Action,
        sentence: &[Target],
        ids: impl Iterator<Item = NounId>,
    ) -> Vec<Node> {
        ids.map(Target::Noun)
            .filter(|target| admits(action, universe, sentence, self, target))
            .map(Node::Leaf)
            .collect()
    }

    /// `root` if admitted, followed by its unblocked descendants.
    fn collect(
        self,
        universe: &Universe,
        action: &dyn Action,
        sentence: &[Target],
        root: NounId,
    ) -> Vec<Node> {
        let target = Target::Noun(root);
        let mut nodes = Vec::new();
        if admits(action, universe, sentence, self, &target) {
            nodes.push(Node::Leaf(target));
        }
        nodes.extend(self.groups(universe, action, sentence, root));
        nodes
    }

    /// Descendants of `root`, one group per relationship in the order the
    /// relationships first appear among its children.
    fn groups(
        self,
        universe: &Universe,
        action: &dyn Action,
        sentence: &[Target],
        root: NounId,
    ) -> Vec<Node> {
        let world = universe.world();
        let mut relationships: Vec<&Relationship> = Vec::new();
        for (_, relationship) in world.children(root) {
            if !relationships.contains(&relationship) {
                relationships.push(relationship);
            }
        }

        let mut nodes = Vec::new();
        for relationship in relationships {
            if self.blocks(world, root, relationship) {
                continue;
            }
            let mut members: Vec<Node> = world
                .children_by(root, relationship)
                .flat_map(|child| self.collect(universe, action, sentence, child))
                .collect();
            match members.len() {
                0 => {}
                1 => nodes.append(&mut members),
                _ => nodes.push(Node::Group {
                    parent: root,
                    relationship: relationship.clone(),
                    members,
                }),
            }
        }
        nodes
    }
}

/// Whether the player can see: the room they look out on is lit, or a light
/// source shines somewhere in view.
pub fn is_lit(universe: &Universe) -> bool {
    let world = universe.world();
    let Some((origin, relationship)) = Domain::Visible.origin(universe) else {
        return false;
    };
    if world[origin]
        .components
        .room
        .as_ref()
        .is_some_and(|room| room.lit)
    {
        return true;
    }

    let mut stack: Vec<NounId> = world.children_by(origin, &relationship).collect();
    while let Some(id) = stack.pop() {
        if world[id].components.is_shining() {
            return true;
        }
        stack.extend(
            world
                .children(id)
                .filter(|(_, relationship)| !Domain::Visible.blocks(world, id, relationship))
                .map(|(child, _)| child),
        );
    }
    false
}
