use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::noun::{Noun, NounId};
use crate::relationship::Relationship;

/// One topology edge leaving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Where the edge leads: a room or a door.
    pub destination: NounId,
    /// Label of the edge.
    pub direction: Direction,
}

/// The world graph. Owns every noun, the containment forest, and the
/// topology graph between locations.
///
/// Children and exits are kept in insertion order so that traversal is
/// deterministic for a given sequence of mutations.
#[derive(Debug, Clone, Default)]
pub struct World {
    nouns: Vec<Noun>,

    // Containment forest
    parent_of: HashMap<NounId, (NounId, Relationship)>,
    children_of: HashMap<NounId, Vec<(NounId, Relationship)>>,

    // Topology
    exits_from: HashMap<NounId, Vec<Exit>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Nouns
    // -----------------------------------------------------------------------

    /// Add a noun to the world and return its ID.
    ///
    /// The noun starts detached; give it a parent with [`World::set_parent`]
    /// unless it is a location.
    pub fn add(&mut self, mut noun: Noun) -> NounId {
        let id = NounId(self.nouns.len() as u32);
        noun.id = id;
        self.nouns.push(noun);
        id
    }

    /// Get a reference to a noun by ID.
    pub fn get(&self, id: NounId) -> Option<&Noun> {
        self.nouns.get(id.index())
    }

    /// Get a mutable reference to a noun by ID.
    pub fn get_mut(&mut self, id: NounId) -> Option<&mut Noun> {
        self.nouns.get_mut(id.index())
    }

    /// Find a noun by name (case-insensitive). Returns the first match.
    pub fn find_by_name(&self, name: &str) -> Option<NounId> {
        self.nouns
            .iter()
            .find(|noun| noun.name.eq_ignore_ascii_case(name))
            .map(|noun| noun.id)
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Returns true if the noun is a room or a door.
    pub fn is_location(&self, id: NounId) -> bool {
        self.get(id).is_some_and(Noun::is_location)
    }

    fn check(&self, id: NounId) -> WorldResult<&Noun> {
        self.get(id).ok_or(WorldError::NounNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Containment
    // -----------------------------------------------------------------------

    /// The unique containment parent of a noun.
    pub fn parent(&self, id: NounId) -> WorldResult<NounId> {
        self.parent_edge(id).map(|(parent, _)| parent)
    }

    /// The relationship from a noun's parent to the noun.
    pub fn parent_relationship(&self, id: NounId) -> WorldResult<&Relationship> {
        self.parent_edge(id).map(|(_, relationship)| relationship)
    }

    /// The parent of a noun together with the edge label.
    ///
    /// Fails with [`WorldError::NoParent`] for locations and detached nouns.
    pub fn parent_edge(&self, id: NounId) -> WorldResult<(NounId, &Relationship)> {
        self.check(id)?;
        self.parent_of
            .get(&id)
            .map(|(parent, relationship)| (*parent, relationship))
            .ok_or(WorldError::NoParent(id))
    }

    /// Direct children of a noun with their relationships.
    pub fn children(&self, id: NounId) -> impl Iterator<Item = (NounId, &Relationship)> + '_ {
        self.children_of
            .get(&id)
            .into_iter()
            .flatten()
            .map(|(child, relationship)| (*child, relationship))
    }

    /// Direct children of a noun under one relationship.
    pub fn children_by<'w>(
        &'w self,
        id: NounId,
        relationship: &'w Relationship,
    ) -> impl Iterator<Item = NounId> + 'w {
        self.children(id)
            .filter(move |(_, r)| *r == relationship)
            .map(|(child, _)| child)
    }

    /// Walk up the containment forest, nearest ancestor first.
    pub fn ancestors(&self, id: NounId) -> impl Iterator<Item = NounId> + '_ {
        std::iter::successors(self.parent_of.get(&id).map(|(p, _)| *p), move |current| {
            self.parent_of.get(current).map(|(p, _)| *p)
        })
    }

    /// Returns true if `ancestor` is a strict ancestor of `id`.
    pub fn is_within(&self, id: NounId, ancestor: NounId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// The location at the root of a noun's containment tree, if any.
    pub fn root(&self, id: NounId) -> Option<NounId> {
        if self.is_location(id) {
            return Some(id);
        }
        self.ancestors(id)
            .last()
            .filter(|&top| self.is_location(top))
    }

    /// Attach `child` under `parent`, replacing any previous parent edge.
    ///
    /// Locations cannot be reparented and a noun cannot become its own
    /// ancestor. Nothing changes if validation fails.
    pub fn set_parent(
        &mut self,
        child: NounId,
        parent: NounId,
        relationship: Relationship,
    ) -> WorldResult<()> {
        let child_noun = self.check(child)?;
        if child_noun.is_location() {
            return Err(WorldError::InvalidGraphOperation(format!(
                "cannot give location \"{}\" a containment parent",
                child_noun.name
            )));
        }
        self.check(parent)?;
        if parent == child || self.is_within(parent, child) {
            return Err(WorldError::InvalidGraphOperation(format!(
                "\"{}\" cannot end up inside itself",
                self.nouns[child.index()].name
            )));
        }

        self.unlink(child);
        trace!(%child, %parent, %relationship, "set parent");
        self.children_of
            .entry(parent)
            .or_default()
            .push((child, relationship.clone()));
        self.parent_of.insert(child, (parent, relationship));
        Ok(())
    }

    /// Remove the containment edge from `parent` to `child`.
    ///
    /// The child stays in the arena but is no longer reachable from any
    /// location.
    pub fn detach(&mut self, parent: NounId, child: NounId) -> WorldResult<()> {
        self.check(parent)?;
        if self.parent(child)? != parent {
            return Err(WorldError::InvalidGraphOperation(format!(
                "\"{}\" is not a child of \"{}\"",
                self.nouns[child.index()].name,
                self.nouns[parent.index()].name
            )));
        }
        trace!(%child, %parent, "detach");
        self.unlink(child);
        Ok(())
    }

    fn unlink(&mut self, child: NounId) {
        let Some((old_parent, _)) = self.parent_of.remove(&child) else {
            return;
        };
        if let Some(siblings) = self.children_of.get_mut(&old_parent) {
            siblings.retain(|(sibling, _)| *sibling != child);
        }
    }

    // -----------------------------------------------------------------------
    // Topology
    // -----------------------------------------------------------------------

    /// Topology edges leaving a location.
    pub fn exits(&self, id: NounId) -> impl Iterator<Item = &Exit> {
        self.exits_from.get(&id).into_iter().flatten()
    }

    /// The exit leaving `origin` in `direction`, if there is one.
    pub fn exit(&self, origin: NounId, direction: &Direction) -> Option<&Exit> {
        self.exits(origin).find(|exit| exit.direction == *direction)
    }

    /// Connect two locations. Unless `one_way`, the way back is added with
    /// the opposite direction.
    pub fn connect(
        &mut self,
        origin: NounId,
        destination: NounId,
        direction: Direction,
        one_way: bool,
    ) -> WorldResult<()> {
        let mut hops = vec![(origin, destination, direction.clone())];
        if !one_way {
            hops.push((destination, origin, direction.opposite()));
        }
        self.insert_exits(hops)
    }

    /// Connect two locations through a door, which becomes a location of its
    /// own in the middle of the edge.
    pub fn connect_through(
        &mut self,
        origin: NounId,
        door: NounId,
        destination: NounId,
        direction: Direction,
        one_way: bool,
    ) -> WorldResult<()> {
        let mut hops = vec![
            (origin, door, direction.clone()),
            (door, destination, direction.clone()),
        ];
        if !one_way {
            let back = direction.opposite();
            hops.push((destination, door, back.clone()));
            hops.push((door, origin, back));
        }
        self.insert_exits(hops)
    }

    fn insert_exits(&mut self, hops: Vec<(NounId, NounId, Direction)>) -> WorldResult<()> {
        for (index, (from, to, direction)) in hops.iter().enumerate() {
            for id in [*from, *to] {
                let noun = self.check(id)?;
                if !noun.is_location() {
                    return Err(WorldError::InvalidGraphOperation(format!(
                        "\"{}\" is not a location and cannot have exits",
                        noun.name
                    )));
                }
            }
            let taken_earlier = hops[..index]
                .iter()
                .any(|(other, _, d)| other == from && d == direction);
            if taken_earlier || self.exit(*from, direction).is_some() {
                return Err(WorldError::DuplicateExit {
                    origin: self.nouns[from.index()].name.clone(),
                    direction: direction.clone(),
                });
            }
        }

        for (from, to, direction) in hops {
            trace!(%from, %to, %direction, "connect");
            self.exits_from.entry(from).or_default().push(Exit {
                destination: to,
                direction,
            });
        }
        Ok(())
    }
}

impl Index<NounId> for World {
    type Output = Noun;

    /// Panics if the ID was not issued by this world.
    fn index(&self, id: NounId) -> &Noun {
        &self.nouns[id.index()]
    }
}

impl IndexMut<NounId> for World {
    fn index_mut(&mut self, id: NounId) -> &mut Noun {
        &mut self.nouns[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall_and_box() -> (World, NounId, NounId, NounId) {
        let mut world = World::new();
        let hall = world.add(Noun::room("Hall"));
        let chest = world.add(Noun::new("chest"));
        let coin = world.add(Noun::new("coin"));
        world
            .set_parent(chest, hall, Relationship::Containing)
            .unwrap();
        world
            .set_parent(coin, chest, Relationship::Containing)
            .unwrap();
        (world, hall, chest, coin)
    }

    #[test]
    fn add_assigns_dense_ids() {
        let mut world = World::new();
        let a = world.add(Noun::new("apple"));
        let b = world.add(Noun::new("banana"));
        assert_eq!(a, NounId(0));
        assert_eq!(b, NounId(1));
        assert_eq!(world[b].id, b);
        assert_eq!(world.noun_count(), 2);
    }

    #[test]
    fn find_by_name_case_insensitive() {
        let (world, _, chest, _) = hall_and_box();
        assert_eq!(world.find_by_name("CHEST"), Some(chest));
        assert_eq!(world.find_by_name("nothing"), None);
    }

    #[test]
    fn reparenting_moves_the_single_edge() {
        let (mut world, hall, chest, coin) = hall_and_box();
        world
            .set_parent(coin, hall, Relationship::Containing)
            .unwrap();

        assert_eq!(world.parent(coin).unwrap(), hall);
        assert_eq!(world.children(chest).count(), 0);
        assert_eq!(world.children(hall).count(), 2);
    }

    #[test]
    fn locations_cannot_be_reparented() {
        let (mut world, hall, chest, _) = hall_and_box();
        let err = world
            .set_parent(hall, chest, Relationship::Containing)
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidGraphOperation(_)));
    }

    #[test]
    fn cycles_are_rejected() {
        let (mut world, _, chest, coin) = hall_and_box();
        let err = world
            .set_parent(chest, coin, Relationship::Containing)
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidGraphOperation(_)));
        // Nothing moved.
        assert_eq!(world.parent(coin).unwrap(), chest);
    }

    #[test]
    fn locations_have_no_parent() {
        let (world, hall, _, _) = hall_and_box();
        assert!(matches!(world.parent(hall), Err(WorldError::NoParent(_))));
    }

    #[test]
    fn root_and_ancestry() {
        let (world, hall, chest, coin) = hall_and_box();
        assert_eq!(world.root(coin), Some(hall));
        assert_eq!(world.root(hall), Some(hall));
        assert_eq!(world.ancestors(coin).collect::<Vec<_>>(), vec![chest, hall]);
        assert!(world.is_within(coin, hall));
        assert!(!world.is_within(hall, coin));
    }

    #[test]
    fn detach_removes_the_edge() {
        let (mut world, hall, chest, coin) = hall_and_box();
        assert!(world.detach(hall, coin).is_err());
        world.detach(chest, coin).unwrap();
        assert!(matches!(world.parent(coin), Err(WorldError::NoParent(_))));
        assert_eq!(world.root(coin), None);
    }

    #[test]
    fn children_by_relationship() {
        let (mut world, hall, chest, _) = hall_and_box();
        let lid = world.add(Noun::new("lid"));
        world
            .set_parent(lid, chest, Relationship::Incorporating)
            .unwrap();
        let parts: Vec<_> = world
            .children_by(chest, &Relationship::Incorporating)
            .collect();
        assert_eq!(parts, vec![lid]);
        assert_eq!(world.children_by(hall, &Relationship::Wearing).count(), 0);
    }

    #[test]
    fn connect_mirrors_exits() {
        let mut world = World::new();
        let a = world.add(Noun::room("A"));
        let b = world.add(Noun::room("B"));
        world.connect(a, b, Direction::North, false).unwrap();

        assert_eq!(world.exit(a, &Direction::North).unwrap().destination, b);
        assert_eq!(world.exit(b, &Direction::South).unwrap().destination, a);
    }

    #[test]
    fn one_way_exits_do_not_mirror() {
        let mut world = World::new();
        let a = world.add(Noun::room("A"));
        let b = world.add(Noun::room("B"));
        world.connect(a, b, Direction::Down, true).unwrap();
        assert_eq!(world.exits(b).count(), 0);
    }

    #[test]
    fn duplicate_exit_rejected_atomically() {
        let mut world = World::new();
        let a = world.add(Noun::room("A"));
        let b = world.add(Noun::room("B"));
        let c = world.add(Noun::room("C"));
        world.connect(a, b, Direction::North, false).unwrap();

        // c -> a south is free, but a -> c north is taken.
        let err = world.connect(a, c, Direction::North, false).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r#"duplicate exit: "A" already has an exit north"#);
        assert_eq!(world.exits(c).count(), 0);
    }

    #[test]
    fn doors_split_edges() {
        let mut world = World::new();
        let a = world.add(Noun::room("A"));
        let door = world.add(Noun::door("yellow door"));
        let c = world.add(Noun::room("C"));
        world
            .connect_through(a, door, c, Direction::West, false)
            .unwrap();

        assert_eq!(world.exit(a, &Direction::West).unwrap().destination, door);
        assert_eq!(world.exit(door, &Direction::West).unwrap().destination, c);
        assert_eq!(world.exit(c, &Direction::East).unwrap().destination, door);
        assert_eq!(world.exit(door, &Direction::East).unwrap().destination, a);
    }

    #[test]
    fn one_way_doors_have_no_way_back() {
        let mut world = World::new();
        let a = world.add(Noun::room("A"));
        let door = world.add(Noun::door("trapdoor"));
        let c = world.add(Noun::room("C"));
        world
            .connect_through(a, door, c, Direction::Down, true)
            .unwrap();

        assert_eq!(world.exit(a, &Direction::Down).unwrap().destination, door);
        assert_eq!(world.exit(door, &Direction::Down).unwrap().destination, c);
        assert_eq!(world.exits(door).count(), 1);
        assert_eq!(world.exits(c).count(), 0);
    }

    #[test]
    fn things_cannot_have_exits() {
        let (mut world, hall, chest, _) = hall_and_box();
        let err = world
            .connect(hall, chest, Direction::Up, false)
            .unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @r#"invalid graph operation: "chest" is not a location and cannot have exits"#
        );
    }
}
