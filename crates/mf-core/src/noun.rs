use std::fmt;

use crate::component::ComponentSet;
use crate::world::World;

/// Stable handle for a noun. Issued densely by [`World::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NounId(pub u32);

impl NounId {
    /// Position of this noun in the world's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NounId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Grammatical person, used for verb agreement when narrating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Person {
    /// "I am".
    First,
    /// "You are". The player is usually second person.
    Second,
    /// "It is".
    #[default]
    Third,
}

/// Whether a noun is an ordinary thing or one of the two location kinds.
///
/// Locations root a containment subtree and are vertices of the topology
/// graph. They never have a containment parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NounKind {
    /// Anything that lives inside the containment forest.
    #[default]
    Thing,
    /// A room: tracks whether it has been visited.
    Room,
    /// A door: sits inline on a topology edge, splitting it into two hops.
    Door,
}

impl NounKind {
    /// Returns true for rooms and doors.
    pub fn is_location(self) -> bool {
        matches!(self, Self::Room | Self::Door)
    }
}

/// A noun's description, resolved when it is rendered.
#[derive(Debug, Clone)]
pub enum Description {
    /// A fixed piece of text.
    Fixed(String),
    /// Text computed from the current world state.
    Computed(fn(&World, NounId) -> String),
}

impl Description {
    /// Render the description against the current world.
    pub fn resolve(&self, world: &World, id: NounId) -> String {
        match self {
            Self::Fixed(text) => text.clone(),
            Self::Computed(render) => render(world, id),
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::Fixed(String::new())
    }
}

/// Any addressable game entity: a room, a door, an item, a person.
#[derive(Debug, Clone)]
pub struct Noun {
    /// Handle assigned when the noun is added to a world.
    pub id: NounId,
    /// Display name without article ("yellow key").
    pub name: String,
    /// Grammatical person.
    pub person: Person,
    /// Whether the noun takes plural verb forms.
    pub plural: bool,
    /// Indefinite article ("a", "an", "some"). Empty for proper nouns.
    pub article: String,
    /// Description shown when examining or looking.
    pub description: Description,
    /// Thing, room, or door.
    pub kind: NounKind,
    /// Optional capability components.
    pub components: ComponentSet,
}

impl Noun {
    /// Create a third-person thing with the article "a".
    ///
    /// The ID is a placeholder until [`World::add`] assigns the real one.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NounId(u32::MAX),
            name: name.into(),
            person: Person::Third,
            plural: false,
            article: "a".to_string(),
            description: Description::default(),
            kind: NounKind::Thing,
            components: ComponentSet::default(),
        }
    }

    /// Create a room. Rooms carry a room component for the visited flag.
    pub fn room(name: impl Into<String>) -> Self {
        let mut noun = Self::new(name).with_article("");
        noun.kind = NounKind::Room;
        noun.components.room = Some(Default::default());
        noun
    }

    /// Create a door. Doors start open and unlocked.
    pub fn door(name: impl Into<String>) -> Self {
        let mut noun = Self::new(name);
        noun.kind = NounKind::Door;
        noun.components.openable = Some(Default::default());
        noun
    }

    /// Set the indefinite article. An empty article marks a proper noun.
    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = article.into();
        self
    }

    /// Set a fixed description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Description::Fixed(text.into());
        self
    }

    /// Set a description computed at render time.
    pub fn with_computed_description(mut self, render: fn(&World, NounId) -> String) -> Self {
        self.description = Description::Computed(render);
        self
    }

    /// Set the grammatical person.
    pub fn with_person(mut self, person: Person) -> Self {
        self.person = person;
        self
    }

    /// Mark the noun as plural.
    pub fn plural(mut self) -> Self {
        self.plural = true;
        self
    }

    /// Apply a closure to the component set.
    pub fn with(mut self, configure: impl FnOnce(&mut ComponentSet)) -> Self {
        configure(&mut self.components);
        self
    }

    /// Returns true for proper nouns, which are never re-articled.
    pub fn is_proper(&self) -> bool {
        self.article.is_empty()
    }

    /// Returns true for rooms and doors.
    pub fn is_location(&self) -> bool {
        self.kind.is_location()
    }
}
