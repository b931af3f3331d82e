use std::fmt;

/// How a relationship reads when describing a child relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase<'a> {
    /// "the key in the box".
    Preposition(&'a str),
    /// "the hat that you are wearing".
    Clause(&'a str),
}

/// Label on a containment edge, read as "parent is <verb> child".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// A person holding something.
    Carrying,
    /// A room, box, or vehicle holding something inside.
    Containing,
    /// A thing that is a fixed part of another thing.
    Incorporating,
    /// A table or shelf with something on top.
    Supporting,
    /// A person with something on.
    Wearing,
    /// A relationship supplied by game content.
    Custom {
        /// Participle used as "parent is <verb> child".
        verb: String,
        /// Preposition used as "child <preposition> parent".
        preposition: String,
    },
}

impl Relationship {
    /// Participle for narrating the edge from the parent's side.
    pub fn verb(&self) -> &str {
        match self {
            Self::Carrying => "carrying",
            Self::Containing => "containing",
            Self::Incorporating => "incorporating",
            Self::Supporting => "supporting",
            Self::Wearing => "wearing",
            Self::Custom { verb, .. } => verb,
        }
    }

    /// How to describe a child relative to its parent.
    pub fn phrase(&self) -> Phrase<'_> {
        match self {
            Self::Carrying => Phrase::Clause("carrying"),
            Self::Containing => Phrase::Preposition("in"),
            Self::Incorporating => Phrase::Preposition("of"),
            Self::Supporting => Phrase::Preposition("on"),
            Self::Wearing => Phrase::Clause("wearing"),
            Self::Custom { preposition, .. } => Phrase::Preposition(preposition),
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}
