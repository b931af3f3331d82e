//! World graph for Menufiction: nouns, relationships, directions, and the
//! two graphs that tie them together.
//!
//! Every noun lives in a containment forest whose roots are exactly the
//! locations. Locations are additionally linked to each other by a topology
//! graph labeled with directions. Game content builds a [`World`] through
//! [`World::set_parent`] and [`World::connect`]; everything else is read-only.

/// Capability components that opt nouns into actions.
pub mod component;
/// Compass and vertical directions used to label exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Nouns, identifiers, and grammatical attributes.
pub mod noun;
/// Containment relationship labels.
pub mod relationship;
/// The containment forest and topology graph.
pub mod world;

/// Re-export capability components.
pub use component::ComponentSet;
/// Re-export direction types.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export noun types.
pub use noun::{Description, Noun, NounId, NounKind, Person};
/// Re-export relationship types.
pub use relationship::{Phrase, Relationship};
/// Re-export world types.
pub use world::{Exit, World};
