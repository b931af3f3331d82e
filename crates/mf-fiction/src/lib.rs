//! Menu-driven interactive fiction engine for Menufiction.
//!
//! Instead of parsing typed commands, every turn enumerates the sentences
//! the player could say given what they can see and reach, shows them as a
//! menu, and asks follow-up questions when an argument is ambiguous.
//! Choices are logged so a session can be replayed and its transcript
//! compared byte for byte.

/// Registry and the standard action library.
pub mod actions;
/// A sample world.
pub mod demo;
/// Search spaces for sentence arguments.
pub mod domain;
/// Error types for the fiction engine.
pub mod error;
/// Menu and output collaborators.
pub mod interface;
/// Naming, agreement, wrapping, and location descriptions.
pub mod narrator;
/// The action trait and the two-tier possibility model.
pub mod possibility;
/// Choice logs and transcript comparison.
pub mod replay;
/// Sentence enumeration and disambiguation.
pub mod sentence;
/// The turn loop.
pub mod turn;
/// The universe that ties a session together.
pub mod universe;

pub use actions::{ActionId, ActionRegistry};
pub use domain::Domain;
pub use error::{FictionError, FictionResult};
pub use interface::{Menu, Output, ReplayMenu, Transcript};
pub use narrator::NarratorConfig;
pub use possibility::{Action, Target};
pub use replay::{ChoiceLog, TranscriptMismatch, compare_transcripts};
pub use sentence::{Answer, Command, Sentence};
pub use turn::{step, turn};
pub use universe::Universe;
