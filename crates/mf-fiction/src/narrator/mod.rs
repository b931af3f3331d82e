//! Narration: naming nouns, agreement, wrapping, and describing places.

mod config;
mod describe;
mod grammar;

pub use config::NarratorConfig;
pub use describe::{describe_location, list_contents};
pub use grammar::{
    be, capitalize, conjugate, definite, indefinite, join_list, qualifier, subject, wrap,
};
