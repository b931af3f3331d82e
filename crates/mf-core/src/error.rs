use crate::direction::Direction;
use crate::noun::NounId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised when game content builds or mutates an ill-formed graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested noun ID was never issued by this world.
    #[error("noun not found: {0}")]
    NounNotFound(NounId),

    /// An exit with this direction already leaves the origin.
    #[error("duplicate exit: \"{origin}\" already has an exit {direction}")]
    DuplicateExit {
        /// Display name of the origin location.
        origin: String,
        /// The direction that is already taken.
        direction: Direction,
    },

    /// The mutation would break the forest or topology invariants.
    #[error("invalid graph operation: {0}")]
    InvalidGraphOperation(String),

    /// The noun is a location (or detached) and has no containment parent.
    #[error("noun has no parent: {0}")]
    NoParent(NounId),
}
