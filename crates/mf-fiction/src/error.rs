//! Error types for the fiction engine.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a game.
///
/// Every variant is fatal for the turn in progress. Failures the player can
/// cause through the menu are narrated by actions instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world graph rejected a mutation.
    #[error(transparent)]
    World(#[from] mf_core::WorldError),

    /// A question with no answers reached the menu layer.
    #[error("empty question: {0}")]
    EmptyQuestion(String),

    /// The menu returned an index outside the options it was shown.
    #[error("invalid choice {index} for a menu of {options} options")]
    InvalidChoice {
        /// The offending 1-based index.
        index: usize,
        /// Number of options presented.
        options: usize,
    },

    /// A replayed choice log ran out before the game ended.
    #[error("choice log exhausted before the game ended")]
    ChoicesExhausted,

    /// Enumeration produced no sentences at all.
    #[error("no actions are possible")]
    NoActions,

    /// An action received an argument of the wrong shape.
    #[error("{action}: unexpected argument at position {position}")]
    UnexpectedArgument {
        /// Name of the action.
        action: String,
        /// 0-based argument position.
        position: usize,
    },

    /// A choice log file could not be parsed.
    #[error("invalid choice log: {0}")]
    InvalidChoiceLog(String),

    /// Reading choices from a terminal failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
