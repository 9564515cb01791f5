//! Error types for check resolution.

use thiserror::Error;

use fatedeck_core::DeckError;

/// Result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that can abort a skill check.
///
/// None of these are swallowed into default values: an unmapped ability or
/// an exhausted retry loop surfaces to the caller and no message is produced.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check label has no suit mapping and no mapped prefix.
    #[error("no suit mapped for ability: {0}")]
    UnmappedAbility(String),

    /// The duplicate-draw retry bound was exceeded.
    #[error("gave up after {attempts} duplicate boosting draws")]
    DuplicateDrawExhausted {
        /// How many times the check restarted before giving up.
        attempts: u32,
    },

    /// The card source failed; deck errors are never retried here.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
