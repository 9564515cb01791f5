//! Error types for decks and card sources.

use thiserror::Error;

use crate::card::CardId;

/// Result type for deck operations.
pub type CoreResult<T> = Result<T, DeckError>;

/// Errors that can occur while drawing from a card source.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The deck holds no cards at all, so nothing can be drawn.
    #[error("deck is exhausted")]
    Exhausted,

    /// A drawn identifier has no card data behind it.
    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    /// Another holder of a shared deck panicked mid-draw.
    #[error("shared deck lock poisoned")]
    Poisoned,
}
