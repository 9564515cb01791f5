//! Card model and deck primitives for the Fatedeck check engine.
//!
//! This crate defines the playing-card data model and the card sources that
//! checks draw from. It knows nothing about abilities, status conditions, or
//! message formatting — those live in `fatedeck-mechanics`. Decks are
//! explicitly injected dependencies with a defined reshuffle contract, never
//! ambient shared state.

pub mod card;
pub mod deck;
pub mod error;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{CardSource, Deck, SharedDeck};
pub use error::{CoreResult, DeckError};
