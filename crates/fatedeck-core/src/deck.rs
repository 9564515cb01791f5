//! Decks: shuffled card piles with an infinite-draw contract.
//!
//! A deck never runs dry in normal play: when the draw pile empties, the
//! discard pile is shuffled back in before the next draw. Drawn cards go
//! straight to the discard pile and are never returned, so the same physical
//! card can only reappear after a reshuffle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, Rank, Suit};
use crate::error::{CoreResult, DeckError};

/// A source of drawn cards.
///
/// Draws are non-blocking and logically infinite for well-formed decks.
/// Each call to [`CardSource::draw`] hands out exactly one card identifier;
/// looking up the card data is a separate, read-only operation.
pub trait CardSource {
    /// Draw the next card identifier from the source.
    fn draw(&mut self) -> CoreResult<CardId>;

    /// Look up the card data behind a drawn identifier.
    fn card(&self, id: CardId) -> CoreResult<Card>;
}

/// A shuffled deck with a draw pile and a discard pile.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: HashMap<CardId, Card>,
    draw_pile: Vec<CardId>,
    discard: Vec<CardId>,
    rng: StdRng,
}

impl Deck {
    /// Build a deck from explicit cards, shuffled with the given seed.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        let mut deck = Self {
            cards: cards.iter().map(|c| (c.id, *c)).collect(),
            draw_pile: cards.iter().map(|c| c.id).collect(),
            discard: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// A 52-card French deck, shuffled.
    pub fn standard52(seed: u64) -> Self {
        Self::from_cards(standard_cards(), seed)
    }

    /// The 54-card play deck: 52 cards plus a red and a black joker.
    pub fn standard54(seed: u64) -> Self {
        let mut cards = standard_cards();
        cards.push(Card::new(Suit::Hearts, Rank::Joker));
        cards.push(Card::new(Suit::Spades, Rank::Joker));
        Self::from_cards(cards, seed)
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Cards left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Total number of cards cycling through the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the deck holds no cards at all.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> CoreResult<CardId> {
        if self.draw_pile.is_empty() {
            if self.discard.is_empty() {
                return Err(DeckError::Exhausted);
            }
            self.draw_pile.append(&mut self.discard);
            self.shuffle();
        }
        let id = self.draw_pile.pop().ok_or(DeckError::Exhausted)?;
        self.discard.push(id);
        Ok(id)
    }

    fn card(&self, id: CardId) -> CoreResult<Card> {
        self.cards
            .get(&id)
            .copied()
            .ok_or(DeckError::UnknownCard(id))
    }
}

/// A deck behind a mutex, so concurrent checks observe each draw as one
/// atomic operation on the shared source.
#[derive(Debug, Clone)]
pub struct SharedDeck(Arc<Mutex<Deck>>);

impl SharedDeck {
    /// Wrap a deck for shared use.
    pub fn new(deck: Deck) -> Self {
        Self(Arc::new(Mutex::new(deck)))
    }
}

impl CardSource for SharedDeck {
    fn draw(&mut self) -> CoreResult<CardId> {
        self.0.lock().map_err(|_| DeckError::Poisoned)?.draw()
    }

    fn card(&self, id: CardId) -> CoreResult<Card> {
        self.0.lock().map_err(|_| DeckError::Poisoned)?.card(id)
    }
}

/// The 52 suit-and-rank combinations with fresh identities.
fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(54);
    for &suit in Suit::all() {
        for &rank in Rank::standard() {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
