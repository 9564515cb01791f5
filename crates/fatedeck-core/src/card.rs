//! Playing cards: suits, ranks, and stable card identities.
//!
//! Every physical card in a deck carries a [`CardId`] that survives
//! reshuffles, so two draws of the same card can be detected even when the
//! deck cycles between them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A French playing-card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in a fixed order.
    pub fn all() -> &'static [Self] {
        &[Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds]
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spades => write!(f, "Spades"),
            Self::Hearts => write!(f, "Hearts"),
            Self::Clubs => write!(f, "Clubs"),
            Self::Diamonds => write!(f, "Diamonds"),
        }
    }
}

/// A card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (value 1).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (rank 11).
    Jack,
    /// Queen (rank 12).
    Queen,
    /// King (rank 13).
    King,
    /// Joker — no rank number; contributes a flat value during resolution.
    Joker,
}

impl Rank {
    /// Numeric rank: Ace = 1 through King = 13.
    ///
    /// Jokers sit outside the rank ladder; they return the flat 10 they
    /// contribute to a check so the function stays total.
    pub fn value(self) -> u32 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Joker => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    /// True for Jack, Queen, and King.
    pub fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// The thirteen standard ranks, Ace through King (no joker).
    pub fn standard() -> &'static [Self] {
        &[
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
        ]
    }
}

/// Stable identity of one physical card within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    /// Mint a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single playing card. Immutable once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity within the owning deck.
    pub id: CardId,
    /// The card's suit. Jokers carry a suit too (their printed color).
    pub suit: Suit,
    /// The card's rank.
    pub rank: Rank,
}

impl Card {
    /// Create a card with a fresh identity.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::new(),
            suit,
            rank,
        }
    }

    /// The display name used in check narration.
    ///
    /// `"a Jack of Spades"`, `"an Ace of Hearts"`, `"a 7 of Clubs"`,
    /// `"a Hearts JOKER"`. Pip cards always take the article "a", even
    /// before vowel digits, matching the original chat output.
    pub fn article_name(&self) -> String {
        match self.rank {
            Rank::Joker => format!("a {} JOKER", self.suit),
            Rank::Ace => format!("an Ace of {}", self.suit),
            Rank::Jack => format!("a Jack of {}", self.suit),
            Rank::Queen => format!("a Queen of {}", self.suit),
            Rank::King => format!("a King of {}", self.suit),
            pip => format!("a {} of {}", pip.value(), self.suit),
        }
    }
}
