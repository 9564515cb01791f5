//! Ability-to-suit mappings for check labels.
//!
//! Each ability is governed by a suit; a drawn card of that suit boosts the
//! check. Compound labels (`"category.subskill"`) fall back to the mapping
//! for the prefix before the dot. A label with neither an exact nor a prefix
//! mapping is an error — never a silent "no suit".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fatedeck_core::Suit;

use crate::error::{CheckError, CheckResult};

/// Maps check labels to their governing suits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityMap {
    suits: HashMap<String, Suit>,
}

impl AbilityMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard five-ability spread from the base game.
    pub fn standard() -> Self {
        let mut map = Self::new();
        map.insert("dexterity", Suit::Spades);
        map.insert("fitness", Suit::Clubs);
        map.insert("smarts", Suit::Hearts);
        map.insert("charisma", Suit::Diamonds);
        map.insert("assets", Suit::Diamonds);
        map
    }

    /// Map an ability label to a suit. Labels are stored lowercased.
    pub fn insert(&mut self, label: &str, suit: Suit) {
        self.suits.insert(label.to_lowercase(), suit);
    }

    /// The suit governing a label.
    ///
    /// Tries the exact label first, then the prefix before the first `.`.
    pub fn suit_for(&self, label: &str) -> CheckResult<Suit> {
        let key = label.to_lowercase();
        if let Some(&suit) = self.suits.get(&key) {
            return Ok(suit);
        }
        if let Some((prefix, _)) = key.split_once('.') {
            if let Some(&suit) = self.suits.get(prefix) {
                return Ok(suit);
            }
        }
        Err(CheckError::UnmappedAbility(label.to_string()))
    }

    /// Iterate over `(label, suit)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Suit)> {
        self.suits.iter().map(|(label, &suit)| (label.as_str(), suit))
    }

    /// Number of mapped abilities.
    pub fn len(&self) -> usize {
        self.suits.len()
    }

    /// True if no abilities are mapped.
    pub fn is_empty(&self) -> bool {
        self.suits.is_empty()
    }
}
