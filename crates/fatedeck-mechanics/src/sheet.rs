//! Character sheets: who is checking, with what abilities and conditions.
//!
//! The sheet is the check's view of a character — the ability-to-suit map,
//! the current status flags, and the dice formula the host's roller combines
//! with the draw value. Item inventories and rendering stay host-side.

use serde::{Deserialize, Serialize};

use fatedeck_core::CardSource;

use crate::ability::AbilityMap;
use crate::check::{self, CheckOutcome};
use crate::error::CheckResult;
use crate::status::StatusFlags;

/// Default host-side dice formula combined with the draw value.
pub const DEFAULT_FORMULA: &str = "1d6 + @drawvalue";

/// A character's check-relevant state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name, used as the message speaker.
    pub name: String,
    /// The character's ability-to-suit mapping.
    pub abilities: AbilityMap,
    /// Current status conditions.
    pub status: StatusFlags,
    /// Dice formula handed to the host's roller alongside the draw value.
    pub formula: String,
}

impl CharacterSheet {
    /// A sheet with the standard ability spread and default formula.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abilities: AbilityMap::standard(),
            status: StatusFlags::none(),
            formula: DEFAULT_FORMULA.to_string(),
        }
    }

    /// Run one check for this character against a card source.
    pub fn check(&self, source: &mut dyn CardSource, label: &str) -> CheckResult<CheckOutcome> {
        check::perform_check(source, &self.abilities, self.status, label)
    }
}
