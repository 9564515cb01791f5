//! Composing check results into host-deliverable messages.
//!
//! The engine does not evaluate dice: the formula and the combined draw
//! value are handed off together, and whatever roller the host runs is its
//! own business. The narration mirrors the original chat card line for line.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::check::CheckOutcome;
use crate::sheet::CharacterSheet;

/// A rendered check ready for the host's chat and dice roller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckMessage {
    /// Who performed the check.
    pub speaker: String,
    /// Human-readable draw narration.
    pub flavor: String,
    /// Dice formula to evaluate with `draw_value` bound to `@drawvalue`.
    pub formula: String,
    /// Combined draw value feeding the formula.
    pub draw_value: u32,
}

/// Anything that accepts finished check messages.
pub trait MessageSink {
    /// Deliver one finished message.
    fn deliver(&mut self, message: CheckMessage);
}

/// A Vec-backed sink for tests and terminal frontends.
#[derive(Debug, Default)]
pub struct ChatLog {
    /// Messages delivered so far, oldest first.
    pub messages: Vec<CheckMessage>,
}

impl ChatLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageSink for ChatLog {
    fn deliver(&mut self, message: CheckMessage) {
        self.messages.push(message);
    }
}

/// Narrate an outcome the way the original chat card did.
///
/// `"Dexterity skill check..."` (label capitalized, rest lowered), the
/// primary draw, and the boost line when one happened. Struck names carry
/// `~~ ~~` markers and their accumulated annotations.
pub fn flavor_text(outcome: &CheckOutcome) -> String {
    let mut text = format!(
        "{} skill check...\nDrew {}!",
        capitalize(&outcome.label),
        outcome.primary
    );
    if let Some(boost) = &outcome.boost {
        let _ = write!(text, "\nBoosted with {boost}!");
    }
    text
}

/// Compose the full message for a character's outcome.
pub fn compose(sheet: &CharacterSheet, outcome: &CheckOutcome) -> CheckMessage {
    CheckMessage {
        speaker: sheet.name.clone(),
        flavor: flavor_text(outcome),
        formula: sheet.formula.clone(),
        draw_value: outcome.value,
    }
}

/// First letter uppercased, the rest lowered.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
