//! Card-draw skill-check mechanics for the Fatedeck engine.
//!
//! A check draws a primary card whose rank sets the base value, decides
//! whether an independently drawn second card of the ability's governing
//! suit boosts the total, and applies status-condition penalties that can
//! strike a face card down to zero. Decks, ability maps, and status flags
//! are injected by the caller; the engine holds no state between checks.

pub mod ability;
pub mod check;
pub mod error;
pub mod message;
pub mod resolve;
pub mod sheet;
pub mod status;

pub use ability::AbilityMap;
pub use check::{CheckOutcome, MAX_DUPLICATE_RETRIES, perform_check};
pub use error::{CheckError, CheckResult};
pub use message::{ChatLog, CheckMessage, MessageSink, compose, flavor_text};
pub use resolve::{FACE_VALUE, JOKER_VALUE, ResolvedCard, resolve_card};
pub use sheet::CharacterSheet;
pub use status::{
    LabelPredicate, RuleEffect, STATUS_RULES, Status, StatusFlags, StatusRule, apply_status,
};
