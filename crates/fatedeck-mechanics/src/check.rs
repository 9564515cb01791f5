//! The check protocol: draw, resolve, boost, retry on duplicates.
//!
//! One check walks `Idle → PrimaryDrawn → BoostEvaluated → Finalized`, with
//! a single cycle back to `Idle` when the boosting draw duplicates the
//! primary. The cycle is bounded: a reshuffling source makes back-to-back
//! duplicates vanishingly rare, but the loop never presumes that.

use serde::{Deserialize, Serialize};

use fatedeck_core::CardSource;

use crate::ability::AbilityMap;
use crate::error::{CheckError, CheckResult};
use crate::resolve::{self, ResolvedCard};
use crate::status::StatusFlags;

/// How many consecutive duplicate boosting draws are tolerated before the
/// check fails instead of looping forever.
pub const MAX_DUPLICATE_RETRIES: u32 = 1000;

/// The final result of one skill check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The ability label that was tested.
    pub label: String,
    /// The primary drawn card.
    pub primary: ResolvedCard,
    /// The boosting card, present only when the primary's suit matched.
    pub boost: Option<ResolvedCard>,
    /// Combined check value: primary plus any boost. Never negative.
    pub value: u32,
}

impl CheckOutcome {
    /// Whether the primary card boosted the check.
    pub fn is_boosting(&self) -> bool {
        self.primary.boosting
    }
}

/// Perform one skill check against a card source.
///
/// Draws a primary card and an independent boosting candidate from the same
/// source. When the primary's suit matches the ability's suit, the
/// candidate's post-penalty value (including zero) is added to the total;
/// otherwise the candidate's draw is spent unexamined. Drawing the same
/// physical card twice restarts the whole check; after
/// [`MAX_DUPLICATE_RETRIES`] consecutive duplicates the check fails with
/// [`CheckError::DuplicateDrawExhausted`]. Source failures propagate as-is.
pub fn perform_check(
    source: &mut dyn CardSource,
    abilities: &AbilityMap,
    flags: StatusFlags,
    label: &str,
) -> CheckResult<CheckOutcome> {
    for _ in 0..MAX_DUPLICATE_RETRIES {
        let primary_id = source.draw()?;
        let boost_id = source.draw()?;

        let primary = resolve::resolve_card(source.card(primary_id)?, label, abilities, flags)?;

        if !primary.boosting {
            return Ok(CheckOutcome {
                label: label.to_string(),
                value: primary.value,
                primary,
                boost: None,
            });
        }

        if primary_id == boost_id {
            // Duplicate draw: throw both results away and start over.
            continue;
        }

        let boost = resolve::resolve_card(source.card(boost_id)?, label, abilities, flags)?;
        let value = primary.value + boost.value;
        return Ok(CheckOutcome {
            label: label.to_string(),
            primary,
            boost: Some(boost),
            value,
        });
    }

    Err(CheckError::DuplicateDrawExhausted {
        attempts: MAX_DUPLICATE_RETRIES,
    })
}
