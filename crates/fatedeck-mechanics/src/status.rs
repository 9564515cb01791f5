//! Character status conditions and the ordered penalty rule table.
//!
//! The original rules zero a face card's value when a condition applies to
//! the tested ability. Here that dispatch is an explicit table of
//! (status, label predicate, effect) entries over an enumerated status type,
//! so a mistyped label can't silently disable a rule. Every rule is
//! evaluated once, unconditionally, against the original flags; name
//! annotations accumulate in table order.

use serde::{Deserialize, Serialize};

use crate::resolve::ResolvedCard;

/// A character status condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Physically hurt.
    Injured,
    /// Mentally spent.
    Fatigued,
    /// Financially drained.
    Taxed,
    /// Shaken by fear.
    Afraid,
    /// Boiling over.
    Angry,
}

impl Status {
    /// The annotation word appended to marked card names.
    pub fn word(self) -> &'static str {
        match self {
            Self::Injured => "injured",
            Self::Fatigued => "fatigued",
            Self::Taxed => "taxed",
            Self::Afraid => "afraid",
            Self::Angry => "angry",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// Boolean status conditions read at check time. Read-only inputs to the
/// resolver; a check never mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    /// Strikes dexterity and fitness face cards.
    pub injured: bool,
    /// Strikes smarts and charisma face cards.
    pub fatigued: bool,
    /// Strikes assets face cards.
    pub taxed: bool,
    /// Marks every check without touching values.
    pub afraid: bool,
    /// Marks charisma checks without touching values.
    pub angry: bool,
}

impl StatusFlags {
    /// No conditions set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a given status is set.
    pub fn is_set(self, status: Status) -> bool {
        match status {
            Status::Injured => self.injured,
            Status::Fatigued => self.fatigued,
            Status::Taxed => self.taxed,
            Status::Afraid => self.afraid,
            Status::Angry => self.angry,
        }
    }

    /// Set the injured flag.
    pub fn with_injured(mut self) -> Self {
        self.injured = true;
        self
    }

    /// Set the fatigued flag.
    pub fn with_fatigued(mut self) -> Self {
        self.fatigued = true;
        self
    }

    /// Set the taxed flag.
    pub fn with_taxed(mut self) -> Self {
        self.taxed = true;
        self
    }

    /// Set the afraid flag.
    pub fn with_afraid(mut self) -> Self {
        self.afraid = true;
        self
    }

    /// Set the angry flag.
    pub fn with_angry(mut self) -> Self {
        self.angry = true;
        self
    }
}

/// Which check labels a rule applies to. Labels are matched lowercased.
#[derive(Debug, Clone, Copy)]
pub enum LabelPredicate {
    /// The label equals one of these exactly.
    ExactOneOf(&'static [&'static str]),
    /// The label contains one of these as a substring.
    ContainsOneOf(&'static [&'static str]),
    /// Every label.
    Any,
}

impl LabelPredicate {
    /// Whether the predicate matches a label.
    pub fn matches(self, label: &str) -> bool {
        let label = label.to_lowercase();
        match self {
            Self::ExactOneOf(set) => set.iter().any(|candidate| *candidate == label),
            Self::ContainsOneOf(set) => set.iter().any(|fragment| label.contains(fragment)),
            Self::Any => true,
        }
    }
}

/// What a matched rule does to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    /// Zero the card's value and strike its name. Face cards only.
    ZeroValue,
    /// Append the annotation without touching the value. Any rank.
    AnnotateOnly,
}

/// One entry of the status rule table.
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    /// The condition that must be set for the rule to fire.
    pub status: Status,
    /// The labels the rule applies to.
    pub applies_to: LabelPredicate,
    /// Whether the rule strikes the value or only marks the name.
    pub effect: RuleEffect,
}

/// The ordered rule table evaluated on every resolved card.
///
/// Zeroing rules bind to the exact base ability labels; compound subskill
/// labels are marked by the containment rules but keep their value.
pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: Status::Injured,
        applies_to: LabelPredicate::ExactOneOf(&["dexterity", "fitness"]),
        effect: RuleEffect::ZeroValue,
    },
    StatusRule {
        status: Status::Fatigued,
        applies_to: LabelPredicate::ExactOneOf(&["smarts", "charisma"]),
        effect: RuleEffect::ZeroValue,
    },
    StatusRule {
        status: Status::Taxed,
        applies_to: LabelPredicate::ExactOneOf(&["assets"]),
        effect: RuleEffect::ZeroValue,
    },
    StatusRule {
        status: Status::Injured,
        applies_to: LabelPredicate::ContainsOneOf(&["dexterity.", "fitness."]),
        effect: RuleEffect::AnnotateOnly,
    },
    StatusRule {
        status: Status::Afraid,
        applies_to: LabelPredicate::Any,
        effect: RuleEffect::AnnotateOnly,
    },
    StatusRule {
        status: Status::Angry,
        applies_to: LabelPredicate::ContainsOneOf(&["charisma"]),
        effect: RuleEffect::AnnotateOnly,
    },
];

/// Apply every status rule, in table order, to a resolved card.
///
/// Zeroing clamps the value to exactly 0 and never retracts the boost flag;
/// annotate-only rules leave the value untouched regardless of rank.
pub fn apply_status(resolved: &mut ResolvedCard, label: &str, flags: StatusFlags) {
    for rule in STATUS_RULES {
        if !flags.is_set(rule.status) || !rule.applies_to.matches(label) {
            continue;
        }
        match rule.effect {
            RuleEffect::ZeroValue => {
                if resolved.card.rank.is_face() {
                    resolved.value = 0;
                    resolved.struck = true;
                    resolved.annotations.push(rule.status);
                }
            }
            RuleEffect::AnnotateOnly => resolved.annotations.push(rule.status),
        }
    }
}
