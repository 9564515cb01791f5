//! Resolving one drawn card against a check label.
//!
//! Rank sets the base value (pips at face value, court cards at 5, jokers at
//! a flat 10), the ability's suit decides whether the card boosts, and the
//! status pass runs last. The boost decision happens before any penalty and
//! is never retracted by one.

use serde::{Deserialize, Serialize};

use fatedeck_core::{Card, Rank};

use crate::ability::AbilityMap;
use crate::error::CheckResult;
use crate::status::{self, Status, StatusFlags};

/// Value contributed by a joker of either color.
pub const JOKER_VALUE: u32 = 10;

/// Base value of Jacks, Queens, and Kings before status penalties.
pub const FACE_VALUE: u32 = 5;

/// A drawn card interpreted against a check label and status flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedCard {
    /// The drawn card.
    pub card: Card,
    /// Base display name, e.g. `"a Jack of Spades"`.
    pub name: String,
    /// Value the card contributes to the check, after penalties. Penalties
    /// clamp to exactly 0, never below.
    pub value: u32,
    /// Whether this card's suit matches the ability's governing suit.
    pub boosting: bool,
    /// Whether a penalty rule zeroed the value (the name renders struck).
    pub struck: bool,
    /// Status annotations accumulated in rule-table order.
    pub annotations: Vec<Status>,
}

impl std::fmt::Display for ResolvedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.struck {
            write!(f, "~~{}~~", self.name)?;
        } else {
            write!(f, "{}", self.name)?;
        }
        for status in &self.annotations {
            write!(f, " ({status})")?;
        }
        Ok(())
    }
}

/// Resolve a drawn card against a check label.
///
/// The ability suit is looked up first, so an unmapped label aborts the
/// check for every rank — jokers included, even though they never boost.
pub fn resolve_card(
    card: Card,
    label: &str,
    abilities: &AbilityMap,
    flags: StatusFlags,
) -> CheckResult<ResolvedCard> {
    let ability_suit = abilities.suit_for(label)?;

    let (value, boosting) = match card.rank {
        Rank::Joker => (JOKER_VALUE, false),
        Rank::Jack | Rank::Queen | Rank::King => (FACE_VALUE, card.suit == ability_suit),
        pip => (pip.value(), card.suit == ability_suit),
    };

    let mut resolved = ResolvedCard {
        name: card.article_name(),
        card,
        value,
        boosting,
        struck: false,
        annotations: Vec::new(),
    };
    status::apply_status(&mut resolved, label, flags);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use fatedeck_core::Suit;

    use super::*;
    use crate::error::CheckError;

    fn resolve(card: Card, label: &str, flags: StatusFlags) -> ResolvedCard {
        resolve_card(card, label, &AbilityMap::standard(), flags).unwrap()
    }

    #[test]
    fn joker_is_ten_and_never_boosts() {
        // "smarts" maps to Hearts; even a Hearts joker must not boost.
        let joker = Card::new(Suit::Hearts, Rank::Joker);
        let resolved = resolve(joker, "smarts", StatusFlags::none());
        assert_eq!(resolved.value, 10);
        assert!(!resolved.boosting);
        assert_eq!(resolved.name, "a Hearts JOKER");
    }

    #[test]
    fn face_cards_are_worth_five() {
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            let resolved = resolve(
                Card::new(Suit::Spades, rank),
                "dexterity",
                StatusFlags::none(),
            );
            assert_eq!(resolved.value, 5);
            assert!(resolved.boosting);
        }
    }

    #[test]
    fn ace_is_one_and_immune_to_penalties() {
        let ace = Card::new(Suit::Spades, Rank::Ace);
        let resolved = resolve(ace, "dexterity", StatusFlags::none().with_injured());
        assert_eq!(resolved.value, 1);
        assert!(resolved.boosting);
        assert!(!resolved.struck);
    }

    #[test]
    fn boosting_requires_suit_match() {
        let seven = Card::new(Suit::Hearts, Rank::Seven);
        assert!(resolve(seven, "smarts", StatusFlags::none()).boosting);
        assert!(!resolve(seven, "dexterity", StatusFlags::none()).boosting);
    }

    #[test]
    fn boosting_uses_prefix_fallback_for_compound_labels() {
        let jack = Card::new(Suit::Spades, Rank::Jack);
        let resolved = resolve(jack, "dexterity.stealth", StatusFlags::none());
        assert!(resolved.boosting);
    }

    #[test]
    fn injured_strikes_a_dexterity_face_card_but_keeps_the_boost() {
        let jack = Card::new(Suit::Spades, Rank::Jack);
        let resolved = resolve(jack, "dexterity", StatusFlags::none().with_injured());
        assert_eq!(resolved.value, 0);
        assert!(resolved.struck);
        assert!(resolved.boosting);
        assert_eq!(
            resolved.to_string(),
            "~~a Jack of Spades~~ (injured)"
        );
    }

    #[test]
    fn fatigued_strikes_smarts_and_charisma_faces_only() {
        let flags = StatusFlags::none().with_fatigued();
        let queen = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(resolve(queen, "smarts", flags).value, 0);
        assert_eq!(resolve(queen, "dexterity", flags).value, 5);

        let nine = Card::new(Suit::Hearts, Rank::Nine);
        assert_eq!(resolve(nine, "smarts", flags).value, 9);
    }

    #[test]
    fn taxed_strikes_assets_faces() {
        let king = Card::new(Suit::Diamonds, Rank::King);
        let resolved = resolve(king, "assets", StatusFlags::none().with_taxed());
        assert_eq!(resolved.value, 0);
        assert!(resolved.to_string().contains("(taxed)"));
    }

    #[test]
    fn injured_marks_compound_subskills_without_zeroing() {
        let jack = Card::new(Suit::Spades, Rank::Jack);
        let resolved = resolve(
            jack,
            "dexterity.stealth",
            StatusFlags::none().with_injured(),
        );
        assert_eq!(resolved.value, 5);
        assert!(!resolved.struck);
        assert_eq!(resolved.annotations, vec![Status::Injured]);
    }

    #[test]
    fn afraid_marks_any_rank_without_zeroing() {
        let four = Card::new(Suit::Clubs, Rank::Four);
        let resolved = resolve(four, "smarts", StatusFlags::none().with_afraid());
        assert_eq!(resolved.value, 4);
        assert!(!resolved.struck);
        assert_eq!(resolved.to_string(), "a 4 of Clubs (afraid)");
    }

    #[test]
    fn angry_marks_charisma_checks() {
        let two = Card::new(Suit::Diamonds, Rank::Two);
        let flags = StatusFlags::none().with_angry();
        assert_eq!(resolve(two, "charisma", flags).annotations, vec![Status::Angry]);
        assert!(resolve(two, "smarts", flags).annotations.is_empty());
    }

    #[test]
    fn annotations_accumulate_in_table_order() {
        let queen = Card::new(Suit::Diamonds, Rank::Queen);
        let flags = StatusFlags::none().with_fatigued().with_afraid().with_angry();
        let resolved = resolve(queen, "charisma", flags);
        assert_eq!(resolved.value, 0);
        assert_eq!(
            resolved.annotations,
            vec![Status::Fatigued, Status::Afraid, Status::Angry]
        );
        assert_eq!(
            resolved.to_string(),
            "~~a Queen of Diamonds~~ (fatigued) (afraid) (angry)"
        );
    }

    #[test]
    fn unmapped_ability_aborts_even_for_jokers() {
        let joker = Card::new(Suit::Spades, Rank::Joker);
        let result = resolve_card(
            joker,
            "sorcery",
            &AbilityMap::standard(),
            StatusFlags::none(),
        );
        assert!(matches!(result, Err(CheckError::UnmappedAbility(_))));
    }

    proptest! {
        #[test]
        fn pip_cards_resolve_to_their_pip_value(n in 2usize..=10) {
            let rank = Rank::standard()[n - 1];
            for &suit in Suit::all() {
                let card = Card::new(suit, rank);
                let resolved = resolve(card, "smarts", StatusFlags::none());
                prop_assert_eq!(resolved.value, n as u32);
                prop_assert_eq!(resolved.name, format!("a {n} of {suit}"));
            }
        }

        #[test]
        fn pip_values_survive_every_flag_combination(
            n in 2usize..=10,
            injured: bool,
            fatigued: bool,
            taxed: bool,
            afraid: bool,
            angry: bool,
        ) {
            let flags = StatusFlags { injured, fatigued, taxed, afraid, angry };
            let card = Card::new(Suit::Hearts, Rank::standard()[n - 1]);
            let resolved = resolve(card, "smarts", flags);
            // Only face cards are status-sensitive; pips keep their value.
            prop_assert_eq!(resolved.value, n as u32);
            prop_assert!(!resolved.struck);
        }
    }
}
