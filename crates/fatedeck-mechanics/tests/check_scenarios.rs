//! End-to-end check scenarios over scripted and real decks.

use std::collections::{HashMap, VecDeque};

use fatedeck_core::{Card, CardId, CardSource, CoreResult, Deck, DeckError, Rank, Suit};
use fatedeck_mechanics::{
    AbilityMap, CharacterSheet, StatusFlags, compose, flavor_text, perform_check,
};

/// A card source that replays a fixed draw script.
struct ScriptedSource {
    cards: HashMap<CardId, Card>,
    queue: VecDeque<CardId>,
}

impl ScriptedSource {
    fn new(script: &[Card]) -> Self {
        Self {
            cards: script.iter().map(|c| (c.id, *c)).collect(),
            queue: script.iter().map(|c| c.id).collect(),
        }
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self) -> CoreResult<CardId> {
        self.queue.pop_front().ok_or(DeckError::Exhausted)
    }

    fn card(&self, id: CardId) -> CoreResult<Card> {
        self.cards.get(&id).copied().ok_or(DeckError::UnknownCard(id))
    }
}

#[test]
fn injured_dexterity_jack_boosted_by_a_seven() {
    // Jack of Spades on dexterity (Spades) while injured: the face card is
    // struck to zero but still boosts, so the 7 of Hearts carries the check.
    let jack = Card::new(Suit::Spades, Rank::Jack);
    let seven = Card::new(Suit::Hearts, Rank::Seven);
    let mut source = ScriptedSource::new(&[jack, seven]);

    let outcome = perform_check(
        &mut source,
        &AbilityMap::standard(),
        StatusFlags::none().with_injured(),
        "dexterity",
    )
    .unwrap();

    assert!(outcome.is_boosting());
    assert_eq!(outcome.primary.value, 0);
    assert!(outcome.primary.to_string().contains("(injured)"));
    assert_eq!(outcome.value, 7);
}

#[test]
fn smarts_queen_boosted_by_an_off_suit_ace() {
    let queen = Card::new(Suit::Hearts, Rank::Queen);
    let ace = Card::new(Suit::Clubs, Rank::Ace);
    let mut source = ScriptedSource::new(&[queen, ace]);

    let outcome = perform_check(
        &mut source,
        &AbilityMap::standard(),
        StatusFlags::none(),
        "smarts",
    )
    .unwrap();

    assert!(outcome.is_boosting());
    assert_eq!(outcome.primary.value, 5);
    let boost = outcome.boost.as_ref().unwrap();
    assert!(!boost.boosting, "Clubs does not govern smarts");
    assert_eq!(boost.value, 1);
    assert_eq!(outcome.value, 6);
}

#[test]
fn a_card_is_never_combined_with_itself() {
    let ten = Card::new(Suit::Spades, Rank::Ten);
    let four = Card::new(Suit::Diamonds, Rank::Four);
    // The duplicate attempt is discarded wholesale before the clean one.
    let mut source = ScriptedSource::new(&[ten, ten, ten, four]);

    let outcome = perform_check(
        &mut source,
        &AbilityMap::standard(),
        StatusFlags::none(),
        "dexterity",
    )
    .unwrap();

    assert_eq!(outcome.value, 14);
    assert_ne!(outcome.primary.card.id, outcome.boost.unwrap().card.id);
}

#[test]
fn checks_against_a_real_deck_are_reproducible() {
    let sheet = CharacterSheet::new("Mira");

    let mut first_deck = Deck::standard54(99);
    let mut second_deck = Deck::standard54(99);
    let first = sheet.check(&mut first_deck, "fitness").unwrap();
    let second = sheet.check(&mut second_deck, "fitness").unwrap();

    assert_eq!(first.value, second.value);
    assert_eq!(flavor_text(&first), flavor_text(&second));
}

#[test]
fn composed_message_carries_the_draw_value() {
    let sheet = CharacterSheet::new("Mira");
    let mut deck = Deck::standard54(7);
    let outcome = sheet.check(&mut deck, "charisma").unwrap();
    let message = compose(&sheet, &outcome);

    assert_eq!(message.speaker, "Mira");
    assert_eq!(message.draw_value, outcome.value);
    assert!(message.flavor.starts_with("Charisma skill check..."));
}

#[test]
fn a_long_run_of_checks_never_exhausts_a_standard_deck() {
    // 200 checks = at least 400 draws, several reshuffles deep.
    let sheet = CharacterSheet::new("Mira");
    let mut deck = Deck::standard54(5);
    for _ in 0..200 {
        let outcome = sheet.check(&mut deck, "smarts").unwrap();
        assert!(outcome.value <= 26, "two kings plus slack is the ceiling");
    }
}
