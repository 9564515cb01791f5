//! Subcommand implementations.

use colored::Colorize;

use fatedeck_core::{CardSource, Deck};
use fatedeck_mechanics::{AbilityMap, CharacterSheet, StatusFlags, compose};

/// Run one skill check and print (or emit as JSON) the composed message.
pub fn check(
    ability: &str,
    seed: u64,
    name: &str,
    status: StatusFlags,
    json: bool,
) -> Result<(), String> {
    let mut deck = Deck::standard54(seed);
    let mut sheet = CharacterSheet::new(name);
    sheet.status = status;

    let outcome = sheet.check(&mut deck, ability).map_err(|e| e.to_string())?;
    let message = compose(&sheet, &outcome);

    if json {
        let rendered = serde_json::to_string_pretty(&message).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    for line in message.flavor.lines() {
        match line.strip_prefix("Boosted") {
            Some(rest) => println!("{}{rest}", "Boosted".red().bold()),
            None => println!("{line}"),
        }
    }
    println!();
    println!(
        "  {} {} | formula: {}",
        "Draw value:".bold(),
        message.draw_value,
        message.formula
    );
    Ok(())
}

/// Draw `count` cards from a seeded deck and print their names.
pub fn draw(count: u32, seed: u64) -> Result<(), String> {
    let mut deck = Deck::standard54(seed);
    for _ in 0..count {
        let id = deck.draw().map_err(|e| e.to_string())?;
        let card = deck.card(id).map_err(|e| e.to_string())?;
        println!("Drew {}", card.article_name());
    }
    Ok(())
}

/// Print the standard ability-to-suit table, sorted by label.
pub fn abilities() -> Result<(), String> {
    let map = AbilityMap::standard();
    let mut rows: Vec<(String, String)> = map
        .iter()
        .map(|(label, suit)| (label.to_string(), suit.to_string()))
        .collect();
    rows.sort();
    for (label, suit) in rows {
        println!("{label:<12} {suit}");
    }
    Ok(())
}
