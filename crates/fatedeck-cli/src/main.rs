//! Terminal frontend for the Fatedeck check engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use fatedeck_mechanics::StatusFlags;

#[derive(Parser)]
#[command(
    name = "fatedeck",
    about = "Fatedeck — card-draw skill checks for the table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a skill check against a fresh 54-card deck
    Check {
        /// Ability label to test (e.g. dexterity, smarts, dexterity.stealth)
        ability: String,

        /// RNG seed for a reproducible deck
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Character name used as the message speaker
        #[arg(short, long, default_value = "Wanderer")]
        name: String,

        /// Injured: strikes dexterity and fitness face cards
        #[arg(long)]
        injured: bool,

        /// Fatigued: strikes smarts and charisma face cards
        #[arg(long)]
        fatigued: bool,

        /// Taxed: strikes assets face cards
        #[arg(long)]
        taxed: bool,

        /// Afraid: marks every check without touching values
        #[arg(long)]
        afraid: bool,

        /// Angry: marks charisma checks without touching values
        #[arg(long)]
        angry: bool,

        /// Emit the composed message as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw cards from a seeded deck and show their names
    Draw {
        /// How many cards to draw
        #[arg(short, long, default_value = "5")]
        count: u32,

        /// RNG seed for a reproducible deck
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Print the standard ability-to-suit table
    Abilities,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            ability,
            seed,
            name,
            injured,
            fatigued,
            taxed,
            afraid,
            angry,
            json,
        } => {
            let status = StatusFlags {
                injured,
                fatigued,
                taxed,
                afraid,
                angry,
            };
            commands::check(&ability, seed, &name, status, json)
        }
        Commands::Draw { count, seed } => commands::draw(count, seed),
        Commands::Abilities => commands::abilities(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
