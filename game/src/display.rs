//! Everything the player reads. Render-only: this module takes the ledger
//! and statistics by reference and never changes a number.

use hamurabi_core::{
    ledger::CityLedger,
    outcome::{self, Rating},
    stats::ReignStats,
    store::SaveEntry,
};

const BANNER: &str = "\
═══════════════════════════════════════════════════════\n\
                 H A M U R A B I\n\
        ten years at the head of the city state\n\
═══════════════════════════════════════════════════════\n\
Buy and sell land, feed your people, plant the fields.\n\
Your advisor reports each spring. Rule wisely.";

pub fn banner() {
    println!("{BANNER}");
}

/// The advisor's spring report. Quotes last year's deltas, so it must be
/// printed before the new round resets them; the fresh land price is
/// announced afterwards, with the decision prompts.
pub fn annual_report(ledger: &CityLedger) {
    println!();
    println!("Sire, I beg to report: it is year {} of your rule.", ledger.round);
    if ledger.has_plague {
        println!("A horrible plague swept the city. Half of us are gone.");
    }
    if ledger.dead_from_hunger > 0 {
        println!("{} people starved over the winter.", ledger.dead_from_hunger);
    }
    if ledger.new_people > 0 {
        println!("{} people came to the city this year.", ledger.new_people);
    }
    println!("The city now numbers {} souls.", ledger.population);
    println!(
        "We harvested {} bushels, at {} bushels the acre.",
        ledger.harvested(),
        ledger.wheat_per_acre
    );
    if ledger.wheat_eaten_by_rats > 0 {
        println!("Rats ate {} bushels.", ledger.wheat_eaten_by_rats);
    }
    println!(
        "The granary holds {} bushels, and the city owns {} acres.",
        ledger.wheat_reserves, ledger.area
    );
}

pub fn starved_out(ledger: &CityLedger) {
    println!();
    println!(
        "You starved {} people in a single year. The survivors have",
        ledger.dead_from_hunger
    );
    println!("driven you from the city, and your name is spoken as a curse.");
}

pub fn final_rating(ledger: &CityLedger, stats: &ReignStats, rating: Rating) {
    println!();
    println!("Your ten-year term is done, sire.");
    println!(
        "In an average year {:.1}% of the city starved; you leave {} acres to each citizen.",
        stats.mean_starvation() * 100.0,
        outcome::acres_per_person(ledger.area, ledger.population)
    );
    println!();
    match rating {
        Rating::Poor => {
            println!("The people have revolted and run you out of town. You will");
            println!("spend your remaining years scratching a living in exile.");
        }
        Rating::Fair => {
            println!("You ruled with an iron hand, like Nero and Ivan the Terrible.");
            println!("The people breathe a sigh of relief, and nobody wishes to");
            println!("see you govern again.");
        }
        Rating::Good => {
            println!("You did well enough. Some speak against you, but many would");
            println!("gladly see you at the head of the city once more.");
        }
        Rating::Excellent => {
            println!("Fantastic! Charlemagne, Disraeli, and Jefferson together");
            println!("could not have done better.");
        }
    }
}

pub fn save_list(saves: &[SaveEntry]) {
    println!("Saved reigns:");
    for (i, entry) in saves.iter().enumerate() {
        println!("  {}: {}  ({})", i + 1, entry.name, entry.saved_at);
    }
}
