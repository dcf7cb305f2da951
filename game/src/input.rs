//! Blocking console input: number prompts that ask again until the
//! validators are satisfied, and y/n questions.
//!
//! Each decision is checked against a scratch copy of the ledger that
//! carries the round's earlier commitments, so the finished set can never
//! overdraw the granary — the engine revalidates, but nothing invalid
//! gets that far.

use anyhow::Result;
use hamurabi_core::{
    decision::{self, Decisions, LandAction},
    ledger::CityLedger,
    store::SaveEntry,
};
use std::io::{self, Write};

/// One trimmed line from stdin. EOF is an error; the city cannot govern
/// itself.
fn read_line() -> Result<String> {
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    anyhow::ensure!(read > 0, "input stream closed");
    Ok(line.trim().to_string())
}

fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    read_line()
}

/// Ask until the player gives a whole number. Anything at or below zero
/// counts as 0 — "none" is always a legal answer.
fn prompt_amount(text: &str) -> Result<u32> {
    loop {
        match prompt(text)?.parse::<i64>() {
            Ok(n) if n <= 0 => return Ok(0),
            Ok(n) if n <= i64::from(u32::MAX) => return Ok(n as u32),
            Ok(_) => println!("Sire, nobody counts that high."),
            Err(_) => println!("Sire, give me a number; I do not understand."),
        }
    }
}

/// A y/n question, asked until one or the other.
pub fn confirm(text: &str) -> Result<bool> {
    loop {
        match prompt(text)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Answer y or n, sire."),
        }
    }
}

/// Collect one round of orders against the freshly priced ledger.
pub fn collect_decisions(ledger: &CityLedger) -> Result<Decisions> {
    let mut scratch = ledger.clone();
    println!("Land is trading at {} bushels the acre.", scratch.acre_price);

    let land = land_action(&scratch)?;
    match land {
        LandAction::Buy(acres) => {
            scratch.wheat_reserves -= acres * scratch.acre_price;
            scratch.area += acres;
        }
        LandAction::Sell(acres) => {
            scratch.wheat_reserves += acres * scratch.acre_price;
            scratch.area -= acres;
        }
        LandAction::Hold => {}
    }

    let food = loop {
        let amount = prompt_amount("How many bushels shall the people eat? ")?;
        match decision::can_allocate_food(amount, &scratch) {
            Ok(()) => break amount,
            Err(reason) => println!("But sire, {reason}."),
        }
    };
    scratch.wheat_reserves -= food;

    let plant = loop {
        let acres = prompt_amount("How many acres shall we plant with seed? ")?;
        match decision::can_plant(acres, &scratch) {
            Ok(()) => break acres,
            Err(reason) => println!("But sire, {reason}."),
        }
    };

    Ok(Decisions { land, food, plant })
}

/// Buy first; only a ruler who buys nothing is offered the sale. Zero for
/// both means the land stands.
fn land_action(scratch: &CityLedger) -> Result<LandAction> {
    let bought = loop {
        let acres = prompt_amount("How many acres will you buy? ")?;
        if acres == 0 {
            break 0;
        }
        match decision::can_buy_land(acres, scratch) {
            Ok(()) => break acres,
            Err(reason) => println!("But sire, {reason}."),
        }
    };
    if bought > 0 {
        return Ok(LandAction::Buy(bought));
    }

    let sold = loop {
        let acres = prompt_amount("How many acres will you sell? ")?;
        if acres == 0 {
            break 0;
        }
        match decision::can_sell_land(acres, scratch) {
            Ok(()) => break acres,
            Err(reason) => println!("But sire, {reason}."),
        }
    };
    if sold > 0 {
        return Ok(LandAction::Sell(sold));
    }
    Ok(LandAction::Hold)
}

/// A non-empty name for the save slot.
pub fn save_name() -> Result<String> {
    loop {
        let name = prompt("Name this reign: ")?;
        if !name.is_empty() {
            return Ok(name);
        }
        println!("The scribes need a name, sire.");
    }
}

/// Pick a save by its list number or by its name; asks until one matches.
pub fn choose_save(saves: &[SaveEntry]) -> Result<String> {
    loop {
        let answer = prompt("Which reign? (number or name) ")?;
        if let Ok(index) = answer.parse::<usize>() {
            if index >= 1 && index <= saves.len() {
                return Ok(saves[index - 1].name.clone());
            }
            println!("There is no reign number {index}.");
            continue;
        }
        if let Some(entry) = saves.iter().find(|entry| entry.name == answer) {
            return Ok(entry.name.clone());
        }
        println!("No reign is called '{answer}'.");
    }
}
