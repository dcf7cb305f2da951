//! hamurabi — the playable console game.
//!
//! Usage:
//!   hamurabi                   play, seeded from the clock
//!   hamurabi --seed 42         fixed seed, reproducible reign
//!   hamurabi --db my_saves.db  where suspended reigns are kept

mod display;
mod input;

use anyhow::Result;
use hamurabi_core::{
    engine::GameEngine,
    outcome::{GameEnd, GameStatus},
    store::SaveStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", epoch_seconds());
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or("hamurabi_saves.db");

    let store = SaveStore::open(db)?;
    store.migrate()?;
    log::info!("save store open at {db}, seed {seed}");

    display::banner();

    let mut reign_seed = seed;
    loop {
        let engine = start_engine(&store, reign_seed)?;
        play(engine, &store)?;
        if !input::confirm("Will you rule again? [y/n] ")? {
            println!("So ends the dynasty.");
            break;
        }
        // A fresh stream per reign, still reproducible from --seed.
        reign_seed = reign_seed.wrapping_add(1);
    }
    Ok(())
}

/// A fresh reign, or one resumed from the save store if the player asks.
fn start_engine(store: &SaveStore, seed: u64) -> Result<GameEngine> {
    if store.has_saves()? && input::confirm("Continue a saved reign? [y/n] ")? {
        let saves = store.list_saves()?;
        display::save_list(&saves);
        let name = input::choose_save(&saves)?;
        match store.load_game(&name) {
            Ok(snapshot) => {
                log::info!("resumed '{name}' at year {}", snapshot.round);
                println!("Welcome back, sire. Year {} awaits.", snapshot.round);
                return Ok(GameEngine::from_snapshot(&snapshot, seed));
            }
            Err(err) => {
                log::warn!("could not load '{name}': {err}");
                println!("That save could not be read; a new reign begins.");
            }
        }
    }
    Ok(GameEngine::new(seed))
}

/// One reign, year by year, to a terminal state.
fn play(mut engine: GameEngine, store: &SaveStore) -> Result<()> {
    loop {
        display::annual_report(engine.ledger());
        engine.begin_round();
        let orders = input::collect_decisions(engine.ledger())?;
        engine.resolve_round(&orders);

        if engine.status() == GameStatus::Finished(GameEnd::StarvedOut) {
            display::starved_out(engine.ledger());
            return Ok(());
        }

        if input::confirm("Stop here and save the reign? [y/n] ")? {
            let name = input::save_name()?;
            store.save_game(&name, &engine.snapshot())?;
            engine.suspend();
            println!("Saved as '{name}'. Rest well, sire.");
            return Ok(());
        }

        engine.advance_round();
        if engine.status() == GameStatus::Finished(GameEnd::TermComplete) {
            display::final_rating(engine.ledger(), engine.stats(), engine.rating());
            return Ok(());
        }
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn epoch_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
