//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two engines, same seed, same decisions.
//! They must live through byte-identical reigns.
//! Any divergence is a blocker — do not merge until fixed.

use hamurabi_core::{
    config,
    decision::{Decisions, LandAction},
    engine::GameEngine,
    snapshot::GameSnapshot,
};

/// A survival policy: feed everyone the granary can cover, then plant as
/// much as seed, hands, and land allow. Pure in the ledger, so two engines
/// in the same state always steer the same way.
fn steward(engine: &GameEngine) -> Decisions {
    let ledger = engine.ledger();
    let food = ledger
        .wheat_reserves
        .min(ledger.population * config::WHEAT_PER_PERSON);
    let left = ledger.wheat_reserves - food;
    let plant = ledger
        .area
        .min(ledger.population * config::ACRES_PER_PERSON)
        .min(left.saturating_mul(2));
    Decisions {
        land: LandAction::Hold,
        food,
        plant,
    }
}

/// Drive a reign to its end, snapshotting after every resolved year.
fn drive(mut engine: GameEngine) -> Vec<GameSnapshot> {
    let mut trail = Vec::new();
    while engine.status().is_ongoing() {
        engine.begin_round();
        let orders = steward(&engine);
        engine.resolve_round(&orders);
        trail.push(engine.snapshot());
        if engine.status().is_ongoing() {
            engine.advance_round();
        }
    }
    trail
}

fn run_reign(seed: u64) -> Vec<GameSnapshot> {
    drive(GameEngine::new(seed))
}

#[test]
fn same_seed_replays_an_identical_reign() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let trail_a = run_reign(SEED);
    let trail_b = run_reign(SEED);

    assert_eq!(
        trail_a.len(),
        trail_b.len(),
        "Reigns ended at different years: {} vs {}",
        trail_a.len(),
        trail_b.len()
    );
    for (i, (a, b)) in trail_a.iter().zip(trail_b.iter()).enumerate() {
        assert_eq!(
            a, b,
            "Reigns diverged at resolved year {}:\n  A: {a:?}\n  B: {b:?}",
            i + 1
        );
    }
}

#[test]
fn different_seeds_produce_different_reigns() {
    let trail_a = run_reign(42);
    let trail_b = run_reign(99);

    // Price, yield, and rat draws all feed the snapshots; two full reigns
    // coinciding across seeds would mean the seed is not reaching the rolls.
    assert_ne!(trail_a, trail_b, "Different seeds produced identical reigns");
}

#[test]
fn a_resumed_reign_is_deterministic_from_the_resume_point() {
    let mut original = GameEngine::new(7);
    for _ in 0..2 {
        if !original.status().is_ongoing() {
            break;
        }
        original.begin_round();
        let orders = steward(&original);
        original.resolve_round(&orders);
        if original.status().is_ongoing() {
            original.advance_round();
        }
    }
    let snap = original.snapshot();

    let trail_a = drive(GameEngine::from_snapshot(&snap, 31));
    let trail_b = drive(GameEngine::from_snapshot(&snap, 31));
    assert_eq!(trail_a, trail_b, "Resumed reigns with one seed must agree");
}
