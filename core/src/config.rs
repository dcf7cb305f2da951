//! The rule table — every fixed number the game plays by.
//!
//! These are plain constants rather than a loaded config: the rules of
//! the game never vary between runs, only the seed does.

use crate::types::{Acres, Bushels, People, Round};

// ── Fresh-game state ───────────────────────────────────────────

pub const STARTING_POPULATION: People = 100;
pub const STARTING_AREA: Acres = 1000;
pub const STARTING_WHEAT: Bushels = 2800;
/// Quoted as last year's figure in the first annual report.
pub const STARTING_WHEAT_CONSUMED: Bushels = 2000;
pub const STARTING_WHEAT_PER_ACRE: Bushels = 5;

// ── Reign length ───────────────────────────────────────────────

pub const MAX_ROUNDS: Round = 10;

// ── Feeding and farming ────────────────────────────────────────

/// Bushels one person eats in a year.
pub const WHEAT_PER_PERSON: Bushels = 20;
/// Acres one person can tend.
pub const ACRES_PER_PERSON: Acres = 10;
/// Seed per planted acre; the total seed bill truncates to whole bushels.
pub const SEEDS_PER_ACRE: f64 = 0.5;

// ── Market and harvest ranges (inclusive) ──────────────────────

pub const MIN_ACRE_PRICE: Bushels = 17;
pub const MAX_ACRE_PRICE: Bushels = 26;
pub const MIN_WHEAT_PER_ACRE: Bushels = 1;
pub const MAX_WHEAT_PER_ACRE: Bushels = 6;

// ── Calamities ─────────────────────────────────────────────────

/// Upper bound of the uniform share of reserves rats can eat.
pub const RAT_EAT_MAX_FRACTION: f64 = 0.07;
/// Chance of plague per round, in percent.
pub const PLAGUE_CHANCE_PERCENT: u32 = 15;
/// Starving this share of the city in one year ends the reign.
pub const MAX_STARVED_FRACTION: f64 = 0.45;
/// Cap on immigration in a single year.
pub const MAX_NEW_PEOPLE: People = 50;

// ── Rating tiers, worst first. A tier claims the reign only when
//    BOTH its bounds hold; otherwise evaluation falls through. ──

pub const POOR_STARVATION_ABOVE: f64 = 0.33;
pub const POOR_ACRES_BELOW: Acres = 7;
pub const FAIR_STARVATION_ABOVE: f64 = 0.10;
pub const FAIR_ACRES_BELOW: Acres = 9;
pub const GOOD_STARVATION_ABOVE: f64 = 0.03;
pub const GOOD_ACRES_BELOW: Acres = 10;
