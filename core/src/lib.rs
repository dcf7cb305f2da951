//! hamurabi-core — rules, round engine, and persistence for a turn-based
//! city-resource game: ten years at the head of a city state, allocating
//! land, food, and seed while the harvest, the rats, the hungry, and the
//! plague resolve in a fixed order every round.
//!
//! The playable console front end lives in the `hamurabi` binary crate.
//! This library owns everything with rules in it and nothing that prints.

pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod outcome;
pub mod rng;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod types;
