//! Snapshot serialization — the full game state to and from one record.
//!
//! A snapshot captures everything needed to resume a reign mid-term:
//! the whole ledger plus the per-round starvation table. The struct is
//! kept flat, every field a primitive, and the field order is the save
//! order — collaborators that speak these fields can round-trip a game
//! exactly.

use crate::{
    config::MAX_ROUNDS,
    ledger::CityLedger,
    stats::ReignStats,
    types::{Acres, Bushels, People, Round},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round:               Round,
    pub dead_from_hunger:    People,
    pub new_people:          People,
    pub has_plague:          bool,
    pub population:          People,
    pub wheat_per_acre:      Bushels,
    pub workable_area:       Acres,
    pub wheat_eaten_by_rats: Bushels,
    pub wheat_reserves:      Bushels,
    pub wheat_consumed:      Bushels,
    pub area:                Acres,
    pub acre_price:          Bushels,
    pub starved_by_round:    [f64; MAX_ROUNDS as usize],
}

impl GameSnapshot {
    pub fn capture(ledger: &CityLedger, stats: &ReignStats) -> Self {
        Self {
            round:               ledger.round,
            dead_from_hunger:    ledger.dead_from_hunger,
            new_people:          ledger.new_people,
            has_plague:          ledger.has_plague,
            population:          ledger.population,
            wheat_per_acre:      ledger.wheat_per_acre,
            workable_area:       ledger.workable_area,
            wheat_eaten_by_rats: ledger.wheat_eaten_by_rats,
            wheat_reserves:      ledger.wheat_reserves,
            wheat_consumed:      ledger.wheat_consumed,
            area:                ledger.area,
            acre_price:          ledger.acre_price,
            starved_by_round:    *stats.by_round(),
        }
    }

    pub fn restore(&self) -> (CityLedger, ReignStats) {
        let ledger = CityLedger {
            population:          self.population,
            area:                self.area,
            wheat_reserves:      self.wheat_reserves,
            round:               self.round,
            acre_price:          self.acre_price,
            workable_area:       self.workable_area,
            wheat_per_acre:      self.wheat_per_acre,
            wheat_consumed:      self.wheat_consumed,
            dead_from_hunger:    self.dead_from_hunger,
            new_people:          self.new_people,
            wheat_eaten_by_rats: self.wheat_eaten_by_rats,
            has_plague:          self.has_plague,
        };
        (ledger, ReignStats::from_rounds(self.starved_by_round))
    }
}
