//! The city ledger — the mutable resource state of one reign.

use crate::{
    config,
    types::{Acres, Bushels, People, Round},
};

/// Everything the city owns plus everything that happened to it this round.
///
/// One instance lives for the whole game and is mutated in place by the
/// engine. `dead_from_hunger`, `new_people`, `wheat_eaten_by_rats` and
/// `has_plague` are per-round deltas: they hold last round's values until
/// the next round-start reset, so the annual report can quote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityLedger {
    pub population: People,
    pub area:       Acres,

    /// Bushels in the granary.
    pub wheat_reserves: Bushels,

    /// 1-based round counter, bounded by [`config::MAX_ROUNDS`].
    pub round: Round,
    /// This round's price of an acre, resampled at round start.
    pub acre_price: Bushels,

    /// Acres actually planted this round, never above `area`.
    pub workable_area: Acres,
    /// This round's yield per planted acre.
    pub wheat_per_acre: Bushels,
    /// Bushels put on the table as food this round.
    pub wheat_consumed: Bushels,

    pub dead_from_hunger:    People,
    pub new_people:          People,
    pub wheat_eaten_by_rats: Bushels,
    pub has_plague:          bool,
}

impl Default for CityLedger {
    fn default() -> Self {
        Self {
            population:          config::STARTING_POPULATION,
            area:                config::STARTING_AREA,
            wheat_reserves:      config::STARTING_WHEAT,
            round:               1,
            acre_price:          0,
            workable_area:       0,
            wheat_per_acre:      config::STARTING_WHEAT_PER_ACRE,
            wheat_consumed:      config::STARTING_WHEAT_CONSUMED,
            dead_from_hunger:    0,
            new_people:          0,
            wheat_eaten_by_rats: 0,
            has_plague:          false,
        }
    }
}

impl CityLedger {
    /// A city on day one of a new reign.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bushels brought in by this round's harvest.
    pub fn harvested(&self) -> Bushels {
        self.workable_area * self.wheat_per_acre
    }
}
