//! Player decisions and the validator predicates that guard them.
//!
//! RULES:
//!   - Predicates are pure and advisory. They never touch the ledger, and
//!     the same ledger plus the same amount always returns the same verdict.
//!   - A rejected amount is a re-prompt for the player, never an engine
//!     fault. The engine only ever sees decisions that already passed.
//!   - Costs are computed in u64 so absurd requests get a calm refusal
//!     instead of an overflow.

use crate::{
    config,
    ledger::CityLedger,
    types::{Acres, Bushels, People},
};
use thiserror::Error;

/// What the ruler does with land this round. At most one trade per round;
/// the tagged variant makes "never both buy and sell" structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandAction {
    Hold,
    Buy(Acres),
    Sell(Acres),
}

/// One round's worth of orders. Built up prompt by prompt, handed to the
/// engine exactly once, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decisions {
    pub land:  LandAction,
    /// Bushels put on the table as food.
    pub food:  Bushels,
    /// Acres to plant with seed.
    pub plant: Acres,
}

/// Why a proposed amount cannot be honored. The display text is exactly
/// what the player reads before being asked again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionError {
    #[error("the granary holds {have} bushels but that order needs {need}")]
    NotEnoughWheat { need: u64, have: Bushels },

    #[error("the city owns {have} acres but that order needs {want}")]
    NotEnoughLand { want: Acres, have: Acres },

    #[error("{population} people can tend at most {limit} acres")]
    NotEnoughWorkers { population: People, limit: u64 },
}

/// Seed for `acres`, truncated to whole bushels. The half bushel on an odd
/// acre count is never charged.
pub fn seed_cost(acres: Acres) -> Bushels {
    (f64::from(acres) * config::SEEDS_PER_ACRE) as Bushels
}

/// Can the city afford `amount` acres at this round's price?
pub fn can_buy_land(amount: Acres, ledger: &CityLedger) -> Result<(), DecisionError> {
    let need = u64::from(amount) * u64::from(ledger.acre_price);
    if need > u64::from(ledger.wheat_reserves) {
        return Err(DecisionError::NotEnoughWheat {
            need,
            have: ledger.wheat_reserves,
        });
    }
    Ok(())
}

/// Does the city own `amount` acres to sell?
pub fn can_sell_land(amount: Acres, ledger: &CityLedger) -> Result<(), DecisionError> {
    if amount > ledger.area {
        return Err(DecisionError::NotEnoughLand {
            want: amount,
            have: ledger.area,
        });
    }
    Ok(())
}

/// Is there `amount` of wheat on hand to put on the table?
pub fn can_allocate_food(amount: Bushels, ledger: &CityLedger) -> Result<(), DecisionError> {
    if amount > ledger.wheat_reserves {
        return Err(DecisionError::NotEnoughWheat {
            need: u64::from(amount),
            have: ledger.wheat_reserves,
        });
    }
    Ok(())
}

/// Can `acres` be planted: enough seed, enough hands, enough land?
/// Checked in that order; the first shortfall is the one reported.
pub fn can_plant(acres: Acres, ledger: &CityLedger) -> Result<(), DecisionError> {
    let seed = seed_cost(acres);
    if seed > ledger.wheat_reserves {
        return Err(DecisionError::NotEnoughWheat {
            need: u64::from(seed),
            have: ledger.wheat_reserves,
        });
    }
    let limit = u64::from(ledger.population) * u64::from(config::ACRES_PER_PERSON);
    if u64::from(acres) > limit {
        return Err(DecisionError::NotEnoughWorkers {
            population: ledger.population,
            limit,
        });
    }
    if acres > ledger.area {
        return Err(DecisionError::NotEnoughLand {
            want: acres,
            have: ledger.area,
        });
    }
    Ok(())
}

impl Decisions {
    /// Check the whole set by replaying it against a scratch copy of the
    /// ledger in the order the engine commits it: land trade, then food,
    /// then seed. A set whose parts each pass alone can still overdraw the
    /// granary in combination; this is the verdict the engine trusts.
    pub fn validate(&self, ledger: &CityLedger) -> Result<(), DecisionError> {
        let mut scratch = ledger.clone();
        match self.land {
            LandAction::Hold => {}
            LandAction::Buy(acres) => {
                can_buy_land(acres, &scratch)?;
                scratch.wheat_reserves -= acres * scratch.acre_price;
                scratch.area += acres;
            }
            LandAction::Sell(acres) => {
                can_sell_land(acres, &scratch)?;
                scratch.wheat_reserves += acres * scratch.acre_price;
                scratch.area -= acres;
            }
        }
        can_allocate_food(self.food, &scratch)?;
        scratch.wheat_reserves -= self.food;
        can_plant(self.plant, &scratch)?;
        Ok(())
    }
}
