//! Win, loss, and the end-of-reign rating.

use crate::{
    config,
    stats::ReignStats,
    types::{Acres, People, Round},
};

/// The two-state game machine. `Finished` is terminal: no round may begin,
/// resolve, or advance past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished(GameEnd),
}

impl GameStatus {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, GameStatus::Ongoing)
    }
}

/// Why a reign ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Too many starved in one year and the city rose up. A loss.
    StarvedOut,
    /// The full term was served; the reign gets a rating.
    TermComplete,
    /// The player stopped to save. Not a loss, not rated.
    SaveAndExit,
}

/// The four rating tiers, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Loss check, run once per round after the starvation phase has recorded
/// its ratio. At or over the threshold ends the reign.
pub fn starved_out(stats: &ReignStats, round: Round) -> bool {
    stats.ratio_for(round) >= config::MAX_STARVED_FRACTION
}

/// Win check, run after the round counter increments.
pub fn term_complete(round: Round) -> bool {
    round >= config::MAX_ROUNDS
}

/// Whole acres per person; 0 for an empty city.
pub fn acres_per_person(area: Acres, population: People) -> Acres {
    if population == 0 {
        0
    } else {
        area / population
    }
}

/// Classify the reign. Tiers are checked worst to best and the first whose
/// starvation AND land bounds both hold claims it; failing either bound
/// falls through to the next, so anything clearing all three bars lands on
/// Excellent.
pub fn rating(stats: &ReignStats, area: Acres, population: People) -> Rating {
    let starved = stats.mean_starvation();
    let per_person = acres_per_person(area, population);

    if starved > config::POOR_STARVATION_ABOVE && per_person < config::POOR_ACRES_BELOW {
        Rating::Poor
    } else if starved > config::FAIR_STARVATION_ABOVE && per_person < config::FAIR_ACRES_BELOW {
        Rating::Fair
    } else if starved > config::GOOD_STARVATION_ABOVE && per_person < config::GOOD_ACRES_BELOW {
        Rating::Good
    } else {
        Rating::Excellent
    }
}
