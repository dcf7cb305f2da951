//! Per-round starvation statistics, the raw material for the final rating.

use crate::{config::MAX_ROUNDS, types::Round};

/// One starvation ratio per round of the reign, indexed 1-based.
///
/// The engine's starvation phase writes each slot exactly once. Rounds that
/// never resolved stay at 0.0 and still count toward the mean, so a short
/// reign is scored as if its missing years were flawless.
#[derive(Debug, Clone, PartialEq)]
pub struct ReignStats {
    starved: [f64; MAX_ROUNDS as usize],
}

impl Default for ReignStats {
    fn default() -> Self {
        Self {
            starved: [0.0; MAX_ROUNDS as usize],
        }
    }
}

impl ReignStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a persisted ratio table.
    pub fn from_rounds(starved: [f64; MAX_ROUNDS as usize]) -> Self {
        Self { starved }
    }

    /// Record `ratio` for the 1-based `round`. Out-of-range rounds are
    /// ignored rather than panicking.
    pub fn record(&mut self, round: Round, ratio: f64) {
        if round > 0 && round <= MAX_ROUNDS {
            self.starved[(round - 1) as usize] = ratio;
        }
    }

    /// The ratio recorded for the 1-based `round`; 0.0 out of range.
    pub fn ratio_for(&self, round: Round) -> f64 {
        if round > 0 && round <= MAX_ROUNDS {
            self.starved[(round - 1) as usize]
        } else {
            0.0
        }
    }

    /// Mean starvation over the full term, always divided by
    /// [`MAX_ROUNDS`] regardless of how many rounds actually resolved.
    pub fn mean_starvation(&self) -> f64 {
        self.starved.iter().sum::<f64>() / f64::from(MAX_ROUNDS)
    }

    /// The whole ratio table in round order, for persistence.
    pub fn by_round(&self) -> &[f64; MAX_ROUNDS as usize] {
        &self.starved
    }
}
