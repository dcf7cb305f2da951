//! Deterministic random number generation.
//!
//! RULE: Nothing in the game may call any platform RNG. The engine owns
//! exactly one randomness source, seeded once per reign, and every draw
//! goes through it in a fixed per-round order:
//!   acre price, harvest yield, rat share, plague roll — once each.
//!
//! Same seed, same decisions, same reign.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::collections::VecDeque;

/// The randomness the resolver consumes, behind one seam so tests can
/// script exact draw sequences.
pub trait Fortune {
    /// Uniform integer draw over the inclusive range `[lo, hi]`.
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform float draw over `[0.0, max)`.
    fn roll_fraction(&mut self, max: f64) -> f64;
}

/// The production source: one PCG stream per reign.
pub struct GameRng {
    inner: Pcg64Mcg,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// A float in [0.0, 1.0) built from the high 53 bits of one draw.
    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl Fortune for GameRng {
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32 {
        use rand::RngCore;
        assert!(lo <= hi, "roll_range bounds reversed");
        let span = u64::from(hi - lo) + 1;
        lo + (self.inner.next_u64() % span) as u32
    }

    fn roll_fraction(&mut self, max: f64) -> f64 {
        self.next_f64() * max
    }
}

/// A fixed-sequence source for tests and tooling. Draws come back in push
/// order; running a queue dry is a scripting mistake and panics.
#[derive(Debug, Default)]
pub struct ScriptedFortune {
    rolls:     VecDeque<u32>,
    fractions: VecDeque<f64>,
}

impl ScriptedFortune {
    /// `rolls` feeds `roll_range` (price, yield, plague); `fractions`
    /// feeds `roll_fraction` (the rat share).
    pub fn new(
        rolls: impl IntoIterator<Item = u32>,
        fractions: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            rolls:     rolls.into_iter().collect(),
            fractions: fractions.into_iter().collect(),
        }
    }
}

impl Fortune for ScriptedFortune {
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32 {
        let roll = self
            .rolls
            .pop_front()
            .expect("scripted integer rolls ran dry");
        debug_assert!(
            lo <= roll && roll <= hi,
            "scripted roll {roll} outside [{lo}, {hi}]"
        );
        roll
    }

    fn roll_fraction(&mut self, max: f64) -> f64 {
        let fraction = self
            .fractions
            .pop_front()
            .expect("scripted fractions ran dry");
        debug_assert!(
            (0.0..=max).contains(&fraction),
            "scripted fraction {fraction} outside [0.0, {max}]"
        );
        fraction
    }
}
