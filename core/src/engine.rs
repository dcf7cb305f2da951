//! The round engine — the heart of the game.
//!
//! RESOLUTION ORDER (fixed, documented, never reordered):
//!   1. Round-start reset + acre price   (begin_round)
//!   2. Apply the player's decisions
//!   3. Harvest
//!   4. Rats
//!   5. Starvation   (writes the round's statistic)
//!   6. Migration
//!   7. Plague
//! then the loss check; the round counter moves in advance_round.
//!
//! RULES:
//!   - Each phase reads only what earlier phases of the same round wrote.
//!   - All randomness flows through the engine's one Fortune source, in a
//!     fixed draw order: acre price, yield, rat share, plague roll.
//!   - Decisions reaching resolve_round have already been validated; the
//!     engine has no failure outcomes of its own.

use crate::{
    config,
    decision::{seed_cost, Decisions, LandAction},
    ledger::CityLedger,
    outcome::{self, GameEnd, GameStatus, Rating},
    rng::{Fortune, GameRng},
    snapshot::GameSnapshot,
    stats::ReignStats,
    types::{Bushels, People},
};

pub struct GameEngine {
    ledger: CityLedger,
    stats:  ReignStats,
    status: GameStatus,
    rng:    Box<dyn Fortune>,
}

impl GameEngine {
    /// A fresh reign with the production RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_fortune(Box::new(GameRng::seeded(seed)))
    }

    /// A fresh reign drawing from the given source. Tests use this with a
    /// ScriptedFortune to pin every draw.
    pub fn with_fortune(rng: Box<dyn Fortune>) -> Self {
        Self {
            ledger: CityLedger::new(),
            stats:  ReignStats::new(),
            status: GameStatus::Ongoing,
            rng,
        }
    }

    /// Resume a persisted reign. The RNG starts a fresh stream; a resumed
    /// game is deterministic from here, not a replay of the old one.
    pub fn from_snapshot(snapshot: &GameSnapshot, seed: u64) -> Self {
        let mut engine = Self::new(seed);
        engine.restore(snapshot);
        engine
    }

    /// Adopt a persisted state wholesale; the reign continues from it.
    pub fn restore(&mut self, snapshot: &GameSnapshot) {
        let (ledger, stats) = snapshot.restore();
        self.ledger = ledger;
        self.stats = stats;
        self.status = GameStatus::Ongoing;
    }

    pub fn ledger(&self) -> &CityLedger {
        &self.ledger
    }

    pub fn stats(&self) -> &ReignStats {
        &self.stats
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The full persistable state at this moment.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.ledger, &self.stats)
    }

    /// End-of-reign rating for the current ledger and statistics.
    pub fn rating(&self) -> Rating {
        outcome::rating(&self.stats, self.ledger.area, self.ledger.population)
    }

    /// Phase 1: wipe last round's deltas and quote this round's land
    /// price. Decisions are collected after this, against the freshly
    /// priced ledger.
    pub fn begin_round(&mut self) {
        assert!(self.status.is_ongoing(), "begin_round on a finished game");

        self.ledger.dead_from_hunger = 0;
        self.ledger.new_people = 0;
        self.ledger.wheat_eaten_by_rats = 0;
        self.ledger.has_plague = false;
        self.ledger.acre_price = self
            .rng
            .roll_range(config::MIN_ACRE_PRICE, config::MAX_ACRE_PRICE);

        log::debug!(
            "round {} open: acre price {}",
            self.ledger.round,
            self.ledger.acre_price
        );
    }

    /// Phases 2 through 7 plus the loss check. `decisions` must already
    /// have passed [`Decisions::validate`] against the current ledger.
    pub fn resolve_round(&mut self, decisions: &Decisions) {
        assert!(self.status.is_ongoing(), "resolve_round on a finished game");
        if let Err(reason) = decisions.validate(&self.ledger) {
            panic!("unvalidated decisions reached the resolver: {reason}");
        }

        self.apply_decisions(decisions);
        self.harvest();
        self.rats();
        self.starvation();
        self.migration();
        self.plague();

        log::debug!(
            "round {} resolved: pop {} (+{} -{}), wheat {}, plague {}",
            self.ledger.round,
            self.ledger.population,
            self.ledger.new_people,
            self.ledger.dead_from_hunger,
            self.ledger.wheat_reserves,
            self.ledger.has_plague,
        );

        if outcome::starved_out(&self.stats, self.ledger.round) {
            self.status = GameStatus::Finished(GameEnd::StarvedOut);
        }
    }

    /// Step to the next round, or finish the reign once the term is
    /// served. The save prompt sits between resolve_round and this call.
    pub fn advance_round(&mut self) {
        assert!(self.status.is_ongoing(), "advance_round on a finished game");

        self.ledger.round += 1;
        if outcome::term_complete(self.ledger.round) {
            self.status = GameStatus::Finished(GameEnd::TermComplete);
        }
    }

    /// The player stopped to save: the reign ends without a loss or a
    /// rating.
    pub fn suspend(&mut self) {
        self.status = GameStatus::Finished(GameEnd::SaveAndExit);
    }

    // ── Resolution phases ──────────────────────────────────────

    /// Phase 2: commit the validated orders. Validation guarantees every
    /// subtraction here stays at or above zero.
    fn apply_decisions(&mut self, decisions: &Decisions) {
        match decisions.land {
            LandAction::Hold => {}
            LandAction::Buy(acres) => {
                self.ledger.area += acres;
                self.ledger.wheat_reserves -= acres * self.ledger.acre_price;
            }
            LandAction::Sell(acres) => {
                self.ledger.area -= acres;
                self.ledger.wheat_reserves += acres * self.ledger.acre_price;
            }
        }
        self.ledger.wheat_consumed = decisions.food;
        self.ledger.wheat_reserves -= decisions.food;
        self.ledger.workable_area = decisions.plant;
        self.ledger.wheat_reserves -= seed_cost(decisions.plant);
    }

    /// Phase 3: roll the yield and bring in the crop.
    fn harvest(&mut self) {
        self.ledger.wheat_per_acre = self
            .rng
            .roll_range(config::MIN_WHEAT_PER_ACRE, config::MAX_WHEAT_PER_ACRE);
        self.ledger.wheat_reserves += self.ledger.harvested();
    }

    /// Phase 4: rats eat a rolled share of whatever the granary holds by
    /// now, truncated to whole bushels.
    fn rats(&mut self) {
        let share = self.rng.roll_fraction(config::RAT_EAT_MAX_FRACTION);
        self.ledger.wheat_eaten_by_rats =
            (share * f64::from(self.ledger.wheat_reserves)) as Bushels;
        self.ledger.wheat_reserves -= self.ledger.wheat_eaten_by_rats;
    }

    /// Phase 5: feed the city. Whole people only; a short granary starves
    /// the remainder, and the round's ratio is recorded before the dead
    /// leave the count.
    fn starvation(&mut self) {
        let before = self.ledger.population;
        let fed = self.ledger.wheat_consumed / config::WHEAT_PER_PERSON;
        self.ledger.dead_from_hunger = before - before.min(fed);

        let ratio = if before == 0 {
            0.0
        } else {
            f64::from(self.ledger.dead_from_hunger) / f64::from(before)
        };
        self.stats.record(self.ledger.round, ratio);

        self.ledger.population -= self.ledger.dead_from_hunger;
    }

    /// Phase 6: newcomers drawn by the space the dead left and by how the
    /// harvest looked next to the granary. Integer arithmetic throughout,
    /// clamped to [0, MAX_NEW_PEOPLE].
    fn migration(&mut self) {
        let grain_before_rats = i64::from(self.ledger.wheat_reserves)
            + i64::from(self.ledger.wheat_eaten_by_rats);
        let from_deaths = i64::from(self.ledger.dead_from_hunger) / 2;
        let from_grain =
            (5 - i64::from(self.ledger.wheat_per_acre)) * grain_before_rats / 600;

        let arrivals = (from_deaths + from_grain + 1)
            .clamp(0, i64::from(config::MAX_NEW_PEOPLE));

        self.ledger.new_people = arrivals as People;
        self.ledger.population += self.ledger.new_people;
    }

    /// Phase 7: roll for plague; a plague year halves the city, odd
    /// survivor rounding down.
    fn plague(&mut self) {
        let roll = self.rng.roll_range(1, 100);
        self.ledger.has_plague = roll <= config::PLAGUE_CHANCE_PERCENT;
        if self.ledger.has_plague {
            self.ledger.population /= 2;
        }
    }
}
