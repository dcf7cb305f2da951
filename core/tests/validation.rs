//! Decision validators: pure, advisory, and strict about the whole set.

use hamurabi_core::{
    decision::{self, DecisionError, Decisions, LandAction},
    engine::GameEngine,
    ledger::CityLedger,
    rng::ScriptedFortune,
};

/// A fresh city with the land market open at 20 bushels the acre.
fn ledger() -> CityLedger {
    let mut ledger = CityLedger::new();
    ledger.acre_price = 20;
    ledger
}

#[test]
fn buying_is_bounded_by_the_granary() {
    let ledger = ledger();
    // 140 acres at 20 bushels costs exactly the 2800 on hand.
    assert_eq!(decision::can_buy_land(140, &ledger), Ok(()));
    assert_eq!(
        decision::can_buy_land(141, &ledger),
        Err(DecisionError::NotEnoughWheat {
            need: 2820,
            have: 2800
        })
    );
}

#[test]
fn selling_is_bounded_by_the_land_owned() {
    let ledger = ledger();
    assert_eq!(decision::can_sell_land(1000, &ledger), Ok(()));
    assert_eq!(
        decision::can_sell_land(1001, &ledger),
        Err(DecisionError::NotEnoughLand {
            want: 1001,
            have: 1000
        })
    );
}

#[test]
fn feeding_is_bounded_by_the_granary() {
    let ledger = ledger();
    assert_eq!(decision::can_allocate_food(2800, &ledger), Ok(()));
    assert_eq!(
        decision::can_allocate_food(2801, &ledger),
        Err(DecisionError::NotEnoughWheat {
            need: 2801,
            have: 2800
        })
    );
}

#[test]
fn seed_cost_truncates_the_half_bushel() {
    assert_eq!(decision::seed_cost(0), 0);
    assert_eq!(decision::seed_cost(999), 499);
    assert_eq!(decision::seed_cost(1000), 500);
}

#[test]
fn planting_fails_on_seed_before_anything_else() {
    let mut ledger = ledger();
    ledger.population = 20_000;
    // 5602 acres want 2801 bushels of seed; only 2800 are on hand.
    assert_eq!(
        decision::can_plant(5602, &ledger),
        Err(DecisionError::NotEnoughWheat {
            need: 2801,
            have: 2800
        })
    );
}

#[test]
fn planting_is_bounded_by_the_workforce() {
    let ledger = ledger();
    assert_eq!(decision::can_plant(1000, &ledger), Ok(()));
    assert_eq!(
        decision::can_plant(1001, &ledger),
        Err(DecisionError::NotEnoughWorkers {
            population: 100,
            limit: 1000
        })
    );
}

#[test]
fn planting_is_bounded_by_the_land_owned() {
    let mut ledger = ledger();
    ledger.population = 2000;
    assert_eq!(
        decision::can_plant(1500, &ledger),
        Err(DecisionError::NotEnoughLand {
            want: 1500,
            have: 1000
        })
    );
}

#[test]
fn predicates_never_touch_the_ledger() {
    let ledger = ledger();
    let before = ledger.clone();
    let first = decision::can_plant(800, &ledger);
    let second = decision::can_plant(800, &ledger);
    assert_eq!(first, second, "same question, same answer");
    assert_eq!(ledger, before, "a predicate must not move a single bushel");
}

#[test]
fn the_whole_set_catches_a_combined_overdraw() {
    let ledger = ledger();
    // Each part passes alone: the purchase costs exactly the granary, and
    // one bushel of food is nothing. Together they overdraw by one.
    assert_eq!(decision::can_buy_land(140, &ledger), Ok(()));
    assert_eq!(decision::can_allocate_food(1, &ledger), Ok(()));

    let set = Decisions {
        land: LandAction::Buy(140),
        food: 1,
        plant: 0,
    };
    assert_eq!(
        set.validate(&ledger),
        Err(DecisionError::NotEnoughWheat { need: 1, have: 0 })
    );
}

#[test]
fn sale_income_is_spendable_in_the_same_round() {
    let ledger = ledger();
    assert!(
        decision::can_allocate_food(4000, &ledger).is_err(),
        "4000 bushels exceed the pre-sale granary"
    );
    let set = Decisions {
        land: LandAction::Sell(100),
        food: 4000,
        plant: 0,
    };
    assert_eq!(set.validate(&ledger), Ok(()), "the sale raises reserves to 4800");
}

#[test]
fn planting_is_checked_against_post_trade_land() {
    let ledger = ledger();
    let set = Decisions {
        land: LandAction::Sell(100),
        food: 0,
        plant: 950,
    };
    assert_eq!(
        set.validate(&ledger),
        Err(DecisionError::NotEnoughLand {
            want: 950,
            have: 900
        })
    );

    let kept = Decisions {
        land: LandAction::Hold,
        ..set
    };
    assert_eq!(kept.validate(&ledger), Ok(()));
}

#[test]
fn any_validated_set_commits_without_overdraw() {
    // Sweep a small grid of order sets; every one the validator accepts
    // must resolve with the books intact. An overdraw would wrap a u32
    // subtraction and panic long before the asserts.
    for buy in [0u32, 50, 140] {
        for food in [0u32, 1000, 2800] {
            for plant in [0u32, 500, 1000] {
                let set = Decisions {
                    land: if buy == 0 {
                        LandAction::Hold
                    } else {
                        LandAction::Buy(buy)
                    },
                    food,
                    plant,
                };

                let mut engine = GameEngine::with_fortune(Box::new(
                    ScriptedFortune::new(vec![20, 3, 100], vec![0.05]),
                ));
                engine.begin_round();
                if set.validate(engine.ledger()).is_err() {
                    continue;
                }
                engine.resolve_round(&set);

                let ledger = engine.ledger();
                assert_eq!(ledger.area, 1000 + buy);
                assert_eq!(ledger.workable_area, plant);
                assert!(
                    ledger.workable_area <= ledger.area,
                    "planted past the city borders with {set:?}"
                );
            }
        }
    }
}
