use glam::Vec2;
use pizza_fractions::config::{ConfigError, OrderConfig};
use pizza_fractions::consts::{BOARD_HEIGHT, BOARD_WIDTH, SLICE_OPTIONS};
use pizza_fractions::game::{Kitchen, OrderGenerator, OrderKind, PlaceOutcome, Topping};
use proptest::prelude::*;

fn generator(seed: u64) -> OrderGenerator {
    OrderGenerator::new(OrderConfig::default(), seed).expect("default config is valid")
}

#[test]
fn generator_construction_surfaces_config_errors() {
    let bad = OrderConfig { slice_options: vec![], ..Default::default() };
    let err = OrderGenerator::new(bad, 1).err().expect("invalid config rejected");
    assert_eq!(err, ConfigError::NoSliceOptions);
}

#[test]
fn custom_slice_options_flow_into_orders() {
    let config = OrderConfig { slice_options: vec![6], ..Default::default() };
    let mut generator = OrderGenerator::new(config, 5).expect("config is valid");
    for _ in 0..10 {
        assert_eq!(generator.proper().expect("proper order").fraction.denominator, 6);
        assert_eq!(generator.improper().fraction.denominator, 6);
    }
}

#[test]
fn strict_diversity_configs_still_generate() {
    // Four distinct types is the most a four-slice pizza can honor
    let config = OrderConfig { min_topping_types: 4, ..Default::default() };
    let mut generator = OrderGenerator::new(config, 8).expect("config is valid");
    for _ in 0..20 {
        let order = generator.proper().expect("proper order");
        assert!(order.counts.distinct() >= 4);
    }

    // Asking for five cannot fit the four-slice option
    let too_strict = OrderConfig { min_topping_types: 5, ..Default::default() };
    assert_eq!(
        OrderGenerator::new(too_strict, 8).err(),
        Some(ConfigError::MinToppingTypesTooLargeForSlices { min_types: 5, smallest: 4 })
    );
}

proptest! {
    #[test]
    fn proper_orders_satisfy_their_invariants(seed in any::<u64>()) {
        let order = generator(seed).proper().expect("proper order");
        let d = order.fraction.denominator;

        prop_assert!(SLICE_OPTIONS.contains(&d));
        prop_assert!(order.fraction.numerator >= 1);
        prop_assert!(order.fraction.numerator < d);
        prop_assert_eq!(order.counts.total(), d);
        prop_assert!(order.counts.distinct() >= 2);

        let per_slice = order.per_slice.as_ref().expect("proper orders carry a per-slice draw");
        prop_assert_eq!(per_slice.len() as u32, d);
        for (topping, count) in order.counts.iter() {
            let drawn = per_slice.iter().filter(|&&t| t == topping).count() as u32;
            prop_assert_eq!(drawn, count);
        }
    }

    #[test]
    fn improper_orders_satisfy_their_invariants(seed in any::<u64>()) {
        let order = generator(seed).improper();
        let d = order.fraction.denominator;

        prop_assert!(SLICE_OPTIONS.contains(&d));
        prop_assert_eq!(order.fraction.numerator, 2 * d);
        prop_assert_eq!(order.counts.total(), 2 * d);
        prop_assert!(order.counts.max() > d, "one topping must overflow a pizza");
        prop_assert!(order.counts.distinct() >= 2);
        prop_assert!(order.per_slice.is_none());
    }

    #[test]
    fn every_generated_order_is_solvable(seed in any::<u64>(), improper in any::<bool>()) {
        let mut kitchen = Kitchen::new(OrderConfig::default(), seed).expect("default config is valid");
        let kind = if improper { OrderKind::Improper } else { OrderKind::Proper };
        let order = kitchen.next_order(kind).expect("order generated").clone();

        kitchen.select_pizza_count(order.pizzas_required());
        kitchen.select_slice_count(order.fraction.denominator);

        let mut next_slice = 0u32;
        for (topping, count) in order.counts.iter() {
            for _ in 0..count {
                let pos = kitchen.layout().slice_center(next_slice).expect("slice fits the board");
                let id = kitchen.spawn_topping(topping);
                let outcome = kitchen.drop_topping(id, pos);
                prop_assert!(
                    matches!(outcome, PlaceOutcome::Placed { .. }),
                    "unexpected outcome: {:?}",
                    outcome
                );
                next_slice += 1;
            }
        }

        let result = kitchen.submit().expect("board is configured");
        prop_assert!(result.success, "details:\n{}", result.details);
    }

    #[test]
    fn slices_never_hold_two_topping_types(
        seed in any::<u64>(),
        drops in prop::collection::vec(
            (0usize..Topping::COUNT, 0f32..BOARD_WIDTH, 0f32..BOARD_HEIGHT),
            1..60,
        ),
    ) {
        let mut kitchen = Kitchen::new(OrderConfig::default(), seed).expect("default config is valid");
        kitchen.select_pizza_count(2);
        kitchen.select_slice_count(8);

        for (topping_index, x, y) in drops {
            let topping = Topping::from_index(topping_index).expect("index in range");
            let id = kitchen.spawn_topping(topping);
            kitchen.drop_topping(id, Vec2::new(x, y));

            let ledger = kitchen.ledger();
            for slice in 0..16u32 {
                let holders = Topping::ALL
                    .iter()
                    .filter(|&&t| ledger.filled_slices(t).contains(&slice))
                    .count();
                prop_assert!(holders <= 1, "slice {} held by {} topping types", slice, holders);
            }
        }
    }

    #[test]
    fn filled_counts_track_distinct_slices(
        seed in any::<u64>(),
        drops in prop::collection::vec((0f32..BOARD_WIDTH, 0f32..BOARD_HEIGHT), 1..40),
    ) {
        let mut kitchen = Kitchen::new(OrderConfig::default(), seed).expect("default config is valid");
        kitchen.select_pizza_count(1);
        kitchen.select_slice_count(12);

        // Same type everywhere: count must equal the distinct slice set size
        for (x, y) in drops {
            let id = kitchen.spawn_topping(Topping::Basil);
            kitchen.drop_topping(id, Vec2::new(x, y));
            let ledger = kitchen.ledger();
            prop_assert_eq!(
                ledger.filled_count(Topping::Basil),
                ledger.filled_slices(Topping::Basil).len() as u32
            );
            prop_assert!(ledger.filled_count(Topping::Basil) <= 12);
        }
    }

    #[test]
    fn order_streams_are_deterministic(seed in any::<u64>()) {
        let mut a = generator(seed);
        let mut b = generator(seed);
        for kind in [OrderKind::Proper, OrderKind::Improper, OrderKind::Proper] {
            prop_assert_eq!(a.generate(kind).expect("order"), b.generate(kind).expect("order"));
        }
    }
}
