//! Order generation
//!
//! Orders are random but always solvable on the board they imply: proper
//! orders fill one pizza exactly, improper orders always overflow onto a
//! second pizza. Generation is seeded and reproducible.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Fraction, Topping, ToppingCounts};
use crate::config::{ConfigError, OrderConfig};

/// Which fraction family an order belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Numerator below the denominator, fits one pizza
    Proper,
    /// Two pizzas' worth of slices in total
    Improper,
}

/// A topping request the player must fulfill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Headline fraction: requested slices over slices per pizza
    pub fraction: Fraction,
    /// Display string, one fraction per requested topping
    pub label: String,
    /// Requested slice count per topping
    pub counts: ToppingCounts,
    /// Slice-by-slice draw behind a proper order (None for improper)
    pub per_slice: Option<Vec<Topping>>,
}

impl Order {
    /// Build an order; the display label is derived from the counts
    pub fn new(fraction: Fraction, counts: ToppingCounts, per_slice: Option<Vec<Topping>>) -> Self {
        let label = counts
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(topping, count)| {
                format!("{}/{} {}", count, fraction.denominator, topping.name())
            })
            .collect::<Vec<_>>()
            .join(", ");
        Self { fraction, label, counts, per_slice }
    }

    pub fn kind(&self) -> OrderKind {
        if self.fraction.is_proper() { OrderKind::Proper } else { OrderKind::Improper }
    }

    /// Pizzas needed to hold every requested slice
    pub fn pizzas_required(&self) -> u8 {
        if self.counts.total() > self.fraction.denominator { 2 } else { 1 }
    }
}

/// Seeded source of random orders
///
/// Owns its RNG: the order stream is fully reproducible from the seed.
/// Construction validates the configuration, so generation itself can only
/// fail at the proper-order retry cap.
pub struct OrderGenerator {
    config: OrderConfig,
    rng: Pcg32,
}

impl OrderGenerator {
    pub fn new(config: OrderConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng: Pcg32::seed_from_u64(seed) })
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    pub fn generate(&mut self, kind: OrderKind) -> Result<Order, ConfigError> {
        match kind {
            OrderKind::Proper => self.proper(),
            OrderKind::Improper => Ok(self.improper()),
        }
    }

    /// Proper order: fewer requested slices than one pizza holds
    ///
    /// Draws one uniform topping per slice, then rejects the whole draw
    /// until enough distinct toppings appear. The cap turns a misconfigured
    /// rejection loop into an error instead of spinning forever.
    pub fn proper(&mut self) -> Result<Order, ConfigError> {
        let min_types = self.config.min_topping_types as usize;

        for _attempt in 0..self.config.max_generation_retries {
            let denominator = self.pick_denominator();
            let numerator = self.rng.random_range(1..denominator);

            let per_slice: Vec<Topping> = (0..denominator)
                .map(|_| Topping::ALL[self.rng.random_range(0..Topping::COUNT)])
                .collect();
            let mut counts = ToppingCounts::new();
            for &topping in &per_slice {
                counts.add(topping, 1);
            }

            if counts.distinct() >= min_types {
                return Ok(Order::new(
                    Fraction::new(numerator, denominator),
                    counts,
                    Some(per_slice),
                ));
            }
        }

        Err(ConfigError::DiversityUnreachable {
            min_types: self.config.min_topping_types,
            retries: self.config.max_generation_retries,
        })
    }

    /// Improper order: exactly two pizzas' worth of slices, with one topping
    /// alone overflowing the first pizza
    pub fn improper(&mut self) -> Order {
        let denominator = self.pick_denominator();
        let total = 2 * denominator;

        // Distinct topping count, clamped so every range below stays non-empty
        let hi = (Topping::COUNT as u32).min(denominator);
        let lo = self.config.min_topping_types.min(hi);
        let k = self.rng.random_range(lo..=hi);

        let mut pool = Topping::ALL;
        pool.shuffle(&mut self.rng);
        let picked = &pool[..k as usize];

        // First pick overflows a pizza on its own; the rest split the
        // remainder, one slice minimum each
        let overflow_count = if k == 1 {
            total
        } else {
            self.rng.random_range(denominator + 1..=total - (k - 1))
        };

        let mut counts = ToppingCounts::new();
        counts.set(picked[0], overflow_count);

        let mut remaining = total - overflow_count;
        let others = &picked[1..];
        for (position, &topping) in others.iter().enumerate() {
            let left_after = (others.len() - position - 1) as u32;
            let share = if left_after == 0 {
                remaining
            } else {
                self.rng.random_range(1..=remaining - left_after)
            };
            counts.set(topping, share);
            remaining -= share;
        }

        Order::new(Fraction::new(total, denominator), counts, None)
    }

    fn pick_denominator(&mut self) -> u32 {
        let options = &self.config.slice_options;
        options[self.rng.random_range(0..options.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SLICE_OPTIONS;

    fn generator(seed: u64) -> OrderGenerator {
        OrderGenerator::new(OrderConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_proper_orders_fill_one_pizza_exactly() {
        for seed in 0..50 {
            let order = generator(seed).proper().unwrap();
            let d = order.fraction.denominator;
            assert!(SLICE_OPTIONS.contains(&d));
            assert!(order.fraction.numerator >= 1);
            assert!(order.fraction.is_proper());
            assert_eq!(order.counts.total(), d);
            assert!(order.counts.distinct() >= 2);
            assert_eq!(order.kind(), OrderKind::Proper);
            assert_eq!(order.pizzas_required(), 1);

            let per_slice = order.per_slice.as_ref().unwrap();
            assert_eq!(per_slice.len() as u32, d);
        }
    }

    #[test]
    fn test_improper_orders_overflow_one_pizza() {
        for seed in 0..50 {
            let order = generator(seed).improper();
            let d = order.fraction.denominator;
            assert!(SLICE_OPTIONS.contains(&d));
            assert_eq!(order.fraction.numerator, 2 * d);
            assert_eq!(order.counts.total(), 2 * d);
            // One topping alone needs the second pizza
            assert!(order.counts.max() > d);
            assert!(order.counts.distinct() >= 2);
            assert_eq!(order.kind(), OrderKind::Improper);
            assert_eq!(order.pizzas_required(), 2);
            assert!(order.per_slice.is_none());
        }
    }

    #[test]
    fn test_improper_requested_toppings_all_nonzero() {
        for seed in 0..50 {
            let order = generator(seed).improper();
            let nonzero = order.counts.iter().filter(|&(_, c)| c > 0).count();
            assert_eq!(nonzero, order.counts.distinct());
            assert!(nonzero >= 2);
            assert!(nonzero <= Topping::COUNT);
        }
    }

    #[test]
    fn test_label_lists_each_requested_topping() {
        let mut counts = ToppingCounts::new();
        counts.set(Topping::Pepperoni, 3);
        counts.set(Topping::Basil, 1);
        let order = Order::new(Fraction::new(4, 8), counts, None);
        assert_eq!(order.label, "3/8 Pepperoni, 1/8 Basil");
    }

    #[test]
    fn test_generate_dispatches_by_kind() {
        let mut generator = generator(11);
        let proper = generator.generate(OrderKind::Proper).unwrap();
        assert!(proper.fraction.is_proper());
        let improper = generator.generate(OrderKind::Improper).unwrap();
        assert!(!improper.fraction.is_proper());
    }

    #[test]
    fn test_same_seed_same_orders() {
        let mut a = generator(42);
        let mut b = generator(42);
        for _ in 0..10 {
            assert_eq!(a.proper().unwrap(), b.proper().unwrap());
            assert_eq!(a.improper(), b.improper());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = generator(1);
        let mut b = generator(2);
        let differs = (0..10).any(|_| a.improper() != b.improper());
        assert!(differs);
    }
}
