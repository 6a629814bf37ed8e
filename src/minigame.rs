//! Topping-ratio comparison rounds
//!
//! Built from past results: two historical orders, one topping, and the
//! question of which order used proportionally more of it. The verdict uses
//! the same cross-multiplication as order evaluation, so minigame answers
//! always agree with scoring.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{OrderResult, Topping};

/// One order's side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCard {
    /// Which submission this card came from
    pub order_number: u32,
    /// Requested count of the round's topping
    pub count: u32,
    /// The order's total slice demand, the ratio's denominator
    pub slices_used: u32,
    /// Pizzas that submission used, for card art
    pub pizzas: u8,
}

/// Correct answer to a round, as the UI receives it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonVerdict {
    Less,
    Equal,
    Greater,
}

impl From<Ordering> for ComparisonVerdict {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// A ready-to-present comparison question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRound {
    pub topping: Topping,
    pub left: ComparisonCard,
    pub right: ComparisonCard,
    /// How the left ratio compares to the right
    pub expected: ComparisonVerdict,
}

/// Compare `a_count / a_slices` against `b_count / b_slices` exactly
pub fn compare_ratios(a_count: u32, a_slices: u32, b_count: u32, b_slices: u32) -> Ordering {
    (a_count as u64 * b_slices as u64).cmp(&(b_count as u64 * a_slices as u64))
}

/// Draw a comparison round from past fulfilled orders
///
/// The pool is the successful part of the result history (see
/// `ResultHistory::successes`); returns None until it is two deep and a
/// topping with a nonzero count exists on at least one side.
pub fn select_round(pool: &[&OrderResult], rng: &mut impl Rng) -> Option<ComparisonRound> {
    if pool.len() < 2 {
        return None;
    }

    // Two distinct picks: draw the second from a range with the first removed
    let first = rng.random_range(0..pool.len());
    let mut second = rng.random_range(0..pool.len() - 1);
    if second >= first {
        second += 1;
    }
    let (left, right) = (pool[first], pool[second]);

    let candidates: Vec<Topping> = Topping::ALL
        .iter()
        .copied()
        .filter(|&topping| {
            left.order.counts.get(topping) > 0 || right.order.counts.get(topping) > 0
        })
        .collect();
    let topping = *candidates.get(rng.random_range(0..candidates.len().max(1)))?;

    let left_card = card_for(left, topping);
    let right_card = card_for(right, topping);
    let expected = ComparisonVerdict::from(compare_ratios(
        left_card.count,
        left_card.slices_used,
        right_card.count,
        right_card.slices_used,
    ));

    Some(ComparisonRound { topping, left: left_card, right: right_card, expected })
}

fn card_for(result: &OrderResult, topping: Topping) -> ComparisonCard {
    ComparisonCard {
        order_number: result.order_number,
        count: result.order.counts.get(topping),
        slices_used: result.slices_used,
        pizzas: result.current_pizzas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderConfig;
    use crate::game::{Kitchen, OrderKind};
    use crate::history::ResultHistory;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Successive submissions from one kitchen, flagged successful so they
    /// qualify for the pool; order numbers come out distinct.
    fn fulfilled_results(seed: u64, n: u32) -> Vec<OrderResult> {
        let mut kitchen = Kitchen::new(OrderConfig::default(), seed).unwrap();
        (0..n)
            .map(|_| {
                kitchen.next_order(OrderKind::Proper).unwrap();
                kitchen.select_pizza_count(1);
                kitchen.select_slice_count(4);
                // Empty-board submissions fail; flip the flag to stand in
                // for fulfilled orders
                let mut result = kitchen.submit().unwrap();
                result.success = true;
                result
            })
            .collect()
    }

    fn pool(results: &[OrderResult]) -> Vec<&OrderResult> {
        results.iter().collect()
    }

    #[test]
    fn test_equal_ratios_compare_equal() {
        assert_eq!(compare_ratios(1, 2, 2, 4), Ordering::Equal);
        assert_eq!(compare_ratios(3, 6, 2, 4), Ordering::Equal);
        assert_eq!(compare_ratios(0, 4, 0, 12), Ordering::Equal);
    }

    #[test]
    fn test_unequal_ratios_order_correctly() {
        assert_eq!(compare_ratios(1, 4, 1, 2), Ordering::Less);
        assert_eq!(compare_ratios(3, 4, 1, 2), Ordering::Greater);
        // Incommensurable denominators stay exact
        assert_eq!(compare_ratios(2, 6, 2, 4), Ordering::Less);
    }

    #[test]
    fn test_verdict_mirrors_ordering() {
        assert_eq!(ComparisonVerdict::from(Ordering::Less), ComparisonVerdict::Less);
        assert_eq!(ComparisonVerdict::from(Ordering::Equal), ComparisonVerdict::Equal);
        assert_eq!(ComparisonVerdict::from(Ordering::Greater), ComparisonVerdict::Greater);
    }

    #[test]
    fn test_round_needs_two_successes() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(select_round(&[], &mut rng).is_none());

        let lone = fulfilled_results(1, 1);
        assert!(select_round(&pool(&lone), &mut rng).is_none());

        // One win plus one loss: the success pool stays one deep
        let mut results = fulfilled_results(2, 2);
        results[1].success = false;
        let mut history = ResultHistory::new();
        for result in results {
            history.append(result);
        }
        let successes: Vec<_> = history.successes().collect();
        assert_eq!(successes.len(), 1);
        assert!(select_round(&successes, &mut rng).is_none());
    }

    #[test]
    fn test_round_uses_two_distinct_results() {
        let results = fulfilled_results(1, 2);
        assert_ne!(results[0].order_number, results[1].order_number);

        let pool = pool(&results);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20 {
            let round = select_round(&pool, &mut rng).unwrap();
            assert_ne!(round.left.order_number, round.right.order_number);
        }
    }

    #[test]
    fn test_round_verdict_matches_its_cards() {
        let results = fulfilled_results(3, 3);
        let pool = pool(&results);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..20 {
            let round = select_round(&pool, &mut rng).unwrap();
            assert_eq!(
                round.expected,
                ComparisonVerdict::from(compare_ratios(
                    round.left.count,
                    round.left.slices_used,
                    round.right.count,
                    round.right.slices_used,
                ))
            );
        }
    }

    #[test]
    fn test_round_topping_appears_on_a_card() {
        let results = fulfilled_results(9, 2);
        let pool = pool(&results);
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..20 {
            let round = select_round(&pool, &mut rng).unwrap();
            assert!(round.left.count > 0 || round.right.count > 0);
        }
    }

    #[test]
    fn test_round_serializes_for_the_ui() {
        let round = ComparisonRound {
            topping: Topping::Basil,
            left: ComparisonCard { order_number: 1, count: 2, slices_used: 4, pizzas: 1 },
            right: ComparisonCard { order_number: 2, count: 1, slices_used: 4, pizzas: 1 },
            expected: ComparisonVerdict::Greater,
        };

        let json = serde_json::to_string(&round).unwrap();
        assert!(json.contains("\"expected\":\"Greater\""));
        let back: ComparisonRound = serde_json::from_str(&json).unwrap();
        assert_eq!(back, round);
    }
}
