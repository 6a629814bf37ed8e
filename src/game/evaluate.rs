//! Order evaluation
//!
//! Pure read over the order, ledger, and layout. Every fraction comparison
//! cross-multiplies in u64, so the board's slice count never has to divide
//! the order's denominator evenly.

use serde::{Deserialize, Serialize};

use super::layout::PizzaLayout;
use super::ledger::ToppingLedger;
use super::order::Order;
use super::state::Fraction;

/// Verdict for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub success: bool,
    /// One line per ordered topping plus a pizza-count line
    pub details: String,
    /// Ordered slices over the order's denominator
    pub expected_total: Fraction,
    /// Filled slices over the board's slice count
    pub current_total: Fraction,
    pub expected_pizzas: u8,
    pub current_pizzas: u8,
}

/// Compare the board against the order
///
/// Counts distinct filled slices per topping and matches them against the
/// ordered counts in the order's units: a topping passes when
/// `current * denominator == expected * slice_count`. Success needs every
/// topping to pass, the totals to agree, and the pizza count to match what
/// the order requires. Callers must configure the board first.
pub fn evaluate(order: &Order, ledger: &ToppingLedger, layout: &PizzaLayout) -> Evaluation {
    debug_assert!(layout.is_ready(), "evaluate needs a configured board");

    let denominator = order.fraction.denominator;
    if !layout.is_ready() {
        // Unreachable through Kitchen::submit; kept total for direct callers
        return Evaluation {
            success: false,
            details: String::from("No pizza on the board"),
            expected_total: Fraction::new(order.counts.total(), denominator),
            current_total: Fraction::new(0, 1),
            expected_pizzas: order.pizzas_required(),
            current_pizzas: layout.pizza_count,
        };
    }
    let slice_count = layout.slice_count;

    let mut lines = Vec::new();
    let mut all_match = true;
    let mut expected_sum = 0u32;
    let mut current_sum = 0u32;
    let mut expected_pizzas = 1u8;

    for (topping, expected) in order.counts.iter() {
        if expected == 0 {
            continue;
        }
        let current = ledger.filled_count(topping);
        let weighted = current as u64 * denominator as u64;
        all_match &= weighted == expected as u64 * slice_count as u64;

        expected_sum += expected;
        current_sum += current;
        if expected_sum > denominator {
            expected_pizzas = 2;
        }

        // Report in the order's units when the rescale is exact, raw otherwise
        let line = if weighted % slice_count as u64 == 0 {
            format!(
                "{}: expected {}/{} — current {}/{}",
                topping.name(),
                expected,
                denominator,
                weighted / slice_count as u64,
                denominator
            )
        } else {
            format!(
                "{}: expected {}/{} — current {}/{}",
                topping.name(),
                expected,
                denominator,
                current,
                slice_count
            )
        };
        lines.push(line);
    }

    let totals_match =
        current_sum as u64 * denominator as u64 == expected_sum as u64 * slice_count as u64;
    let success = all_match && totals_match && expected_pizzas == layout.pizza_count;

    lines.push(format!(
        "Pizzas: expected {} — current {}",
        expected_pizzas, layout.pizza_count
    ));

    Evaluation {
        success,
        details: lines.join("\n"),
        expected_total: Fraction::new(expected_sum, denominator),
        current_total: Fraction::new(current_sum, slice_count),
        expected_pizzas,
        current_pizzas: layout.pizza_count,
    }
}
