//! Immutable submission records
//!
//! One record per submit. Records own defensive copies of everything they
//! reference, so later play cannot corrupt the history or the minigames
//! built on top of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::evaluate::Evaluation;
use super::layout::PizzaLayout;
use super::ledger::ToppingLedger;
use super::order::Order;
use super::state::{Fraction, Topping};

/// Snapshot of one topping resting on the board at submit time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedTopping {
    pub topping: Topping,
    pub pos: Vec2,
    pub pizza: u8,
}

/// Everything recorded about one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_number: u32,
    pub success: bool,
    /// Per-topping breakdown, one line per ordered topping
    pub details: String,
    pub expected_total: Fraction,
    pub current_total: Fraction,
    pub expected_pizzas: u8,
    pub current_pizzas: u8,
    /// The order's total slice demand in its own units
    pub slices_used: u32,
    pub placed_toppings: Vec<PlacedTopping>,
    pub tips_earned: u32,
    /// Copy of the order as generated
    pub order: Order,
    /// Filled in by the rendering layer before persisting, if at all
    #[serde(default)]
    pub screenshot_data_url: Option<String>,
}

/// Package an evaluation into an immutable record
pub fn build_result(
    order: &Order,
    evaluation: &Evaluation,
    ledger: &ToppingLedger,
    layout: &PizzaLayout,
    order_number: u32,
    tips_earned: u32,
) -> OrderResult {
    OrderResult {
        order_number,
        success: evaluation.success,
        details: evaluation.details.clone(),
        expected_total: evaluation.expected_total,
        current_total: evaluation.current_total,
        expected_pizzas: evaluation.expected_pizzas,
        current_pizzas: evaluation.current_pizzas,
        slices_used: order.counts.total(),
        placed_toppings: ledger.snapshot(layout),
        tips_earned,
        order: order.clone(),
        screenshot_data_url: None,
    }
}
