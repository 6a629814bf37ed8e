//! Kitchen controller
//!
//! Single owner of the current order, board layout, and placement ledger.
//! Every UI event funnels through one method here, and board
//! reconfiguration is one atomic transition that also clears stale
//! placements. Nothing outside this module mutates game state.

use glam::Vec2;

use super::evaluate::evaluate;
use super::layout::PizzaLayout;
use super::ledger::{PlaceOutcome, ToppingId, ToppingLedger};
use super::order::{Order, OrderGenerator, OrderKind};
use super::result::{OrderResult, build_result};
use super::state::Topping;
use crate::config::{ConfigError, OrderConfig};
use crate::consts::TIP_ON_SUCCESS;

pub struct Kitchen {
    generator: OrderGenerator,
    layout: PizzaLayout,
    ledger: ToppingLedger,
    order: Option<Order>,
    order_number: u32,
    tips: u32,
}

impl Kitchen {
    pub fn new(config: OrderConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            generator: OrderGenerator::new(config, seed)?,
            layout: PizzaLayout::unconfigured(),
            ledger: ToppingLedger::new(),
            order: None,
            order_number: 0,
            tips: 0,
        })
    }

    /// Start the next order cycle: fresh order, bare board
    pub fn next_order(&mut self, kind: OrderKind) -> Result<&Order, ConfigError> {
        let order = self.generator.generate(kind)?;
        self.order_number += 1;
        self.layout = PizzaLayout::unconfigured();
        self.ledger.clear();
        log::info!("Order #{}: {}", self.order_number, order.label);
        Ok(self.order.insert(order))
    }

    /// Pizza-count button pressed
    pub fn select_pizza_count(&mut self, count: u8) {
        if !(1..=2).contains(&count) {
            log::warn!("ignoring pizza count {count}, expected 1 or 2");
            return;
        }
        self.reconfigure(count, self.layout.slice_count);
    }

    /// Slice-count button pressed
    pub fn select_slice_count(&mut self, count: u32) {
        self.reconfigure(self.layout.pizza_count, count);
    }

    /// Rebuild the board and drop every placement in one step
    fn reconfigure(&mut self, pizza_count: u8, slice_count: u32) {
        self.layout = PizzaLayout::new(pizza_count, slice_count);
        self.ledger.clear();
        log::debug!("board reconfigured: {pizza_count} pizza(s), {slice_count} slices");
    }

    /// Begin dragging a new topping
    pub fn spawn_topping(&mut self, topping: Topping) -> ToppingId {
        self.ledger.spawn(topping)
    }

    /// Drag ended at the given point
    pub fn drop_topping(&mut self, id: ToppingId, pos: Vec2) -> PlaceOutcome {
        self.ledger.place(id, pos, &self.layout)
    }

    /// Remove tool used on an instance
    pub fn remove_topping(&mut self, id: ToppingId) {
        self.ledger.remove(id);
    }

    /// Submit the board against the current order
    ///
    /// Returns None, leaving everything untouched, when there is no active
    /// order or the board is not configured yet. On success the board is
    /// cleared and the order retired; on failure placements stay so the
    /// player can fix and resubmit. The caller owns appending the record to
    /// the result history.
    pub fn submit(&mut self) -> Option<OrderResult> {
        let Some(order) = &self.order else {
            log::debug!("submit ignored: no active order");
            return None;
        };
        if !self.layout.is_ready() {
            log::debug!("submit ignored: board not configured");
            return None;
        }

        let evaluation = evaluate(order, &self.ledger, &self.layout);
        let tips_earned = if evaluation.success { TIP_ON_SUCCESS } else { 0 };
        let result = build_result(
            order,
            &evaluation,
            &self.ledger,
            &self.layout,
            self.order_number,
            tips_earned,
        );

        if evaluation.success {
            log::info!("Order #{} fulfilled, {tips_earned} tips earned", self.order_number);
            self.tips += tips_earned;
            self.ledger.clear();
            self.order = None;
        } else {
            log::info!("Order #{} not fulfilled yet", self.order_number);
        }

        Some(result)
    }

    pub fn current_order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn layout(&self) -> &PizzaLayout {
        &self.layout
    }

    pub fn ledger(&self) -> &ToppingLedger {
        &self.ledger
    }

    pub fn filled_count(&self, topping: Topping) -> u32 {
        self.ledger.filled_count(topping)
    }

    /// Which pizza a point lands on, if any
    pub fn locate_pizza(&self, pos: Vec2) -> Option<u8> {
        self.layout.locate_pizza(pos)
    }

    pub fn tips_total(&self) -> u32 {
        self.tips
    }

    pub fn order_number(&self) -> u32 {
        self.order_number
    }
}
