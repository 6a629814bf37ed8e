//! wasm-bindgen facade for the browser UI
//!
//! The UI keeps rendering, drag visuals, and sound; every game rule crosses
//! this boundary as a method call on `PizzaGame`. Composite values travel as
//! JSON strings, scalars as plain numbers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::config::OrderConfig;
use crate::game::{Kitchen, OrderKind, Topping, ToppingId};
use crate::history::ResultHistory;
use crate::minigame;

#[wasm_bindgen]
pub struct PizzaGame {
    kitchen: Kitchen,
    history: ResultHistory,
    rng: Pcg32,
}

#[wasm_bindgen]
impl PizzaGame {
    /// Build a game with the default order configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PizzaGame, JsValue> {
        let seed = js_sys::Date::now() as u64;
        let kitchen = Kitchen::new(OrderConfig::default(), seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Pizza game initialized with seed: {seed}");
        Ok(PizzaGame {
            kitchen,
            history: ResultHistory::load(),
            // Separate stream for minigame draws
            rng: Pcg32::seed_from_u64(seed.wrapping_mul(2654435761)),
        })
    }

    /// Generate the next order; returns it as JSON
    pub fn next_order(&mut self, improper: bool) -> Result<String, JsValue> {
        let kind = if improper { OrderKind::Improper } else { OrderKind::Proper };
        let order = self
            .kitchen
            .next_order(kind)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(order).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Active order as JSON, or None between orders
    pub fn current_order(&self) -> Option<String> {
        self.kitchen.current_order().and_then(|order| serde_json::to_string(order).ok())
    }

    pub fn select_pizza_count(&mut self, count: u8) {
        self.kitchen.select_pizza_count(count);
    }

    pub fn select_slice_count(&mut self, count: u32) {
        self.kitchen.select_slice_count(count);
    }

    /// Start dragging a topping by display name; returns its instance id
    pub fn spawn_topping(&mut self, name: &str) -> Result<u32, JsValue> {
        let topping = Topping::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown topping: {name}")))?;
        Ok(self.kitchen.spawn_topping(topping).0)
    }

    /// Drag ended; returns the placement outcome as JSON
    pub fn drop_topping(&mut self, id: u32, x: f32, y: f32) -> String {
        let outcome = self.kitchen.drop_topping(ToppingId(id), Vec2::new(x, y));
        serde_json::to_string(&outcome).unwrap_or_default()
    }

    pub fn remove_topping(&mut self, id: u32) {
        self.kitchen.remove_topping(ToppingId(id));
    }

    /// Pizza index under a point, or -1
    pub fn locate_pizza(&self, x: f32, y: f32) -> i32 {
        self.kitchen
            .locate_pizza(Vec2::new(x, y))
            .map(i32::from)
            .unwrap_or(-1)
    }

    /// Global slice index under a point, or -1
    pub fn slice_index(&self, x: f32, y: f32) -> i32 {
        self.kitchen
            .layout()
            .global_slice_index(Vec2::new(x, y))
            .map(|slice| slice as i32)
            .unwrap_or(-1)
    }

    /// Snap point for a slice center as [x, y], empty when not ready
    pub fn slice_center(&self, global_slice: u32) -> Vec<f32> {
        match self.kitchen.layout().slice_center(global_slice) {
            Some(pos) => vec![pos.x, pos.y],
            None => Vec::new(),
        }
    }

    /// Distinct filled slices for a topping by display name
    pub fn filled_count(&self, name: &str) -> u32 {
        Topping::from_name(name)
            .map(|topping| self.kitchen.filled_count(topping))
            .unwrap_or(0)
    }

    /// Submit the board; returns the result record as JSON
    ///
    /// None on a premature submit (no order or unconfigured board). The
    /// screenshot, if the UI captured one, rides along into the history.
    pub fn submit(&mut self, screenshot_data_url: Option<String>) -> Option<String> {
        let mut result = self.kitchen.submit()?;
        result.screenshot_data_url = screenshot_data_url;
        let json = serde_json::to_string(&result).ok();
        self.history.append(result);
        self.history.save();
        json
    }

    pub fn tips_total(&self) -> u32 {
        self.kitchen.tips_total()
    }

    pub fn order_number(&self) -> u32 {
        self.kitchen.order_number()
    }

    /// Full result history as a JSON array (statistics screen)
    pub fn history_json(&self) -> String {
        serde_json::to_string(self.history.results()).unwrap_or_else(|_| String::from("[]"))
    }

    /// End-of-session reset
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Draw a topping-ratio comparison round from past results, as JSON
    ///
    /// None until two successful orders exist.
    pub fn comparison_round(&mut self) -> Option<String> {
        let pool: Vec<_> = self.history.successes().collect();
        let round = minigame::select_round(&pool, &mut self.rng)?;
        serde_json::to_string(&round).ok()
    }
}
