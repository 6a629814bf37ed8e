//! Pizza Fractions - an educational pizza-making game core
//!
//! Core modules:
//! - `game`: Order generation, board geometry, placement, evaluation
//! - `config`: Order generator knobs with startup validation
//! - `history`: Per-session result history persistence
//! - `minigame`: Topping-ratio comparison rounds built from past results
//! - `bindings`: wasm-bindgen facade the browser UI drives

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod config;
pub mod game;
pub mod history;
pub mod minigame;

pub use config::{ConfigError, OrderConfig};
pub use game::{Kitchen, Order, OrderKind, OrderResult, Topping};
pub use history::ResultHistory;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Slice counts the board offers; order denominators come from this set
    pub const SLICE_OPTIONS: [u32; 4] = [4, 6, 8, 12];
    /// Minimum distinct topping types per generated order
    pub const MIN_TOPPING_TYPES: u32 = 2;
    /// Cap on the proper-order diversity retry loop
    pub const MAX_GENERATION_RETRIES: u32 = 10_000;

    /// Board dimensions (logical pixels, the UI canvas maps onto these)
    pub const BOARD_WIDTH: f32 = 1280.0;
    pub const BOARD_HEIGHT: f32 = 720.0;

    /// Pizza geometry
    pub const PIZZA_OUTER_RADIUS: f32 = 220.0;
    /// Horizontal gap between the two pizzas in the two-pizza layout
    pub const TWO_PIZZA_GAP: f32 = 40.0;

    /// Tips awarded for a fulfilled order
    pub const TIP_ON_SUCCESS: u32 = 2;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle_tau(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Convert polar (r, theta) around a center point to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
