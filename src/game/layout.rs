//! Pizza board geometry
//!
//! Maps 2D drop coordinates to pizza and slice indices. Slice 0 starts at the
//! positive-x axis and indices increase with angle; in the two-pizza layout
//! the second pizza's slices follow the first's in one global index space.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::*;
use crate::{normalize_angle_tau, polar_to_cartesian};

/// Board layout for one or two pizzas cut into equal slices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaLayout {
    /// Number of pizzas on the board (0 until the player picks)
    pub pizza_count: u8,
    /// Slices per pizza (0 until the player picks)
    pub slice_count: u32,
    /// Pizza center x positions paired with their pizza index
    pub centers: Vec<(f32, u8)>,
    /// Shared vertical center of every pizza
    pub center_y: f32,
    /// Shared outer radius
    pub outer_radius: f32,
}

impl PizzaLayout {
    /// Board before the player has selected anything
    pub fn unconfigured() -> Self {
        Self::new(0, 0)
    }

    /// Lay out pizzas on the board: one centered, two side by side
    ///
    /// Counts outside 1..=2 produce an empty (not ready) board.
    pub fn new(pizza_count: u8, slice_count: u32) -> Self {
        let mid = BOARD_WIDTH / 2.0;
        let centers = match pizza_count {
            1 => vec![(mid, 0)],
            2 => {
                let offset = PIZZA_OUTER_RADIUS + TWO_PIZZA_GAP / 2.0;
                vec![(mid - offset, 0), (mid + offset, 1)]
            }
            _ => Vec::new(),
        };
        Self {
            pizza_count,
            slice_count,
            centers,
            center_y: BOARD_HEIGHT / 2.0,
            outer_radius: PIZZA_OUTER_RADIUS,
        }
    }

    /// True once the board can accept toppings
    pub fn is_ready(&self) -> bool {
        !self.centers.is_empty() && self.slice_count > 0
    }

    /// Which pizza a point lands on, if any
    pub fn locate_pizza(&self, pos: Vec2) -> Option<u8> {
        let radius_sq = self.outer_radius * self.outer_radius;
        for &(center_x, index) in &self.centers {
            let dx = pos.x - center_x;
            let dy = pos.y - self.center_y;
            if dx * dx + dy * dy <= radius_sq {
                return Some(index);
            }
        }
        None
    }

    /// Center point of a pizza by index
    pub fn pizza_center(&self, pizza: u8) -> Option<Vec2> {
        self.centers
            .iter()
            .find(|&&(_, index)| index == pizza)
            .map(|&(center_x, _)| Vec2::new(center_x, self.center_y))
    }

    /// Local slice index of a point around the given pizza center
    ///
    /// Returns 0 when no slicing is configured; placement treats that board
    /// as not ready before this matters.
    pub fn slice_index_for(&self, pos: Vec2, pizza_center_x: f32) -> u32 {
        if self.slice_count == 0 {
            return 0;
        }
        let angle = (pos.y - self.center_y).atan2(pos.x - pizza_center_x);
        let angle = normalize_angle_tau(angle);
        let arc = TAU / self.slice_count as f32;
        // min() guards the float wraparound right at 2π
        ((angle / arc) as u32).min(self.slice_count - 1)
    }

    /// Global slice index of a point
    ///
    /// Pizza 0 owns slices [0, S), pizza 1 owns [S, 2S). None when the point
    /// is outside every pizza.
    pub fn global_slice_index(&self, pos: Vec2) -> Option<u32> {
        let pizza = self.locate_pizza(pos)?;
        let center = self.pizza_center(pizza)?;
        Some(pizza as u32 * self.slice_count + self.slice_index_for(pos, center.x))
    }

    /// Point at the middle of a slice, for snapping toppings into place
    pub fn slice_center(&self, global_slice: u32) -> Option<Vec2> {
        if !self.is_ready() {
            return None;
        }
        let pizza = (global_slice / self.slice_count) as u8;
        let local = global_slice % self.slice_count;
        let center = self.pizza_center(pizza)?;
        let arc = TAU / self.slice_count as f32;
        let theta = (local as f32 + 0.5) * arc;
        Some(polar_to_cartesian(center, self.outer_radius / 2.0, theta))
    }
}
