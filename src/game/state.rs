//! Core order and topping types
//!
//! Everything an order or a result record is made of lives here. Fractions
//! stay exact: comparisons cross-multiply in u64, never divide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topping varieties the kitchen stocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topping {
    Mushroom,
    Pepperoni,
    Basil,
    Olive,
    Pepper,
}

impl Topping {
    /// Number of topping varieties
    pub const COUNT: usize = 5;

    /// Every topping, in display order
    pub const ALL: [Topping; Topping::COUNT] = [
        Topping::Mushroom,
        Topping::Pepperoni,
        Topping::Basil,
        Topping::Olive,
        Topping::Pepper,
    ];

    /// Stable index into per-topping tables
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Topping::Mushroom => 0,
            Topping::Pepperoni => 1,
            Topping::Basil => 2,
            Topping::Olive => 3,
            Topping::Pepper => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Topping::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Topping::Mushroom => "Mushroom",
            Topping::Pepperoni => "Pepperoni",
            Topping::Basil => "Basil",
            Topping::Olive => "Olive",
            Topping::Pepper => "Pepper",
        }
    }

    /// Parse from a display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mushroom" => Some(Topping::Mushroom),
            "pepperoni" => Some(Topping::Pepperoni),
            "basil" => Some(Topping::Basil),
            "olive" => Some(Topping::Olive),
            "pepper" => Some(Topping::Pepper),
            _ => None,
        }
    }
}

/// Per-topping slice counts, keyed by `Topping` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToppingCounts([u32; Topping::COUNT]);

impl ToppingCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, topping: Topping) -> u32 {
        self.0[topping.index()]
    }

    #[inline]
    pub fn set(&mut self, topping: Topping, count: u32) {
        self.0[topping.index()] = count;
    }

    #[inline]
    pub fn add(&mut self, topping: Topping, count: u32) {
        self.0[topping.index()] += count;
    }

    /// Total slices across all toppings
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Largest single-topping count
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Number of toppings with a nonzero count
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }

    /// Iterate (topping, count) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Topping, u32)> + '_ {
        Topping::ALL.iter().map(move |&topping| (topping, self.get(topping)))
    }
}

/// An exact fraction of a pizza
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        debug_assert!(denominator > 0, "fraction denominator must be positive");
        Self { numerator, denominator }
    }

    /// Numerator strictly below the denominator
    pub fn is_proper(&self) -> bool {
        self.numerator < self.denominator
    }

    /// Exact equality by cross-multiplication (1/2 equals 2/4)
    pub fn equivalent(&self, other: &Fraction) -> bool {
        self.numerator as u64 * other.denominator as u64
            == other.numerator as u64 * self.denominator as u64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
