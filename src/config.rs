//! Order generation configuration
//!
//! Validated once when a generator is built; generation never re-checks.
//! Every error here is a startup problem, not something a player can cause.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_GENERATION_RETRIES, MIN_TOPPING_TYPES, SLICE_OPTIONS};
use crate::game::Topping;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("slice options must not be empty")]
    NoSliceOptions,
    #[error("slice option {0} is too small, orders need at least 2 slices")]
    SliceOptionTooSmall(u32),
    #[error("min topping types must be in 1..={max}, got {found}")]
    MinToppingTypesOutOfRange { found: u32, max: u32 },
    #[error("min topping types {min_types} cannot fit in the smallest slice option {smallest}")]
    MinToppingTypesTooLargeForSlices { min_types: u32, smallest: u32 },
    #[error("generation retry cap must be nonzero")]
    ZeroRetryCap,
    #[error("no order with {min_types} distinct toppings found in {retries} draws")]
    DiversityUnreachable { min_types: u32, retries: u32 },
}

/// Knobs for the order generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Denominators orders may use; also the slice counts the board offers
    pub slice_options: Vec<u32>,
    /// Minimum distinct topping types per generated order
    pub min_topping_types: u32,
    /// Cap on the proper-order diversity retry loop
    pub max_generation_retries: u32,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            slice_options: SLICE_OPTIONS.to_vec(),
            min_topping_types: MIN_TOPPING_TYPES,
            max_generation_retries: MAX_GENERATION_RETRIES,
        }
    }
}

impl OrderConfig {
    /// Check every generation precondition
    ///
    /// A config that passes keeps both generators total: every random range
    /// they draw from is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slice_options.is_empty() {
            return Err(ConfigError::NoSliceOptions);
        }
        if let Some(&small) = self.slice_options.iter().find(|&&option| option < 2) {
            return Err(ConfigError::SliceOptionTooSmall(small));
        }
        if self.min_topping_types == 0 || self.min_topping_types > Topping::COUNT as u32 {
            return Err(ConfigError::MinToppingTypesOutOfRange {
                found: self.min_topping_types,
                max: Topping::COUNT as u32,
            });
        }
        let smallest = self.slice_options.iter().copied().min().unwrap_or(0);
        if self.min_topping_types > smallest {
            return Err(ConfigError::MinToppingTypesTooLargeForSlices {
                min_types: self.min_topping_types,
                smallest,
            });
        }
        if self.max_generation_retries == 0 {
            return Err(ConfigError::ZeroRetryCap);
        }
        Ok(())
    }
}
