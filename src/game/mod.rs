//! Deterministic game core
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by topping enum order and instance ID)
//! - Exact fractional arithmetic, no float comparisons
//! - No rendering or platform dependencies

pub mod evaluate;
pub mod kitchen;
pub mod layout;
pub mod ledger;
pub mod order;
pub mod result;
pub mod state;

pub use evaluate::{Evaluation, evaluate};
pub use kitchen::Kitchen;
pub use layout::PizzaLayout;
pub use ledger::{PlaceOutcome, PlacementState, ToppingId, ToppingInstance, ToppingLedger};
pub use order::{Order, OrderGenerator, OrderKind};
pub use result::{OrderResult, PlacedTopping, build_result};
pub use state::{Fraction, Topping, ToppingCounts};
