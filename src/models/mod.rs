//! Intake domain models.
//!
//! Provides the order record and the identifier registry. An order is
//! created once by the intake coordinator and never mutated afterwards.
//!
//! # Time Representation
//!
//! Each order carries one canonical creation timestamp. The display label
//! and the numeric arrival time used by the metrics engine are both derived
//! from it, so the two can never disagree.

mod order;
mod registry;

pub use order::{Order, OrderId};
pub use registry::OrderRegistry;
