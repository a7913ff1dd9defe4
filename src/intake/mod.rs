//! Order intake coordinator.
//!
//! [`SchedulingSimulator`] owns every piece of session state (identifier
//! registry, both queues, both caches) and exposes one transaction,
//! [`place_order`](SchedulingSimulator::place_order): validate, register,
//! enqueue, touch both caches, recompute both metrics, and return an
//! [`IntakeSnapshot`] for the presentation layer.
//!
//! A rejected submission returns before any state changes, so it never
//! consumes an order identifier.
//!
//! For multi-threaded hosts, [`SharedSimulator`] puts the whole aggregate
//! behind one mutex so each transaction runs under a single lock.

mod shared;
mod simulator;
mod snapshot;

pub use shared::SharedSimulator;
pub use simulator::SchedulingSimulator;
pub use snapshot::{FcfsRow, IntakeSnapshot, SjfRow};
