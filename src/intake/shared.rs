//! Thread-safe handle to a simulator.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{IntakeSnapshot, SchedulingSimulator};
use crate::error::IntakeError;

/// A cloneable, thread-safe simulator handle.
///
/// Every call takes the single lock for its whole duration, so an
/// intake transaction is never interleaved with another.
#[derive(Debug, Clone)]
pub struct SharedSimulator {
    inner: Arc<Mutex<SchedulingSimulator>>,
}

impl SharedSimulator {
    /// Wraps a simulator.
    pub fn new(simulator: SchedulingSimulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulator)),
        }
    }

    /// See [`SchedulingSimulator::place_order`].
    pub fn place_order(
        &self,
        meal: &str,
        distance: i64,
        customer_id: &str,
    ) -> Result<IntakeSnapshot, IntakeError> {
        self.lock()?.place_order(meal, distance, customer_id)
    }

    /// See [`SchedulingSimulator::place_order_raw`].
    pub fn place_order_raw(
        &self,
        meal: &str,
        raw_distance: &str,
        customer_id: &str,
    ) -> Result<IntakeSnapshot, IntakeError> {
        self.lock()?.place_order_raw(meal, raw_distance, customer_id)
    }

    /// See [`SchedulingSimulator::snapshot`].
    pub fn snapshot(&self) -> Result<IntakeSnapshot, IntakeError> {
        Ok(self.lock()?.snapshot())
    }

    /// Number of accepted orders.
    pub fn order_count(&self) -> Result<usize, IntakeError> {
        Ok(self.lock()?.order_count())
    }

    fn lock(&self) -> Result<MutexGuard<'_, SchedulingSimulator>, IntakeError> {
        self.inner.lock().map_err(|_| IntakeError::StatePoisoned)
    }
}

impl From<SchedulingSimulator> for SharedSimulator {
    fn from(simulator: SchedulingSimulator) -> Self {
        Self::new(simulator)
    }
}
