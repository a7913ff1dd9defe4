//! Order model.
//!
//! An order is a single delivery request accepted at the intake desk. Its
//! delivery distance doubles as the estimate of the service ("burst") time
//! the order needs.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Order identifier, unique and increasing in creation order.
pub type OrderId = u64;

/// Format of the human-readable creation label (e.g. `3:04:05 PM`).
const ORDER_TIME_FORMAT: &str = "%-I:%M:%S %p";

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// An accepted delivery order.
///
/// Immutable once created. The customer who placed the order is not part
/// of the record; customers only feed the LRU cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    created_at: DateTime<Local>,
    meal: String,
    distance: u32,
}

impl Order {
    /// Creates an order. Inputs are expected to be validated already.
    pub fn new(
        id: OrderId,
        created_at: DateTime<Local>,
        meal: impl Into<String>,
        distance: u32,
    ) -> Self {
        Self {
            id,
            created_at,
            meal: meal.into(),
            distance,
        }
    }

    /// Order identifier.
    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Canonical creation timestamp.
    #[inline]
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Meal label.
    #[inline]
    pub fn meal(&self) -> &str {
        &self.meal
    }

    /// Delivery distance.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Local wall-clock label for display, e.g. `9:41:07 AM`.
    pub fn order_time_label(&self) -> String {
        self.created_at.format(ORDER_TIME_FORMAT).to_string()
    }

    /// Arrival time in (fractional) minutes since the Unix epoch.
    pub fn arrival_minutes(&self) -> f64 {
        self.created_at.timestamp_millis() as f64 / MILLIS_PER_MINUTE
    }

    /// Service time in minutes given the distance-to-minutes factor.
    #[inline]
    pub fn burst_minutes(&self, minutes_per_distance: u32) -> u64 {
        u64::from(self.distance) * u64::from(minutes_per_distance)
    }
}
