//! Structured results handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderId};
use crate::scheduler::QueueMetrics;

/// A row of the FCFS table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcfsRow {
    pub order_id: OrderId,
    /// Local creation time label, e.g. `3:04:05 PM`.
    pub order_time: String,
    pub meal: String,
}

/// A row of the SJF table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SjfRow {
    pub order_id: OrderId,
    pub distance: u32,
    pub meal: String,
}

impl From<&Order> for FcfsRow {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id(),
            order_time: order.order_time_label(),
            meal: order.meal().to_string(),
        }
    }
}

impl From<&Order> for SjfRow {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id(),
            distance: order.distance(),
            meal: order.meal().to_string(),
        }
    }
}

/// Full view of the simulator after a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSnapshot {
    /// Orders in arrival order.
    pub fcfs_queue: Vec<FcfsRow>,
    /// Orders in ascending distance order.
    pub sjf_queue: Vec<SjfRow>,
    /// Cached meals, oldest first.
    pub fifo_meals: Vec<String>,
    /// Cached customer IDs, most recently used first.
    pub lru_customers: Vec<String>,
    pub fcfs_metrics: QueueMetrics,
    pub sjf_metrics: QueueMetrics,
}
