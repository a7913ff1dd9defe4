//! FCFS and SJF orderings over one order set.
//!
//! # Algorithm
//!
//! Orders are stored once, in arrival order, which is the FCFS queue.
//! The SJF queue is a list of positions into that storage kept sorted by
//! distance. A new order is placed with a binary search for the first
//! position whose distance is strictly greater than its own, so equal
//! distances keep their arrival order (the result of a stable sort)
//! without re-sorting the whole queue.
//!
//! # Complexity
//! O(log n) search plus O(n) shift per insertion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Order, OrderId};

/// Queue ordering discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served: arrival order.
    Fcfs,
    /// Shortest-Job-First: ascending distance, arrival order on ties.
    Sjf,
}

impl Discipline {
    /// Short name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
        }
    }
}

/// The two queues of the intake desk.
///
/// Both views always contain exactly the same orders; they differ only in
/// order.
#[derive(Debug, Clone, Default)]
pub struct OrderQueues {
    /// Orders in arrival order.
    orders: Vec<Order>,
    /// Positions into `orders`, ascending by distance.
    sjf: Vec<usize>,
}

impl OrderQueues {
    /// Creates empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an accepted order to both queues.
    pub fn submit(&mut self, order: Order) {
        let distance = order.distance();
        let position = self.orders.len();
        let slot = self
            .sjf
            .partition_point(|&i| self.orders[i].distance() <= distance);

        debug!(
            order_id = order.id(),
            distance,
            fcfs_position = position,
            sjf_position = slot,
            "order queued"
        );

        self.orders.push(order);
        self.sjf.insert(slot, position);
    }

    /// Orders in arrival order.
    pub fn fcfs_view(&self) -> &[Order] {
        &self.orders
    }

    /// Orders in ascending distance order.
    pub fn sjf_view(&self) -> Vec<&Order> {
        self.sjf.iter().map(|&i| &self.orders[i]).collect()
    }

    /// Orders as sequenced by `discipline`.
    pub fn view(&self, discipline: Discipline) -> Vec<&Order> {
        match discipline {
            Discipline::Fcfs => self.orders.iter().collect(),
            Discipline::Sjf => self.sjf_view(),
        }
    }

    /// Looks up an order by identifier.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    /// Number of queued orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order has been submitted.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
