//! Order queues and queue metrics.
//!
//! Maintains the FCFS and SJF orderings of accepted orders and evaluates
//! each ordering with a single-server simulation.
//!
//! # Algorithm
//!
//! `OrderQueues` keeps the SJF ordering by binary-search insertion, which
//! yields the same sequence as a stable sort by distance over arrival order.
//!
//! # Metrics
//!
//! `QueueMetrics` reports average waiting and turnaround time, or an
//! explicit `Empty` state when no order exists.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod metrics;
mod queues;

pub use metrics::{simulate, MetricsSummary, OrderTiming, QueueMetrics};
pub use queues::{Discipline, OrderQueues};
