//! Order intake simulation for the U-Engine ecosystem.
//!
//! Accepts delivery orders, schedules them under two disciplines
//! (first-come-first-served and shortest-job-first by delivery distance),
//! reports waiting and turnaround statistics for each, and keeps two small
//! caches over the same event stream (FIFO of meals, LRU of customers).
//!
//! # Modules
//!
//! - **`models`**: `Order` and the `OrderRegistry` issuing identifiers
//! - **`scheduler`**: `OrderQueues` (FCFS and SJF views) and `QueueMetrics`
//! - **`cache`**: `FifoCache` and `LruCache` behind `BoundedCache`
//! - **`intake`**: `SchedulingSimulator`, the single entry point
//! - **`validation`**: Input checks run before any state changes
//! - **`config`**, **`clock`**, **`error`**: Parameters, time sources, errors
//!
//! # Usage
//!
//! ```
//! use u_intake::{IntakeError, SchedulingSimulator, SimulatorConfig};
//!
//! let mut sim = SchedulingSimulator::new(SimulatorConfig::default()).unwrap();
//! assert!(sim.snapshot().fcfs_metrics.is_empty());
//!
//! let snapshot = sim.place_order("Pizza", 3, "cust1").unwrap();
//! let summary = snapshot.fcfs_metrics.summary().unwrap();
//! assert_eq!(summary.average_turnaround_time_minutes, 30.0);
//!
//! let err = sim.place_order("Soup", 51, "cust1").unwrap_err();
//! assert!(matches!(err, IntakeError::InvalidInput(_)));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::SimulatorConfig;
pub use error::{ConfigError, IntakeError};
pub use intake::{IntakeSnapshot, SchedulingSimulator, SharedSimulator};
