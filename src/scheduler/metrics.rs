//! Queue performance metrics.
//!
//! Simulates a single non-preemptive server draining a queue in the given
//! order and reports per-order and average timings.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Burst | distance × burst factor |
//! | Start | max(server free time, arrival) |
//! | Waiting | max(0, server free time − arrival) |
//! | Turnaround | waiting + burst |
//!
//! The server clock starts at 0 and all times are in minutes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderId};

/// Simulated timing of one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTiming {
    /// Order identifier.
    pub order_id: OrderId,
    /// Service start (minutes).
    pub start: f64,
    /// Service completion (minutes).
    pub completion: f64,
    /// Time spent queued before service (minutes).
    pub waiting: f64,
    /// Waiting plus burst (minutes).
    pub turnaround: f64,
}

/// Averages over a non-empty queue, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Mean waiting time (minutes).
    pub average_waiting_time_minutes: f64,
    /// Mean turnaround time (minutes).
    pub average_turnaround_time_minutes: f64,
    /// Number of orders averaged.
    pub order_count: usize,
}

/// Metrics for one queue view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueueMetrics {
    /// No orders yet; averages are undefined.
    Empty,
    /// Averages over at least one order.
    Computed(MetricsSummary),
}

/// Runs the single-server simulation over `orders` in sequence.
pub fn simulate<'a, I>(orders: I, burst_minutes_per_distance: u32) -> Vec<OrderTiming>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut current_time = 0.0_f64;

    orders
        .into_iter()
        .map(|order| {
            let arrival = order.arrival_minutes();
            let burst = order.burst_minutes(burst_minutes_per_distance) as f64;
            let waiting = (current_time - arrival).max(0.0);
            let start = current_time.max(arrival);
            current_time = start + burst;

            OrderTiming {
                order_id: order.id(),
                start,
                completion: current_time,
                waiting,
                turnaround: waiting + burst,
            }
        })
        .collect()
}

impl QueueMetrics {
    /// Computes average waiting and turnaround times for a queue.
    ///
    /// # Arguments
    /// * `orders` - The queue, in service order.
    /// * `burst_minutes_per_distance` - Minutes of service per unit of distance.
    pub fn calculate<'a, I>(orders: I, burst_minutes_per_distance: u32) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        Self::from_timings(&simulate(orders, burst_minutes_per_distance))
    }

    /// Aggregates already simulated timings.
    pub fn from_timings(timings: &[OrderTiming]) -> Self {
        if timings.is_empty() {
            return QueueMetrics::Empty;
        }

        let count = timings.len() as f64;
        let total_waiting: f64 = timings.iter().map(|t| t.waiting).sum();
        let total_turnaround: f64 = timings.iter().map(|t| t.turnaround).sum();

        QueueMetrics::Computed(MetricsSummary {
            average_waiting_time_minutes: round_2dp(total_waiting / count),
            average_turnaround_time_minutes: round_2dp(total_turnaround / count),
            order_count: timings.len(),
        })
    }

    /// The averages, if any order exists.
    pub fn summary(&self) -> Option<&MetricsSummary> {
        match self {
            QueueMetrics::Empty => None,
            QueueMetrics::Computed(summary) => Some(summary),
        }
    }

    /// Whether the queue had no orders.
    pub fn is_empty(&self) -> bool {
        matches!(self, QueueMetrics::Empty)
    }
}

impl fmt::Display for QueueMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueMetrics::Empty => {
                writeln!(f, "Average Waiting Time: N/A")?;
                write!(f, "Average Turnaround Time: N/A")
            }
            QueueMetrics::Computed(s) => {
                writeln!(
                    f,
                    "Average Waiting Time: {:.2} mins",
                    s.average_waiting_time_minutes
                )?;
                write!(
                    f,
                    "Average Turnaround Time: {:.2} mins",
                    s.average_turnaround_time_minutes
                )
            }
        }
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    /// Order arriving `arrival_min` minutes after the epoch.
    fn make_order(id: OrderId, arrival_min: i64, distance: u32) -> Order {
        let created = Local.timestamp_millis_opt(arrival_min * 60_000).unwrap();
        Order::new(id, created, "meal", distance)
    }

    fn summary(metrics: &QueueMetrics) -> &MetricsSummary {
        metrics.summary().expect("non-empty queue")
    }

    #[test]
    fn test_single_order() {
        let orders = vec![make_order(1, 1_000, 7)];
        let metrics = QueueMetrics::calculate(&orders, 10);
        let s = summary(&metrics);
        assert!((s.average_waiting_time_minutes - 0.0).abs() < 1e-10);
        assert!((s.average_turnaround_time_minutes - 70.0).abs() < 1e-10);
        assert_eq!(s.order_count, 1);
    }

    #[test]
    fn test_back_to_back_arrivals() {
        // All arrive at t=100: bursts 50, 20, 80
        let orders = vec![
            make_order(1, 100, 5),
            make_order(2, 100, 2),
            make_order(3, 100, 8),
        ];
        let timings = simulate(&orders, 10);
        assert!((timings[0].waiting - 0.0).abs() < 1e-10);
        assert!((timings[1].waiting - 50.0).abs() < 1e-10);
        assert!((timings[2].waiting - 70.0).abs() < 1e-10);
        assert!((timings[2].completion - 250.0).abs() < 1e-10);

        let s = QueueMetrics::from_timings(&timings);
        let s = summary(&s);
        // waiting (0 + 50 + 70) / 3, turnaround (50 + 70 + 150) / 3
        assert!((s.average_waiting_time_minutes - 40.0).abs() < 1e-10);
        assert!((s.average_turnaround_time_minutes - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_order_beats_fcfs_order() {
        let fcfs = vec![
            make_order(1, 100, 5),
            make_order(2, 100, 2),
            make_order(3, 100, 8),
        ];
        let sjf = vec![fcfs[1].clone(), fcfs[0].clone(), fcfs[2].clone()];

        let fcfs_wait = summary(&QueueMetrics::calculate(&fcfs, 10)).average_waiting_time_minutes;
        let sjf_metrics = QueueMetrics::calculate(&sjf, 10);
        let sjf_wait = summary(&sjf_metrics).average_waiting_time_minutes;
        // SJF: waits 0, 20, 70 → 30
        assert!((sjf_wait - 30.0).abs() < 1e-10);
        assert!(sjf_wait < fcfs_wait);
    }

    #[test]
    fn test_idle_gap_resets_waiting() {
        // First finishes at 110, second arrives at 200 → no wait
        let orders = vec![make_order(1, 100, 1), make_order(2, 200, 1)];
        let timings = simulate(&orders, 10);
        assert!((timings[1].waiting - 0.0).abs() < 1e-10);
        assert!((timings[1].start - 200.0).abs() < 1e-10);
        assert!((timings[1].completion - 210.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_distance() {
        let orders = vec![make_order(1, 5, 0)];
        let metrics = QueueMetrics::calculate(&orders, 10);
        assert!((summary(&metrics).average_turnaround_time_minutes - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_rounding_two_decimals() {
        // Waits 0, 10, 10 → 6.666.. → 6.67
        let orders = vec![
            make_order(1, 0, 1),
            make_order(2, 0, 1),
            make_order(3, 10, 1),
        ];
        let metrics = QueueMetrics::calculate(&orders, 10);
        assert!((summary(&metrics).average_waiting_time_minutes - 6.67).abs() < 1e-10);
    }

    #[test]
    fn test_empty_queue_is_explicit() {
        let orders: Vec<Order> = Vec::new();
        let metrics = QueueMetrics::calculate(&orders, 10);
        assert_eq!(metrics, QueueMetrics::Empty);
        assert!(metrics.is_empty());
        assert!(metrics.summary().is_none());
        assert!(metrics.to_string().contains("N/A"));
    }

    #[test]
    fn test_display_formats_two_decimals() {
        let orders = vec![make_order(1, 0, 3)];
        let text = QueueMetrics::calculate(&orders, 10).to_string();
        assert_eq!(
            text,
            "Average Waiting Time: 0.00 mins\nAverage Turnaround Time: 30.00 mins"
        );
    }

    #[test]
    fn test_serialized_status_tag() {
        let empty = serde_json::to_value(QueueMetrics::Empty).unwrap();
        assert_eq!(empty["status"], "empty");

        let orders = vec![make_order(1, 0, 3)];
        let computed = serde_json::to_value(QueueMetrics::calculate(&orders, 10)).unwrap();
        assert_eq!(computed["status"], "computed");
        assert_eq!(computed["average_turnaround_time_minutes"], 30.0);
    }
}
