//! The scheduling simulator aggregate.

use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use super::snapshot::{FcfsRow, IntakeSnapshot, SjfRow};
use crate::cache::{BoundedCache, CacheEvent, FifoCache, LruCache};
use crate::clock::{Clock, SystemClock};
use crate::config::SimulatorConfig;
use crate::error::{ConfigError, IntakeError};
use crate::models::{Order, OrderId, OrderRegistry};
use crate::scheduler::{Discipline, OrderQueues, QueueMetrics};
use crate::validation::{validate_order, validate_raw_order, ValidationError};

/// One intake session: identifier registry, both queues, both caches.
///
/// Construct one per session. Independent instances share nothing.
///
/// # Example
///
/// ```
/// use u_intake::{SchedulingSimulator, SimulatorConfig};
///
/// let mut sim = SchedulingSimulator::new(SimulatorConfig::default()).unwrap();
/// sim.place_order("Pizza", 5, "cust1").unwrap();
/// let snapshot = sim.place_order("Soup", 2, "cust2").unwrap();
///
/// assert_eq!(snapshot.sjf_queue[0].meal, "Soup");
/// assert_eq!(snapshot.fifo_meals, vec!["Pizza", "Soup"]);
/// assert_eq!(snapshot.lru_customers, vec!["cust2", "cust1"]);
/// ```
pub struct SchedulingSimulator {
    config: SimulatorConfig,
    clock: Box<dyn Clock>,
    registry: OrderRegistry,
    queues: OrderQueues,
    meal_cache: FifoCache<String>,
    customer_cache: LruCache<String>,
}

impl SchedulingSimulator {
    /// Creates a simulator reading the wall clock.
    pub fn new(config: SimulatorConfig) -> Result<Self, IntakeError> {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a simulator reading creation timestamps from `clock`.
    pub fn with_clock<C: Clock + 'static>(
        config: SimulatorConfig,
        clock: C,
    ) -> Result<Self, IntakeError> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.cache_size).ok_or(ConfigError::ZeroCacheSize)?;
        Ok(Self {
            meal_cache: FifoCache::new(capacity),
            customer_cache: LruCache::new(capacity),
            registry: OrderRegistry::new(),
            queues: OrderQueues::new(),
            clock: Box::new(clock),
            config,
        })
    }

    /// Accepts one order and returns the updated state.
    ///
    /// Meal and customer ID are trimmed before they are stored, so
    /// `" Pizza"` and `"Pizza"` name the same cached meal.
    ///
    /// # Errors
    /// `IntakeError::InvalidInput` when the customer ID or meal is blank or
    /// the distance is out of range. Nothing is mutated in that case.
    pub fn place_order(
        &mut self,
        meal: &str,
        distance: i64,
        customer_id: &str,
    ) -> Result<IntakeSnapshot, IntakeError> {
        let distance = validate_order(meal, distance, customer_id, &self.config)
            .map_err(reject)?;
        Ok(self.accept(meal, distance, customer_id))
    }

    /// Accepts one order whose distance is still raw text.
    ///
    /// # Errors
    /// As [`place_order`](Self::place_order), plus `DistanceNotInteger`
    /// when the distance does not parse.
    pub fn place_order_raw(
        &mut self,
        meal: &str,
        raw_distance: &str,
        customer_id: &str,
    ) -> Result<IntakeSnapshot, IntakeError> {
        let distance = validate_raw_order(meal, raw_distance, customer_id, &self.config)
            .map_err(reject)?;
        Ok(self.accept(meal, distance, customer_id))
    }

    /// Current state without placing an order.
    pub fn snapshot(&self) -> IntakeSnapshot {
        IntakeSnapshot {
            fcfs_queue: self.queues.fcfs_view().iter().map(FcfsRow::from).collect(),
            sjf_queue: self.queues.sjf_view().into_iter().map(SjfRow::from).collect(),
            fifo_meals: self.meal_cache.snapshot(),
            lru_customers: self.customer_cache.snapshot(),
            fcfs_metrics: self.metrics(Discipline::Fcfs),
            sjf_metrics: self.metrics(Discipline::Sjf),
        }
    }

    /// Metrics for one queue view.
    pub fn metrics(&self, discipline: Discipline) -> QueueMetrics {
        let metrics = QueueMetrics::calculate(
            self.queues.view(discipline),
            self.config.burst_minutes_per_distance,
        );
        if let Some(summary) = metrics.summary() {
            debug!(
                discipline = discipline.name(),
                orders = summary.order_count,
                avg_waiting = summary.average_waiting_time_minutes,
                avg_turnaround = summary.average_turnaround_time_minutes,
                "queue metrics"
            );
        }
        metrics
    }

    /// Both queues.
    pub fn queues(&self) -> &OrderQueues {
        &self.queues
    }

    /// Number of accepted orders.
    pub fn order_count(&self) -> usize {
        self.queues.len()
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    fn accept(&mut self, meal: &str, distance: u32, customer_id: &str) -> IntakeSnapshot {
        let meal = meal.trim();
        let customer_id = customer_id.trim();

        let id: OrderId = self.registry.next_order_id();
        let order = Order::new(id, self.clock.now(), meal, distance);
        info!(
            order_id = id,
            meal,
            distance,
            arrival_minutes = order.arrival_minutes(),
            "order accepted"
        );

        self.queues.submit(order);
        log_cache_event("meal", meal, self.meal_cache.touch(meal.to_string()));
        log_cache_event(
            "customer",
            customer_id,
            self.customer_cache.touch(customer_id.to_string()),
        );

        self.snapshot()
    }
}

fn reject(errors: Vec<ValidationError>) -> IntakeError {
    warn!(
        errors = errors.len(),
        first = errors.first().map(|e| e.message.as_str()),
        "order rejected"
    );
    IntakeError::InvalidInput(errors)
}

fn log_cache_event(cache: &'static str, key: &str, event: CacheEvent<String>) {
    match event {
        CacheEvent::Hit => debug!(cache, key, "cache hit"),
        CacheEvent::Inserted => debug!(cache, key, "cache insert"),
        CacheEvent::Evicted(old) => debug!(cache, key, evicted = %old, "cache evict"),
    }
}

impl fmt::Debug for SchedulingSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulingSimulator")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("orders", &self.queues.len())
            .field("meal_cache", &self.meal_cache)
            .field("customer_cache", &self.customer_cache)
            .finish()
    }
}
