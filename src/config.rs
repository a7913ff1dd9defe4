//! Simulator parameters.
//!
//! Fixed defaults mirror the intake desk the simulator models: five-entry
//! caches, ten minutes of service per unit of delivery distance, and a
//! distance range of `[0, 50]`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default capacity of both the meal (FIFO) and customer (LRU) caches.
pub const DEFAULT_CACHE_SIZE: usize = 5;
/// Default service minutes per unit of delivery distance.
pub const DEFAULT_BURST_MINUTES_PER_DISTANCE: u32 = 10;
/// Smallest accepted delivery distance.
pub const DEFAULT_MIN_DISTANCE: u32 = 0;
/// Largest accepted delivery distance.
pub const DEFAULT_MAX_DISTANCE: u32 = 50;

/// Tunable parameters of a [`SchedulingSimulator`](crate::SchedulingSimulator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Capacity of each cache.
    pub cache_size: usize,
    /// Burst time factor: `burst = distance * factor` minutes.
    pub burst_minutes_per_distance: u32,
    /// Inclusive lower bound on delivery distance.
    pub min_distance: u32,
    /// Inclusive upper bound on delivery distance.
    pub max_distance: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            burst_minutes_per_distance: DEFAULT_BURST_MINUTES_PER_DISTANCE,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl SimulatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity of both caches.
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    /// Sets the service minutes per unit of distance.
    pub fn with_burst_minutes_per_distance(mut self, factor: u32) -> Self {
        self.burst_minutes_per_distance = factor;
        self
    }

    /// Sets the inclusive accepted distance range.
    pub fn with_distance_range(mut self, min: u32, max: u32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Checks that the parameters describe a usable simulator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_size == 0 {
            return Err(ConfigError::ZeroCacheSize);
        }
        if self.burst_minutes_per_distance == 0 {
            return Err(ConfigError::ZeroBurstFactor);
        }
        if self.min_distance > self.max_distance {
            return Err(ConfigError::InvertedDistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        Ok(())
    }

    /// `distance` as a `u32` if it lies in the accepted range.
    #[inline]
    pub fn checked_distance(&self, distance: i64) -> Option<u32> {
        u32::try_from(distance)
            .ok()
            .filter(|d| (self.min_distance..=self.max_distance).contains(d))
    }
}
