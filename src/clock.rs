//! Time sources for order creation timestamps.
//!
//! The simulator reads the clock exactly once per accepted order. Every
//! time value an order exposes (display label, arrival minutes) is derived
//! from that single reading.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// A source of "now".
pub trait Clock: Send + Sync {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A manually driven clock.
///
/// Clones share the same instant, so a test can keep one handle while the
/// simulator owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `instant`.
    pub fn at<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(instant.timestamp_millis())),
        }
    }

    /// Creates a clock frozen at the Unix epoch.
    pub fn at_epoch() -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set<Tz: TimeZone>(&self, instant: DateTime<Tz>) {
        self.millis
            .store(instant.timestamp_millis(), Ordering::SeqCst);
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        let millis = self.millis.load(Ordering::SeqCst);
        // Out-of-range instants clamp to the epoch.
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
            .with_timezone(&Local)
    }
}
