//! Error types.
//!
//! All failures are local input rejections: nothing here is retryable and
//! nothing is fatal to the process. An empty queue is not an error; see
//! [`QueueMetrics::Empty`](crate::scheduler::QueueMetrics::Empty).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the intake coordinator.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// One or more input rules were violated. No state was mutated.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// The simulator was constructed with unusable parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// A thread panicked while holding the shared simulator.
    #[error("simulator state poisoned by a panicked holder")]
    StatePoisoned,
}

impl IntakeError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            IntakeError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

/// Rejected simulator parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cache size must be at least 1")]
    ZeroCacheSize,
    #[error("burst minutes per distance must be at least 1")]
    ZeroBurstFactor,
    #[error("distance range is inverted: min {min} > max {max}")]
    InvertedDistanceRange { min: u32, max: u32 },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
