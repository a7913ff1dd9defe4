//! Order identifier registry.

use serde::{Deserialize, Serialize};

use super::OrderId;

/// Issues order identifiers.
///
/// Identifiers start at 1 and increase by one per issued ID. Callers must
/// validate a submission before asking for an ID so that rejected input
/// never consumes one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRegistry {
    next_id: OrderId,
}

impl OrderRegistry {
    /// Creates a registry whose first identifier is 1.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Returns a fresh identifier.
    pub fn next_order_id(&mut self) -> OrderId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
