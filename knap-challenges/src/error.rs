use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnapsackError {
    #[error("Item set is empty")]
    EmptyItemSet,

    #[error("Item {id} is invalid: {reason}")]
    InvalidItem { id: u32, reason: String },

    #[error(
        "{algorithm} cannot run on {num_items} items with capacity {capacity} (limit: {limit})"
    )]
    SizeLimitExceeded {
        algorithm: &'static str,
        num_items: usize,
        capacity: u32,
        limit: String,
    },

    #[error("Failed to allocate {what}")]
    AllocationFailed {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl KnapsackError {
    pub fn invalid_item(id: u32, reason: impl Into<String>) -> Self {
        KnapsackError::InvalidItem {
            id,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = KnapsackError> = std::result::Result<T, E>;
