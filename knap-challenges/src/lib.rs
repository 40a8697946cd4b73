mod error;
pub use error::*;
pub mod knapsack;

/// Relative tolerance used when comparing a reported total value against the
/// value recomputed from a selection.
pub const VALUE_TOLERANCE: f64 = 1e-6;
