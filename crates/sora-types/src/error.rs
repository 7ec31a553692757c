use thiserror::Error;

/// Validation failures for estimator input. Both are non-fatal: the caller
/// surfaces them for correction and the estimate is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Requested GPU model is not in the catalog.
    #[error("unknown GPU model: {name}")]
    UnknownModel { name: String },
    /// Quantity must be a positive integer.
    #[error("quantity must be at least 1, got {quantity}")]
    InvalidQuantity { quantity: u32 },
}
