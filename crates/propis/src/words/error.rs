//! Error types for amount conversion.

use thiserror::Error;

/// An error that prevents an amount from being spelled out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The amount is NaN.
    #[error("amount is not a number")]
    NotANumber,

    /// The integer magnitude is infinite or too large for the scale table.
    #[error("amount {amount} is out of range, magnitude must be below 10^15")]
    OutOfRange { amount: f64 },
}
