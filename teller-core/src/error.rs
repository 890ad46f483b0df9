//! Error types for the teller

use crate::types::AmountKind;
use thiserror::Error;

/// Result type for teller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Teller errors
///
/// Exactly two kinds exist: an amount that is not numeric, and an amount
/// that is numeric but negative. Everything else a caller can get wrong
/// (missing account, duplicate account, insufficient funds, same-account
/// transfer, bad gamble inputs) is an ordinary [`Outcome`](crate::Outcome)
/// or [`GambleOutcome`](crate::GambleOutcome), not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Amount text did not parse as a number
    #[error("{0} must be a number.")]
    NotANumber(AmountKind),

    /// Amount parsed but is negative
    #[error("{0} cannot be negative.")]
    Negative(AmountKind),
}
