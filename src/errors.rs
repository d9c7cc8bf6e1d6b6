//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Numeric degeneracy (zero frequency, zero-impedance division) is never an
/// error: it propagates through the formulas as NaN or infinity.
#[derive(Debug, Error)]
pub enum TlError {
    /// Raised when a parameter mapping lacks one or more required line parameters.
    #[error("missing line parameter(s): {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
    /// Raised when a serialized parameter document cannot be parsed.
    #[error("invalid parameter document: {0}")]
    InvalidDocument(String),
}

/// Convenience result alias.
pub type TlResult<T> = Result<T, TlError>;
