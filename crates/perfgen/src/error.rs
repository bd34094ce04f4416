//! Error types.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` boilerplate we would otherwise write by
//! hand for every enum.

use thiserror::Error;

/// A parameter set that cannot produce a layout.
///
/// Always detected before any primitive is emitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("edge offset must be >= 0 (got {0})")]
    NegativeOffset(f64),

    #[error("offset too large for given {shape} dimensions")]
    OffsetTooLarge { shape: &'static str },

    #[error("spacing too small for the plate: more than {limit} hole positions")]
    TooManyHoles { limit: usize },
}

/// Errors from writing a drawing.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write drawing: {0}")]
    Io(#[from] std::io::Error),
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(value)
}
