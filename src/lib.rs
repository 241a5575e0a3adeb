//! Radiometry: closed-form radiometric and photometric calculations
//!
//! This crate provides the formulas behind a radiometry worksheet (photon
//! energy, radiant intensity, irradiance, exitance, radiance, illuminance
//! and solid angles) together with the nine worksheet parts that evaluate
//! them against fixed constants and render a labeled report.

use thiserror::Error;

pub mod constants;
pub mod geometry;
pub mod parts;
pub mod radiometry;
pub mod report;

// Re-export commonly used types
pub use geometry::{Angle, SolidAngle};
pub use report::{Notation, OutputFormat, Report, Section};

/// Main error type for the radiometry library
#[derive(Debug, Error)]
pub enum RadiometryError {
    #[error("{quantity} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending quantity
        quantity: &'static str,
        /// The rejected value
        value: f64,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Unknown worksheet part: {0} (expected 1-9)")]
    UnknownPart(u8),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for radiometry operations
pub type Result<T> = std::result::Result<T, RadiometryError>;

/// Reject zero, negative and non-finite values for a named quantity
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RadiometryError::NonPositive { quantity, value })
    }
}
