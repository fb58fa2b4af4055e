//! Error type shared by the spectrum tools, the dataset and the dispatch layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectralError {
    /// Non-positive sampling period, or an empty series where samples are required
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Axis length mismatch (x: {x}, y: {y}, z: {z} samples)")]
    DimensionMismatch { x: usize, y: usize, z: usize },

    /// Ingestion source does not hold exactly three equal-length numeric columns
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unknown axis '{0}' (expected x, y or z)")]
    UnknownAxis(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpectralError>;

/// Reject sampling periods that are not strictly positive and finite
pub(crate) fn validate_period(period: f64) -> Result<()> {
    if period.is_finite() && period > 0.0 {
        Ok(())
    } else {
        Err(SpectralError::InvalidInput(format!(
            "sampling period must be a positive number of seconds, got {period}"
        )))
    }
}
