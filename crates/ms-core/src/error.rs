//! Error types for MassStat

use thiserror::Error;

/// MassStat error type
#[derive(Error, Debug)]
pub enum Error {
    /// Calibration or a summary statistic was requested on an empty sample
    #[error("empty sample: at least one observation is required")]
    EmptySample,

    /// A probability or value falls outside the domain of the computation
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
