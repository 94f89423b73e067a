//! Error type for estimator configuration and startup.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// A configuration value is out of range (e.g. zero iterations).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The pseudo-random generator could not be constructed.
    #[error("startup failed: {0}")]
    Startup(String),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
