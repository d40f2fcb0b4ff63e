//! Shared error type across jitterbug crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, JitterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum JitterError {
    /// Simulated failure of the main processing step.
    #[error("simulated processing failure")]
    Processing,
    /// Simulated failure of the calculation step.
    #[error("simulated calculation failure")]
    Calculation,
    #[error("config: {0}")]
    Config(String),
    #[error("host stats unavailable: {0}")]
    Stats(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl JitterError {
    /// Stable client-facing message. Internal detail stays in the logs and is
    /// never echoed to callers.
    pub fn public_message(&self) -> &'static str {
        match self {
            JitterError::Processing => "An error occurred during complex processing.",
            JitterError::Calculation
            | JitterError::Config(_)
            | JitterError::Stats(_)
            | JitterError::Internal(_) => "An unexpected error occurred.",
        }
    }
}
