//! Error types for ArchSim

use thiserror::Error;

/// ArchSim error type
#[derive(Error, Debug)]
pub enum ArchsimError {
    /// Duplicate region code in a registry
    #[error("duplicate region code: {0}")]
    DuplicateRegion(String),

    /// Invalid region definition
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Configuration error
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Result type for ArchSim
pub type ArchsimResult<T> = Result<T, ArchsimError>;
