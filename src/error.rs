//! Error types for Vigil
//!
//! The scoring engine itself cannot fail; these cover configuration, the
//! prediction log and lookups performed at the service boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VigilError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid {vital} thresholds: {reason}")]
    InvalidThresholds { vital: String, reason: String },

    #[error("missing identifier: {0}")]
    MissingIdentifier(&'static str),

    #[error("patient not found: {0}")]
    PatientNotFound(String),

    #[error("prediction log unavailable: {0}")]
    Recorder(String),
}

pub type Result<T, E = VigilError> = std::result::Result<T, E>;
