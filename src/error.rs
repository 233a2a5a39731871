//! Error types for HealthGuard

use thiserror::Error;

/// Errors raised by the operations around the scoring core.
///
/// Scoring itself never fails: unrecognized categories fall back to a neutral
/// score instead of producing one of these.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Invalid self-assessment: {0}")]
    InvalidAssessment(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Health note must not be empty")]
    EmptyNote,

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
