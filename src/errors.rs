//! Error types for vaxassist
//!
//! The recommendation rules never fail; errors only arise from contract
//! violations on the flow graph, configuration and I/O.

use thiserror::Error;

/// Main error type for the questionnaire and recommendation system
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A question id that is not part of the flow graph
    #[error("Unknown question id: {id}")]
    UnknownQuestion { id: String },

    /// An answer was submitted after the dialogue reached its terminal state
    #[error("Questionnaire already complete, no further answers accepted")]
    SessionComplete,

    /// The flow graph references a node it does not contain
    #[error("Invalid question graph: {0}")]
    InvalidGraph(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Advisor error: {0}")]
    Generic(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}
