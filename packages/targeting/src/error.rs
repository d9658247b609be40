//! Typed errors for the targeting library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during targeting operations.
#[derive(Debug, Error)]
pub enum TargetingError {
    /// LLM agent unavailable or failed
    #[error("agent error: {0}")]
    Agent(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Agent answered, but the payload did not match the expected schema
    #[error("agent returned malformed {expected}: {reason}")]
    AgentSchema {
        expected: &'static str,
        reason: String,
    },

    /// Places or geocoding lookup failed
    #[error("places error: {0}")]
    Places(#[from] places_client::PlacesError),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Writing the result document failed
    #[error("output write error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for targeting operations.
pub type Result<T> = std::result::Result<T, TargetingError>;
