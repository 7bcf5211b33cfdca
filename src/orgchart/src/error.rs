//! Error types for the org chart

use thiserror::Error;

/// Org chart errors
///
/// Every variant is fatal to the current build or query; nothing is retried.
#[derive(Debug, Error)]
pub enum OrgChartError {
    /// Empty input list or otherwise malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Role or user id registered twice
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Parent role or user role that is not registered
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Queried user or role does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON rendering error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for org chart operations
pub type Result<T> = std::result::Result<T, OrgChartError>;
