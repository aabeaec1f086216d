//! Domain Layer - Core Entity Trait and Errors
//!
//! Every entity listed by the endpoint carries a server-assigned identifier.

/// Core trait for entities addressed by id on the endpoint
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised while talking to the endpoint or validating input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Client-side form validation failed
    #[error("{0}")]
    Validation(String),

    /// Configured base URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl SyncError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status { status, body: body.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }
}
