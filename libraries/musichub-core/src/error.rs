/// Core error types for MusicHub
use thiserror::Error;

/// Result type alias using `HubError`
pub type Result<T> = std::result::Result<T, HubError>;

/// Core error type for MusicHub
#[derive(Error, Debug)]
pub enum HubError {
    /// Remote catalog failures (HTTP, API envelope, decoding)
    #[error("{0}")]
    Catalog(String),

    /// Collection store failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Identity provider failures, carrying a user-facing message
    #[error("{0}")]
    Auth(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Operation requires a signed-in user
    #[error("Not signed in")]
    Unauthenticated,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl HubError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an auth error with a user-facing message
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = HubError::not_found("Playlist", "p-1");
        assert_eq!(err.to_string(), "Playlist not found: p-1");
    }

    #[test]
    fn catalog_error_passes_message_through() {
        let err = HubError::Catalog("HTTP error! status: 500".into());
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }
}
