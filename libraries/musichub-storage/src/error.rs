/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint hit
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Stored JSON could not be read back
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timestamp column out of range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<StorageError> for musichub_core::HubError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => musichub_core::HubError::NotFound { entity, id },
            other => musichub_core::HubError::Storage(other.to_string()),
        }
    }
}
