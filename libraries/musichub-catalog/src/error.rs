//! Error types for the Jamendo catalog client.

use musichub_core::HubError;
use thiserror::Error;

/// Errors that can occur when talking to the Jamendo API.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No client id was configured
    #[error("Jamendo Client ID is not configured. Please set MUSICHUB_CATALOG__CLIENT_ID or catalog.client_id in musichub.toml.")]
    ClientIdMissing,

    /// Invalid base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status without a usable API error body
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The API reported a failure in its response headers
    #[error("Jamendo API Error: {message} (Code: {code})")]
    Api { code: i64, message: String },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for HubError {
    fn from(err: CatalogError) -> Self {
        HubError::Catalog(err.to_string())
    }
}
