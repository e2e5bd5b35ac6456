//! Configuration and wire types for the Jamendo API.

use serde::{Deserialize, Serialize};

/// Default public API root
pub const DEFAULT_BASE_URL: &str = "https://api.jamendo.com/v3.0";

/// Jamendo client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JamendoConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// Application client id issued by Jamendo
    pub client_id: String,

    /// Requested artwork size in pixels
    pub image_size: u32,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl JamendoConfig {
    /// Create a config for the public API.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Point the client at another API root (mirrors, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for JamendoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: String::new(),
            image_size: 200,
            timeout_secs: 30,
        }
    }
}

/// Response headers block present on every API reply.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResponseHeaders {
    pub status: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results_count: Option<u32>,
}

/// Generic response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub headers: ResponseHeaders,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Error body shape, used only to extract a message from non-2xx replies.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub headers: ResponseHeaders,
}
