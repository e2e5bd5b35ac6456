//! Jamendo HTTP client.

use crate::error::{CatalogError, Result};
use crate::types::{ApiResponse, ErrorBody, JamendoConfig};
use async_trait::async_trait;
use musichub_core::{Album, AlbumId, Artist, ArtistId, CatalogService, Track};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

type Params = Vec<(&'static str, String)>;

/// Client for the Jamendo v3 API.
///
/// Read-only: popular tracks, per-category name search, and track listings
/// for one artist or album.
///
/// # Example
///
/// ```ignore
/// use musichub_catalog::{JamendoClient, JamendoConfig};
///
/// let client = JamendoClient::new(JamendoConfig::new("my-client-id"))?;
/// let tracks = client.search_tracks("jazz", 10).await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub struct JamendoClient {
    http: Client,
    base_url: String,
    client_id: String,
    image_size: u32,
}

impl JamendoClient {
    /// Create a new client with the given configuration.
    pub fn new(config: JamendoConfig) -> Result<Self> {
        if config.client_id.trim().is_empty() {
            return Err(CatalogError::ClientIdMissing);
        }

        // Validate and normalize URL
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }
        let parsed = Url::parse(&base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MusicHub/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            client_id: config.client_id,
            image_size: config.image_size,
        })
    }

    /// Get the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Most popular tracks of all time.
    pub async fn popular_tracks(&self, limit: u32) -> Result<Vec<Track>> {
        let mut params = self.params(limit);
        params.push(("order", "popularity_total".into()));
        params.push(("include", "musicinfo".into()));
        self.fetch("tracks", params).await
    }

    /// Tracks whose name matches `query`.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.params(limit);
        params.push(("namesearch", query.to_string()));
        params.push(("include", "musicinfo".into()));
        params.push(("order", "popularity_total".into()));
        self.fetch("tracks", params).await
    }

    /// Artists whose name matches `query`.
    pub async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.params(limit);
        params.push(("namesearch", query.to_string()));
        params.push(("order", "popularity_total".into()));
        self.fetch("artists", params).await
    }

    /// Albums whose name matches `query`.
    pub async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.params(limit);
        params.push(("namesearch", query.to_string()));
        params.push(("order", "popularity_total".into()));
        self.fetch("albums", params).await
    }

    /// Tracks by one artist, most popular this week first.
    pub async fn tracks_by_artist(&self, artist_id: &ArtistId, limit: u32) -> Result<Vec<Track>> {
        if artist_id.as_str().trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.params(limit);
        params.push(("artist_id", artist_id.to_string()));
        params.push(("include", "musicinfo".into()));
        params.push(("order", "popularity_week".into()));
        self.fetch("tracks", params).await
    }

    /// Tracks of one album, in album order.
    pub async fn tracks_by_album(&self, album_id: &AlbumId, limit: u32) -> Result<Vec<Track>> {
        if album_id.as_str().trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.params(limit);
        params.push(("album_id", album_id.to_string()));
        params.push(("include", "musicinfo".into()));
        params.push(("order", "track_position".into()));
        self.fetch("tracks", params).await
    }

    fn params(&self, limit: u32) -> Params {
        vec![
            ("client_id", self.client_id.clone()),
            ("format", "json".into()),
            ("limit", limit.to_string()),
            ("image_size", self.image_size.to_string()),
        ]
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, params: Params) -> Result<Vec<T>> {
        let url = format!("{}/{}/", self.base_url, endpoint);
        debug!(url = %url, "Fetching from catalog");

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let api_error = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| Some((b.headers.code, b.headers.error_message?)))
                .filter(|(_, message)| !message.is_empty());

            warn!(url = %url, status = status.as_u16(), "Catalog request failed");
            return Err(match api_error {
                Some((code, message)) => CatalogError::Api { code, message },
                None => CatalogError::Http {
                    status: status.as_u16(),
                },
            });
        }

        let body: ApiResponse<T> = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse {endpoint} response: {e}"))
        })?;

        if body.headers.status != "success" {
            let message = body
                .headers
                .error_message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Unknown API error".to_string());
            return Err(CatalogError::Api {
                code: body.headers.code,
                message,
            });
        }

        debug!(
            endpoint,
            results = body.results.len(),
            reported = ?body.headers.results_count,
            "Catalog request succeeded"
        );
        Ok(body.results)
    }
}

#[async_trait]
impl CatalogService for JamendoClient {
    async fn fetch_popular(&self, limit: u32) -> musichub_core::Result<Vec<Track>> {
        Ok(self.popular_tracks(limit).await?)
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> musichub_core::Result<Vec<Track>> {
        Ok(JamendoClient::search_tracks(self, query, limit).await?)
    }

    async fn search_artists(&self, query: &str, limit: u32) -> musichub_core::Result<Vec<Artist>> {
        Ok(JamendoClient::search_artists(self, query, limit).await?)
    }

    async fn search_albums(&self, query: &str, limit: u32) -> musichub_core::Result<Vec<Album>> {
        Ok(JamendoClient::search_albums(self, query, limit).await?)
    }

    async fn tracks_by_artist(
        &self,
        artist_id: &ArtistId,
        limit: u32,
    ) -> musichub_core::Result<Vec<Track>> {
        Ok(JamendoClient::tracks_by_artist(self, artist_id, limit).await?)
    }

    async fn tracks_by_album(
        &self,
        album_id: &AlbumId,
        limit: u32,
    ) -> musichub_core::Result<Vec<Track>> {
        Ok(JamendoClient::tracks_by_album(self, album_id, limit).await?)
    }
}
