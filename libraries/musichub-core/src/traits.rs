//! Service traits at the edges of the application core
//!
//! The state layer only ever talks to these traits. Concrete implementations
//! are injected at startup, and tests substitute in-memory or mocked ones.

use crate::error::Result;
use crate::types::{
    Album, AlbumId, Artist, ArtistId, AuthState, Playlist, PlaylistId, Track, TrackId, UserId,
};
use async_trait::async_trait;
use tokio::sync::watch;

/// Remote music catalog (read-only)
///
/// A blank query or id yields an empty list without contacting the catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Most popular tracks overall
    async fn fetch_popular(&self, limit: u32) -> Result<Vec<Track>>;

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>>;

    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>>;

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>>;

    /// Tracks by one artist, most popular this week first
    async fn tracks_by_artist(&self, artist_id: &ArtistId, limit: u32) -> Result<Vec<Track>>;

    /// Tracks of one album in album order
    async fn tracks_by_album(&self, album_id: &AlbumId, limit: u32) -> Result<Vec<Track>>;
}

/// Per-user persistent collection: liked tracks and playlists
#[async_trait]
pub trait CollectionStore: Send + Sync {
    // ==========================================================================
    // Liked tracks
    // ==========================================================================

    /// Mark a track as liked, storing a copy of it
    async fn like_track(&self, user_id: &UserId, track: &Track) -> Result<()>;

    async fn unlike_track(&self, user_id: &UserId, track_id: &TrackId) -> Result<()>;

    async fn is_track_liked(&self, user_id: &UserId, track_id: &TrackId) -> Result<bool>;

    /// Liked tracks, most recently liked first (at most 100)
    async fn liked_tracks(&self, user_id: &UserId) -> Result<Vec<Track>>;

    // ==========================================================================
    // Playlists
    // ==========================================================================

    /// Create an empty playlist owned by `user_id`
    async fn create_playlist(&self, user_id: &UserId, name: &str) -> Result<Playlist>;

    /// Playlists owned by `user_id`, newest first
    async fn user_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>>;

    async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()>;

    async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<()>;

    /// Add a track to a playlist (no-op if already a member)
    async fn add_track_to_playlist(&self, playlist_id: &PlaylistId, track: &Track) -> Result<()>;

    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<()>;

    /// Member tracks in the order they were added
    async fn playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<Track>>;
}

/// Source of the current session
///
/// Providers publish every change through a watch channel; the first
/// published state with `resolved == true` ends the startup gate.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> AuthState;

    fn subscribe(&self) -> watch::Receiver<AuthState>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserId>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId>;

    async fn sign_out(&self) -> Result<()>;
}
