use crate::{liked, playlists};
use async_trait::async_trait;
use musichub_core::{
    CollectionStore, Playlist, PlaylistId, Result, Track, TrackId, UserId,
};
use sqlx::SqlitePool;

/// Collection store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteCollectionStore {
    pool: SqlitePool,
}

impl SqliteCollectionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CollectionStore for SqliteCollectionStore {
    // Liked tracks
    async fn like_track(&self, user_id: &UserId, track: &Track) -> Result<()> {
        Ok(liked::like(&self.pool, user_id, track).await?)
    }

    async fn unlike_track(&self, user_id: &UserId, track_id: &TrackId) -> Result<()> {
        Ok(liked::unlike(&self.pool, user_id, track_id).await?)
    }

    async fn is_track_liked(&self, user_id: &UserId, track_id: &TrackId) -> Result<bool> {
        Ok(liked::is_liked(&self.pool, user_id, track_id).await?)
    }

    async fn liked_tracks(&self, user_id: &UserId) -> Result<Vec<Track>> {
        Ok(liked::list(&self.pool, user_id).await?)
    }

    // Playlists
    async fn create_playlist(&self, user_id: &UserId, name: &str) -> Result<Playlist> {
        Ok(playlists::create(&self.pool, user_id, name).await?)
    }

    async fn user_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        Ok(playlists::get_user_playlists(&self.pool, user_id).await?)
    }

    async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()> {
        Ok(playlists::rename(&self.pool, playlist_id, name).await?)
    }

    async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<()> {
        Ok(playlists::delete(&self.pool, playlist_id).await?)
    }

    async fn add_track_to_playlist(&self, playlist_id: &PlaylistId, track: &Track) -> Result<()> {
        Ok(playlists::add_track(&self.pool, playlist_id, track).await?)
    }

    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<()> {
        Ok(playlists::remove_track(&self.pool, playlist_id, track_id).await?)
    }

    async fn playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<Track>> {
        Ok(playlists::get_tracks(&self.pool, playlist_id).await?)
    }
}
