//! In-memory services and a recording audio output for state tests.

#![allow(dead_code)]

use async_trait::async_trait;
use musichub_core::{
    Album, AlbumId, Artist, ArtistId, AuthState, CatalogService, CollectionStore, HubError,
    Playlist, PlaylistId, Result, Session, Track, TrackId, UserId,
};
use musichub_playback::{AudioOutput, PlaybackError};
use musichub_state::{update, AppState, Effect, Event, StateConfig};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub fn track(id: &str) -> Track {
    Track::new(TrackId::new(id), format!("Track {id}"), format!("https://cdn/{id}.mp3"))
}

pub fn tracks(ids: &[&str]) -> Vec<Track> {
    ids.iter().map(|id| track(id)).collect()
}

pub fn user() -> UserId {
    UserId::new("user-1")
}

pub fn signed_in_event() -> Event {
    Event::AuthChanged(AuthState::resolved(Session::Authenticated(user())))
}

pub fn signed_out_event() -> Event {
    Event::AuthChanged(AuthState::resolved(Session::Anonymous))
}

/// A resolved, signed-in state plus the effects the sign-in produced
pub fn signed_in_state(config: &StateConfig) -> (AppState, Vec<Effect>) {
    let mut state = AppState::new();
    let effects = update(&mut state, signed_in_event(), config);
    (state, effects)
}

// ==========================================================================
// Catalog
// ==========================================================================

#[derive(Default)]
pub struct FakeCatalog {
    pub popular: Vec<Track>,
    pub search_tracks: Vec<Track>,
    pub search_artists: Vec<Artist>,
    pub search_albums: Vec<Album>,
    pub artist_tracks: HashMap<ArtistId, Vec<Track>>,
    pub fail_track_search: AtomicBool,
    /// Every call, as `"<method>:<argument>"`
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn fetch_popular(&self, limit: u32) -> Result<Vec<Track>> {
        self.record(format!("popular:{limit}"));
        Ok(self.popular.clone())
    }

    async fn search_tracks(&self, query: &str, _limit: u32) -> Result<Vec<Track>> {
        self.record(format!("search_tracks:{query}"));
        if self.fail_track_search.load(Ordering::SeqCst) {
            return Err(HubError::Catalog("HTTP error! status: 500".into()));
        }
        Ok(self.search_tracks.clone())
    }

    async fn search_artists(&self, query: &str, _limit: u32) -> Result<Vec<Artist>> {
        self.record(format!("search_artists:{query}"));
        Ok(self.search_artists.clone())
    }

    async fn search_albums(&self, query: &str, _limit: u32) -> Result<Vec<Album>> {
        self.record(format!("search_albums:{query}"));
        Ok(self.search_albums.clone())
    }

    async fn tracks_by_artist(&self, artist_id: &ArtistId, _limit: u32) -> Result<Vec<Track>> {
        self.record(format!("artist:{artist_id}"));
        Ok(self.artist_tracks.get(artist_id).cloned().unwrap_or_default())
    }

    async fn tracks_by_album(&self, album_id: &AlbumId, _limit: u32) -> Result<Vec<Track>> {
        self.record(format!("album:{album_id}"));
        Ok(Vec::new())
    }
}

// ==========================================================================
// Collection store
// ==========================================================================

#[derive(Default)]
struct StoreData {
    liked: Vec<(UserId, Track)>,
    playlists: Vec<Playlist>,
    members: HashMap<PlaylistId, Vec<Track>>,
}

#[derive(Default)]
pub struct FakeStore {
    data: Mutex<StoreData>,
    /// Every write fails while set
    pub fail_writes: AtomicBool,
}

impl FakeStore {
    pub fn with_playlist(self, playlist: Playlist) -> Self {
        self.data.lock().unwrap().playlists.push(playlist);
        self
    }

    pub fn playlist_count(&self) -> usize {
        self.data.lock().unwrap().playlists.len()
    }

    pub fn liked_count(&self) -> usize {
        self.data.lock().unwrap().liked.len()
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HubError::Storage("database is locked".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for FakeStore {
    async fn like_track(&self, user_id: &UserId, track: &Track) -> Result<()> {
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        data.liked.retain(|(u, t)| !(u == user_id && t.id == track.id));
        data.liked.insert(0, (user_id.clone(), track.clone()));
        Ok(())
    }

    async fn unlike_track(&self, user_id: &UserId, track_id: &TrackId) -> Result<()> {
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        data.liked.retain(|(u, t)| !(u == user_id && &t.id == track_id));
        Ok(())
    }

    async fn is_track_liked(&self, user_id: &UserId, track_id: &TrackId) -> Result<bool> {
        let data = self.data.lock().unwrap();
        Ok(data
            .liked
            .iter()
            .any(|(u, t)| u == user_id && &t.id == track_id))
    }

    async fn liked_tracks(&self, user_id: &UserId) -> Result<Vec<Track>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .liked
            .iter()
            .filter(|(u, _)| u == user_id)
            .map(|(_, t)| t.clone())
            .collect())
    }

    async fn create_playlist(&self, user_id: &UserId, name: &str) -> Result<Playlist> {
        self.check_write()?;
        let playlist = Playlist::new(user_id.clone(), name);
        self.data.lock().unwrap().playlists.insert(0, playlist.clone());
        Ok(playlist)
    }

    async fn user_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .playlists
            .iter()
            .filter(|p| &p.owner_id == user_id)
            .cloned()
            .collect())
    }

    async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()> {
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        let playlist = data
            .playlists
            .iter_mut()
            .find(|p| &p.id == playlist_id)
            .ok_or_else(|| HubError::not_found("Playlist", playlist_id.as_str()))?;
        playlist.name = name.to_string();
        Ok(())
    }

    async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<()> {
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        data.playlists.retain(|p| &p.id != playlist_id);
        data.members.remove(playlist_id);
        Ok(())
    }

    async fn add_track_to_playlist(&self, playlist_id: &PlaylistId, track: &Track) -> Result<()> {
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        let members = data.members.entry(playlist_id.clone()).or_default();
        if !members.contains(track) {
            members.push(track.clone());
        }
        Ok(())
    }

    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<()> {
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        if let Some(members) = data.members.get_mut(playlist_id) {
            members.retain(|t| &t.id != track_id);
        }
        Ok(())
    }

    async fn playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<Track>> {
        let data = self.data.lock().unwrap();
        Ok(data.members.get(playlist_id).cloned().unwrap_or_default())
    }
}

// ==========================================================================
// Audio
// ==========================================================================

#[derive(Default)]
pub struct RecordingOutput {
    pub calls: Vec<String>,
    pub refuse_play: bool,
    /// Set by the test to end the loaded source; cleared on load
    pub finished: Arc<AtomicBool>,
}

impl AudioOutput for RecordingOutput {
    fn load(&mut self, source_url: &str) -> musichub_playback::Result<()> {
        self.calls.push(format!("load {source_url}"));
        self.finished.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn play(&mut self) -> musichub_playback::Result<()> {
        self.calls.push("play".into());
        if self.refuse_play {
            return Err(PlaybackError::Blocked("autoplay denied".into()));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push("pause".into());
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}
