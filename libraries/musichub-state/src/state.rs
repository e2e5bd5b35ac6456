//! Application state
//!
//! Everything the UI renders lives in [`AppState`]. It is only ever mutated
//! by [`update`](crate::update); asynchronous work is described by
//! [`Effect`](crate::Effect)s and comes back as result events.

use crate::optimistic::PendingMutations;
use crate::view::View;
use musichub_core::{
    AlbumId, ArtistId, Playlist, PlaylistId, SearchResults, Session, Track, TrackId,
};
use musichub_playback::PlaybackQueue;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Identifies one issued load; only the latest token of a slot is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Data loaded asynchronously, with its in-flight request
#[derive(Debug, Clone, Default)]
pub struct Load<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    pending: Option<RequestToken>,
}

impl<T: Default> Load<T> {
    /// Mark a new request as the only one whose result will be accepted
    pub fn begin(&mut self, token: RequestToken) {
        self.loading = true;
        self.error = None;
        self.pending = Some(token);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.pending == Some(token)
    }

    /// Apply a result; returns false (and changes nothing) for stale tokens
    ///
    /// Errors keep the previous data.
    pub fn finish(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.pending = None;
        self.loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Forget the in-flight request; its result will be discarded
    pub fn cancel(&mut self) {
        self.pending = None;
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which catalog entity the detail page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFocus {
    Artist(ArtistId),
    Album(AlbumId),
}

/// Scratch area shared by artist and album pages
#[derive(Debug, Clone, Default)]
pub struct DetailPage {
    pub focus: Option<DetailFocus>,
    pub tracks: Load<Vec<Track>>,
}

impl DetailPage {
    pub fn clear(&mut self) {
        self.focus = None;
        self.tracks.reset();
    }
}

/// Tracks of the playlist being viewed
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    pub playlist_id: Option<PlaylistId>,
    pub tracks: Load<Vec<Track>>,
}

impl PlaylistPage {
    pub fn shows(&self, playlist_id: &PlaylistId) -> bool {
        self.playlist_id.as_ref() == Some(playlist_id)
    }

    pub fn clear(&mut self) {
        self.playlist_id = None;
        self.tracks.reset();
    }
}

/// Search input and the results of the last submitted query
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// What the user has typed so far
    pub raw_query: String,
    /// The query the current results belong to (trimmed)
    pub submitted_query: String,
    pub results: Load<SearchResults>,
}

impl SearchState {
    pub fn clear(&mut self) {
        self.raw_query.clear();
        self.submitted_query.clear();
        self.results.reset();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// The whole application state
#[derive(Debug, Default)]
pub struct AppState {
    /// False until the identity provider resolved the initial session
    pub auth_ready: bool,
    pub session: Session,
    pub view: View,
    pub queue: PlaybackQueue,

    pub home: Load<Vec<Track>>,
    pub library: Load<Vec<Track>>,
    pub playlist_page: PlaylistPage,
    pub detail: DetailPage,
    pub search: SearchState,

    /// Sidebar cache of the user's playlists
    pub playlists: Load<Vec<Playlist>>,

    /// Liked status of every track currently on screen
    pub likes: HashMap<TrackId, Load<bool>>,

    pub notifications: VecDeque<Notification>,

    pub(crate) pending: PendingMutations,
    next_token: u64,
    next_notification: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token no earlier request can match
    pub fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Liked status of a track, if it is being observed
    pub fn is_liked(&self, track_id: &TrackId) -> Option<bool> {
        self.likes.get(track_id).map(|entry| entry.data)
    }

    pub fn playlist(&self, playlist_id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.data.iter().find(|p| &p.id == playlist_id)
    }

    pub(crate) fn playlist_mut(&mut self, playlist_id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.data.iter_mut().find(|p| &p.id == playlist_id)
    }

    /// Number of mutations still waiting for the store
    pub fn pending_mutations(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn notify(&mut self, level: NotificationLevel, message: String, max: usize) {
        self.next_notification += 1;
        self.notifications.push_back(Notification {
            id: self.next_notification,
            level,
            message,
        });
        while self.notifications.len() > max {
            self.notifications.pop_front();
        }
    }

    /// Drop everything that belongs to the signed-in user
    ///
    /// Request tokens keep counting, so results of loads issued before the
    /// reset can never be applied afterwards.
    pub(crate) fn clear_session_data(&mut self) {
        self.queue.reset();
        self.view = View::Home;
        self.home.reset();
        self.library.reset();
        self.playlist_page.clear();
        self.detail.clear();
        self.search.clear();
        self.playlists.reset();
        self.likes.clear();
        self.notifications.clear();
        self.pending.clear();
    }
}
