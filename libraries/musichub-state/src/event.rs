//! Everything that can happen to the application.
//!
//! User intents come from the rendering layer; result events come back from
//! the effect runner and carry the token of the request they answer.

use crate::effect::{MutationId, MutationOutput};
use crate::state::RequestToken;
use crate::view::View;
use musichub_core::{AuthState, Playlist, PlaylistId, SearchResults, Track, TrackId};

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // ==========================================================================
    // Session
    // ==========================================================================
    AuthChanged(AuthState),

    // ==========================================================================
    // Navigation and search
    // ==========================================================================
    Navigate(View),
    /// Raw keystrokes; submitted only after the debounce quiet period
    SearchInput(String),
    /// The debounced value of the search input changed
    SearchSettled(String),
    /// Explicit submit: switch to Search and query immediately
    SubmitSearch(String),

    // ==========================================================================
    // Playback
    // ==========================================================================
    PlayList {
        tracks: Vec<Track>,
        start_index: usize,
    },
    Enqueue(Track),
    PlayNext,
    PlayPrevious,
    TogglePause,
    TrackEnded,

    // ==========================================================================
    // Collection
    // ==========================================================================
    /// A track became visible; start tracking its liked status
    ObserveLike(TrackId),
    /// The track is no longer visible
    ForgetLike(TrackId),
    ToggleLike(Track),
    CreatePlaylist(String),
    RenamePlaylist {
        playlist_id: PlaylistId,
        name: String,
    },
    DeletePlaylist(PlaylistId),
    AddToPlaylist {
        playlist_id: PlaylistId,
        track: Track,
    },
    RemoveFromPlaylist {
        playlist_id: PlaylistId,
        track_id: TrackId,
    },
    RefreshPlaylists,
    DismissNotification(u64),

    // ==========================================================================
    // Results
    // ==========================================================================
    PopularLoaded {
        token: RequestToken,
        result: Result<Vec<Track>, String>,
    },
    LikedLoaded {
        token: RequestToken,
        result: Result<Vec<Track>, String>,
    },
    PlaylistTracksLoaded {
        token: RequestToken,
        result: Result<Vec<Track>, String>,
    },
    DetailLoaded {
        token: RequestToken,
        result: Result<Vec<Track>, String>,
    },
    SearchCompleted {
        token: RequestToken,
        result: Result<SearchResults, String>,
    },
    PlaylistsLoaded {
        token: RequestToken,
        result: Result<Vec<Playlist>, String>,
    },
    LikeStatusLoaded {
        token: RequestToken,
        track_id: TrackId,
        liked: bool,
    },
    MutationSettled {
        id: MutationId,
        result: Result<MutationOutput, String>,
    },
}
