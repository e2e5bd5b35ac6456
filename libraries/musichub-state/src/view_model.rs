//! Read-only projections of [`AppState`] for the rendering layer.
//!
//! Renderers never read the state directly; they take a [`Screen`] (or one
//! of the smaller models) and draw it.

use crate::state::{AppState, Load, Notification};
use crate::view::View;
use musichub_core::{Playlist, PlaylistId, SearchResults, Track};
use musichub_playback::PlaybackState;

/// What the whole window shows
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    /// The identity provider has not resolved the session yet
    Loading,
    SignIn,
    Main(MainScreen<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainScreen<'a> {
    pub sidebar: SidebarModel<'a>,
    pub view: ViewModel<'a>,
    pub player: PlayerModel<'a>,
    pub notifications: Vec<&'a Notification>,
}

/// The active view: `(data, loading, error, title)`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    pub view: &'a View,
    pub title: String,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub content: Content<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content<'a> {
    Tracks(&'a [Track]),
    Search(&'a SearchResults),
}

impl Content<'_> {
    /// Tracks shown by a track list view (search shows its track category)
    pub fn tracks(&self) -> &[Track] {
        match self {
            Self::Tracks(tracks) => tracks,
            Self::Search(results) => &results.tracks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarModel<'a> {
    pub playlists: &'a [Playlist],
    /// Highlighted playlist, when a playlist view is open
    pub active: Option<&'a PlaylistId>,
    pub loading: bool,
}

/// Player bar
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerModel<'a> {
    pub current: Option<&'a Track>,
    pub queue_len: usize,
    pub position: Option<usize>,
    pub can_play_next: bool,
    pub can_play_previous: bool,
    pub state: PlaybackState,
}

/// Project the state onto a screen
pub fn screen(state: &AppState, playback: PlaybackState) -> Screen<'_> {
    if !state.auth_ready {
        return Screen::Loading;
    }
    if !state.is_signed_in() {
        return Screen::SignIn;
    }

    Screen::Main(MainScreen {
        sidebar: sidebar(state),
        view: view_model(state),
        player: player(state, playback),
        notifications: state.notifications.iter().collect(),
    })
}

pub fn sidebar(state: &AppState) -> SidebarModel<'_> {
    SidebarModel {
        playlists: &state.playlists.data,
        active: state.view.playlist_id(),
        loading: state.playlists.loading,
    }
}

pub fn player(state: &AppState, playback: PlaybackState) -> PlayerModel<'_> {
    let can_skip = state.queue.can_skip();
    PlayerModel {
        current: state.queue.current_track(),
        queue_len: state.queue.len(),
        position: state.queue.current_index(),
        can_play_next: can_skip,
        can_play_previous: can_skip,
        state: playback,
    }
}

pub fn view_model(state: &AppState) -> ViewModel<'_> {
    let view = &state.view;
    match view {
        View::Home => tracks_view(view, "Popular Tracks".into(), &state.home),
        View::Library => tracks_view(view, "Liked Songs".into(), &state.library),
        View::Playlist(playlist_id) => {
            let title = state
                .playlist(playlist_id)
                .map_or_else(|| "Playlist".to_string(), |p| p.name.clone());
            tracks_view(view, title, &state.playlist_page.tracks)
        }
        View::Artist(_) => {
            let tracks = &state.detail.tracks;
            let title = first_name(&tracks.data, |t| t.artist_name.as_str())
                .unwrap_or_else(|| "Artist Page".into());
            tracks_view(view, title, tracks)
        }
        View::Album(_) => {
            let tracks = &state.detail.tracks;
            let title = first_name(&tracks.data, |t| t.album_name.as_str())
                .unwrap_or_else(|| "Album Page".into());
            tracks_view(view, title, tracks)
        }
        View::Search => {
            let search = &state.search;
            ViewModel {
                view,
                title: search_title(&search.submitted_query, &search.results),
                loading: search.results.loading,
                error: search.results.error.as_deref(),
                content: Content::Search(&search.results.data),
            }
        }
    }
}

/// Search title, in priority order: loading, results, no results, prompt
pub fn search_title(submitted_query: &str, results: &Load<SearchResults>) -> String {
    if results.loading {
        format!("Searching for \"{submitted_query}\"...")
    } else if !results.data.is_empty() {
        format!("Results for \"{submitted_query}\"")
    } else if !submitted_query.is_empty() {
        format!("No results found for \"{submitted_query}\"")
    } else {
        "Search for music".to_string()
    }
}

fn tracks_view<'a>(view: &'a View, title: String, load: &'a Load<Vec<Track>>) -> ViewModel<'a> {
    ViewModel {
        view,
        title,
        loading: load.loading,
        error: load.error.as_deref(),
        content: Content::Tracks(&load.data),
    }
}

fn first_name(tracks: &[Track], name: impl Fn(&Track) -> &str) -> Option<String> {
    tracks
        .first()
        .map(name)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use musichub_core::{ArtistId, Session, TrackId, UserId};

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state.auth_ready = true;
        state.session = Session::Authenticated(UserId::new("u1"));
        state
    }

    #[test]
    fn screen_follows_session() {
        let mut state = AppState::new();
        assert_eq!(screen(&state, PlaybackState::Stopped), Screen::Loading);

        state.auth_ready = true;
        assert_eq!(screen(&state, PlaybackState::Stopped), Screen::SignIn);

        state.session = Session::Authenticated(UserId::new("u1"));
        assert!(matches!(
            screen(&state, PlaybackState::Stopped),
            Screen::Main(_)
        ));
    }

    #[test]
    fn search_titles() {
        let mut results = Load::<SearchResults>::default();
        assert_eq!(search_title("", &results), "Search for music");
        assert_eq!(search_title("jazz", &results), "No results found for \"jazz\"");

        results.loading = true;
        assert_eq!(search_title("jazz", &results), "Searching for \"jazz\"...");

        results.loading = false;
        results
            .data
            .tracks
            .push(Track::new(TrackId::new("1"), "Take Five", "https://cdn/1.mp3"));
        assert_eq!(search_title("jazz", &results), "Results for \"jazz\"");
    }

    #[test]
    fn playlist_title_falls_back_until_loaded() {
        let mut state = signed_in();
        let playlist_id = PlaylistId::new("p1");
        state.view = View::Playlist(playlist_id.clone());
        assert_eq!(view_model(&state).title, "Playlist");

        state.playlists.data.push(Playlist::with_id(
            playlist_id,
            UserId::new("u1"),
            "Road Trip",
        ));
        assert_eq!(view_model(&state).title, "Road Trip");
        assert!(sidebar(&state).active.is_some());
    }

    #[test]
    fn artist_title_from_first_track() {
        let mut state = signed_in();
        state.view = View::Artist(ArtistId::new("a1"));
        assert_eq!(view_model(&state).title, "Artist Page");

        let track = Track::new(TrackId::new("1"), "Song", "https://cdn/1.mp3")
            .with_artist("Ikson");
        state.detail.tracks.data.push(track);
        assert_eq!(view_model(&state).title, "Ikson");
    }

    #[test]
    fn player_skip_needs_two_tracks() {
        let mut state = signed_in();
        state.queue.play_list(
            vec![Track::new(TrackId::new("1"), "One", "https://cdn/1.mp3")],
            0,
        );

        let model = player(&state, PlaybackState::Playing);
        assert!(!model.can_play_next);
        assert!(!model.can_play_previous);
        assert_eq!(model.position, Some(0));
    }
}
