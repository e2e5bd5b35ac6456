//! The reducer
//!
//! [`update`] applies one event to the state and returns the effects it
//! needs run. It never performs I/O and never blocks, so every transition can
//! be tested by feeding events and inspecting the state.

mod collection;
mod navigation;
mod playback;
mod search;
mod session;

use crate::config::StateConfig;
use crate::effect::Effect;
use crate::event::Event;
use crate::state::AppState;
use tracing::debug;

/// Apply `event` to `state`
///
/// Until the identity provider has resolved, every event other than a
/// session change is dropped.
pub fn update(state: &mut AppState, event: Event, config: &StateConfig) -> Vec<Effect> {
    if !state.auth_ready && !matches!(event, Event::AuthChanged(_)) {
        debug!(?event, "Dropping event before session is resolved");
        return Vec::new();
    }

    match event {
        Event::AuthChanged(auth) => session::auth_changed(state, auth, config),

        Event::Navigate(view) => navigation::navigate(state, view, config),
        Event::SearchInput(raw) => search::input(state, raw),
        Event::SearchSettled(query) => search::settled(state, &query, config),
        Event::SubmitSearch(query) => search::submit(state, query, config),

        Event::PlayList {
            tracks,
            start_index,
        } => playback::play_list(state, tracks, start_index),
        Event::Enqueue(track) => playback::enqueue(state, track),
        Event::PlayNext => playback::next(state),
        Event::PlayPrevious => playback::previous(state),
        Event::TrackEnded => playback::track_ended(state),
        // Audio-only; handled by the controller
        Event::TogglePause => Vec::new(),

        Event::ObserveLike(track_id) => collection::observe_like(state, track_id),
        Event::ForgetLike(track_id) => collection::forget_like(state, &track_id),
        Event::ToggleLike(track) => collection::toggle_like(state, track),
        Event::CreatePlaylist(name) => collection::create_playlist(state, &name),
        Event::RenamePlaylist { playlist_id, name } => {
            collection::rename_playlist(state, playlist_id, &name)
        }
        Event::DeletePlaylist(playlist_id) => {
            collection::delete_playlist(state, playlist_id, config)
        }
        Event::AddToPlaylist { playlist_id, track } => {
            collection::add_to_playlist(state, playlist_id, track)
        }
        Event::RemoveFromPlaylist {
            playlist_id,
            track_id,
        } => collection::remove_from_playlist(state, playlist_id, track_id),
        Event::RefreshPlaylists => collection::refresh_playlists(state),
        Event::DismissNotification(id) => {
            state.notifications.retain(|n| n.id != id);
            Vec::new()
        }

        Event::PopularLoaded { token, result } => {
            apply("home", state.home.finish(token, result));
            Vec::new()
        }
        Event::LikedLoaded { token, result } => {
            apply("library", state.library.finish(token, result));
            Vec::new()
        }
        Event::PlaylistTracksLoaded { token, result } => {
            apply("playlist", state.playlist_page.tracks.finish(token, result));
            Vec::new()
        }
        Event::DetailLoaded { token, result } => {
            apply("detail", state.detail.tracks.finish(token, result));
            Vec::new()
        }
        Event::SearchCompleted { token, result } => {
            apply("search", state.search.results.finish(token, result));
            Vec::new()
        }
        Event::PlaylistsLoaded { token, result } => {
            apply("playlists", state.playlists.finish(token, result));
            Vec::new()
        }
        Event::LikeStatusLoaded {
            token,
            track_id,
            liked,
        } => collection::like_status_loaded(state, &track_id, token, liked),
        Event::MutationSettled { id, result } => {
            collection::mutation_settled(state, id, result, config)
        }
    }
}

fn apply(slot: &'static str, applied: bool) {
    if !applied {
        debug!(slot, "Discarding stale result");
    }
}
