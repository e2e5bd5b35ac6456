//! Liked tracks and playlists
//!
//! Every write goes through the optimistic ledger: apply now, remember the
//! pre-state, and restore it if the store says no.

use super::navigation;
use crate::config::StateConfig;
use crate::effect::{Effect, MutationId, MutationOp, MutationOutput};
use crate::optimistic::{PendingMutation, Rollback};
use crate::state::{AppState, NotificationLevel, RequestToken};
use crate::view::View;
use musichub_core::{PlaylistId, Track, TrackId};
use tracing::{debug, info, warn};

// ==========================================================================
// Liked status
// ==========================================================================

pub(super) fn observe_like(state: &mut AppState, track_id: TrackId) -> Vec<Effect> {
    let Some(user_id) = state.session.user_id().cloned() else {
        return Vec::new();
    };

    let token = state.issue_token();
    state.likes.entry(track_id.clone()).or_default().begin(token);
    vec![Effect::CheckLiked {
        user_id,
        track_id,
        token,
    }]
}

pub(super) fn forget_like(state: &mut AppState, track_id: &TrackId) -> Vec<Effect> {
    state.likes.remove(track_id);
    Vec::new()
}

pub(super) fn like_status_loaded(
    state: &mut AppState,
    track_id: &TrackId,
    token: RequestToken,
    liked: bool,
) -> Vec<Effect> {
    let applied = state
        .likes
        .get_mut(track_id)
        .is_some_and(|entry| entry.finish(token, Ok(liked)));
    if !applied {
        debug!(track_id = %track_id, "Discarding liked status for unobserved track");
    }
    Vec::new()
}

pub(super) fn toggle_like(state: &mut AppState, track: Track) -> Vec<Effect> {
    let Some(user_id) = state.session.user_id().cloned() else {
        return Vec::new();
    };

    let entry = state.likes.entry(track.id.clone()).or_default();
    let previous = entry.data;
    // A check still in flight would overwrite the toggle
    entry.cancel();
    entry.data = !previous;

    let mutation = state.pending.record(PendingMutation::new(
        Rollback::Like {
            track_id: track.id.clone(),
            previous,
        },
        "Error: Could not update liked songs.",
    ));

    let op = if previous {
        MutationOp::Unlike {
            user_id,
            track_id: track.id,
        }
    } else {
        MutationOp::Like { user_id, track }
    };
    vec![Effect::Persist { mutation, op }]
}

// ==========================================================================
// Playlists
// ==========================================================================

pub(super) fn refresh_playlists(state: &mut AppState) -> Vec<Effect> {
    let Some(user_id) = state.session.user_id().cloned() else {
        return Vec::new();
    };

    let token = state.issue_token();
    state.playlists.begin(token);
    vec![Effect::LoadPlaylists { user_id, token }]
}

/// Created playlists are added to the cache once the store assigns an id
pub(super) fn create_playlist(state: &mut AppState, name: &str) -> Vec<Effect> {
    let Some(user_id) = state.session.user_id().cloned() else {
        return Vec::new();
    };
    let name = name.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let mutation = state.pending.record(
        PendingMutation::new(Rollback::Nothing, "Error: Could not create playlist.")
            .on_success(format!("Playlist \"{name}\" created.")),
    );
    vec![Effect::Persist {
        mutation,
        op: MutationOp::CreatePlaylist {
            user_id,
            name: name.to_string(),
        },
    }]
}

pub(super) fn rename_playlist(
    state: &mut AppState,
    playlist_id: PlaylistId,
    name: &str,
) -> Vec<Effect> {
    if !state.is_signed_in() {
        return Vec::new();
    }
    let name = name.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let previous_name = match state.playlist_mut(&playlist_id) {
        Some(playlist) if playlist.name == name => return Vec::new(),
        Some(playlist) => Some(std::mem::replace(&mut playlist.name, name.to_string())),
        None => None,
    };

    let mutation = state.pending.record(
        PendingMutation::new(
            Rollback::Rename {
                playlist_id: playlist_id.clone(),
                previous_name,
                applied_name: name.to_string(),
            },
            "Error: Could not rename playlist.",
        )
        .on_success("Playlist renamed."),
    );
    vec![Effect::Persist {
        mutation,
        op: MutationOp::RenamePlaylist {
            playlist_id,
            name: name.to_string(),
        },
    }]
}

/// Removes the playlist from the cache and returns to Library right away
pub(super) fn delete_playlist(
    state: &mut AppState,
    playlist_id: PlaylistId,
    config: &StateConfig,
) -> Vec<Effect> {
    if !state.is_signed_in() {
        return Vec::new();
    }

    let removed = state
        .playlists
        .data
        .iter()
        .position(|p| p.id == playlist_id)
        .map(|index| (index, state.playlists.data.remove(index)));
    if state.playlist_page.shows(&playlist_id) {
        state.playlist_page.clear();
    }

    let mutation = state.pending.record(
        PendingMutation::new(Rollback::Delete { removed }, "Error: Could not delete playlist.")
            .on_success("Playlist deleted."),
    );

    let mut effects = vec![Effect::Persist {
        mutation,
        op: MutationOp::DeletePlaylist { playlist_id },
    }];
    effects.extend(navigation::navigate(state, View::Library, config));
    effects
}

pub(super) fn add_to_playlist(
    state: &mut AppState,
    playlist_id: PlaylistId,
    track: Track,
) -> Vec<Effect> {
    if !state.is_signed_in() {
        return Vec::new();
    }

    let added_to_cache = match state.playlist_mut(&playlist_id) {
        Some(playlist) if !playlist.contains(&track.id) => {
            playlist.track_ids.push(track.id.clone());
            true
        }
        _ => false,
    };

    let page = &mut state.playlist_page;
    let added_to_page = page.shows(&playlist_id) && !page.tracks.data.contains(&track);
    if added_to_page {
        page.tracks.data.push(track.clone());
    }

    let mutation = state.pending.record(
        PendingMutation::new(
            Rollback::AddTrack {
                playlist_id: playlist_id.clone(),
                track_id: track.id.clone(),
                added_to_cache,
                added_to_page,
            },
            "Error: Could not add track.",
        )
        .on_success(format!("Added \"{}\" to playlist!", track.name)),
    );
    vec![Effect::Persist {
        mutation,
        op: MutationOp::AddTrack { playlist_id, track },
    }]
}

pub(super) fn remove_from_playlist(
    state: &mut AppState,
    playlist_id: PlaylistId,
    track_id: TrackId,
) -> Vec<Effect> {
    if !state.is_signed_in() {
        return Vec::new();
    }

    let cache_position = state.playlist_mut(&playlist_id).and_then(|playlist| {
        let position = playlist.track_ids.iter().position(|id| id == &track_id)?;
        playlist.track_ids.remove(position);
        Some(position)
    });

    let page = &mut state.playlist_page;
    let page_entry = if page.shows(&playlist_id) {
        page.tracks
            .data
            .iter()
            .position(|t| t.id == track_id)
            .map(|position| (position, page.tracks.data.remove(position)))
    } else {
        None
    };

    let mutation = state.pending.record(
        PendingMutation::new(
            Rollback::RemoveTrack {
                playlist_id: playlist_id.clone(),
                track_id: track_id.clone(),
                cache_position,
                page_entry,
            },
            "Error: Could not remove track.",
        )
        .on_success("Track removed from playlist."),
    );
    vec![Effect::Persist {
        mutation,
        op: MutationOp::RemoveTrack {
            playlist_id,
            track_id,
        },
    }]
}

// ==========================================================================
// Settlement
// ==========================================================================

pub(super) fn mutation_settled(
    state: &mut AppState,
    id: MutationId,
    result: Result<MutationOutput, String>,
    config: &StateConfig,
) -> Vec<Effect> {
    let Some(pending) = state.pending.settle(id) else {
        debug!(mutation = %id, "Discarding result of unknown mutation");
        return Vec::new();
    };

    match result {
        Ok(output) => {
            if let MutationOutput::Created(playlist) = output {
                info!(playlist_id = %playlist.id, "Playlist created");
                if state.playlist(&playlist.id).is_none() {
                    state.playlists.data.insert(0, playlist);
                }
            }
            if let Some(message) = pending.success_message {
                state.notify(NotificationLevel::Info, message, config.max_notifications);
            }
        }
        Err(error) => {
            warn!(mutation = %id, error = %error, "Mutation failed; rolling back");
            pending.rollback.restore(state);
            state.notify(
                NotificationLevel::Error,
                pending.failure_message,
                config.max_notifications,
            );
        }
    }
    Vec::new()
}
