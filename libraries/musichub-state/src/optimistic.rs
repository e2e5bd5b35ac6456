//! Optimistic mutations
//!
//! A collection write is applied to the state immediately. Before applying
//! it, the handler records a [`Rollback`] holding exactly the pre-state it is
//! about to overwrite. When the store reports failure the rollback is
//! restored; on success it is simply dropped.

use crate::effect::MutationId;
use crate::state::AppState;
use musichub_core::{Playlist, PlaylistId, Track, TrackId};
use std::collections::HashMap;

/// Pre-state captured before an optimistic change
#[derive(Debug, Clone)]
pub(crate) enum Rollback {
    /// Nothing was applied up front (the result is applied on success)
    Nothing,
    Like {
        track_id: TrackId,
        previous: bool,
    },
    Rename {
        playlist_id: PlaylistId,
        previous_name: Option<String>,
        applied_name: String,
    },
    Delete {
        removed: Option<(usize, Playlist)>,
    },
    AddTrack {
        playlist_id: PlaylistId,
        track_id: TrackId,
        added_to_cache: bool,
        added_to_page: bool,
    },
    RemoveTrack {
        playlist_id: PlaylistId,
        track_id: TrackId,
        cache_position: Option<usize>,
        page_entry: Option<(usize, Track)>,
    },
}

impl Rollback {
    /// Put back what the optimistic change replaced
    ///
    /// Entries that disappeared in the meantime (a forgotten like, a page
    /// showing another playlist) are left alone.
    pub(crate) fn restore(self, state: &mut AppState) {
        match self {
            Self::Nothing => {}
            Self::Like { track_id, previous } => {
                if let Some(entry) = state.likes.get_mut(&track_id) {
                    entry.data = previous;
                }
            }
            Self::Rename {
                playlist_id,
                previous_name,
                applied_name,
            } => {
                let Some(previous_name) = previous_name else {
                    return;
                };
                let still_ours = state
                    .playlist(&playlist_id)
                    .is_some_and(|p| p.name == applied_name);
                if !still_ours {
                    // A later rename replaced ours; it must fall back past it
                    state
                        .pending
                        .rebase_rename(&playlist_id, &applied_name, previous_name);
                } else if let Some(playlist) = state.playlist_mut(&playlist_id) {
                    playlist.name = previous_name;
                }
            }
            Self::Delete { removed } => {
                if let Some((index, playlist)) = removed {
                    if state.playlist(&playlist.id).is_none() {
                        let index = index.min(state.playlists.data.len());
                        state.playlists.data.insert(index, playlist);
                    }
                }
            }
            Self::AddTrack {
                playlist_id,
                track_id,
                added_to_cache,
                added_to_page,
            } => {
                if added_to_cache {
                    if let Some(playlist) = state.playlist_mut(&playlist_id) {
                        playlist.track_ids.retain(|id| id != &track_id);
                    }
                }
                if added_to_page && state.playlist_page.shows(&playlist_id) {
                    state.playlist_page.tracks.data.retain(|t| t.id != track_id);
                }
            }
            Self::RemoveTrack {
                playlist_id,
                track_id,
                cache_position,
                page_entry,
            } => {
                if let Some(position) = cache_position {
                    if let Some(playlist) = state.playlist_mut(&playlist_id) {
                        if !playlist.contains(&track_id) {
                            let position = position.min(playlist.track_ids.len());
                            playlist.track_ids.insert(position, track_id);
                        }
                    }
                }
                if let Some((position, track)) = page_entry {
                    let page = &mut state.playlist_page;
                    if page.shows(&playlist_id) && !page.tracks.data.contains(&track) {
                        let position = position.min(page.tracks.data.len());
                        page.tracks.data.insert(position, track);
                    }
                }
            }
        }
    }
}

/// A mutation waiting for the store
#[derive(Debug, Clone)]
pub(crate) struct PendingMutation {
    pub rollback: Rollback,
    pub success_message: Option<String>,
    pub failure_message: String,
}

impl PendingMutation {
    pub(crate) fn new(rollback: Rollback, failure_message: impl Into<String>) -> Self {
        Self {
            rollback,
            success_message: None,
            failure_message: failure_message.into(),
        }
    }

    pub(crate) fn on_success(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }
}

/// Ledger of in-flight mutations, keyed by id
#[derive(Debug, Default)]
pub(crate) struct PendingMutations {
    next_id: u64,
    entries: HashMap<MutationId, PendingMutation>,
}

impl PendingMutations {
    pub(crate) fn record(&mut self, mutation: PendingMutation) -> MutationId {
        self.next_id += 1;
        let id = MutationId(self.next_id);
        self.entries.insert(id, mutation);
        id
    }

    pub(crate) fn settle(&mut self, id: MutationId) -> Option<PendingMutation> {
        self.entries.remove(&id)
    }

    /// Point pending rollbacks that would bring back name `from` at `to`
    ///
    /// Covers later renames and a pending delete holding the renamed copy.
    pub(crate) fn rebase_rename(&mut self, playlist_id: &PlaylistId, from: &str, to: String) {
        for pending in self.entries.values_mut() {
            let name = match &mut pending.rollback {
                Rollback::Rename {
                    playlist_id: id,
                    previous_name: Some(name),
                    ..
                } if id == playlist_id => name,
                Rollback::Delete {
                    removed: Some((_, playlist)),
                } if &playlist.id == playlist_id => &mut playlist.name,
                _ => continue,
            };
            if name.as_str() == from {
                *name = to.clone();
            }
        }
    }

    /// Drop every entry; ids keep counting so late results stay unmatched
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
