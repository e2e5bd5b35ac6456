//! Side effects requested by [`update`](crate::update).
//!
//! Effects are plain data. The [`EffectRunner`](crate::EffectRunner) turns
//! each one into exactly one result [`Event`](crate::Event).

use crate::state::RequestToken;
use musichub_core::{AlbumId, ArtistId, Playlist, PlaylistId, SearchLimits, Track, TrackId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an in-flight optimistic mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationId(pub(crate) u64);

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Effect {
    FetchPopular {
        limit: u32,
        token: RequestToken,
    },
    FetchLiked {
        user_id: UserId,
        token: RequestToken,
    },
    FetchPlaylistTracks {
        playlist_id: PlaylistId,
        token: RequestToken,
    },
    FetchArtistTracks {
        artist_id: ArtistId,
        limit: u32,
        token: RequestToken,
    },
    FetchAlbumTracks {
        album_id: AlbumId,
        limit: u32,
        token: RequestToken,
    },
    Search {
        query: String,
        limits: SearchLimits,
        token: RequestToken,
    },
    LoadPlaylists {
        user_id: UserId,
        token: RequestToken,
    },
    CheckLiked {
        user_id: UserId,
        track_id: TrackId,
        token: RequestToken,
    },
    Persist {
        mutation: MutationId,
        op: MutationOp,
    },
}

/// A write to the collection store
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum MutationOp {
    Like { user_id: UserId, track: Track },
    Unlike { user_id: UserId, track_id: TrackId },
    CreatePlaylist { user_id: UserId, name: String },
    RenamePlaylist { playlist_id: PlaylistId, name: String },
    DeletePlaylist { playlist_id: PlaylistId },
    AddTrack { playlist_id: PlaylistId, track: Track },
    RemoveTrack { playlist_id: PlaylistId, track_id: TrackId },
}

/// What a successful mutation produced
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutput {
    Done,
    Created(Playlist),
}
