use super::ids::{PlaylistId, TrackId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned playlist
///
/// Only member ids are held here; the tracks themselves are fetched through
/// the collection store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub track_ids: Vec<TrackId>,
}

impl Playlist {
    /// Create a new empty playlist with a generated id
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            owner_id,
            created_at: Utc::now(),
            track_ids: Vec::new(),
        }
    }

    /// Create a playlist with a specific ID
    pub fn with_id(id: PlaylistId, owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            owner_id,
            created_at: Utc::now(),
            track_ids: Vec::new(),
        }
    }

    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.track_ids.contains(track_id)
    }
}
