use super::ids::{AlbumId, ArtistId, TrackId};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// A playable catalog track
///
/// Field names follow the catalog's wire format so the same struct is used
/// for catalog responses and for copies kept in the collection store.
///
/// Two tracks are equal when their ids are equal; display fields may differ
/// between catalog snapshots of the same track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier
    pub id: TrackId,

    /// Track title
    pub name: String,

    /// Display name of the performing artist
    #[serde(default)]
    pub artist_name: String,

    /// Display name of the album
    #[serde(default)]
    pub album_name: String,

    /// Artwork URL
    #[serde(default, rename = "image")]
    pub artwork: String,

    /// Playable audio URL
    #[serde(rename = "audio")]
    pub audio_url: String,

    /// Duration in seconds
    #[serde(default)]
    pub duration: u32,

    /// Artist the track belongs to, when the catalog reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<ArtistId>,

    /// Album the track belongs to, when the catalog reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<AlbumId>,
}

impl Track {
    /// Create a track with only the fields playback needs
    pub fn new(id: TrackId, name: impl Into<String>, audio_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artist_name: String::new(),
            album_name: String::new(),
            artwork: String::new(),
            audio_url: audio_url.into(),
            duration: 0,
            artist_id: None,
            album_id: None,
        }
    }

    /// Builder-style artist name
    #[must_use]
    pub fn with_artist(mut self, artist_name: impl Into<String>) -> Self {
        self.artist_name = artist_name.into();
        self
    }

    /// Builder-style album name
    #[must_use]
    pub fn with_album(mut self, album_name: impl Into<String>) -> Self {
        self.album_name = album_name.into();
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration))
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_payload() {
        let json = r#"{
            "id": "1204669",
            "name": "Wake Up",
            "artist_name": "Tryad",
            "album_name": "Public Domain",
            "image": "https://img/1204669.jpg",
            "audio": "https://cdn/1204669.mp3",
            "duration": 215,
            "artist_id": "1088",
            "album_id": "24",
            "position": 3
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id.as_str(), "1204669");
        assert_eq!(track.artist_name, "Tryad");
        assert_eq!(track.audio_url, "https://cdn/1204669.mp3");
        assert_eq!(track.duration(), Duration::from_secs(215));
        assert_eq!(track.artist_id, Some(ArtistId::new("1088")));
    }

    #[test]
    fn equality_is_by_id() {
        let a = Track::new(TrackId::new("1"), "First", "a.mp3");
        let b = Track::new(TrackId::new("1"), "Renamed", "b.mp3");
        let c = Track::new(TrackId::new("2"), "First", "a.mp3");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
