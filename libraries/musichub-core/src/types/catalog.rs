use super::ids::{AlbumId, ArtistId};
use super::track::Track;
use serde::{Deserialize, Serialize};

/// Catalog artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub image: String,
    /// Date the artist joined the catalog (`YYYY-MM-DD`)
    #[serde(default)]
    pub joindate: String,
}

/// Catalog album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub artist_id: ArtistId,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub releasedate: String,
    /// Download archive URL
    #[serde(default)]
    pub zip: String,
}

/// Aggregated search results across the three catalog categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tracks: Vec<Track>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
}

impl SearchResults {
    /// True when every category is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.artists.is_empty() && self.albums.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.artists.clear();
        self.albums.clear();
    }
}

/// Per-category result limits for an aggregated search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    pub tracks: u32,
    pub artists: u32,
    pub albums: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            tracks: 10,
            artists: 5,
            albums: 5,
        }
    }
}
