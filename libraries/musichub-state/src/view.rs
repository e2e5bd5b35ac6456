//! The view the user is looking at.

use musichub_core::{AlbumId, ArtistId, PlaylistId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Active view
///
/// Parameterized variants carry the entity they show, so an artist page
/// without an artist cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Search,
    Library,
    Playlist(PlaylistId),
    Artist(ArtistId),
    Album(AlbumId),
}

impl View {
    /// Artist and album pages share one scratch area
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Artist(_) | Self::Album(_))
    }

    pub fn playlist_id(&self) -> Option<&PlaylistId> {
        match self {
            Self::Playlist(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Search => write!(f, "search"),
            Self::Library => write!(f, "library"),
            Self::Playlist(id) => write!(f, "playlist:{id}"),
            Self::Artist(id) => write!(f, "artist:{id}"),
            Self::Album(id) => write!(f, "album:{id}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseViewError {
    #[error("Unknown view: {0}")]
    Unknown(String),

    #[error("View '{0}' needs an id")]
    MissingId(String),
}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, id) = match s.split_once(':') {
            Some((kind, id)) => (kind, Some(id.trim())),
            None => (s, None),
        };

        let require_id = || match id {
            Some(id) if !id.is_empty() => Ok(id.to_string()),
            _ => Err(ParseViewError::MissingId(kind.to_string())),
        };

        match (kind, id) {
            ("home", None) => Ok(Self::Home),
            ("search", None) => Ok(Self::Search),
            ("library", None) => Ok(Self::Library),
            ("playlist", _) => Ok(Self::Playlist(PlaylistId::new(require_id()?))),
            ("artist", _) => Ok(Self::Artist(ArtistId::new(require_id()?))),
            ("album", _) => Ok(Self::Album(AlbumId::new(require_id()?))),
            _ => Err(ParseViewError::Unknown(s.to_string())),
        }
    }
}
