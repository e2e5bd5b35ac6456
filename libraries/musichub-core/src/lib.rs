//! MusicHub Core
//!
//! Domain types, service traits, and error handling shared by every MusicHub
//! crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Artist`, `Album`, `Playlist`, `Session`
//! - **Service Traits**: `CatalogService`, `CollectionStore`, `IdentityProvider`
//! - **Error Handling**: Unified `HubError` and `Result` types
//!
//! Implementations live elsewhere: the Jamendo client in `musichub-catalog`,
//! the SQLite collection store and local identity in `musichub-storage`.
//!
//! # Example
//!
//! ```rust
//! use musichub_core::types::{Playlist, Track, TrackId, UserId};
//!
//! let track = Track::new(TrackId::new("1204669"), "Wake Up", "https://cdn/1204669.mp3");
//! let mut playlist = Playlist::new(UserId::new("alice"), "Morning");
//! playlist.track_ids.push(track.id.clone());
//!
//! assert!(playlist.contains(&track.id));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{HubError, Result};
pub use traits::{CatalogService, CollectionStore, IdentityProvider};

pub use types::{
    Album, AlbumId, Artist, ArtistId, AuthState, Playlist, PlaylistId, SearchLimits,
    SearchResults, Session, Track, TrackId, UserId,
};
