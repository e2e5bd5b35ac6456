//! Domain types

mod catalog;
mod ids;
mod playlist;
mod session;
mod track;

pub use catalog::{Album, Artist, SearchLimits, SearchResults};
pub use ids::{AlbumId, ArtistId, PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use session::{AuthState, Session};
pub use track::Track;
