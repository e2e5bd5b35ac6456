//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The track has no playable source
    #[error("Track has no audio source: {0}")]
    MissingSource(String),

    /// The audio output refused to load a source
    #[error("Failed to load audio: {0}")]
    Load(String),

    /// The audio output refused to start (autoplay policy, device busy, ...)
    #[error("Playback was blocked: {0}")]
    Blocked(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
