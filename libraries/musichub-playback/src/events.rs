//! Playback events
//!
//! Emitted by [`AudioBinding`](crate::AudioBinding) whenever the audio
//! element's observable state changes, so a UI can mirror it.

use serde::{Deserialize, Serialize};

/// Events emitted by the audio binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A new source was loaded and playback started
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// A source was loaded but the output refused to start playing
    ///
    /// The track stays selected; the user can retry from the output's own
    /// controls.
    PlaybackBlocked { track_id: String, message: String },

    /// Paused by the user
    Paused,

    /// Resumed by the user
    Resumed,

    /// Nothing is selected any more (or the session ended)
    Stopped,

    /// Track finished playing naturally (reached end)
    TrackFinished { track_id: String },
}
