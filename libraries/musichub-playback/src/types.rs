//! Playback types

use serde::{Deserialize, Serialize};

/// What the audio output is doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No source loaded
    #[default]
    Stopped,
    /// Source loaded and playing
    Playing,
    /// Source loaded, paused by the user
    Paused,
    /// Source loaded but the output refused to start
    Blocked,
}

impl PlaybackState {
    pub fn has_source(self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
        assert!(!PlaybackState::Stopped.has_source());
        assert!(PlaybackState::Blocked.has_source());
    }
}
