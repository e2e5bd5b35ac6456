//! Logging audio output.
//!
//! Used when audio is disabled, when no device can be opened, or when the
//! CLI is built without the `device` feature. It only reports what it would
//! play and never finishes a source.

use musichub_playback::{AudioOutput, PlaybackError, Result};
use tracing::info;

#[derive(Debug, Default)]
pub struct LogOutput {
    source: Option<String>,
    playing: bool,
}

impl LogOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioOutput for LogOutput {
    fn load(&mut self, source_url: &str) -> Result<()> {
        self.playing = false;
        self.source = Some(source_url.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let source = self
            .source
            .as_deref()
            .ok_or_else(|| PlaybackError::Load("no source loaded".into()))?;
        info!(source, "Playing");
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            info!("Paused");
        }
        self.playing = false;
    }
}
