//! Audio binding
//!
//! Keeps a single platform audio output in step with the queue's current
//! track. The binding is the only component that talks to the output; the
//! rest of the application changes what is selected and calls [`sync`].
//!
//! [`sync`]: AudioBinding::sync

use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::types::PlaybackState;
use musichub_core::{Track, TrackId};
use tracing::{debug, warn};

/// Platform audio output
///
/// Implementations wrap whatever actually produces sound (an audio device,
/// an external player, a test recorder).
pub trait AudioOutput: Send {
    /// Point the output at a new source, discarding the old one
    fn load(&mut self, source_url: &str) -> Result<()>;

    /// Start or resume playback of the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause playback (no-op when nothing is playing)
    fn pause(&mut self);

    /// Whether the loaded source has played to its end
    ///
    /// Polled while playing. Outputs that cannot tell keep the default.
    fn is_finished(&self) -> bool {
        false
    }
}

impl<O: AudioOutput + ?Sized> AudioOutput for Box<O> {
    fn load(&mut self, source_url: &str) -> Result<()> {
        (**self).load(source_url)
    }

    fn play(&mut self) -> Result<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}

#[derive(Debug, Clone)]
struct LoadedSource {
    track_id: TrackId,
    generation: u64,
}

/// Drives an [`AudioOutput`] from the queue's selection
pub struct AudioBinding<O: AudioOutput> {
    output: O,
    loaded: Option<LoadedSource>,
    state: PlaybackState,
}

impl<O: AudioOutput> AudioBinding<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            loaded: None,
            state: PlaybackState::Stopped,
        }
    }

    /// Reconcile the output with the current selection
    ///
    /// Loads and starts `current` when it differs from what is loaded, or when
    /// `generation` shows it was selected again. With no selection, or when
    /// the session is not authenticated, the output is paused and unloaded;
    /// callers must then clear their own selection as well.
    ///
    /// A refused start is logged and reported as
    /// [`PlaybackEvent::PlaybackBlocked`]; it is never an error.
    pub fn sync(
        &mut self,
        current: Option<&Track>,
        generation: u64,
        authenticated: bool,
    ) -> Option<PlaybackEvent> {
        let Some(track) = current.filter(|_| authenticated) else {
            return self.stop();
        };

        let unchanged = self
            .loaded
            .as_ref()
            .is_some_and(|l| l.track_id == track.id && l.generation == generation);
        if unchanged {
            return None;
        }

        let previous_track_id = self.loaded.take().map(|l| l.track_id.to_string());
        self.loaded = Some(LoadedSource {
            track_id: track.id.clone(),
            generation,
        });

        match self.start(track) {
            Ok(()) => {
                debug!(track_id = %track.id, "Playback started");
                self.state = PlaybackState::Playing;
                Some(PlaybackEvent::TrackChanged {
                    track_id: track.id.to_string(),
                    previous_track_id,
                })
            }
            Err(err) => {
                warn!(track_id = %track.id, error = %err, "Audio output refused to play");
                self.state = PlaybackState::Blocked;
                Some(PlaybackEvent::PlaybackBlocked {
                    track_id: track.id.to_string(),
                    message: err.to_string(),
                })
            }
        }
    }

    /// User pause
    pub fn pause(&mut self) -> Option<PlaybackEvent> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        self.output.pause();
        self.state = PlaybackState::Paused;
        Some(PlaybackEvent::Paused)
    }

    /// User resume (also retries a blocked start)
    pub fn resume(&mut self) -> Option<PlaybackEvent> {
        if !matches!(self.state, PlaybackState::Paused | PlaybackState::Blocked) {
            return None;
        }
        match self.output.play() {
            Ok(()) => {
                self.state = PlaybackState::Playing;
                Some(PlaybackEvent::Resumed)
            }
            Err(err) => {
                warn!(error = %err, "Audio output refused to resume");
                None
            }
        }
    }

    /// Check a playing output for the end of its source
    ///
    /// Returns true once per finished source; the binding then counts as
    /// stopped until the next selection is synced.
    pub fn poll_finished(&mut self) -> bool {
        if self.state != PlaybackState::Playing || !self.output.is_finished() {
            return false;
        }
        debug!(track_id = ?self.loaded_track(), "Source reached its end");
        self.state = PlaybackState::Stopped;
        true
    }

    /// The output reported that the loaded source reached its end
    pub fn track_ended(&mut self) -> Option<PlaybackEvent> {
        let loaded = self.loaded.as_ref()?;
        Some(PlaybackEvent::TrackFinished {
            track_id: loaded.track_id.to_string(),
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn loaded_track(&self) -> Option<&TrackId> {
        self.loaded.as_ref().map(|l| &l.track_id)
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    fn start(&mut self, track: &Track) -> Result<()> {
        if track.audio_url.is_empty() {
            return Err(PlaybackError::MissingSource(track.id.to_string()));
        }
        self.output.load(&track.audio_url)?;
        self.output.play()
    }

    fn stop(&mut self) -> Option<PlaybackEvent> {
        if self.loaded.is_none() && self.state == PlaybackState::Stopped {
            return None;
        }
        self.output.pause();
        self.loaded = None;
        self.state = PlaybackState::Stopped;
        Some(PlaybackEvent::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOutput {
        calls: Vec<String>,
        refuse_play: bool,
        finished: bool,
    }

    impl AudioOutput for RecordingOutput {
        fn load(&mut self, source_url: &str) -> Result<()> {
            self.calls.push(format!("load {source_url}"));
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            self.calls.push("play".into());
            if self.refuse_play {
                return Err(PlaybackError::Blocked("autoplay denied".into()));
            }
            Ok(())
        }

        fn pause(&mut self) {
            self.calls.push("pause".into());
        }

        fn is_finished(&self) -> bool {
            self.finished
        }
    }

    fn track(id: &str) -> Track {
        Track::new(TrackId::new(id), id, format!("https://cdn/{id}.mp3"))
    }

    #[test]
    fn loads_and_plays_new_selection() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");

        let event = binding.sync(Some(&t1), 1, true);

        assert_eq!(
            event,
            Some(PlaybackEvent::TrackChanged {
                track_id: "1".into(),
                previous_track_id: None
            })
        );
        assert_eq!(binding.output().calls, vec!["load https://cdn/1.mp3", "play"]);
        assert_eq!(binding.state(), PlaybackState::Playing);
    }

    #[test]
    fn same_generation_is_noop() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");

        binding.sync(Some(&t1), 1, true);
        assert!(binding.sync(Some(&t1), 1, true).is_none());
        assert_eq!(binding.output().calls.len(), 2);
    }

    #[test]
    fn reselecting_same_track_reloads() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");

        binding.sync(Some(&t1), 1, true);
        let event = binding.sync(Some(&t1), 2, true);

        assert!(matches!(event, Some(PlaybackEvent::TrackChanged { .. })));
        assert_eq!(binding.output().calls.len(), 4);
    }

    #[test]
    fn refused_play_is_reported_not_raised() {
        let output = RecordingOutput {
            refuse_play: true,
            ..Default::default()
        };
        let mut binding = AudioBinding::new(output);
        let t1 = track("1");

        let event = binding.sync(Some(&t1), 1, true);

        assert!(matches!(event, Some(PlaybackEvent::PlaybackBlocked { .. })));
        assert_eq!(binding.state(), PlaybackState::Blocked);
        assert_eq!(binding.loaded_track(), Some(&TrackId::new("1")));
    }

    #[test]
    fn no_selection_pauses_and_unloads() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");
        binding.sync(Some(&t1), 1, true);

        assert_eq!(binding.sync(None, 2, true), Some(PlaybackEvent::Stopped));
        assert_eq!(binding.output().calls.last().map(String::as_str), Some("pause"));
        assert!(binding.loaded_track().is_none());

        // Already stopped
        assert!(binding.sync(None, 3, true).is_none());
    }

    #[test]
    fn anonymous_session_never_plays() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");

        assert!(binding.sync(Some(&t1), 1, false).is_none());
        assert!(binding.output().calls.is_empty());
        assert_eq!(binding.state(), PlaybackState::Stopped);
    }

    #[test]
    fn missing_source_is_blocked() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let silent = Track::new(TrackId::new("9"), "Silent", "");

        let event = binding.sync(Some(&silent), 1, true);
        assert!(matches!(event, Some(PlaybackEvent::PlaybackBlocked { .. })));
        assert!(binding.output().calls.is_empty());
    }

    #[test]
    fn pause_and_resume() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");
        binding.sync(Some(&t1), 1, true);

        assert_eq!(binding.pause(), Some(PlaybackEvent::Paused));
        assert!(binding.pause().is_none());
        assert_eq!(binding.resume(), Some(PlaybackEvent::Resumed));
        assert_eq!(binding.state(), PlaybackState::Playing);
    }

    #[test]
    fn track_ended_reports_loaded_track() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        assert!(binding.track_ended().is_none());

        let t1 = track("1");
        binding.sync(Some(&t1), 1, true);
        assert_eq!(
            binding.track_ended(),
            Some(PlaybackEvent::TrackFinished {
                track_id: "1".into()
            })
        );
    }

    #[test]
    fn finished_source_is_reported_once() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");
        binding.sync(Some(&t1), 1, true);
        assert!(!binding.poll_finished());

        binding.output.finished = true;
        assert!(binding.poll_finished());
        assert!(!binding.poll_finished());
        assert_eq!(binding.state(), PlaybackState::Stopped);
        assert!(binding.track_ended().is_some());
    }

    #[test]
    fn paused_output_is_not_polled() {
        let mut binding = AudioBinding::new(RecordingOutput::default());
        let t1 = track("1");
        binding.sync(Some(&t1), 1, true);
        binding.pause();

        binding.output.finished = true;
        assert!(!binding.poll_finished());
    }
}
