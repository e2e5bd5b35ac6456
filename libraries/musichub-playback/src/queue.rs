//! Playback queue engine
//!
//! An ordered list of tracks plus a cursor. The cursor is `None` when nothing
//! is selected (for example right after enqueueing into an empty queue).
//!
//! Navigation wraps around in both directions. Every selection bumps a
//! generation counter so the audio binding can tell "the same track chosen
//! again" apart from "nothing changed".

use musichub_core::Track;

/// Ordered play queue with a current-position cursor
///
/// The queue is a snapshot: it owns its own copies of the tracks and is never
/// updated by playlist edits made after the tracks were queued.
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    tracks: Vec<Track>,
    current: Option<usize>,
    generation: u64,
}

impl PlaybackQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with `tracks` and select `start_index`
    ///
    /// An empty list leaves the queue untouched. An out-of-range start index
    /// still replaces the queue but selects nothing.
    pub fn play_list(&mut self, tracks: Vec<Track>, start_index: usize) -> Option<&Track> {
        if tracks.is_empty() {
            return None;
        }

        self.tracks = tracks;
        self.select(Some(start_index))
    }

    /// Append a track without changing the selection
    pub fn enqueue(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Select the following track, wrapping to the first after the last
    ///
    /// With nothing selected this selects the first track.
    pub fn play_next(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let next = match self.current {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.select(Some(next))
    }

    /// Select the preceding track, wrapping to the last before the first
    ///
    /// With nothing selected this selects the last track.
    pub fn play_previous(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let previous = match self.current {
            Some(index) if index > 0 => index - 1,
            _ => len - 1,
        };
        self.select(Some(previous))
    }

    /// The current track ended naturally: advance like `play_next`
    pub fn handle_track_end(&mut self) -> Option<&Track> {
        self.play_next()
    }

    /// Drop every track and the selection
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.current = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|index| self.tracks.get(index))
    }

    /// Position of the current track (`None` = nothing selected)
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Bumped on every selection, including re-selecting the same index
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Next/previous controls are meaningful only with more than one track
    pub fn can_skip(&self) -> bool {
        self.tracks.len() > 1
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn select(&mut self, index: Option<usize>) -> Option<&Track> {
        self.current = index.filter(|&i| i < self.tracks.len());
        self.generation = self.generation.wrapping_add(1);
        self.current_track()
    }
}
