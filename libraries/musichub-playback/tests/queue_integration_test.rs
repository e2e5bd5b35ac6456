//! Integration tests for queue and audio binding working together

use musichub_core::{Track, TrackId};
use musichub_playback::{
    AudioBinding, AudioOutput, PlaybackEvent, PlaybackQueue, PlaybackState, Result,
};

// ===== Helpers =====

fn create_track(id: &str) -> Track {
    Track::new(TrackId::new(id), format!("Track {id}"), format!("https://cdn/{id}.mp3"))
}

#[derive(Default)]
struct LoadLog {
    loaded: Vec<String>,
}

impl AudioOutput for LoadLog {
    fn load(&mut self, source_url: &str) -> Result<()> {
        self.loaded.push(source_url.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}
}

fn sync(binding: &mut AudioBinding<LoadLog>, queue: &PlaybackQueue) -> Option<PlaybackEvent> {
    binding.sync(queue.current_track(), queue.generation(), true)
}

// ===== Wraparound and selection =====

#[test]
fn test_next_from_last_wraps_to_first() {
    let mut queue = PlaybackQueue::new();
    queue.play_list(vec![create_track("1"), create_track("2"), create_track("3")], 2);

    queue.play_next();

    assert_eq!(queue.current_index(), Some(0));
    assert_eq!(queue.current_track().map(|t| t.id.as_str()), Some("1"));
}

#[test]
fn test_enqueue_into_empty_queue_stays_silent() {
    let mut queue = PlaybackQueue::new();
    let mut binding = AudioBinding::new(LoadLog::default());

    queue.enqueue(create_track("1"));

    assert!(sync(&mut binding, &queue).is_none());
    assert!(binding.output().loaded.is_empty());
    assert_eq!(queue.current_index(), None);
}

#[test]
fn test_out_of_range_start_selects_nothing() {
    let mut queue = PlaybackQueue::new();
    let mut binding = AudioBinding::new(LoadLog::default());

    queue.play_list(vec![create_track("1"), create_track("2")], 5);

    assert!(queue.current_track().is_none());
    assert!(sync(&mut binding, &queue).is_none());
    assert_eq!(binding.state(), PlaybackState::Stopped);
}

// ===== Binding follows the queue =====

#[test]
fn test_track_end_loads_next_source() {
    let mut queue = PlaybackQueue::new();
    let mut binding = AudioBinding::new(LoadLog::default());

    queue.play_list(vec![create_track("1"), create_track("2")], 0);
    sync(&mut binding, &queue);

    assert!(binding.track_ended().is_some());
    queue.handle_track_end();
    let event = sync(&mut binding, &queue);

    assert_eq!(
        event,
        Some(PlaybackEvent::TrackChanged {
            track_id: "2".into(),
            previous_track_id: Some("1".into()),
        })
    );
    assert_eq!(
        binding.output().loaded,
        vec!["https://cdn/1.mp3", "https://cdn/2.mp3"]
    );
}

#[test]
fn test_single_track_replays_on_end() {
    let mut queue = PlaybackQueue::new();
    let mut binding = AudioBinding::new(LoadLog::default());

    queue.play_list(vec![create_track("1")], 0);
    sync(&mut binding, &queue);
    queue.handle_track_end();
    sync(&mut binding, &queue);

    assert_eq!(binding.output().loaded.len(), 2);
}

#[test]
fn test_queue_is_a_snapshot() {
    let mut playlist = vec![create_track("1"), create_track("2")];
    let mut queue = PlaybackQueue::new();
    queue.play_list(playlist.clone(), 0);

    playlist.remove(1);

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.tracks()[1].id, TrackId::new("2"));
}

#[test]
fn test_reset_stops_output() {
    let mut queue = PlaybackQueue::new();
    let mut binding = AudioBinding::new(LoadLog::default());

    queue.play_list(vec![create_track("1")], 0);
    sync(&mut binding, &queue);
    queue.reset();

    assert_eq!(sync(&mut binding, &queue), Some(PlaybackEvent::Stopped));
    assert_eq!(binding.state(), PlaybackState::Stopped);
}
