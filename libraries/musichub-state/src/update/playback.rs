//! Queue commands. The audio binding picks up the new selection after
//! every update, so none of these return effects.

use crate::effect::Effect;
use crate::state::AppState;
use musichub_core::Track;
use tracing::debug;

pub(super) fn play_list(state: &mut AppState, tracks: Vec<Track>, start_index: usize) -> Vec<Effect> {
    if state.is_signed_in() {
        let len = tracks.len();
        if state.queue.play_list(tracks, start_index).is_none() && len > 0 {
            debug!(start_index, len, "Start index out of range; nothing selected");
        }
    }
    Vec::new()
}

pub(super) fn enqueue(state: &mut AppState, track: Track) -> Vec<Effect> {
    if state.is_signed_in() {
        state.queue.enqueue(track);
    }
    Vec::new()
}

pub(super) fn next(state: &mut AppState) -> Vec<Effect> {
    if state.is_signed_in() {
        state.queue.play_next();
    }
    Vec::new()
}

pub(super) fn previous(state: &mut AppState) -> Vec<Effect> {
    if state.is_signed_in() {
        state.queue.play_previous();
    }
    Vec::new()
}

pub(super) fn track_ended(state: &mut AppState) -> Vec<Effect> {
    if state.is_signed_in() {
        state.queue.handle_track_end();
    }
    Vec::new()
}
