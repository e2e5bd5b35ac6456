//! Keeps liked-status checks in step with the tracks on screen.

use musichub_core::{Track, TrackId};
use musichub_state::Event;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct LikeObserver {
    observed: HashSet<TrackId>,
}

impl LikeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events that start observing newly visible tracks and forget the rest
    pub fn reconcile(&mut self, visible: &[Track]) -> Vec<Event> {
        let now: HashSet<TrackId> = visible.iter().map(|t| t.id.clone()).collect();

        let mut events: Vec<Event> = self
            .observed
            .difference(&now)
            .cloned()
            .map(Event::ForgetLike)
            .collect();
        events.extend(
            now.difference(&self.observed)
                .cloned()
                .map(Event::ObserveLike),
        );

        self.observed = now;
        events
    }
}
