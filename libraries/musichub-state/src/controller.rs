//! The controller
//!
//! Owns the [`AppState`] and is the only place it changes. Events arrive
//! either from the rendering layer ([`Controller::dispatch`]) or from the
//! internal channel fed by the effect runner, the identity forwarder and the
//! search debouncer ([`Controller::next_event`]).

use crate::config::StateConfig;
use crate::debounce::Debouncer;
use crate::event::Event;
use crate::runner::{EffectRunner, EventSender};
use crate::state::AppState;
use crate::update::update;
use crate::view::View;
use crate::view_model::{self, Screen};
use musichub_core::{AuthState, CatalogService, CollectionStore};
use musichub_playback::{AudioBinding, AudioOutput, PlaybackEvent, PlaybackState};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// How often a playing output is asked whether its source ended
const END_OF_TRACK_POLL: Duration = Duration::from_millis(250);

pub struct Controller<O: AudioOutput> {
    state: AppState,
    config: StateConfig,
    runner: EffectRunner,
    events_tx: EventSender,
    events_rx: mpsc::UnboundedReceiver<Event>,
    audio: AudioBinding<O>,
    debouncer: Debouncer,
}

impl<O: AudioOutput> Controller<O> {
    pub fn new(
        config: StateConfig,
        catalog: Arc<dyn CatalogService>,
        store: Arc<dyn CollectionStore>,
        output: O,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(catalog, store, events_tx.clone()),
            debouncer: Debouncer::new(config.debounce()),
            config,
            events_tx,
            events_rx,
            audio: AudioBinding::new(output),
        }
    }

    /// Handle for queueing events from other tasks (e.g. the audio device)
    pub fn sender(&self) -> EventSender {
        self.events_tx.clone()
    }

    /// Forward every session change as [`Event::AuthChanged`], starting
    /// with the current value
    pub fn watch_identity(&self, mut auth: watch::Receiver<AuthState>) -> JoinHandle<()> {
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let initial = auth.borrow_and_update().clone();
            if events.send(Event::AuthChanged(initial)).is_err() {
                return;
            }
            while auth.changed().await.is_ok() {
                let next = auth.borrow_and_update().clone();
                if events.send(Event::AuthChanged(next)).is_err() {
                    break;
                }
            }
            debug!("Identity forwarder stopped");
        })
    }

    /// Apply one event, start its effects and bring the audio output in line
    ///
    /// Returns what the audio output did in response.
    pub fn dispatch(&mut self, event: Event) -> Vec<PlaybackEvent> {
        let mut playback = Vec::new();
        let active = self.state.auth_ready && self.state.is_signed_in();

        match &event {
            Event::SearchInput(raw) if active && self.state.view == View::Search => {
                self.debouncer.input(raw.clone(), Instant::now());
            }
            Event::SubmitSearch(query) if active => self.debouncer.settle(query.clone()),
            Event::TogglePause if active => {
                let toggled = if self.audio.state() == PlaybackState::Playing {
                    self.audio.pause()
                } else {
                    self.audio.resume()
                };
                playback.extend(toggled);
            }
            Event::TrackEnded if active => playback.extend(self.audio.track_ended()),
            _ => {}
        }

        for effect in update(&mut self.state, event, &self.config) {
            debug!(?effect, "Running effect");
            self.runner.spawn(effect);
        }

        if self.state.view != View::Search {
            self.debouncer.reset();
        }

        playback.extend(self.sync_audio());
        playback
    }

    /// Wait for the next internal event: an effect result, a session change,
    /// a settled search input or the end of the playing track
    pub async fn next_event(&mut self) -> Option<Event> {
        loop {
            let deadline = self.debouncer.deadline();
            let end_check = (self.audio.state() == PlaybackState::Playing)
                .then(|| Instant::now() + END_OF_TRACK_POLL);
            tokio::select! {
                event = self.events_rx.recv() => return event,
                () = sleep_until(deadline) => {
                    if let Some(query) = self.debouncer.poll(Instant::now()) {
                        return Some(Event::SearchSettled(query));
                    }
                }
                () = sleep_until(end_check) => {
                    if self.audio.poll_finished() {
                        return Some(Event::TrackEnded);
                    }
                }
            }
        }
    }

    /// Wait for one internal event and dispatch it
    pub async fn step(&mut self) -> Option<Vec<PlaybackEvent>> {
        let event = self.next_event().await?;
        Some(self.dispatch(event))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen<'_> {
        view_model::screen(&self.state, self.audio.state())
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.audio.state()
    }

    pub fn output(&self) -> &O {
        self.audio.output()
    }

    fn sync_audio(&mut self) -> Option<PlaybackEvent> {
        let signed_in = self.state.is_signed_in();
        if !signed_in && self.state.queue.current_index().is_some() {
            self.state.queue.reset();
        }

        let queue = &self.state.queue;
        self.audio
            .sync(queue.current_track(), queue.generation(), signed_in)
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
