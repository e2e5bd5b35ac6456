//! Debounced search input
//!
//! Keystrokes restart a quiet-period timer; once it expires the latest
//! value is emitted, but only if it differs from the last emitted value.

use std::time::Duration;
use tokio::time::Instant;

/// Default quiet period for search input
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
    last_emitted: String,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_emitted: String::new(),
        }
    }

    /// Record a new raw value, restarting the quiet period
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now + self.quiet));
    }

    /// When the pending value settles, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Emit the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (_, at) = self.pending.as_ref()?;
        if now < *at {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if value == self.last_emitted {
            return None;
        }
        self.last_emitted.clone_from(&value);
        Some(value)
    }

    /// Treat `value` as already emitted (explicit submit)
    pub fn settle(&mut self, value: impl Into<String>) {
        self.pending = None;
        self.last_emitted = value.into();
    }

    pub fn reset(&mut self) {
        self.pending = None;
        self.last_emitted.clear();
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
