//! Browse and search tuning.

use musichub_core::SearchLimits;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits and timings used when the state layer issues loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Tracks fetched for the Home view
    #[serde(default = "default_popular_limit")]
    pub popular_limit: u32,

    /// Tracks fetched for an artist or album page
    #[serde(default = "default_detail_limit")]
    pub detail_limit: u32,

    /// Per-category search limits
    #[serde(default)]
    pub search_limits: SearchLimits,

    /// Quiet period before typed search input is submitted
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Notifications kept before the oldest is dropped
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

fn default_popular_limit() -> u32 {
    20
}

fn default_detail_limit() -> u32 {
    20
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_max_notifications() -> usize {
    5
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            popular_limit: default_popular_limit(),
            detail_limit: default_detail_limit(),
            search_limits: SearchLimits::default(),
            debounce_ms: default_debounce_ms(),
            max_notifications: default_max_notifications(),
        }
    }
}

impl StateConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
