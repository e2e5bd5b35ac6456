//! MusicHub - Playback
//!
//! Platform-agnostic playback management for MusicHub.
//!
//! This crate provides:
//! - A play queue with a wraparound cursor ([`PlaybackQueue`])
//! - An audio binding that keeps one output in step with the queue
//!   ([`AudioBinding`])
//! - Events describing what the output is doing ([`PlaybackEvent`])
//!
//! # Architecture
//!
//! `musichub-playback` knows nothing about sessions, views, or storage.
//! The application state owns a [`PlaybackQueue`] and, after every change,
//! hands the current selection to [`AudioBinding::sync`]. Platform audio is
//! provided through the [`AudioOutput`] trait.
//!
//! # Example
//!
//! ```rust
//! use musichub_core::{Track, TrackId};
//! use musichub_playback::PlaybackQueue;
//!
//! let tracks = vec![
//!     Track::new(TrackId::new("1"), "Intro", "https://cdn/1.mp3"),
//!     Track::new(TrackId::new("2"), "Outro", "https://cdn/2.mp3"),
//! ];
//!
//! let mut queue = PlaybackQueue::new();
//! queue.play_list(tracks, 1);
//! queue.play_next();
//!
//! assert_eq!(queue.current_index(), Some(0));
//! ```

mod audio;
mod error;
mod events;
mod queue;
pub mod types;

pub use audio::{AudioBinding, AudioOutput};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use queue::PlaybackQueue;
pub use types::PlaybackState;
