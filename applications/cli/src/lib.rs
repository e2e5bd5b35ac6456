//! MusicHub terminal front-end
//!
//! Reads commands from stdin, turns them into controller events and prints
//! the resulting screen.

pub mod action;
pub mod command;
pub mod config;
#[cfg(feature = "device")]
pub mod device;
pub mod likes;
pub mod output;
pub mod render;

pub use action::{resolve, Action};
pub use command::{Command, CommandError, HELP};
pub use config::{AppConfig, AudioSettings, ConfigError};
#[cfg(feature = "device")]
pub use device::DeviceOutput;
pub use likes::LikeObserver;
pub use output::LogOutput;
