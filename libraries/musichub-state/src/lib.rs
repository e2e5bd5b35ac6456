//! MusicHub - State
//!
//! The application core between the services and the rendering layer.
//!
//! This crate provides:
//! - The application state ([`AppState`]) and a pure reducer ([`update`])
//! - Side effects as data ([`Effect`]) and a runner that executes them
//!   against the injected services ([`EffectRunner`])
//! - A [`Controller`] that owns the state, drives the audio binding and
//!   debounces search input
//! - Read-only view models for renderers ([`Screen`])
//!
//! # Architecture
//!
//! ```text
//! renderer ──Event──▶ Controller ──update──▶ AppState
//!                        │  ▲
//!                  Effect│  │result Event
//!                        ▼  │
//!                   EffectRunner ──▶ CatalogService / CollectionStore
//! ```
//!
//! Every asynchronous load carries a [`RequestToken`]; a result is applied
//! only if its token is still the latest for that slot. Collection writes
//! are applied optimistically and rolled back when the store fails.

mod config;
mod controller;
mod debounce;
mod effect;
mod event;
mod optimistic;
mod runner;
mod state;
mod update;
mod view;
pub mod view_model;

pub use config::StateConfig;
pub use controller::Controller;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use effect::{Effect, MutationId, MutationOp, MutationOutput};
pub use event::Event;
pub use runner::{execute, EffectRunner, EventSender};
pub use state::{
    AppState, DetailFocus, DetailPage, Load, Notification, NotificationLevel, PlaylistPage,
    RequestToken, SearchState,
};
pub use update::update;
pub use view::{ParseViewError, View};
pub use view_model::{Content, MainScreen, PlayerModel, Screen, SidebarModel, ViewModel};
