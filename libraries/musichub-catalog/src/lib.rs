//! MusicHub Catalog
//!
//! Jamendo-backed implementation of [`musichub_core::CatalogService`], plus
//! [`search_all`], the partial-failure tolerant aggregated search used by the
//! search view.

mod client;
mod error;
mod search;
mod types;

pub use client::JamendoClient;
pub use error::{CatalogError, Result};
pub use search::search_all;
pub use types::{JamendoConfig, DEFAULT_BASE_URL};
