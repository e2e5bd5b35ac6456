//! MusicHub Storage
//!
//! `SQLite` persistence for MusicHub: each user's liked tracks and playlists
//! (the [`CollectionStore`](musichub_core::CollectionStore) implementation)
//! and local email/password accounts (the
//! [`IdentityProvider`](musichub_core::IdentityProvider) implementation).
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries (`liked`,
//!   `playlists`, `users`)
//! - **Track copies**: Liked and playlist tracks are stored as full catalog
//!   snapshots, so listing them never needs the catalog
//! - **Timestamps**: Unix milliseconds, ties broken by insertion order
//!
//! # Example
//!
//! ```rust,no_run
//! use musichub_core::{CollectionStore, UserId};
//! use musichub_storage::{create_pool, run_migrations, SqliteCollectionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://musichub.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteCollectionStore::new(pool);
//! let playlists = store.user_playlists(&UserId::new("alice")).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod identity;

// Vertical slices
pub mod liked;
pub mod playlists;
pub mod users;

pub use context::SqliteCollectionStore;
pub use error::{Result, StorageError};
pub use identity::LocalIdentity;

use chrono::{DateTime, Utc};
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://musichub.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(StorageError::InvalidTimestamp(millis))
}
