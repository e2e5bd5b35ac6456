//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so migrations, constraints, and indexes behave as in production.

#![allow(dead_code)]

use musichub_core::{Track, TrackId};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = musichub_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        musichub_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: a catalog track
pub fn create_test_track(id: &str, name: &str) -> Track {
    Track::new(TrackId::new(id), name, format!("https://cdn/{id}.mp3"))
        .with_artist("Test Artist")
        .with_album("Test Album")
}
