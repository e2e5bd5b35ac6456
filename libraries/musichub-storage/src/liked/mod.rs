//! Liked tracks, per user.

use crate::error::Result;
use crate::now_millis;
use musichub_core::types::{Track, TrackId, UserId};
use sqlx::{Row, SqlitePool};
use tracing::warn;

/// Most liked tracks ever returned by [`list`]
pub const LIKED_TRACKS_LIMIT: i64 = 100;

/// Like a track; liking again refreshes the stored copy and the like time
pub async fn like(pool: &SqlitePool, user_id: &UserId, track: &Track) -> Result<()> {
    let track_json = serde_json::to_string(track)?;

    sqlx::query(
        r#"
        INSERT INTO liked_tracks (user_id, track_id, track_json, liked_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(user_id, track_id)
        DO UPDATE SET track_json = excluded.track_json, liked_at = excluded.liked_at
        "#,
    )
    .bind(user_id.as_str())
    .bind(track.id.as_str())
    .bind(track_json)
    .bind(now_millis())
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a like (no-op when the track was not liked)
pub async fn unlike(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<()> {
    sqlx::query("DELETE FROM liked_tracks WHERE user_id = ? AND track_id = ?")
        .bind(user_id.as_str())
        .bind(track_id.as_str())
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn is_liked(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<bool> {
    let row = sqlx::query("SELECT 1 FROM liked_tracks WHERE user_id = ? AND track_id = ?")
        .bind(user_id.as_str())
        .bind(track_id.as_str())
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Liked tracks, most recently liked first
///
/// Rows whose stored copy no longer parses are skipped.
pub async fn list(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<Track>> {
    let rows = sqlx::query(
        r#"
        SELECT track_id, track_json
        FROM liked_tracks
        WHERE user_id = ?
        ORDER BY liked_at DESC, rowid DESC
        LIMIT ?
        "#,
    )
    .bind(user_id.as_str())
    .bind(LIKED_TRACKS_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let json: String = row.get("track_json");
            match serde_json::from_str::<Track>(&json) {
                Ok(track) => Some(track),
                Err(e) => {
                    let track_id: String = row.get("track_id");
                    warn!(track_id, error = %e, "Skipping unreadable liked track");
                    None
                }
            }
        })
        .collect())
}
