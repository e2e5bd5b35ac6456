use crate::error::{Result, StorageError};
use crate::{from_millis, now_millis};
use musichub_core::types::{Playlist, PlaylistId, Track, TrackId, UserId};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

/// Create a new empty playlist
pub async fn create(pool: &SqlitePool, owner_id: &UserId, name: &str) -> Result<Playlist> {
    let playlist = Playlist::new(owner_id.clone(), name);

    sqlx::query(
        r#"
        INSERT INTO playlists (id, user_id, name, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(playlist.id.as_str())
    .bind(owner_id.as_str())
    .bind(&playlist.name)
    .bind(playlist.created_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Get a user's playlists, newest first, with member ids
pub async fn get_user_playlists(pool: &SqlitePool, owner_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, name, created_at
        FROM playlists
        WHERE user_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(owner_id.as_str())
    .fetch_all(pool)
    .await?;

    let member_rows = sqlx::query(
        r#"
        SELECT pt.playlist_id, pt.track_id
        FROM playlist_tracks pt
        INNER JOIN playlists p ON pt.playlist_id = p.id
        WHERE p.user_id = ?
        ORDER BY pt.added_at, pt.rowid
        "#,
    )
    .bind(owner_id.as_str())
    .fetch_all(pool)
    .await?;

    let mut members: HashMap<String, Vec<TrackId>> = HashMap::new();
    for row in member_rows {
        members
            .entry(row.get("playlist_id"))
            .or_default()
            .push(TrackId::new(row.get::<String, _>("track_id")));
    }

    rows.into_iter()
        .map(|row| {
            let id: String = row.get("id");
            Ok(Playlist {
                track_ids: members.remove(&id).unwrap_or_default(),
                id: PlaylistId::new(id),
                name: row.get("name"),
                owner_id: UserId::new(row.get::<String, _>("user_id")),
                created_at: from_millis(row.get("created_at"))?,
            })
        })
        .collect()
}

/// Rename a playlist
pub async fn rename(pool: &SqlitePool, id: &PlaylistId, name: &str) -> Result<()> {
    let result = sqlx::query("UPDATE playlists SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Playlist", id.as_str()));
    }
    Ok(())
}

/// Delete a playlist and its members (no-op when it does not exist)
pub async fn delete(pool: &SqlitePool, id: &PlaylistId) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Add a track to a playlist; an existing member keeps its position
pub async fn add_track(pool: &SqlitePool, id: &PlaylistId, track: &Track) -> Result<()> {
    ensure_exists(pool, id).await?;
    let track_json = serde_json::to_string(track)?;

    sqlx::query(
        r#"
        INSERT INTO playlist_tracks (playlist_id, track_id, track_json, added_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(playlist_id, track_id) DO NOTHING
        "#,
    )
    .bind(id.as_str())
    .bind(track.id.as_str())
    .bind(track_json)
    .bind(now_millis())
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a track from a playlist
pub async fn remove_track(pool: &SqlitePool, id: &PlaylistId, track_id: &TrackId) -> Result<()> {
    ensure_exists(pool, id).await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?")
        .bind(id.as_str())
        .bind(track_id.as_str())
        .execute(pool)
        .await?;

    Ok(())
}

/// Member tracks, oldest added first
pub async fn get_tracks(pool: &SqlitePool, id: &PlaylistId) -> Result<Vec<Track>> {
    let rows = sqlx::query(
        r#"
        SELECT track_json
        FROM playlist_tracks
        WHERE playlist_id = ?
        ORDER BY added_at, rowid
        "#,
    )
    .bind(id.as_str())
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let json: String = row.get("track_json");
            Ok(serde_json::from_str(&json)?)
        })
        .collect()
}

async fn ensure_exists(pool: &SqlitePool, id: &PlaylistId) -> Result<()> {
    let row = sqlx::query("SELECT 1 FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(_) => Ok(()),
        None => Err(StorageError::not_found("Playlist", id.as_str())),
    }
}
