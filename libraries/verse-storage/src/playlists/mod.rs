//! Playlist registry storage
//!
//! Relational slice backing the playlists screen: one row per playlist,
//! ordered by an explicit position column so the list renders in the
//! order the user created it.

use crate::error::Result;
use sqlx::{Row, SqlitePool};
use verse_core::{Playlist, PlaylistId};

/// Get all playlists in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT id, name, artwork FROM playlists ORDER BY position",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            Playlist::with_id(
                PlaylistId::new(row.get::<String, _>("id")),
                row.get::<String, _>("name"),
                row.get::<String, _>("artwork"),
            )
        })
        .collect())
}

/// Insert a playlist at the end of the list
pub async fn insert(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
        INSERT INTO playlists (id, name, artwork, position, created_at)
        VALUES (?, ?, ?, (SELECT COALESCE(MAX(position), 0) + 1 FROM playlists), ?)
        "#,
    )
    .bind(playlist.id.as_str())
    .bind(&playlist.name)
    .bind(&playlist.artwork)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a playlist row (no-op if absent)
pub async fn delete(pool: &SqlitePool, id: &PlaylistId) -> Result<()> {
    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(())
}
