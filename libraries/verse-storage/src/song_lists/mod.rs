//! Serialized song-list storage
//!
//! One row per playlist storage key; the value column holds the
//! JSON-encoded ordered song array exactly as the history state machine
//! hands it over. The key already carries the playlist namespace (see
//! `verse_core::storage::song_list_key`), so rows from different playlists
//! can never collide.

use crate::error::{Result, StorageError};
use sqlx::{Row, SqlitePool};
use verse_core::Song;

/// Get the song list stored under `key`
///
/// Returns `Ok(None)` if the key was never written.
///
/// # Errors
///
/// Returns an error if the query fails or the stored JSON does not parse
pub async fn get(pool: &SqlitePool, key: &str) -> Result<Option<Vec<Song>>> {
    let row = sqlx::query("SELECT value FROM song_lists WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let value: String = row.get("value");
            let songs = serde_json::from_str(&value)
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            Ok(Some(songs))
        }
        None => Ok(None),
    }
}

/// Store `songs` under `key`, replacing any previous value
///
/// # Errors
///
/// Returns an error if serialization or the upsert fails
pub async fn set(pool: &SqlitePool, key: &str, songs: &[Song]) -> Result<()> {
    let value =
        serde_json::to_string(songs).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
        INSERT INTO song_lists (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}
