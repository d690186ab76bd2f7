use crate::{playlists, song_lists};
use async_trait::async_trait;
use sqlx::SqlitePool;
use verse_core::error::Result;
use verse_core::{Playlist, PlaylistId, PlaylistRegistry, Song, SongListStore, VerseError};

/// `SQLite`-backed store implementing the core storage contracts
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SongListStore for SqliteStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<Song>>> {
        song_lists::get(&self.pool, key)
            .await
            .map_err(VerseError::from)
    }

    async fn save(&self, key: &str, songs: &[Song]) -> Result<()> {
        song_lists::set(&self.pool, key, songs)
            .await
            .map_err(VerseError::from)
    }
}

#[async_trait]
impl PlaylistRegistry for SqliteStore {
    async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_all(&self.pool).await.map_err(VerseError::from)
    }

    async fn create_playlist(&self, name: &str) -> Result<Option<Playlist>> {
        let Some(playlist) = Playlist::new(name) else {
            return Ok(None);
        };
        playlists::insert(&self.pool, &playlist)
            .await
            .map_err(VerseError::from)?;
        Ok(Some(playlist))
    }

    async fn remove_playlist(&self, id: &PlaylistId) -> Result<()> {
        playlists::delete(&self.pool, id)
            .await
            .map_err(VerseError::from)
    }
}
