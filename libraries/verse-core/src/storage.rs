//! Storage contracts for the persistence layer
//!
//! The core never talks to a database directly; it goes through these
//! traits. `verse-storage` provides the `SQLite`-backed implementation,
//! [`MemoryStore`] covers tests and sessions running without persistence.

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Song};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Namespace prefix for per-playlist song-list keys
///
/// Key layout carried over from the original client's `AsyncStorage` usage;
/// existing installs depend on it.
pub const SONG_LIST_NAMESPACE: &str = "createplaylist_";

/// Derive the storage key for a playlist's song list
///
/// Deterministic in the playlist id, so two playlists can never share a key.
pub fn song_list_key(playlist_id: &PlaylistId) -> String {
    format!("{SONG_LIST_NAMESPACE}{playlist_id}")
}

/// Keyed storage for serialized song lists
///
/// `load` returns `Ok(None)` for a key that was never written; errors are
/// reserved for actual I/O failure. `save` replaces the stored list
/// wholesale and is best-effort from the caller's perspective.
#[async_trait]
pub trait SongListStore: Send + Sync {
    /// Load the song list stored under `key`, if any
    async fn load(&self, key: &str) -> Result<Option<Vec<Song>>>;

    /// Store `songs` under `key`, replacing any previous value
    async fn save(&self, key: &str, songs: &[Song]) -> Result<()>;
}

/// Persistent registry of the user's playlists
#[async_trait]
pub trait PlaylistRegistry: Send + Sync {
    /// All playlists in insertion order
    async fn list_playlists(&self) -> Result<Vec<Playlist>>;

    /// Create and persist a new playlist
    ///
    /// Returns `Ok(None)` if the name is blank after trimming.
    async fn create_playlist(&self, name: &str) -> Result<Option<Playlist>>;

    /// Remove a playlist from the registry (no-op if absent)
    async fn remove_playlist(&self, id: &PlaylistId) -> Result<()>;
}

/// In-memory song-list store
///
/// Used by tests and as the degraded mode when no database is available;
/// data lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<Song>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SongListStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<Song>>> {
        Ok(self.lists.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, songs: &[Song]) -> Result<()> {
        self.lists
            .lock()
            .await
            .insert(key.to_string(), songs.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_and_distinct_per_playlist() {
        let a = song_list_key(&PlaylistId::new("p1"));
        let b = song_list_key(&PlaylistId::new("p2"));
        assert_eq!(a, "createplaylist_p1");
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let songs = vec![Song::new("Island")];

        assert!(store.load("k").await.unwrap().is_none());
        store.save("k", &songs).await.unwrap();
        assert_eq!(store.load("k").await.unwrap(), Some(songs));
    }
}
