//! Playlist-detail session
//!
//! A [`PlaylistSession`] owns the history state machine for one playlist
//! and keeps it synchronized with a [`SongListStore`]. Hydration happens
//! once, inside [`PlaylistSession::open`], before any intent can be
//! dispatched; write-backs are spawned tasks that the dispatcher never
//! waits on.

use crate::history::{reduce, Intent, PlaylistState};
use crate::storage::{song_list_key, SongListStore};
use crate::types::{PlaylistId, Song};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Live editing session for one playlist's song list
pub struct PlaylistSession {
    playlist_id: PlaylistId,
    key: String,
    state: PlaylistState,
    store: Arc<dyn SongListStore>,
    pending_writes: Vec<JoinHandle<()>>,
}

impl PlaylistSession {
    /// Open a session, hydrating the song list from storage
    ///
    /// A read failure is logged and treated as no stored data; the session
    /// then runs on the empty initial state. History always starts empty
    /// regardless of what was loaded.
    pub async fn open(store: Arc<dyn SongListStore>, playlist_id: PlaylistId) -> Self {
        let key = song_list_key(&playlist_id);
        let mut state = PlaylistState::new();

        match store.load(&key).await {
            Ok(Some(songs)) => {
                debug!(playlist = %playlist_id, count = songs.len(), "hydrated song list");
                state = reduce(state, Intent::Set(songs));
            }
            Ok(None) => {
                debug!(playlist = %playlist_id, "no stored song list");
            }
            Err(err) => {
                warn!(playlist = %playlist_id, %err, "song list load failed, starting empty");
            }
        }

        Self {
            playlist_id,
            key,
            state,
            store,
            pending_writes: Vec::new(),
        }
    }

    /// Apply an intent and return the updated song list view
    ///
    /// Completes synchronously; if the intent changed the song list, a
    /// write-back is spawned but not awaited. Write failures are logged
    /// and never surfaced.
    pub fn dispatch(&mut self, intent: Intent) -> &[Song] {
        let before = std::mem::take(&mut self.state);
        let songs_before = before.songs.clone();
        self.state = reduce(before, intent);

        if self.state.songs != songs_before {
            self.spawn_write_back();
        }

        &self.state.songs
    }

    /// Current song list
    pub fn songs(&self) -> &[Song] {
        &self.state.songs
    }

    /// Whether an undo is available
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Whether a redo is available
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// The playlist this session edits
    pub fn playlist_id(&self) -> &PlaylistId {
        &self.playlist_id
    }

    /// Wait for all in-flight write-backs to settle
    ///
    /// Dispatching never waits on storage; call this before teardown when
    /// the last write must not be abandoned.
    pub async fn flush(&mut self) {
        for handle in self.pending_writes.drain(..) {
            let _ = handle.await;
        }
    }

    fn spawn_write_back(&mut self) {
        self.pending_writes.retain(|h| !h.is_finished());

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let songs = self.state.songs.clone();
        let playlist_id = self.playlist_id.clone();

        self.pending_writes.push(tokio::spawn(async move {
            if let Err(err) = store.save(&key, &songs).await {
                warn!(playlist = %playlist_id, %err, "song list write-back failed");
            }
        }));
    }
}
