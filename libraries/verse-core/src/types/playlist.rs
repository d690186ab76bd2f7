/// Playlist domain types
use crate::types::PlaylistId;
use serde::{Deserialize, Serialize};

/// A named playlist in the user's library
///
/// This is the registry entry the playlists screen renders; the songs
/// themselves live under the playlist's own storage key and are managed by
/// the history state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Cover artwork URI
    pub artwork: String,
}

impl Playlist {
    /// Create a new playlist with a fresh id and synthetic artwork
    ///
    /// Returns `None` if the name is empty after trimming.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = PlaylistId::generate();
        let artwork = super::song::synthetic_artwork(id.as_str());
        Some(Self {
            id,
            name: name.to_string(),
            artwork,
        })
    }

    /// Create a playlist with explicit fields (for loading from storage)
    pub fn with_id(id: PlaylistId, name: impl Into<String>, artwork: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artwork: artwork.into(),
        }
    }
}
