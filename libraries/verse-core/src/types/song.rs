/// Song domain type
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// Base URL for synthetic placeholder artwork
const ARTWORK_BASE: &str = "https://picsum.photos/200/200";

/// A song entry in a playlist
///
/// Songs are immutable once created; the only way to change a playlist is
/// to add or remove whole entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Display title
    pub title: String,

    /// Artwork URI
    ///
    /// Serialized as `image` to stay compatible with song lists written
    /// by earlier clients.
    #[serde(rename = "image")]
    pub artwork: String,
}

impl Song {
    /// Create a new song with a fresh id and synthetic artwork
    pub fn new(title: impl Into<String>) -> Self {
        let id = SongId::generate();
        let artwork = synthetic_artwork(id.as_str());
        Self {
            id,
            title: title.into(),
            artwork,
        }
    }

    /// Create a song with explicit fields (for loading from storage)
    pub fn with_id(id: SongId, title: impl Into<String>, artwork: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artwork: artwork.into(),
        }
    }
}

/// Derive a placeholder artwork URI from an id
///
/// The original client fetched a random placeholder image per song; deriving
/// the variant from the id keeps the URI stable across reloads.
pub(crate) fn synthetic_artwork(id: &str) -> String {
    let seed = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    format!("{ARTWORK_BASE}?random={}", seed % 1000)
}
