//! Verse Player Core
//!
//! Platform-agnostic domain types, state machine, and storage contracts for
//! Verse Player.
//!
//! This crate holds everything the UI shells share regardless of platform:
//!
//! - **Domain Types**: `Song`, `Playlist`, and their id newtypes
//! - **Playlist History**: the undo/redo state machine driving the
//!   playlist-detail view (`PlaylistState`, `Intent`, [`history::reduce`])
//! - **Storage Contracts**: `SongListStore` and `PlaylistRegistry` traits
//!   implemented by the persistence layer
//! - **Sessions**: [`session::PlaylistSession`], which wires the state
//!   machine to a store (hydrate on open, write back on change)
//! - **Theme Store**: the shared observable theme cell
//!
//! # Example
//!
//! ```rust
//! use verse_core::history::{reduce, Intent, PlaylistState};
//!
//! let state = PlaylistState::default();
//! let state = reduce(state, Intent::Add("Island in the Sun".into()));
//! assert_eq!(state.songs.len(), 1);
//!
//! let state = reduce(state, Intent::Undo);
//! assert!(state.songs.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod history;
pub mod session;
pub mod storage;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VerseError};
pub use history::{reduce, Intent, PlaylistState};
pub use session::PlaylistSession;
pub use storage::{song_list_key, MemoryStore, PlaylistRegistry, SongListStore};
pub use theme::{ThemeMode, ThemeState, ThemeStore};
pub use types::{Playlist, PlaylistId, Song, SongId};
