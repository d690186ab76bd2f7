//! Playlist history state machine
//!
//! The playlist-detail view is driven by a pure reducer over
//! [`PlaylistState`]: an ordered song list plus linear undo/redo history.
//! Every mutating intent pushes a full snapshot of the pre-mutation list
//! onto `past` and empties `future`, so redo is only available immediately
//! after an undo with no intervening mutation.
//!
//! The reducer has no side effects; persistence is layered on top by
//! [`crate::session::PlaylistSession`].

use crate::types::{Song, SongId};
use serde::{Deserialize, Serialize};

/// Maximum number of snapshots retained in `past`
///
/// Oldest snapshots are dropped on overflow. `future` needs no cap of its
/// own since it can never grow past the number of undos taken.
pub const MAX_HISTORY_DEPTH: usize = 100;

/// Complete state of one playlist-detail session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaylistState {
    /// Current ordered song list
    pub songs: Vec<Song>,

    /// Pre-mutation snapshots, most recent last
    pub past: Vec<Vec<Song>>,

    /// Snapshots available for redo, most recent undo result first
    pub future: Vec<Vec<Song>>,
}

impl PlaylistState {
    /// Create the empty pre-hydration state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an undo would change the state
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo would change the state
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

/// A discrete user action applied to [`PlaylistState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a new song with the given title
    Add(String),
    /// Remove the song with the given id
    Remove(SongId),
    /// Empty the song list
    Clear,
    /// Revert to the previous snapshot
    Undo,
    /// Re-apply the most recently undone snapshot
    Redo,
    /// Replace the song list wholesale (hydration only)
    Set(Vec<Song>),
}

/// Apply an intent to a state, returning the new state
///
/// Invalid intents (blank add title, undo/redo at a history boundary) are
/// no-ops, never errors. Removing an id that is not present still records a
/// history entry and clears redo, matching the shipped reducer exactly.
pub fn reduce(state: PlaylistState, intent: Intent) -> PlaylistState {
    match intent {
        Intent::Add(title) => {
            if title.trim().is_empty() {
                return state;
            }
            let mut songs = state.songs.clone();
            songs.push(Song::new(title));
            PlaylistState {
                songs,
                past: record(state.past, state.songs),
                future: Vec::new(),
            }
        }
        Intent::Remove(id) => {
            let songs = state
                .songs
                .iter()
                .filter(|s| s.id != id)
                .cloned()
                .collect();
            PlaylistState {
                songs,
                past: record(state.past, state.songs),
                future: Vec::new(),
            }
        }
        Intent::Clear => PlaylistState {
            songs: Vec::new(),
            past: record(state.past, state.songs),
            future: Vec::new(),
        },
        Intent::Undo => {
            let PlaylistState {
                songs,
                mut past,
                mut future,
            } = state;
            match past.pop() {
                Some(prev) => {
                    future.insert(0, songs);
                    PlaylistState {
                        songs: prev,
                        past,
                        future,
                    }
                }
                None => PlaylistState {
                    songs,
                    past,
                    future,
                },
            }
        }
        Intent::Redo => {
            if state.future.is_empty() {
                return state;
            }
            let mut future = state.future;
            let next = future.remove(0);
            PlaylistState {
                songs: next,
                past: record(state.past, state.songs),
                future,
            }
        }
        Intent::Set(songs) => PlaylistState { songs, ..state },
    }
}

/// Push a snapshot onto `past`, dropping the oldest entry at the cap
fn record(mut past: Vec<Vec<Song>>, snapshot: Vec<Song>) -> Vec<Vec<Song>> {
    if past.len() >= MAX_HISTORY_DEPTH {
        past.remove(0);
    }
    past.push(snapshot);
    past
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn add_appends_and_records_history() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        assert_eq!(titles(&state.songs), ["Island"]);
        assert_eq!(state.past, vec![Vec::new()]);
        assert!(state.future.is_empty());
    }

    #[test]
    fn add_blank_title_is_a_no_op() {
        let start = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        let after_empty = reduce(start.clone(), Intent::Add(String::new()));
        assert_eq!(after_empty, start);
        let after_blank = reduce(start.clone(), Intent::Add("   ".into()));
        assert_eq!(after_blank, start);
    }

    #[test]
    fn remove_filters_by_id() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        let state = reduce(state, Intent::Add("Dash".into()));
        let id = state.songs[0].id.clone();
        let state = reduce(state, Intent::Remove(id));
        assert_eq!(titles(&state.songs), ["Dash"]);
    }

    #[test]
    fn remove_of_absent_id_still_records_history() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        let state = reduce(state, Intent::Undo);
        assert!(state.can_redo());

        // The no-op filter still pushes a snapshot and clears redo
        let state = reduce(state, Intent::Remove(SongId::new("missing")));
        assert!(state.songs.is_empty());
        assert_eq!(state.past.len(), 1);
        assert!(!state.can_redo());
    }

    #[test]
    fn clear_empties_songs_and_records_history() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        let state = reduce(state, Intent::Clear);
        assert!(state.songs.is_empty());
        assert_eq!(state.past.len(), 2);
    }

    #[test]
    fn undo_then_redo_restores_exact_sequence() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        let state = reduce(state, Intent::Add("Dash".into()));
        let before = state.songs.clone();

        let state = reduce(state, Intent::Undo);
        assert_ne!(state.songs, before);
        let state = reduce(state, Intent::Redo);
        assert_eq!(state.songs, before);
        assert!(state.future.is_empty());
    }

    #[test]
    fn mutation_after_undo_invalidates_redo() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        let state = reduce(state, Intent::Add("Dash".into()));
        let state = reduce(state, Intent::Undo);
        assert!(state.can_redo());

        let state = reduce(state, Intent::Add("Buddy".into()));
        assert!(!state.can_redo());
        let after_redo = reduce(state.clone(), Intent::Redo);
        assert_eq!(after_redo, state);
    }

    #[test]
    fn undo_redo_at_boundaries_are_no_ops() {
        let empty = PlaylistState::new();
        assert_eq!(reduce(empty.clone(), Intent::Undo), empty);
        assert_eq!(reduce(empty.clone(), Intent::Redo), empty);
    }

    #[test]
    fn add_add_undo_redo_scenario() {
        let state = reduce(PlaylistState::new(), Intent::Add("Island".into()));
        assert_eq!(titles(&state.songs), ["Island"]);
        assert_eq!(state.past, vec![Vec::new()]);
        assert!(state.future.is_empty());

        let state = reduce(state, Intent::Add("Dash".into()));
        assert_eq!(titles(&state.songs), ["Island", "Dash"]);
        assert_eq!(state.past.len(), 2);
        assert!(state.past[0].is_empty());
        assert_eq!(titles(&state.past[1]), ["Island"]);

        let two = state.songs.clone();
        let state = reduce(state, Intent::Undo);
        assert_eq!(titles(&state.songs), ["Island"]);
        assert_eq!(state.past, vec![Vec::new()]);
        assert_eq!(state.future, vec![two.clone()]);

        let state = reduce(state, Intent::Redo);
        assert_eq!(state.songs, two);
        assert!(state.future.is_empty());
    }

    #[test]
    fn set_does_not_touch_history() {
        let loaded = vec![Song::new("Island"), Song::new("Dash")];
        let state = reduce(PlaylistState::new(), Intent::Set(loaded.clone()));
        assert_eq!(state.songs, loaded);
        assert!(state.past.is_empty());
        assert!(state.future.is_empty());
    }

    #[test]
    fn song_ids_stay_unique_within_a_playlist() {
        let mut state = PlaylistState::new();
        for title in ["Island", "Dash", "Island"] {
            state = reduce(state, Intent::Add(title.into()));
        }
        let mut ids: Vec<_> = state.songs.iter().map(|s| s.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn past_depth_is_capped() {
        let mut state = PlaylistState::new();
        for i in 0..(MAX_HISTORY_DEPTH + 10) {
            state = reduce(state, Intent::Add(format!("Song {i}")));
        }
        assert_eq!(state.past.len(), MAX_HISTORY_DEPTH);
        // Oldest snapshots were dropped, so the earliest retained one is
        // no longer the empty list
        assert!(!state.past[0].is_empty());
    }
}
