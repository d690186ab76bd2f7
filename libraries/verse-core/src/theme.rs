//! Shared theme store
//!
//! A single observable cell holding the app-wide theme: light/dark mode,
//! the accent color, and the user's saved custom colors. UI shells
//! subscribe and re-render on change.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Default accent color
pub const DEFAULT_ACCENT: &str = "#1DB954";

/// Light or dark rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds, dark text
    Light,
    /// Dark backgrounds, light text
    Dark,
}

/// Current theme selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Rendering mode
    pub mode: ThemeMode,

    /// Active accent color (hex string)
    pub accent_color: String,

    /// User-saved custom colors, insertion order, no duplicates
    pub custom_colors: Vec<String>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent_color: DEFAULT_ACCENT.to_string(),
            custom_colors: vec![
                DEFAULT_ACCENT.to_string(),
                "#FF4500".to_string(),
                "#6A5ACD".to_string(),
            ],
        }
    }
}

/// Observable theme cell
///
/// One writer, any number of subscribers. Subscribers receive the full
/// [`ThemeState`] on every change.
pub struct ThemeStore {
    tx: watch::Sender<ThemeState>,
}

impl ThemeStore {
    /// Create a store holding the default theme
    pub fn new() -> Self {
        Self::with_state(ThemeState::default())
    }

    /// Create a store holding a specific theme
    pub fn with_state(state: ThemeState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Current theme snapshot
    pub fn current(&self) -> ThemeState {
        self.tx.borrow().clone()
    }

    /// Subscribe to theme changes
    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.tx.subscribe()
    }

    /// Switch between light and dark mode
    pub fn set_mode(&self, mode: ThemeMode) {
        self.tx.send_modify(|state| state.mode = mode);
    }

    /// Change the active accent color
    pub fn set_accent_color(&self, color: impl Into<String>) {
        let color = color.into();
        self.tx.send_modify(|state| state.accent_color = color);
    }

    /// Save a custom color, ignoring duplicates
    pub fn add_custom_color(&self, color: impl Into<String>) {
        let color = color.into();
        self.tx.send_if_modified(|state| {
            if state.custom_colors.contains(&color) {
                false
            } else {
                state.custom_colors.push(color);
                true
            }
        });
    }

    /// Remove a saved custom color (no-op if absent)
    pub fn remove_custom_color(&self, color: &str) {
        self.tx.send_if_modified(|state| {
            let before = state.custom_colors.len();
            state.custom_colors.retain(|c| c != color);
            state.custom_colors.len() != before
        });
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
