//! Verse Player Storage
//!
//! `SQLite`-backed persistence for Verse Player: serialized song lists
//! (one row per playlist storage key) and the playlist registry.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each feature owns its own queries and logic
//!   (`song_lists`, `playlists`)
//! - **Trait Boundary**: [`SqliteStore`] implements the storage contracts
//!   defined in `verse-core`; the core never sees `sqlx`
//! - **Best-Effort Writes**: callers treat write failures as degraded
//!   mode, so this crate only reports errors, it never retries
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_storage::{create_pool, run_migrations, SqliteStore};
//! use verse_core::{PlaylistId, PlaylistSession};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://verse.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = Arc::new(SqliteStore::new(pool));
//! let session = PlaylistSession::open(store, PlaylistId::new("p1")).await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod context;
mod error;

// Vertical slices
pub mod playlists;
pub mod song_lists;

pub use context::SqliteStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at application start to bring the schema up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://verse.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!(url = database_url, "storage pool ready");

    Ok(pool)
}
