//! SQLite-backed translation history using `SeaORM`.
//!
//! One row per record in the `translations` table. Timestamps are stored as
//! RFC3339 strings with fixed microsecond precision, so ordering by the text
//! column is chronological.

mod history_store;
pub(crate) mod entity;
mod migration;

use std::path::Path;

use code_translator_core::error::{CoreError, CoreResult};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// SQLite-based [`HistoryStore`](code_translator_core::traits::HistoryStore).
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` and bring the schema up to date.
    ///
    /// # Errors
    /// Returns `CoreError::Storage` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Storage(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to run migrations: {e}")))?;

        log::debug!("Opened history database at {}", db_path.display());
        Ok(store)
    }
}
