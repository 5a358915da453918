//! Translation history persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{NewTranslation, TranslationRecord};

/// Row store for translation records, partitioned by owner.
///
/// Implementations must enforce owner scoping themselves: a caller only ever
/// sees or deletes rows whose `owner_id` matches the one it passes.
///
/// Platform implementation:
/// - `SqliteStore` (`SeaORM`)
/// - `InMemoryHistoryStore`
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// All records of `owner_id`, newest first (`created_at` desc, then `id` desc).
    async fn list_by_owner(&self, owner_id: &str) -> CoreResult<Vec<TranslationRecord>>;

    /// Insert a record; the store assigns `id` and `created_at`.
    ///
    /// # Arguments
    /// * `owner_id` - identity the record belongs to
    /// * `record` - translation fields
    async fn insert(&self, owner_id: &str, record: &NewTranslation)
    -> CoreResult<TranslationRecord>;

    /// Delete one record.
    ///
    /// Returns [`CoreError::RecordNotFound`](crate::error::CoreError::RecordNotFound)
    /// when no row with `id` belongs to `owner_id`.
    async fn delete(&self, owner_id: &str, id: &str) -> CoreResult<()>;
}
