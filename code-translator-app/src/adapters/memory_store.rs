//! In-process history store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use code_translator_core::error::{CoreError, CoreResult};
use code_translator_core::traits::HistoryStore;
use code_translator_core::types::{NewTranslation, TranslationRecord};

/// Volatile [`HistoryStore`] for tests and runs without a database.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    records: RwLock<Vec<TranslationRecord>>,
}

impl InMemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn list_by_owner(&self, owner_id: &str) -> CoreResult<Vec<TranslationRecord>> {
        let mut records: Vec<_> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(TranslationRecord::listing_order);
        Ok(records)
    }

    async fn insert(
        &self,
        owner_id: &str,
        record: &NewTranslation,
    ) -> CoreResult<TranslationRecord> {
        let created = TranslationRecord::create(owner_id, record.clone());
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> CoreResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !(r.id == id && r.owner_id == owner_id));
        if records.len() == before {
            return Err(CoreError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }
}
