//! `HistoryStore` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use code_translator_core::error::{CoreError, CoreResult};
use code_translator_core::traits::HistoryStore;
use code_translator_core::types::{NewTranslation, TranslationRecord};
use code_translator_core::utils::datetime;

use super::SqliteStore;
use super::entity::translation;

impl translation::Model {
    /// Convert a `SeaORM` row model into a domain `TranslationRecord`.
    fn into_record(self) -> CoreResult<TranslationRecord> {
        let created_at = datetime::parse(&self.created_at)
            .map_err(|e| CoreError::Serialization(format!("Invalid created_at: {e}")))?;

        Ok(TranslationRecord {
            id: self.id,
            owner_id: self.owner_id,
            source_language: self.source_language,
            target_language: self.target_language,
            input_code: self.input_code,
            output_code: self.output_code,
            created_at,
        })
    }
}

#[async_trait]
impl HistoryStore for SqliteStore {
    async fn list_by_owner(&self, owner_id: &str) -> CoreResult<Vec<TranslationRecord>> {
        let rows = translation::Entity::find()
            .filter(translation::Column::OwnerId.eq(owner_id))
            .order_by_desc(translation::Column::CreatedAt)
            .order_by_desc(translation::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query translations: {e}")))?;

        rows.into_iter()
            .map(translation::Model::into_record)
            .collect()
    }

    async fn insert(
        &self,
        owner_id: &str,
        record: &NewTranslation,
    ) -> CoreResult<TranslationRecord> {
        let mut created = TranslationRecord::create(owner_id, record.clone());
        let created_at = datetime::format(&created.created_at);
        // the stored form has microsecond precision; return exactly what a later list reads
        created.created_at = datetime::parse(&created_at)
            .map_err(|e| CoreError::Serialization(format!("Invalid created_at: {e}")))?;

        let active_model = translation::ActiveModel {
            id: Set(created.id.clone()),
            owner_id: Set(created.owner_id.clone()),
            source_language: Set(created.source_language.clone()),
            target_language: Set(created.target_language.clone()),
            input_code: Set(created.input_code.clone()),
            output_code: Set(created.output_code.clone()),
            created_at: Set(created_at),
        };

        translation::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to insert translation: {e}")))?;

        Ok(created)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> CoreResult<()> {
        let result = translation::Entity::delete_many()
            .filter(translation::Column::Id.eq(id))
            .filter(translation::Column::OwnerId.eq(owner_id))
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to delete translation: {e}")))?;

        if result.rows_affected == 0 {
            return Err(CoreError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }
}
