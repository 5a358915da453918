//! Translation history repository
//!
//! CRUD facade over a [`HistoryStore`] scoped to the session identity, with a
//! local cache of the current identity's list.
//!
//! - The cache is tagged with the session epoch it was loaded under; after a
//!   sign-in/sign-out it is treated as empty until reloaded.
//! - Every refresh takes a token from a monotonically increasing counter.
//!   Local mutations (create, delete) also advance it, so a refresh that was
//!   in flight across a mutation is discarded instead of overwriting it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{CoreError, CoreResult};
use crate::services::{LanguageRegistry, SessionContext};
use crate::traits::{HistoryStore, Notifier};
use crate::types::{NewTranslation, Notification, TranslationRecord};

const LOAD_FAILED_TITLE: &str = "Error Loading History";
const LOAD_FAILED_MESSAGE: &str = "Failed to load your translation history.";
const DELETED_TITLE: &str = "Translation Deleted";
const DELETED_MESSAGE: &str = "Translation has been removed from your history.";
const DELETE_FAILED_TITLE: &str = "Delete Failed";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete translation.";

/// Copy-on-read snapshot of the cached history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    /// A refresh is in flight.
    pub loading: bool,
    /// Newest first. Empty when nothing has been loaded for the current identity.
    pub records: Vec<TranslationRecord>,
}

#[derive(Debug, Default)]
struct HistoryCache {
    /// Session epoch the records were loaded under; `None` before the first load.
    epoch: Option<u64>,
    records: Vec<TranslationRecord>,
    /// Token of the refresh currently in flight.
    loading_token: Option<u64>,
}

pub struct HistoryRepository {
    store: Arc<dyn HistoryStore>,
    session: SessionContext,
    notifier: Arc<dyn Notifier>,
    cache: Mutex<HistoryCache>,
    refresh_token: AtomicU64,
}

impl HistoryRepository {
    #[must_use]
    pub fn new(
        store: Arc<dyn HistoryStore>,
        session: SessionContext,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            session,
            notifier,
            cache: Mutex::new(HistoryCache::default()),
            refresh_token: AtomicU64::new(0),
        }
    }

    fn cache(&self) -> MutexGuard<'_, HistoryCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_token(&self) -> u64 {
        self.refresh_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    // ===== Store-level operations =====

    /// All records of `owner_id`, newest first, straight from the store.
    pub async fn list(&self, owner_id: &str) -> CoreResult<Vec<TranslationRecord>> {
        let mut records = self.store.list_by_owner(owner_id).await.map_err(|e| {
            log::error!("Failed to list history for {owner_id}: {e}");
            CoreError::Fetch(e.to_string())
        })?;
        records.sort_by(TranslationRecord::listing_order);
        Ok(records)
    }

    /// Persist a new record for `owner_id`.
    ///
    /// When the cache holds this owner's list, the record is prepended locally.
    pub async fn create(
        &self,
        owner_id: &str,
        translation: NewTranslation,
    ) -> CoreResult<TranslationRecord> {
        let record = self
            .store
            .insert(owner_id, &translation)
            .await
            .map_err(|e| {
                log::error!("Failed to save translation for {owner_id}: {e}");
                CoreError::Persist(e.to_string())
            })?;

        log::info!(
            "Saved translation {} ({} -> {})",
            record.short_id(),
            record.source_language,
            record.target_language
        );

        let snapshot = self.session.snapshot();
        let owns_cache = snapshot
            .identity
            .as_ref()
            .is_some_and(|identity| identity.user_id == owner_id);
        if owns_cache {
            let mut cache = self.cache();
            if cache.epoch == Some(snapshot.epoch) {
                self.next_token();
                cache.records.retain(|r| r.id != record.id);
                cache.records.push(record.clone());
                cache.records.sort_by(TranslationRecord::listing_order);
            }
        }

        Ok(record)
    }

    /// Delete a record of the signed-in identity.
    ///
    /// On success the record is dropped from the cached list without a
    /// re-fetch. On failure the cached list is left untouched.
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        let result = match self.session.current() {
            Some(identity) => self
                .store
                .delete(&identity.user_id, id)
                .await
                .map_err(|e| CoreError::Delete(e.to_string())),
            None => Err(CoreError::NotSignedIn),
        };

        match result {
            Ok(()) => {
                {
                    let mut cache = self.cache();
                    self.next_token();
                    cache.records.retain(|r| r.id != id);
                }
                log::info!("Deleted translation {id}");
                self.notifier
                    .notify(Notification::success(DELETED_TITLE, DELETED_MESSAGE));
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to delete translation {id}: {e}");
                self.notifier
                    .notify(Notification::error(DELETE_FAILED_TITLE, DELETE_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    // ===== Cached view =====

    /// Reload the current identity's list into the cache.
    ///
    /// A response that was overtaken by a newer refresh, a local mutation or an
    /// identity change is discarded; the returned list is then the cached view.
    /// On failure the previous list stays visible.
    pub async fn refresh(&self) -> CoreResult<Vec<TranslationRecord>> {
        let snapshot = self.session.snapshot();
        let Some(identity) = snapshot.identity else {
            let mut cache = self.cache();
            self.next_token();
            *cache = HistoryCache {
                epoch: Some(snapshot.epoch),
                ..HistoryCache::default()
            };
            return Ok(Vec::new());
        };

        let token = {
            let mut cache = self.cache();
            let token = self.next_token();
            if cache.epoch != Some(snapshot.epoch) {
                cache.records.clear();
                cache.epoch = Some(snapshot.epoch);
            }
            cache.loading_token = Some(token);
            token
        };

        let result = self.list(&identity.user_id).await;

        let mut cache = self.cache();
        if cache.loading_token == Some(token) {
            cache.loading_token = None;
        }

        let current = self.refresh_token.load(Ordering::SeqCst) == token
            && self.session.epoch() == snapshot.epoch;
        if !current {
            log::debug!("Discarding stale history response (token {token})");
            return Ok(if cache.epoch == Some(self.session.epoch()) {
                cache.records.clone()
            } else {
                Vec::new()
            });
        }

        match result {
            Ok(records) => {
                log::debug!("Loaded {} history records", records.len());
                cache.records.clone_from(&records);
                Ok(records)
            }
            Err(e) => {
                drop(cache);
                self.notifier
                    .notify(Notification::error(LOAD_FAILED_TITLE, LOAD_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Forget the cached list (used when the identity changes).
    pub fn invalidate(&self) {
        let mut cache = self.cache();
        self.next_token();
        *cache = HistoryCache::default();
    }

    /// Snapshot of the cached list for the current identity.
    #[must_use]
    pub fn view(&self) -> HistoryView {
        let epoch = self.session.epoch();
        let cache = self.cache();
        if cache.epoch == Some(epoch) {
            HistoryView {
                loading: cache.loading_token.is_some(),
                records: cache.records.clone(),
            }
        } else {
            HistoryView::default()
        }
    }

    /// Cached record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<TranslationRecord> {
        self.view().records.into_iter().find(|r| r.id == id)
    }

    /// Case-insensitive filter of the cached list.
    ///
    /// Matches language codes, language labels, input code and output code.
    /// A blank query returns the whole list.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<TranslationRecord> {
        let records = self.view().records;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return records;
        }

        let registry = LanguageRegistry;
        records
            .into_iter()
            .filter(|r| {
                [
                    r.source_language.as_str(),
                    r.target_language.as_str(),
                    registry.label(&r.source_language),
                    registry.label(&r.target_language),
                    r.input_code.as_str(),
                    r.output_code.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
