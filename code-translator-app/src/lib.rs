//! Platform-agnostic application bootstrap for Code Translator.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter
//! injection), `AppConfig` (file + environment configuration) and the
//! storage, clipboard and notifier adapters frontends plug in.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use tokio::task::JoinHandle;

use code_translator_core::error::{CoreError, CoreResult};
use code_translator_core::services::{
    ClipboardBridge, HistoryRepository, LanguageRegistry, ServiceContext, SessionContext,
    TranslationOrchestrator,
};
use code_translator_core::traits::{ClipboardWriter, HistoryStore, Notifier, TranslationEngine};
use code_translator_core::types::Identity;

use adapters::{InMemoryHistoryStore, LogNotifier, UnavailableClipboard};
pub use config::AppConfig;

/// Platform-agnostic application state.
///
/// Holds the services and the `ServiceContext`. Every frontend constructs
/// this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (engine, store, notifier, clipboard, session)
    pub ctx: Arc<ServiceContext>,
    /// Cached, user-scoped translation history
    pub history: Arc<HistoryRepository>,
    /// Single-attempt translation lifecycle
    pub orchestrator: Arc<TranslationOrchestrator>,
    pub clipboard: ClipboardBridge,
    pub languages: LanguageRegistry,
}

impl AppState {
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.ctx.session
    }

    /// Reload history whenever the session identity changes.
    ///
    /// The cache is invalidated on every change; a new identity triggers a
    /// refresh, sign-out leaves the view empty. Runs until the returned
    /// handle is aborted.
    pub fn spawn_identity_watcher(&self) -> JoinHandle<()> {
        let mut rx = self.ctx.session.subscribe();
        let history = Arc::clone(&self.history);

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let signed_in = rx.borrow_and_update().identity.is_some();
                history.invalidate();
                if !signed_in {
                    log::debug!("Identity cleared, history view emptied");
                    continue;
                }
                if let Err(e) = history.refresh().await {
                    if e.is_expected() {
                        log::warn!("History reload after identity change failed: {e}");
                    } else {
                        log::error!("History reload after identity change failed: {e}");
                    }
                }
            }
            log::debug!("Identity watcher stopped");
        })
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `engine`: the remote translation engine
///
/// # Optional
/// - `history_store`: defaults to `InMemoryHistoryStore`
/// - `notifier`: defaults to `LogNotifier`
/// - `clipboard`: defaults to `UnavailableClipboard`
/// - `session`: defaults to a signed-out session
#[derive(Default)]
pub struct AppStateBuilder {
    engine: Option<Arc<dyn TranslationEngine>>,
    history_store: Option<Arc<dyn HistoryStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    clipboard: Option<Arc<dyn ClipboardWriter>>,
    session: Option<SessionContext>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled from configuration: engine from `create_engine`,
    /// SQLite history (with `sqlite-store`), system clipboard (with
    /// `system-clipboard`) and a session signed in as the configured user.
    ///
    /// # Errors
    /// `CoreError::Configuration` for incomplete engine settings,
    /// `CoreError::Storage` if the database cannot be opened.
    pub async fn from_config(config: &AppConfig) -> CoreResult<Self> {
        let engine = code_translator_engine::create_engine(config.engine_config()?)
            .map_err(|e| CoreError::Configuration(e.to_string()))?;
        log::info!("Using {} translation engine", engine.id());

        #[allow(unused_mut)]
        let mut builder = Self::new().engine(engine);

        #[cfg(feature = "sqlite-store")]
        {
            let path = config.database_path()?;
            let store = adapters::SqliteStore::new(&path).await?;
            builder = builder.history_store(Arc::new(store));
        }

        #[cfg(feature = "system-clipboard")]
        {
            builder = builder.clipboard(Arc::new(adapters::SystemClipboard::new()));
        }

        let session = SessionContext::new();
        if let Some(user_id) = &config.session.user_id {
            let mut identity = Identity::new(user_id.clone());
            if let Some(email) = &config.session.email {
                identity = identity.with_email(email.clone());
            }
            session.sign_in(identity);
        }

        Ok(builder.session(session))
    }

    #[must_use]
    pub fn engine(mut self, engine: Arc<dyn TranslationEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    #[must_use]
    pub fn history_store(mut self, store: Arc<dyn HistoryStore>) -> Self {
        self.history_store = Some(store);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn clipboard(mut self, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    #[must_use]
    pub fn session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::Configuration` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let engine = self
            .engine
            .ok_or_else(|| CoreError::Configuration("engine is required".to_string()))?;
        let history_store = self
            .history_store
            .unwrap_or_else(|| Arc::new(InMemoryHistoryStore::new()));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));
        let clipboard = self
            .clipboard
            .unwrap_or_else(|| Arc::new(UnavailableClipboard));
        let session = self.session.unwrap_or_default();

        let ctx = Arc::new(ServiceContext::new(
            engine,
            history_store,
            notifier,
            clipboard,
            session,
        ));

        let history = Arc::new(ctx.history_repository());
        let orchestrator = Arc::new(TranslationOrchestrator::new(
            Arc::clone(&ctx),
            Arc::clone(&history),
        ));
        let clipboard = ctx.clipboard_bridge();

        Ok(AppState {
            ctx,
            history,
            orchestrator,
            clipboard,
            languages: LanguageRegistry,
        })
    }
}
