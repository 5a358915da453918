//! 业务逻辑服务层

mod clipboard_bridge;
mod history_repository;
mod language_registry;
mod session;
mod translation_orchestrator;

pub use clipboard_bridge::ClipboardBridge;
pub use history_repository::{HistoryRepository, HistoryView};
pub use language_registry::LanguageRegistry;
pub use session::{SessionContext, SessionState};
pub use translation_orchestrator::{SubmitOutcome, TranslationOrchestrator};

use std::sync::Arc;

use crate::traits::{ClipboardWriter, HistoryStore, Notifier, TranslationEngine};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的实现（引擎、存储、剪贴板、通知）。
pub struct ServiceContext {
    /// 远程翻译引擎
    pub engine: Arc<dyn TranslationEngine>,
    /// 翻译历史存储
    pub history_store: Arc<dyn HistoryStore>,
    /// 通知输出
    pub notifier: Arc<dyn Notifier>,
    /// 系统剪贴板
    pub clipboard: Arc<dyn ClipboardWriter>,
    /// 当前会话身份
    pub session: SessionContext,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        engine: Arc<dyn TranslationEngine>,
        history_store: Arc<dyn HistoryStore>,
        notifier: Arc<dyn Notifier>,
        clipboard: Arc<dyn ClipboardWriter>,
        session: SessionContext,
    ) -> Self {
        Self {
            engine,
            history_store,
            notifier,
            clipboard,
            session,
        }
    }

    /// History repository bound to this context's store, session and notifier.
    #[must_use]
    pub fn history_repository(&self) -> HistoryRepository {
        HistoryRepository::new(
            Arc::clone(&self.history_store),
            self.session.clone(),
            Arc::clone(&self.notifier),
        )
    }

    /// Clipboard bridge bound to this context's clipboard and notifier.
    #[must_use]
    pub fn clipboard_bridge(&self) -> ClipboardBridge {
        ClipboardBridge::new(Arc::clone(&self.clipboard), Arc::clone(&self.notifier))
    }
}
