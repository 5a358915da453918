//! Code Translator Core Library
//!
//! Platform-independent core of the code translator:
//! - Translation Orchestrator: submit/reset lifecycle of a single translation attempt
//! - History Repository: user-scoped translation records with a cached, copy-on-read view
//! - Session context, language registry and clipboard bridge
//!
//! The remote engine, the history backend, the clipboard and notification output
//! are injected through traits, so frontends (CLI, desktop, server) only wire adapters.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, EngineError, ValidationError};
pub use services::{
    ClipboardBridge, HistoryRepository, HistoryView, LanguageRegistry, ServiceContext,
    SessionContext, SessionState, SubmitOutcome, TranslationOrchestrator,
};
pub use traits::{ClipboardWriter, HistoryStore, Notifier, TranslationEngine};
