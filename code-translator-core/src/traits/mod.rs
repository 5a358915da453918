//! Collaborator abstractions injected into the services

mod clipboard;
mod history_store;
mod notifier;

pub use clipboard::ClipboardWriter;
pub use history_store::HistoryStore;
pub use notifier::Notifier;

// Re-export the remote translation capability
pub use code_translator_engine::TranslationEngine;
