//! Storage, clipboard and notification adapters for non-UI frontends.

mod clipboard;
mod log_notifier;
mod memory_store;

pub use clipboard::UnavailableClipboard;
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use log_notifier::LogNotifier;
pub use memory_store::InMemoryHistoryStore;

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
