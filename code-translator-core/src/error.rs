//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export engine error type
pub use code_translator_engine::EngineError;

/// Input rejected before the remote engine is called.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", content = "details")]
pub enum ValidationError {
    /// Input code is empty or whitespace-only.
    #[error("Input code is empty")]
    EmptyCode,

    #[error("Source language is not selected")]
    MissingSourceLanguage,

    #[error("Target language is not selected")]
    MissingTargetLanguage,

    /// Language code not present in the registry.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Engine error (converting from library)
    #[error("{0}")]
    RemoteTranslation(#[from] EngineError),

    /// Creating a history record failed
    #[error("Failed to save translation: {0}")]
    Persist(String),

    /// Loading history failed
    #[error("Failed to load history: {0}")]
    Fetch(String),

    /// Deleting a history record failed
    #[error("Failed to delete translation: {0}")]
    Delete(String),

    /// Platform denied clipboard access
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Operation requires an authenticated identity
    #[error("Not signed in")]
    NotSignedIn,

    /// Record not found (or not owned by the caller)
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Missing or malformed application configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::NotSignedIn
            | Self::RecordNotFound(_)
            | Self::Delete(_)
            | Self::Clipboard(_)
            | Self::Configuration(_) => true,
            Self::RemoteTranslation(e) => e.is_expected(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
