//! 翻译尝试（瞬态，不持久化）

use serde::Serialize;

use crate::error::ValidationError;

/// Lifecycle state of a translation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Why the last attempt ended in [`AttemptStatus::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "details")]
pub enum FailureReason {
    /// Input rejected before any remote call.
    Validation(ValidationError),
    /// The engine reported an error or the transport failed.
    RemoteTranslation { message: String },
}

/// The translator's working state: user input plus the outcome of the last submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationAttempt {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub input_code: String,
    /// Empty until a submit succeeds.
    pub output_code: String,
    pub status: AttemptStatus,
    pub failure: Option<FailureReason>,
}

impl TranslationAttempt {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == AttemptStatus::Submitting
    }
}
