//! Translation request orchestrator
//!
//! Owns the single [`TranslationAttempt`] of a translator view and drives it
//! through `idle → validating → submitting → succeeded | failed`.
//!
//! The attempt lives behind a synchronous mutex that is never held across an
//! await, so [`reset`](TranslationOrchestrator::reset) is immediate even while
//! a remote call is pending. Each submit and each reset bumps a generation
//! counter; a remote result is applied only if the generation it was issued
//! under is still current. Dropping a pending `submit` returns the attempt
//! to `idle`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::task::JoinHandle;

use code_translator_engine::{EngineError, TranslateRequest};

use crate::error::ValidationError;
use crate::services::{HistoryRepository, LanguageRegistry, ServiceContext};
use crate::types::{
    AttemptStatus, FailureReason, Identity, NewTranslation, Notification, TranslationAttempt,
};

const MISSING_INFO_TITLE: &str = "Missing Information";
const MISSING_INFO_MESSAGE: &str = "Please fill in all fields before translating.";
const UNSUPPORTED_TITLE: &str = "Unsupported Language";
const FAILED_TITLE: &str = "Translation Failed";
const FAILED_GENERIC_MESSAGE: &str = "Failed to translate code. Please try again.";
const FAILED_UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";
const SUCCESS_TITLE: &str = "Translation Complete!";
const SUCCESS_MESSAGE: &str = "Your code has been successfully translated.";
const NOT_SAVED_TITLE: &str = "History Not Saved";
const NOT_SAVED_MESSAGE: &str = "Your translation could not be saved to history.";

/// Result of a [`submit`](TranslationOrchestrator::submit) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// The engine returned `output_code`; the attempt is `succeeded`.
    Succeeded { output_code: String },
    /// Validation or the remote call failed; the attempt is `failed`.
    Failed { reason: FailureReason },
    /// Another submit was already in flight; nothing happened.
    Ignored,
    /// The attempt was reset (or resubmitted) while the call was in flight;
    /// its result was dropped.
    Discarded,
}

#[derive(Debug, Default)]
struct AttemptState {
    attempt: TranslationAttempt,
    generation: u64,
}

pub struct TranslationOrchestrator {
    ctx: Arc<ServiceContext>,
    history: Arc<HistoryRepository>,
    registry: LanguageRegistry,
    state: Mutex<AttemptState>,
    pending_persists: Mutex<Vec<JoinHandle<()>>>,
}

impl TranslationOrchestrator {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, history: Arc<HistoryRepository>) -> Self {
        Self {
            ctx,
            history,
            registry: LanguageRegistry,
            state: Mutex::new(AttemptState::default()),
            pending_persists: Mutex::new(Vec::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, AttemptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== Read =====

    /// Copy of the current attempt.
    #[must_use]
    pub fn attempt(&self) -> TranslationAttempt {
        self.state().attempt.clone()
    }

    #[must_use]
    pub fn status(&self) -> AttemptStatus {
        self.state().attempt.status
    }

    // ===== Edit =====

    /// Select the source language; an empty code clears the selection.
    pub fn set_source_language(&self, code: impl Into<String>) {
        self.state().attempt.source_language = non_empty(code.into());
    }

    /// Select the target language; an empty code clears the selection.
    pub fn set_target_language(&self, code: impl Into<String>) {
        self.state().attempt.target_language = non_empty(code.into());
    }

    pub fn set_input_code(&self, code: impl Into<String>) {
        self.state().attempt.input_code = code.into();
    }

    // ===== Lifecycle =====

    /// Clear every field and return to `idle`.
    ///
    /// A call still in flight keeps running; its result will be discarded.
    pub fn reset(&self) {
        let mut state = self.state();
        state.generation += 1;
        if state.attempt.is_submitting() {
            log::debug!(
                "Reset while submitting; generation {} result will be discarded",
                state.generation - 1
            );
        }
        state.attempt = TranslationAttempt::default();
    }

    /// Validate the attempt and, if valid, translate it remotely.
    ///
    /// On success one history record is created in the background for the
    /// identity signed in when the submit started; its failure is reported as
    /// a separate notification and never changes the outcome returned here.
    pub async fn submit(&self) -> SubmitOutcome {
        let (request, generation, owner) = {
            let mut state = self.state();
            if state.attempt.is_submitting() {
                log::debug!("Submit ignored: a translation is already in flight");
                return SubmitOutcome::Ignored;
            }

            state.generation += 1;
            state.attempt.status = AttemptStatus::Validating;
            state.attempt.failure = None;

            match self.validate(&state.attempt) {
                Ok(request) => {
                    state.attempt.status = AttemptStatus::Submitting;
                    (request, state.generation, self.ctx.session.current())
                }
                Err(e) => {
                    log::warn!("Translation input rejected: {e}");
                    let reason = FailureReason::Validation(e.clone());
                    state.attempt.status = AttemptStatus::Failed;
                    state.attempt.failure = Some(reason.clone());
                    drop(state);
                    self.ctx.notifier.notify(validation_notification(&e));
                    return SubmitOutcome::Failed { reason };
                }
            }
        };

        log::info!(
            "Translating {} -> {} ({} bytes, generation {generation})",
            request.source_language,
            request.target_language,
            request.code.len()
        );

        let in_flight = InFlight {
            orchestrator: self,
            generation,
            armed: true,
        };
        let result = self.ctx.engine.translate(&request).await;
        in_flight.complete();

        let mut state = self.state();
        if state.generation != generation {
            log::debug!(
                "Discarding stale translation result (generation {generation}, current {})",
                state.generation
            );
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                let output_code = response.translated_code;
                state.attempt.output_code.clone_from(&output_code);
                state.attempt.status = AttemptStatus::Succeeded;
                drop(state);

                log::info!("Translation succeeded ({} bytes)", output_code.len());
                self.ctx
                    .notifier
                    .notify(Notification::success(SUCCESS_TITLE, SUCCESS_MESSAGE));
                self.persist(
                    owner,
                    NewTranslation {
                        source_language: request.source_language,
                        target_language: request.target_language,
                        input_code: request.code,
                        output_code: output_code.clone(),
                    },
                );
                SubmitOutcome::Succeeded { output_code }
            }
            Err(e) => {
                let message = failure_message(&e);
                let reason = FailureReason::RemoteTranslation {
                    message: message.clone(),
                };
                state.attempt.status = AttemptStatus::Failed;
                state.attempt.failure = Some(reason.clone());
                drop(state);

                if e.is_expected() {
                    log::warn!("Translation failed: {e}");
                } else {
                    log::error!("Translation failed: {e}");
                }
                self.ctx
                    .notifier
                    .notify(Notification::error(FAILED_TITLE, message));
                SubmitOutcome::Failed { reason }
            }
        }
    }

    /// Wait for every history write started by earlier submits.
    pub async fn flush_history(&self) {
        let handles = std::mem::take(
            &mut *self
                .pending_persists
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for handle in handles {
            if let Err(e) = handle.await {
                log::error!("History write task failed: {e}");
            }
        }
    }

    fn validate(&self, attempt: &TranslationAttempt) -> Result<TranslateRequest, ValidationError> {
        if attempt.input_code.trim().is_empty() {
            return Err(ValidationError::EmptyCode);
        }
        let source = attempt
            .source_language
            .as_deref()
            .ok_or(ValidationError::MissingSourceLanguage)?;
        let target = attempt
            .target_language
            .as_deref()
            .ok_or(ValidationError::MissingTargetLanguage)?;
        self.registry.ensure_supported(source)?;
        self.registry.ensure_supported(target)?;

        Ok(TranslateRequest::new(source, target, attempt.input_code.clone()))
    }

    /// Fire-and-forget history write for `owner`.
    fn persist(&self, owner: Option<Identity>, translation: NewTranslation) {
        let Some(identity) = owner else {
            log::warn!("Translation not saved to history: no signed-in identity");
            self.ctx
                .notifier
                .notify(Notification::error(NOT_SAVED_TITLE, NOT_SAVED_MESSAGE));
            return;
        };

        let history = Arc::clone(&self.history);
        let notifier = Arc::clone(&self.ctx.notifier);
        let handle = tokio::spawn(async move {
            if let Err(e) = history.create(&identity.user_id, translation).await {
                log::warn!("Translation not saved to history: {e}");
                notifier.notify(Notification::error(NOT_SAVED_TITLE, NOT_SAVED_MESSAGE));
            }
        });

        let mut pending = self
            .pending_persists
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}

/// Armed for the duration of the remote call. If the submit future is
/// dropped before the call returns, the attempt goes back to `idle` so the
/// next submit is accepted.
struct InFlight<'a> {
    orchestrator: &'a TranslationOrchestrator,
    generation: u64,
    armed: bool,
}

impl InFlight<'_> {
    fn complete(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.orchestrator.state();
        if state.generation == self.generation && state.attempt.is_submitting() {
            log::debug!(
                "Submit for generation {} abandoned mid-call, attempt back to idle",
                self.generation
            );
            state.attempt.status = AttemptStatus::Idle;
        }
    }
}

fn non_empty(code: String) -> Option<String> {
    let code = code.trim();
    (!code.is_empty()).then(|| code.to_string())
}

fn validation_notification(error: &ValidationError) -> Notification {
    match error {
        ValidationError::UnsupportedLanguage(code) => Notification::error(
            UNSUPPORTED_TITLE,
            format!("'{code}' is not a supported language."),
        ),
        _ => Notification::error(MISSING_INFO_TITLE, MISSING_INFO_MESSAGE),
    }
}

/// Remote message when the engine gave one, otherwise a generic text.
fn failure_message(error: &EngineError) -> String {
    if error.is_transport() {
        return FAILED_UNEXPECTED_MESSAGE.to_string();
    }
    error
        .remote_message()
        .unwrap_or(FAILED_GENERIC_MESSAGE)
        .to_string()
}
