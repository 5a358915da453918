//! `TranslationEngine` implementation for the edge function

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::{parse_body, send};
use crate::traits::{EngineErrorMapper, RawApiError, TranslationEngine};
use crate::types::{TranslateRequest, TranslateResponse};

use super::{FunctionEngine, FunctionResponse};

impl EngineErrorMapper for FunctionEngine {
    fn engine_name(&self) -> &'static str {
        "function"
    }
}

impl FunctionEngine {
    /// Failure message from a non-2xx body, if it is JSON.
    fn error_message(body: &str) -> Option<String> {
        serde_json::from_str::<FunctionResponse>(body)
            .ok()
            .and_then(FunctionResponse::failure_message)
    }
}

#[async_trait]
impl TranslationEngine for FunctionEngine {
    fn id(&self) -> &'static str {
        "function"
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        log::debug!(
            "[{}] translate {} -> {} ({} bytes)",
            self.engine_name(),
            request.source_language,
            request.target_language,
            request.code.len()
        );

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key).header("apikey", key);
        }

        let (status, body) = send(builder, self.engine_name(), self.max_retries).await?;

        if !status.is_success() {
            let message = Self::error_message(&body);
            log::warn!("[{}] HTTP {status}: {message:?}", self.engine_name());
            return Err(self.map_error(RawApiError::new(status, message)));
        }

        let parsed: FunctionResponse = parse_body(&body, self.engine_name())?;
        if let Some(translated_code) = parsed.translated_code {
            return Ok(TranslateResponse { translated_code });
        }

        // 2xx without a translation but with an error is still a failed translation
        match parsed.error.filter(|m| !m.trim().is_empty()) {
            Some(message) => Err(self.map_error(RawApiError::new(status, Some(message)))),
            None => Err(self.empty_response()),
        }
    }
}
