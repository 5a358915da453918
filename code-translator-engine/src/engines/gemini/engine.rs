//! `TranslationEngine` implementation for Gemini

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::{parse_body, send};
use crate::traits::{EngineErrorMapper, RawApiError, TranslationEngine};
use crate::types::{TranslateRequest, TranslateResponse};

use super::prompt::{TRANSLATION_TEMPERATURE, build_prompt, strip_code_fence};
use super::types::{GeminiContent, GeminiPart, GenerationConfig};
use super::{GeminiEngine, GeminiErrorResponse, GeminiRequest, GeminiResponse};

impl EngineErrorMapper for GeminiEngine {
    fn engine_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl TranslationEngine for GeminiEngine {
    fn id(&self) -> &'static str {
        "gemini"
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        let url = self.generate_url();
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: build_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TRANSLATION_TEMPERATURE,
            },
        };

        let builder = self.client.post(&url).json(&body);
        let (status, text) = send(builder, self.engine_name(), self.max_retries).await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&text)
                .ok()
                .map(|e| e.error.message);
            log::warn!("[{}] HTTP {status}: {message:?}", self.engine_name());
            return Err(self.map_error(RawApiError::new(status, message)));
        }

        let parsed: GeminiResponse = parse_body(&text, self.engine_name())?;
        let answer = parsed.first_text().ok_or_else(|| self.empty_response())?;

        Ok(TranslateResponse {
            translated_code: strip_code_fence(&answer).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_and_base() {
        let engine = GeminiEngine::new("k".to_string(), String::new(), String::new(), 0);
        assert_eq!(
            engine.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=k"
        );
    }

    #[test]
    fn trailing_slash_trimmed() {
        let engine = GeminiEngine::new(
            "k".to_string(),
            "gemini-pro".to_string(),
            "http://127.0.0.1:9999/models/".to_string(),
            0,
        );
        assert_eq!(
            engine.generate_url(),
            "http://127.0.0.1:9999/models/gemini-pro:generateContent?key=k"
        );
    }

    #[test]
    fn first_text_joins_parts() {
        let resp: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.first_text(), Some("ab".to_string()));
    }

    #[test]
    fn first_text_none_without_candidates() {
        let resp: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(resp.first_text(), None);
    }
}
