//! Google Gemini engine (direct `generateContent` calls)

mod engine;
mod prompt;
mod types;

use reqwest::Client;

use crate::http_client::create_http_client;

pub(crate) use types::{GeminiErrorResponse, GeminiRequest, GeminiResponse};

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub(crate) const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini translation engine
pub struct GeminiEngine {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

impl GeminiEngine {
    pub fn new(api_key: String, model: String, base_url: String, max_retries: u32) -> Self {
        let model = if model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model.trim().to_string()
        };
        let base_url = if base_url.trim().is_empty() {
            GEMINI_API_BASE.to_string()
        } else {
            base_url.trim().trim_end_matches('/').to_string()
        };
        Self {
            client: create_http_client(),
            api_key,
            model,
            base_url,
            max_retries,
        }
    }

    pub(crate) fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}
