//! Hosted edge-function engine
//!
//! Speaks the `{sourceLang, targetLang, code}` → `{translatedCode}` protocol of
//! the `translate-code` function. The function itself talks to the model.

mod engine;
mod types;

use reqwest::Client;

use crate::http_client::create_http_client;

pub(crate) use types::FunctionResponse;

/// Edge-function translation engine
pub struct FunctionEngine {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) api_key: Option<String>,
    pub(crate) max_retries: u32,
}

impl FunctionEngine {
    pub fn new(endpoint: String, api_key: Option<String>, max_retries: u32) -> Self {
        Self {
            client: create_http_client(),
            endpoint,
            api_key,
            max_retries,
        }
    }
}
