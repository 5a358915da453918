//! Edge function response body

use serde::Deserialize;

/// `{"translatedCode": "..."}` on success, `{"error": "..."}` on failure.
///
/// Gateways in front of the function answer with `{"message": "..."}`; that
/// field is only read when the status is not 2xx.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub translated_code: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl FunctionResponse {
    /// `error`, falling back to the gateway `message`.
    pub fn failure_message(self) -> Option<String> {
        [self.error, self.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
