use serde::{Deserialize, Serialize};

// ============ Wire shapes ============

/// A single translation request sent to a remote engine.
///
/// Serializes as `{"sourceLang": ..., "targetLang": ..., "code": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Language code of the submitted code (e.g. `"python"`).
    #[serde(rename = "sourceLang")]
    pub source_language: String,
    /// Language code to translate into (e.g. `"javascript"`).
    #[serde(rename = "targetLang")]
    pub target_language: String,
    /// Source text, sent byte-for-byte.
    pub code: String,
}

impl TranslateRequest {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            code: code.into(),
        }
    }
}

/// Successful engine answer.
///
/// Serializes as `{"translatedCode": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// Translated text exactly as produced by the engine.
    pub translated_code: String,
}

// ============ Engine selection ============

/// Supported engine kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    /// Hosted edge function speaking the `{sourceLang, targetLang, code}` protocol.
    #[default]
    Function,
    /// Google Gemini `generateContent` API called directly.
    Gemini,
}

impl EngineType {
    /// Stable identifier used in logs and errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EngineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "function" => Ok(Self::Function),
            "gemini" => Ok(Self::Gemini),
            other => Err(format!("unknown engine type: {other}")),
        }
    }
}

/// Connection settings for an engine, one variant per [`EngineType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "lowercase")]
pub enum EngineConfig {
    /// Hosted edge function.
    Function {
        /// Full URL of the function (e.g. `https://<project>.supabase.co/functions/v1/translate-code`).
        endpoint: String,
        /// Key sent as `apikey` and as bearer token.
        api_key: Option<String>,
        /// Maximum number of retries for transient failures.
        max_retries: u32,
    },
    /// Gemini direct.
    Gemini {
        /// Gemini API key.
        api_key: String,
        /// Model id, e.g. `gemini-1.5-flash`.
        model: String,
        /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta/models`.
        base_url: String,
        /// Maximum number of retries for transient failures.
        max_retries: u32,
    },
}

impl EngineConfig {
    pub fn engine_type(&self) -> EngineType {
        match self {
            Self::Function { .. } => EngineType::Function,
            Self::Gemini { .. } => EngineType::Gemini,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_wire_field_names() {
        let req = TranslateRequest::new("python", "javascript", "print(1)");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sourceLang": "python",
                "targetLang": "javascript",
                "code": "print(1)"
            })
        );
    }

    #[test]
    fn response_reads_translated_code() {
        let resp: TranslateResponse =
            serde_json::from_str(r#"{"translatedCode":"console.log(1)"}"#).unwrap();
        assert_eq!(resp.translated_code, "console.log(1)");
    }

    #[test]
    fn engine_type_from_str() {
        assert_eq!("Gemini".parse::<EngineType>(), Ok(EngineType::Gemini));
        assert_eq!(" function ".parse::<EngineType>(), Ok(EngineType::Function));
        assert!("openai".parse::<EngineType>().is_err());
    }
}
