//! Engine factory.

use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::traits::TranslationEngine;
use crate::types::EngineConfig;

#[cfg(feature = "function")]
use crate::engines::FunctionEngine;
#[cfg(feature = "gemini")]
use crate::engines::GeminiEngine;

/// Creates a [`TranslationEngine`] from its configuration.
///
/// The concrete engine is chosen by the [`EngineConfig`] variant. Blank
/// endpoints and API keys are rejected up front with
/// [`EngineError::InvalidConfig`] instead of failing on the first request.
///
/// # Examples
///
/// ```rust,no_run
/// use code_translator_engine::{create_engine, EngineConfig};
///
/// let engine = create_engine(EngineConfig::Gemini {
///     api_key: "your-key".to_string(),
///     model: "gemini-1.5-flash".to_string(),
///     base_url: String::new(),
///     max_retries: 2,
/// }).unwrap();
/// ```
pub fn create_engine(config: EngineConfig) -> Result<Arc<dyn TranslationEngine>> {
    let engine_name = config.engine_type().as_str();
    match config {
        #[cfg(feature = "function")]
        EngineConfig::Function {
            endpoint,
            api_key,
            max_retries,
        } => {
            if endpoint.trim().is_empty() {
                return Err(invalid(engine_name, "endpoint is empty"));
            }
            let api_key = api_key.filter(|k| !k.trim().is_empty());
            Ok(Arc::new(FunctionEngine::new(
                endpoint.trim().to_string(),
                api_key,
                max_retries,
            )))
        }
        #[cfg(feature = "gemini")]
        EngineConfig::Gemini {
            api_key,
            model,
            base_url,
            max_retries,
        } => {
            if api_key.trim().is_empty() {
                return Err(invalid(engine_name, "api key is empty"));
            }
            Ok(Arc::new(GeminiEngine::new(
                api_key.trim().to_string(),
                model,
                base_url,
                max_retries,
            )))
        }
        #[allow(unreachable_patterns)]
        _ => Err(invalid(engine_name, "engine not enabled in this build")),
    }
}

fn invalid(engine: &str, detail: &str) -> EngineError {
    EngineError::InvalidConfig {
        engine: engine.to_string(),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "function")]
    #[test]
    fn function_requires_endpoint() {
        let result = create_engine(EngineConfig::Function {
            endpoint: "  ".to_string(),
            api_key: None,
            max_retries: 0,
        });
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[cfg(feature = "function")]
    #[test]
    fn function_engine_created() {
        let engine = create_engine(EngineConfig::Function {
            endpoint: "http://localhost:54321/functions/v1/translate-code".to_string(),
            api_key: Some("anon".to_string()),
            max_retries: 2,
        })
        .unwrap();
        assert_eq!(engine.id(), "function");
    }

    #[cfg(feature = "gemini")]
    #[test]
    fn gemini_requires_api_key() {
        let result = create_engine(EngineConfig::Gemini {
            api_key: String::new(),
            model: String::new(),
            base_url: String::new(),
            max_retries: 0,
        });
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref engine, .. }) if engine == "gemini"
        ));
    }

    #[cfg(feature = "gemini")]
    #[test]
    fn gemini_engine_created() {
        let engine = create_engine(EngineConfig::Gemini {
            api_key: "k".to_string(),
            model: String::new(),
            base_url: String::new(),
            max_retries: 0,
        })
        .unwrap();
        assert_eq!(engine.id(), "gemini");
    }
}
