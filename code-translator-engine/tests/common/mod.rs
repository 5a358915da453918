//! Shared helpers for engine integration tests

#![allow(dead_code)]

use std::sync::Arc;

use code_translator_engine::{EngineConfig, TranslationEngine, create_engine};

/// Skip the test when a live-API environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: environment variable {} not set", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Err` and unwrap the error.
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Edge-function engine pointed at a mock server path.
pub fn function_engine(
    server_url: &str,
    api_key: Option<&str>,
    max_retries: u32,
) -> Arc<dyn TranslationEngine> {
    let config = EngineConfig::Function {
        endpoint: format!("{server_url}/functions/v1/translate-code"),
        api_key: api_key.map(ToString::to_string),
        max_retries,
    };
    match create_engine(config) {
        Ok(engine) => engine,
        Err(e) => panic!("failed to create function engine: {e}"),
    }
}

/// Gemini engine pointed at a mock server.
pub fn gemini_engine(server_url: &str, model: &str) -> Arc<dyn TranslationEngine> {
    let config = EngineConfig::Gemini {
        api_key: "test-key".to_string(),
        model: model.to_string(),
        base_url: format!("{server_url}/models"),
        max_retries: 0,
    };
    match create_engine(config) {
        Ok(engine) => engine,
        Err(e) => panic!("failed to create gemini engine: {e}"),
    }
}
