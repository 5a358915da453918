//! # code-translator-engine
//!
//! Remote translation engines for Code Translator. Every engine turns one
//! `(source language, target language, code)` request into translated code
//! or a structured [`EngineError`].
//!
//! ## Supported Engines
//!
//! | Engine | Feature Flag | Auth Method |
//! |--------|-------------|-------------|
//! | Hosted edge function (`translate-code`) | `function` | Bearer token + `apikey` header |
//! | [Google Gemini](https://ai.google.dev/) | `gemini` | `key=` query parameter |
//!
//! ## Feature Flags
//!
//! - **`all-engines`** *(default)*: enable both engines.
//! - **`function`** / **`gemini`**: enable a single engine.
//! - **`native-tls`** *(default)* or **`rustls`**: TLS backend for `reqwest`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use code_translator_engine::{create_engine, EngineConfig, TranslateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = create_engine(EngineConfig::Function {
//!         endpoint: "https://project.supabase.co/functions/v1/translate-code".to_string(),
//!         api_key: Some("anon-key".to_string()),
//!         max_retries: 2,
//!     })?;
//!
//!     let request = TranslateRequest::new("python", "javascript", "print('hi')");
//!     let response = engine.translate(&request).await?;
//!     println!("{}", response.translated_code);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! - [`EngineError::RemoteError`]: the engine reported a failure, usually with a message
//! - [`EngineError::Unauthorized`]: key rejected
//! - [`EngineError::NetworkError`] / [`EngineError::Timeout`]: transport faults
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried with
//! exponential backoff up to the configured `max_retries`.

mod engines;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{EngineError, Result};

pub use factory::create_engine;

// Only the public engine trait; error mapping stays internal
pub use traits::TranslationEngine;

pub use types::{EngineConfig, EngineType, TranslateRequest, TranslateResponse};

pub use utils::log_sanitizer;

#[cfg(feature = "function")]
pub use engines::FunctionEngine;
#[cfg(feature = "gemini")]
pub use engines::GeminiEngine;
