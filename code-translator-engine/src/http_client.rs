//! Shared HTTP transport for the remote engines
//!
//! Each engine builds its own request (URL, headers, JSON body). This module
//! sends it, turns rate limits and gateway failures into typed errors and
//! retries the transient ones.

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Request, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::EngineError;
use crate::utils::log_sanitizer::{redact_api_key, truncate_for_log};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Model generation is slow; long inputs need the headroom.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const BASE_BACKOFF: Duration = Duration::from_millis(100);
const MAX_BACKOFF: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER: Duration = Duration::from_secs(30);

/// HTTP client with connect and request timeouts.
///
/// Falls back to a client without timeouts if the builder fails (TLS backend init).
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build HTTP client with timeouts, using defaults: {e}");
            Client::new()
        })
}

/// Send `request`, retrying transient failures up to `max_retries` times.
///
/// Any status other than 429 and 502-504 is returned to the engine together
/// with the body; those two classes become `RateLimited` and `NetworkError`
/// once the retries are used up.
pub(crate) async fn send(
    request: RequestBuilder,
    engine: &str,
    max_retries: u32,
) -> Result<(StatusCode, String), EngineError> {
    let (client, request) = request.build_split();
    let request = request.map_err(|e| EngineError::InvalidConfig {
        engine: engine.to_string(),
        detail: format!("Invalid request: {e}"),
    })?;
    log::debug!(
        "[{engine}] {} {}",
        request.method(),
        redact_api_key(request.url().as_str())
    );

    let mut attempt = 0;
    loop {
        let Some(next) = request.try_clone() else {
            log::warn!("[{engine}] Request body cannot be replayed, sending once");
            return send_once(&client, request, engine).await;
        };

        match send_once(&client, next, engine).await {
            Err(e) if attempt < max_retries && is_transient(&e) => {
                let delay = retry_delay(&e, attempt);
                attempt += 1;
                log::warn!(
                    "[{engine}] Attempt {attempt}/{} failed, retrying in {}ms: {e}",
                    max_retries + 1,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            result => return result,
        }
    }
}

async fn send_once(
    client: &Client,
    request: Request,
    engine: &str,
) -> Result<(StatusCode, String), EngineError> {
    let response = client.execute(request).await.map_err(|e| {
        if e.is_timeout() {
            EngineError::Timeout {
                engine: engine.to_string(),
                detail: e.to_string(),
            }
        } else {
            EngineError::NetworkError {
                engine: engine.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    log::debug!("[{engine}] HTTP {status}");

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();
        return Err(EngineError::RateLimited {
            engine: engine.to_string(),
            retry_after,
            raw_message: Some(body).filter(|b| !b.trim().is_empty()),
        });
    }

    if matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    ) {
        let body = response.text().await.unwrap_or_default();
        return Err(EngineError::NetworkError {
            engine: engine.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| EngineError::NetworkError {
            engine: engine.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;
    log::debug!("[{engine}] Response body: {}", truncate_for_log(&body));

    Ok((status, body))
}

/// Deserialize a response body, logging the raw text on failure.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str, engine: &str) -> Result<T, EngineError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!(
            "[{engine}] Unparseable response ({e}): {}",
            truncate_for_log(body)
        );
        EngineError::ParseError {
            engine: engine.to_string(),
            detail: e.to_string(),
        }
    })
}

fn is_transient(error: &EngineError) -> bool {
    error.is_transport() || matches!(error, EngineError::RateLimited { .. })
}

/// Server-provided `Retry-After` when present, exponential backoff otherwise.
fn retry_delay(error: &EngineError, attempt: u32) -> Duration {
    match error {
        EngineError::RateLimited {
            retry_after: Some(secs),
            ..
        } => Duration::from_secs(*secs).min(MAX_RETRY_AFTER),
        _ => BASE_BACKOFF
            .saturating_mul(1 << attempt.min(16))
            .min(MAX_BACKOFF),
    }
}
