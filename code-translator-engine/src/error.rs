use serde::{Deserialize, Serialize};

/// Unified error type for all translation engine operations.
///
/// Each variant includes an `engine` field identifying which engine produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum EngineError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Engine that produced the error.
        engine: String,
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the transport timeout.
    Timeout {
        /// Engine that produced the error.
        engine: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Engine that produced the error.
        engine: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API key or session token was rejected (HTTP 401/403).
    Unauthorized {
        /// Engine that produced the error.
        engine: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The engine answered but reported a translation failure.
    RemoteError {
        /// Engine that produced the error.
        engine: String,
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message from the API, if one was present in the body.
        message: Option<String>,
    },

    /// The response body could not be parsed.
    ParseError {
        /// Engine that produced the error.
        engine: String,
        /// Parser error details.
        detail: String,
    },

    /// The engine answered successfully but produced no translation.
    EmptyResponse {
        /// Engine that produced the error.
        engine: String,
    },

    /// The engine configuration is incomplete (missing endpoint, API key, ...).
    InvalidConfig {
        /// Engine that produced the error.
        engine: String,
        /// What is wrong with the configuration.
        detail: String,
    },
}

impl EngineError {
    /// 是否为预期行为（配置错误、鉴权失败等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::RemoteError { .. }
                | Self::RateLimited { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// Whether the failure happened below the API layer (transport, timeout).
    ///
    /// Transport faults carry no message from the remote engine.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// Human-readable message reported by the remote engine, if any.
    #[must_use]
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::RemoteError { message, .. } => message.as_deref(),
            Self::Unauthorized { raw_message, .. } | Self::RateLimited { raw_message, .. } => {
                raw_message.as_deref()
            }
            _ => None,
        }
        .filter(|m| !m.trim().is_empty())
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { engine, detail } => {
                write!(f, "[{engine}] Network error: {detail}")
            }
            Self::Timeout { engine, detail } => {
                write!(f, "[{engine}] Request timeout: {detail}")
            }
            Self::RateLimited {
                engine,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{engine}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{engine}] Rate limited")
                }
            }
            Self::Unauthorized {
                engine,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{engine}] Unauthorized: {msg}")
                } else {
                    write!(f, "[{engine}] Unauthorized")
                }
            }
            Self::RemoteError {
                engine,
                status,
                message,
            } => {
                if let Some(msg) = message {
                    write!(f, "[{engine}] Translation failed (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{engine}] Translation failed (HTTP {status})")
                }
            }
            Self::ParseError { engine, detail } => {
                write!(f, "[{engine}] Parse error: {detail}")
            }
            Self::EmptyResponse { engine } => {
                write!(f, "[{engine}] Engine returned no translation")
            }
            Self::InvalidConfig { engine, detail } => {
                write!(f, "[{engine}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience type alias for `Result<T, EngineError>`.
pub type Result<T> = std::result::Result<T, EngineError>;
