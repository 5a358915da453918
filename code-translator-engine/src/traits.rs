use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{EngineError, Result};
use crate::types::{TranslateRequest, TranslateResponse};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: StatusCode,
    /// 响应体中的错误消息（如有）
    pub message: Option<String>,
}

impl RawApiError {
    pub fn new(status: StatusCode, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// Engine 错误映射 Trait（内部使用）
/// 各 Engine 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait EngineErrorMapper {
    /// 返回 Engine 标识符
    fn engine_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError) -> EngineError {
        match raw.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => EngineError::Unauthorized {
                engine: self.engine_name().to_string(),
                raw_message: raw.message,
            },
            status => EngineError::RemoteError {
                engine: self.engine_name().to_string(),
                status: status.as_u16(),
                message: raw.message,
            },
        }
    }

    /// 快捷方法：空响应
    fn empty_response(&self) -> EngineError {
        EngineError::EmptyResponse {
            engine: self.engine_name().to_string(),
        }
    }
}

/// Remote translation capability.
///
/// The core treats every implementation as an opaque asynchronous function:
/// one request in, either translated text or an [`EngineError`] out.
/// Implementations must return the engine's text without trimming or
/// rewriting it beyond what the engine protocol itself requires.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Engine identifier
    fn id(&self) -> &'static str;

    /// Translate `request.code` from `request.source_language` to `request.target_language`.
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse>;
}
