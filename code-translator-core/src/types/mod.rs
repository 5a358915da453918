//! 类型定义模块

mod attempt;
mod identity;
mod language;
mod notification;
mod record;

pub use attempt::{AttemptStatus, FailureReason, TranslationAttempt};
pub use identity::Identity;
pub use language::Language;
pub use notification::{Notification, NotificationKind};
pub use record::{NewTranslation, TranslationRecord};

// Re-export engine wire types
pub use code_translator_engine::{TranslateRequest, TranslateResponse};
