//! Terminal output

use code_translator_core::traits::Notifier;
use code_translator_core::types::{Notification, NotificationKind, TranslationRecord};

/// Prints notifications to stderr, keeping stdout for command output.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✘",
        };
        eprintln!("{marker} {}: {}", notification.title, notification.message);
    }
}

/// One-line listing entry: `#1a2b3c4d  python -> rust  2025-06-01 12:00`.
pub fn summary_line(record: &TranslationRecord, source_label: &str, target_label: &str) -> String {
    format!(
        "#{}  {source_label} -> {target_label}  {}",
        record.short_id(),
        record.created_at.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_uses_short_id() {
        let record = TranslationRecord {
            id: "1a2b3c4d-0000-4000-8000-000000000000".to_string(),
            owner_id: "alice".to_string(),
            source_language: "python".to_string(),
            target_language: "cpp".to_string(),
            input_code: String::new(),
            output_code: String::new(),
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap(),
        };
        assert_eq!(
            summary_line(&record, "Python", "C++"),
            "#1a2b3c4d  Python -> C++  1970-01-01 00:00"
        );
    }
}
