//! 翻译记录类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the display form of a record id.
const SHORT_ID_LEN: usize = 8;

/// A persisted translation. Immutable once created; only deletion is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Backend-assigned identifier.
    pub id: String,
    /// Identity that created the record.
    pub owner_id: String,
    pub source_language: String,
    pub target_language: String,
    /// Submitted source text, byte-for-byte.
    pub input_code: String,
    /// Engine output, byte-for-byte.
    pub output_code: String,
    /// Sole sort key for listings (descending).
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

impl TranslationRecord {
    /// Materialize a record for `owner_id` with a fresh UUID v4 and the current time.
    ///
    /// Intended for storage backends; clients never assign ids themselves.
    #[must_use]
    pub fn create(owner_id: &str, new: NewTranslation) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            source_language: new.source_language,
            target_language: new.target_language,
            input_code: new.input_code,
            output_code: new.output_code,
            created_at: Utc::now(),
        }
    }

    /// First 8 characters of the id, for display ("Translation #1a2b3c4d").
    #[must_use]
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }

    /// Listing order: newest first, ties broken by id (descending).
    #[must_use]
    pub fn listing_order(a: &Self, b: &Self) -> std::cmp::Ordering {
        b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
    }
}

/// Fields of a record before the backend assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTranslation {
    pub source_language: String,
    pub target_language: String,
    pub input_code: String,
    pub output_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, secs: i64) -> TranslationRecord {
        TranslationRecord {
            id: id.to_string(),
            owner_id: "u1".to_string(),
            source_language: "python".to_string(),
            target_language: "rust".to_string(),
            input_code: "print(1)".to_string(),
            output_code: "println!(\"1\");".to_string(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn short_id_takes_eight_chars() {
        let r = record("1a2b3c4d-aaaa-bbbb", 0);
        assert_eq!(r.short_id(), "1a2b3c4d");
    }

    #[test]
    fn short_id_of_short_id_is_whole() {
        let r = record("abc", 0);
        assert_eq!(r.short_id(), "abc");
    }

    #[test]
    fn listing_order_newest_first_then_id() {
        let mut records = vec![record("a", 10), record("c", 20), record("b", 20)];
        records.sort_by(TranslationRecord::listing_order);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn create_assigns_id_and_owner() {
        let r = TranslationRecord::create(
            "owner-1",
            NewTranslation {
                source_language: "go".to_string(),
                target_language: "rust".to_string(),
                input_code: "x".to_string(),
                output_code: "y".to_string(),
            },
        );
        assert_eq!(r.owner_id, "owner-1");
        assert_eq!(r.id.len(), 36);
    }

    #[test]
    fn serializes_created_at_as_rfc3339() {
        let r = record("a", 0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00.000000Z");
        assert_eq!(json["inputCode"], "print(1)");
    }
}
