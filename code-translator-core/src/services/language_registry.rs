//! 支持的编程语言目录

use crate::error::ValidationError;
use crate::types::Language;

const LANGUAGES: &[Language] = &[
    Language { code: "python", label: "Python" },
    Language { code: "javascript", label: "JavaScript" },
    Language { code: "java", label: "Java" },
    Language { code: "cpp", label: "C++" },
    Language { code: "csharp", label: "C#" },
    Language { code: "go", label: "Go" },
    Language { code: "rust", label: "Rust" },
    Language { code: "php", label: "PHP" },
    Language { code: "ruby", label: "Ruby" },
    Language { code: "swift", label: "Swift" },
    Language { code: "kotlin", label: "Kotlin" },
    Language { code: "typescript", label: "TypeScript" },
];

/// Static catalog of supported languages, in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageRegistry;

impl LanguageRegistry {
    #[must_use]
    pub fn all(self) -> &'static [Language] {
        LANGUAGES
    }

    #[must_use]
    pub fn get(self, code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.code == code)
    }

    #[must_use]
    pub fn contains(self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Display label, falling back to the code itself for unknown entries
    /// (old records are not re-validated on read).
    #[must_use]
    pub fn label(self, code: &str) -> &str {
        self.get(code).map_or(code, |l| l.label)
    }

    /// Membership check used by submit validation.
    pub fn ensure_supported(self, code: &str) -> Result<(), ValidationError> {
        if self.contains(code) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedLanguage(code.to_string()))
        }
    }
}
