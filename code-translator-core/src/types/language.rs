use serde::Serialize;

/// A supported programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// Stable code sent to the engine and stored on records (e.g. `cpp`).
    pub code: &'static str,
    /// Human-readable label (e.g. `C++`).
    pub label: &'static str,
}
