//! Utility modules.

/// Log sanitization utilities to prevent source code and key exposure.
pub mod log_sanitizer;
