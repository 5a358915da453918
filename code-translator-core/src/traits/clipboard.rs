use crate::error::CoreResult;

/// Write-only access to the platform clipboard.
pub trait ClipboardWriter: Send + Sync {
    /// Replace the clipboard contents with `text`.
    ///
    /// Fails with [`CoreError::Clipboard`](crate::error::CoreError::Clipboard)
    /// when the platform denies access.
    fn write_text(&self, text: &str) -> CoreResult<()>;
}
