//! Clipboard bridge

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ClipboardWriter, Notifier};
use crate::types::Notification;

const COPIED_TITLE: &str = "Copied to Clipboard";
const COPIED_MESSAGE: &str = "Code has been copied successfully.";
const COPY_FAILED_TITLE: &str = "Copy Failed";
const COPY_FAILED_MESSAGE: &str = "Failed to copy code to clipboard.";

/// Writes text to the clipboard and reports the outcome as a notification.
pub struct ClipboardBridge {
    clipboard: Arc<dyn ClipboardWriter>,
    notifier: Arc<dyn Notifier>,
}

impl ClipboardBridge {
    #[must_use]
    pub fn new(clipboard: Arc<dyn ClipboardWriter>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Copy `text`.
    ///
    /// Empty text is a silent success: the clipboard is left untouched and no
    /// notification is emitted. Callers decide whether to offer copy at all.
    pub fn copy(&self, text: &str) -> CoreResult<()> {
        if text.is_empty() {
            log::debug!("Skipping clipboard write of empty text");
            return Ok(());
        }

        match self.clipboard.write_text(text) {
            Ok(()) => {
                log::debug!("Copied {} bytes to clipboard", text.len());
                self.notifier
                    .notify(Notification::success(COPIED_TITLE, COPIED_MESSAGE));
                Ok(())
            }
            Err(e) => {
                log::warn!("Clipboard write failed: {e}");
                self.notifier
                    .notify(Notification::error(COPY_FAILED_TITLE, COPY_FAILED_MESSAGE));
                Err(match e {
                    CoreError::Clipboard(_) => e,
                    other => CoreError::Clipboard(other.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockClipboard, RecordingNotifier};
    use crate::types::NotificationKind;

    fn bridge() -> (ClipboardBridge, Arc<MockClipboard>, Arc<RecordingNotifier>) {
        let clipboard = Arc::new(MockClipboard::new());
        let notifier = Arc::new(RecordingNotifier::new());
        (
            ClipboardBridge::new(clipboard.clone(), notifier.clone()),
            clipboard,
            notifier,
        )
    }

    #[test]
    fn copy_success_notifies() {
        let (bridge, clipboard, notifier) = bridge();
        bridge.copy("fn main() {}").unwrap();

        assert_eq!(clipboard.contents(), Some("fn main() {}".to_string()));
        let notes = notifier.take();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Success);
        assert_eq!(notes[0].title, "Copied to Clipboard");
    }

    #[test]
    fn copy_failure_is_clipboard_error() {
        let (bridge, clipboard, notifier) = bridge();
        clipboard.set_denied(true);

        let err = bridge.copy("x").unwrap_err();
        assert!(matches!(err, CoreError::Clipboard(_)));
        let notes = notifier.take();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Copy Failed");
        assert_eq!(notes[0].message, "Failed to copy code to clipboard.");
    }

    #[test]
    fn empty_text_is_noop_success() {
        let (bridge, clipboard, notifier) = bridge();
        bridge.copy("").unwrap();

        assert_eq!(clipboard.contents(), None);
        assert!(notifier.take().is_empty());
    }
}
