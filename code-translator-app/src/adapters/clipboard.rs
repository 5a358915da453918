//! Clipboard adapters.

use code_translator_core::error::{CoreError, CoreResult};
use code_translator_core::traits::ClipboardWriter;

/// Clipboard for environments without one (headless servers, CI).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl ClipboardWriter for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> CoreResult<()> {
        Err(CoreError::Clipboard(
            "clipboard is not available in this build".to_string(),
        ))
    }
}

#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "system-clipboard")]
mod system {
    use std::sync::{Mutex, PoisonError};

    use code_translator_core::error::{CoreError, CoreResult};
    use code_translator_core::traits::ClipboardWriter;

    /// System clipboard via `arboard`.
    ///
    /// The handle is opened on first use and kept for the lifetime of the
    /// adapter; on X11 the copied text is only served while it is alive.
    #[derive(Default)]
    pub struct SystemClipboard {
        handle: Mutex<Option<arboard::Clipboard>>,
    }

    impl SystemClipboard {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl ClipboardWriter for SystemClipboard {
        fn write_text(&self, text: &str) -> CoreResult<()> {
            let mut handle = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
            if handle.is_none() {
                let clipboard = arboard::Clipboard::new().map_err(|e| {
                    CoreError::Clipboard(format!("Failed to access clipboard: {e}"))
                })?;
                *handle = Some(clipboard);
            }
            let Some(clipboard) = handle.as_mut() else {
                return Err(CoreError::Clipboard("clipboard handle missing".to_string()));
            };

            clipboard
                .set_text(text)
                .map_err(|e| CoreError::Clipboard(format!("Failed to set clipboard: {e}")))?;
            log::debug!("Text copied to clipboard ({} chars)", text.chars().count());
            Ok(())
        }
    }
}
