use code_translator_core::traits::Notifier;
use code_translator_core::types::{Notification, NotificationKind};

/// Forwards notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                log::info!("{}: {}", notification.title, notification.message);
            }
            NotificationKind::Error => {
                log::warn!("{}: {}", notification.title, notification.message);
            }
        }
    }
}
