use crate::types::Notification;

/// Side-effect sink for user-visible notifications (toasts, console lines, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
