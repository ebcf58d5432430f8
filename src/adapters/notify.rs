use gitbar_core::domain::{Notification, Severity};
use gitbar_core::ports::Notifier;
use tracing::{error, warn};

/// Prints notifications to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notification: &Notification) -> String {
        format!(
            "{}: {}\n  {}",
            notification.severity, notification.title, notification.message
        )
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Warning => warn!("{}", notification.title),
            Severity::Error => error!("{}", notification.title),
        }
        eprintln!("{}", Self::format(notification));
    }
}
