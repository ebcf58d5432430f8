use crate::domain::Notification;

/// Port for showing messages to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}
