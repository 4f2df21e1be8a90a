//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::{info, warn};

use super::Notification;

/// Trait for displaying notifications.
///
/// Delivery is best-effort: nothing is returned, and callers never branch on
/// whether a message was shown.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

/// Writes notifications to the log. Used when no UI is attached.
#[derive(Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_error() {
            warn!("{}", notification.message);
        } else {
            info!("{}", notification.message);
        }
    }
}

/// No-op implementation for contexts that don't show messages.
#[derive(Clone, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Mock notifier for testing - collects notifications.
#[derive(Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Returns collected error messages.
    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.is_error())
            .map(|n| n.message)
            .collect()
    }

    /// Returns collected success messages.
    pub fn successes(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| !n.is_error())
            .map(|n| n.message)
            .collect()
    }

    /// Clears collected notifications.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationLevel;

    #[test]
    fn test_mock_notifier_collects_by_level() {
        let notifier = MockNotifier::new();
        notifier.success("Investment added");
        notifier.error("Please complete all fields");

        assert_eq!(notifier.notifications().len(), 2);
        assert_eq!(notifier.successes(), vec!["Investment added"]);
        assert_eq!(notifier.errors(), vec!["Please complete all fields"]);

        notifier.clear();
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_notification_serializes_lowercase_level() {
        let json = serde_json::to_string(&Notification::error("boom")).unwrap();
        assert_eq!(json, r#"{"level":"error","message":"boom"}"#);
        assert_eq!(Notification::success("ok").level, NotificationLevel::Success);
    }

    #[test]
    fn test_log_and_noop_notifiers_accept_messages() {
        LogNotifier.success("Investment updated");
        NoOpNotifier.error("ignored");
    }
}
