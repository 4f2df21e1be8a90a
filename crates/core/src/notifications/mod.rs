//! Notifications module - transient user-facing messages.

mod notifications_model;
mod notifications_traits;

pub use notifications_model::{Notification, NotificationLevel};
pub use notifications_traits::{LogNotifier, MockNotifier, NoOpNotifier, Notifier};
