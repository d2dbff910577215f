//! Typed notification bus.
//!
//! Components publish short user-facing [`Notification`]s (a toast, a status
//! line) without knowing who displays them. Subscribers are slots on a
//! [`Signal`], so they are invoked in the publishing thread in no particular
//! order.
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use horizon_planner::notify::{Notification, NotificationLevel, Notifier};
//!
//! let notifier = Notifier::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! let id = notifier.subscribe(move |n: &Notification| sink.lock().push(n.message.clone()));
//!
//! notifier.warning("2 schedule records were skipped");
//! notifier.unsubscribe(id);
//! notifier.info("nobody hears this");
//!
//! assert_eq!(*seen.lock(), vec!["2 schedule records were skipped".to_string()]);
//! ```

use std::fmt;

use horizon_planner_core::logging::targets;
use horizon_planner_core::{ConnectionId, Signal};
use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    /// Create a notification.
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Publishes notifications to every subscriber.
#[derive(Debug, Default)]
pub struct Notifier {
    published: Signal<Notification>,
}

impl Notifier {
    /// Create a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    pub fn subscribe<F>(&self, subscriber: F) -> ConnectionId
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        self.published.connect(subscriber)
    }

    /// Remove a subscriber. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.published.disconnect(id)
    }

    /// Number of current subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.published.connection_count()
    }

    /// Deliver a notification to every subscriber.
    pub fn publish(&self, notification: Notification) {
        tracing::debug!(
            target: targets::PLANNER,
            level = %notification.level,
            message = %notification.message,
            "publishing notification"
        );
        self.published.emit(notification);
    }

    /// Publish an informational message.
    pub fn info(&self, message: impl Into<String>) {
        self.publish(Notification::new(NotificationLevel::Info, message));
    }

    /// Publish a success message.
    pub fn success(&self, message: impl Into<String>) {
        self.publish(Notification::new(NotificationLevel::Success, message));
    }

    /// Publish a warning.
    pub fn warning(&self, message: impl Into<String>) {
        self.publish(Notification::new(NotificationLevel::Warning, message));
    }

    /// Publish an error message.
    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notification::new(NotificationLevel::Error, message));
    }
}

static_assertions::assert_impl_all!(Notifier: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recorder(notifier: &Notifier) -> (ConnectionId, Arc<Mutex<Vec<Notification>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = notifier.subscribe(move |n| sink.lock().push(n.clone()));
        (id, seen)
    }

    #[test]
    fn test_publish_reaches_every_subscriber() {
        let notifier = Notifier::new();
        let (_, first) = recorder(&notifier);
        let (_, second) = recorder(&notifier);
        assert_eq!(notifier.subscriber_count(), 2);

        notifier.success("Saved");

        let expected = vec![Notification::new(NotificationLevel::Success, "Saved")];
        assert_eq!(*first.lock(), expected);
        assert_eq!(*second.lock(), expected);
    }

    #[test]
    fn test_unsubscribe() {
        let notifier = Notifier::new();
        let (id, seen) = recorder(&notifier);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.error("lost");

        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_publish_without_subscribers() {
        Notifier::new().info("nobody listening");
    }

    #[test]
    fn test_level_serde() {
        let json = serde_json::to_string(&NotificationLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(NotificationLevel::Warning.to_string(), "warning");
    }
}
