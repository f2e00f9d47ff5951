//! Notification surface
//!
//! Informational only: invoked after a successful create or delete with a
//! short title/description pair. The store's correctness never depends on
//! a notifier.

/// Sink for post-mutation notifications.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str);
}
