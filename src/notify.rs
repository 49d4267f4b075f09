//! Notification dispatch
//!
//! Notifications are fire-and-forget: a title and a body handed to a sink,
//! with no record of what was sent kept by the planner itself.

use std::sync::Mutex;

/// Sink for immediate notifications
pub trait Notifier: Send + Sync {
    /// Deliver a notification now
    fn schedule_immediate(&self, title: &str, body: &str);
}

/// Prints notifications to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn schedule_immediate(&self, title: &str, body: &str) {
        tracing::info!(title, "dispatching notification");
        println!();
        println!("{}", title);
        println!("  {}", body);
    }
}

/// A notification captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Keeps dispatched notifications in memory for inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything dispatched so far, oldest first
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn schedule_immediate(&self, title: &str, body: &str) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(Notification {
                title: title.to_string(),
                body: body.to_string(),
            });
        }
    }
}
