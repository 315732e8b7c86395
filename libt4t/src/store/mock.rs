// libt4t-rs/libt4t/src/store/mock.rs

use crate::store::traits::NotificationSink;

/// Notification sink for tests. Records every call.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Number of `notify_success` calls
    pub successes: usize,
    /// Messages passed to `notify_error`, in order
    pub errors: Vec<String>,
}

impl RecordingNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.successes == 0 && self.errors.is_empty()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify_success(&mut self) {
        self.successes += 1;
    }

    fn notify_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
