// libt4t-rs/libt4t/src/store/notifier.rs
//! Notification sinks delivering read outcomes to the application.

use log::{info, warn};

use crate::store::memory::MemoryStore;
use crate::store::traits::NotificationSink;

/// User-facing outcome handed to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Reader received the whole NDEF file
    Success(String),
    /// Read could not be served
    Error(String),
}

/// Sink that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify_success(&mut self) {
        info!("ndef file delivered to reader");
    }

    fn notify_error(&mut self, message: &str) {
        warn!("tag read failed: {}", message);
    }
}

/// Sink resolving message texts from a `MemoryStore` and handing them to a
/// callback (a toast, a UI event, a channel send).
pub struct MessageNotifier<F> {
    store: MemoryStore,
    deliver: F,
}

impl<F> MessageNotifier<F>
where
    F: FnMut(Notification),
{
    /// Resolve texts from `store` and hand them to `deliver`.
    pub fn new(store: MemoryStore, deliver: F) -> Self {
        Self { store, deliver }
    }
}

impl<F> NotificationSink for MessageNotifier<F>
where
    F: FnMut(Notification),
{
    fn notify_success(&mut self) {
        let text = self.store.messages().success;
        (self.deliver)(Notification::Success(text));
    }

    fn notify_error(&mut self, message: &str) {
        warn!("tag read failed: {}", message);
        let text = self.store.messages().error;
        (self.deliver)(Notification::Error(text));
    }
}
