// libt4t-rs/libt4t/src/store/traits.rs
//! Seams between a session and the application: where the text comes
//! from and where outcomes go.

/// Supplies the text embedded in the emulated tag.
///
/// Called on the reader's command path: implementations must answer from
/// local memory without blocking.
pub trait ContentSource {
    /// Current text, or None when nothing is configured. Empty text counts
    /// as nothing configured.
    fn current_text(&self) -> Option<String>;

    /// Whether any content is configured.
    fn has_content(&self) -> bool {
        self.current_text().is_some()
    }
}

/// Fire-and-forget sink for user-facing outcome messages.
pub trait NotificationSink {
    /// The reader received the whole NDEF file.
    fn notify_success(&mut self);

    /// A read could not be served; `message` describes why.
    fn notify_error(&mut self, message: &str);
}

impl ContentSource for String {
    fn current_text(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.clone())
    }
}

impl ContentSource for &str {
    fn current_text(&self) -> Option<String> {
        (!self.is_empty()).then(|| (*self).to_string())
    }
}

impl<T: ContentSource + ?Sized> ContentSource for std::sync::Arc<T> {
    fn current_text(&self) -> Option<String> {
        (**self).current_text()
    }

    fn has_content(&self) -> bool {
        (**self).has_content()
    }
}

impl<N: NotificationSink + ?Sized> NotificationSink for Box<N> {
    fn notify_success(&mut self) {
        (**self).notify_success()
    }

    fn notify_error(&mut self, message: &str) {
        (**self).notify_error(message)
    }
}

impl<N: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<std::sync::Mutex<N>> {
    fn notify_success(&mut self) {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .notify_success()
    }

    fn notify_error(&mut self, message: &str) {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .notify_error(message)
    }
}
