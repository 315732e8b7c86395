// libt4t-rs/libt4t/src/store/mod.rs

pub mod memory;
/// Test doubles.
pub mod mock;
pub mod notifier;
pub mod traits;

pub use memory::MemoryStore;
pub use mock::RecordingNotifier;
pub use notifier::{LogNotifier, MessageNotifier, Notification};
pub use traits::{ContentSource, NotificationSink};
