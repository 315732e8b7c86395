// libt4t-rs/libt4t/src/transport/mod.rs

/// In-process async transport (feature `async`).
#[cfg(feature = "async")]
pub mod channel;
/// Scripted transport for tests.
pub mod mock;
pub mod traits;

#[cfg(feature = "async")]
pub use channel::{AsyncTransport, ChannelTransport, ReaderHandle};
pub use mock::MockTransport;
pub use traits::{Transport, TransportEvent};
