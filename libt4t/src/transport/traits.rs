// libt4t-rs/libt4t/src/transport/traits.rs
//! Blocking transport abstraction.

use crate::Result;
use crate::types::DeactivationReason;

/// What the card-emulation layer delivers to the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A command APDU from the reader
    Command(Vec<u8>),
    /// The tag was deactivated; the current session is over
    Deactivated(DeactivationReason),
}

/// Transport trait abstracts the host card-emulation service away from the
/// protocol logic. Frames are half-duplex: every `Command` is answered with
/// exactly one `send` before the next event is received.
pub trait Transport {
    /// Wait for the next event. `Error::ConnectionClosed` ends the service.
    fn receive(&mut self) -> Result<TransportEvent>;

    /// Return a response APDU to the reader.
    fn send(&mut self, response: &[u8]) -> Result<()>;
}
