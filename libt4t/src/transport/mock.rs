// libt4t-rs/libt4t/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::{Transport, TransportEvent};
use crate::types::DeactivationReason;
use crate::{Error, Result};

/// Mock transport for unit tests. It replays queued reader events and
/// records every response sent back.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Events still to be received, front first
    pub events: VecDeque<TransportEvent>,
    /// Responses sent so far
    pub sent: Vec<Vec<u8>>,
    /// Testing hook: number of send calls that should fail with Timeout
    pub send_failures: usize,
}

impl MockTransport {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Queue a command APDU.
    pub fn push_command(&mut self, frame: Vec<u8>) {
        self.events.push_back(TransportEvent::Command(frame));
    }

    /// Queue a deactivation.
    pub fn push_deactivation(&mut self, reason: DeactivationReason) {
        self.events.push_back(TransportEvent::Deactivated(reason));
    }

    /// Take the most recent response.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn receive(&mut self) -> Result<TransportEvent> {
        // Running out of scripted events means the reader is gone
        self.events.pop_front().ok_or(Error::ConnectionClosed)
    }

    fn send(&mut self, response: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Timeout);
        }
        self.sent.push(response.to_vec());
        Ok(())
    }
}
