// libt4t-rs/libt4t/src/transport/channel.rs

#![cfg(feature = "async")]

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::transport::traits::TransportEvent;
use crate::types::DeactivationReason;
use crate::{Error, Result};

/// Async counterpart of `Transport` for hosts that deliver frames on a
/// runtime rather than on a blocking callback thread.
#[async_trait]
pub trait AsyncTransport: Send {
    /// Wait for the next event; `ConnectionClosed` once the reader side is dropped.
    async fn receive(&mut self) -> Result<TransportEvent>;

    /// Return a response APDU to the reader.
    async fn send(&mut self, response: &[u8]) -> Result<()>;
}

/// Tag side of an in-process channel pair.
pub struct ChannelTransport {
    events: mpsc::Receiver<TransportEvent>,
    responses: mpsc::Sender<Vec<u8>>,
}

/// Reader side of an in-process channel pair.
pub struct ReaderHandle {
    events: mpsc::Sender<TransportEvent>,
    responses: mpsc::Receiver<Vec<u8>>,
}

impl ChannelTransport {
    /// Create a connected tag/reader pair with bounded queues.
    pub fn pair(capacity: usize) -> (ChannelTransport, ReaderHandle) {
        let (event_tx, event_rx) = mpsc::channel(capacity);
        let (resp_tx, resp_rx) = mpsc::channel(capacity);
        (
            ChannelTransport {
                events: event_rx,
                responses: resp_tx,
            },
            ReaderHandle {
                events: event_tx,
                responses: resp_rx,
            },
        )
    }
}

#[async_trait]
impl AsyncTransport for ChannelTransport {
    async fn receive(&mut self) -> Result<TransportEvent> {
        self.events.recv().await.ok_or(Error::ConnectionClosed)
    }

    async fn send(&mut self, response: &[u8]) -> Result<()> {
        self.responses
            .send(response.to_vec())
            .await
            .map_err(|_| Error::ConnectionClosed)
    }
}

impl ReaderHandle {
    /// Send one command APDU and wait for its response.
    pub async fn transceive(&mut self, frame: Vec<u8>) -> Result<Vec<u8>> {
        self.events
            .send(TransportEvent::Command(frame))
            .await
            .map_err(|_| Error::ConnectionClosed)?;
        self.responses.recv().await.ok_or(Error::ConnectionClosed)
    }

    /// Tell the tag it was deactivated.
    pub async fn deactivate(&self, reason: DeactivationReason) -> Result<()> {
        self.events
            .send(TransportEvent::Deactivated(reason))
            .await
            .map_err(|_| Error::ConnectionClosed)
    }
}
