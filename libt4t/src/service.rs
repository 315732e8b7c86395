// libt4t-rs/libt4t/src/service.rs

use log::{error, info};

use crate::config::TagConfig;
use crate::session::Session;
use crate::store::{ContentSource, LogNotifier, NotificationSink};
use crate::transport::{Transport, TransportEvent};
use crate::types::DeactivationReason;
use crate::{Error, Result};

#[cfg(feature = "async")]
use crate::transport::AsyncTransport;

type BoxedContent = Box<dyn ContentSource + Send>;
type BoxedNotifier = Box<dyn NotificationSink + Send>;

/// Host card-emulation service: answers reader frames for one tag.
///
/// Holds exactly one `Session`; frames must be delivered one at a time.
/// Hosts that run overlapping sessions need one service per session.
pub struct HceService {
    session: Session,
    content: BoxedContent,
    notifier: BoxedNotifier,
    transport: Option<Box<dyn Transport + Send>>,
}

impl HceService {
    /// Start building a service.
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::new()
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Answer a single command APDU.
    pub fn handle_frame(&mut self, frame: &[u8]) -> Vec<u8> {
        self.session
            .process(frame, &*self.content, &mut *self.notifier)
    }

    /// Tag deactivated: the next frame starts a fresh session.
    pub fn on_deactivated(&mut self, reason: DeactivationReason) {
        info!("tag deactivated ({})", reason);
        self.session.reset();
    }

    /// Dispatch one transport event; returns the response to send, if any.
    pub fn handle_event(&mut self, event: TransportEvent) -> Option<Vec<u8>> {
        match event {
            TransportEvent::Command(frame) => Some(self.handle_frame(&frame)),
            TransportEvent::Deactivated(reason) => {
                self.on_deactivated(reason);
                None
            }
        }
    }

    /// Pump the configured transport until it closes. Returns the number of
    /// responses sent.
    pub fn run(&mut self) -> Result<usize> {
        let mut transport = self.transport.take().ok_or(Error::TransportMissing)?;
        let result = self.pump(&mut *transport);
        self.transport = Some(transport);
        result
    }

    fn pump(&mut self, transport: &mut dyn Transport) -> Result<usize> {
        let mut answered = 0usize;
        loop {
            let event = match transport.receive() {
                Ok(event) => event,
                Err(Error::ConnectionClosed) => {
                    info!("transport closed after {} responses", answered);
                    return Ok(answered);
                }
                Err(e) => {
                    error!("transport receive failed: {}", e);
                    return Err(e);
                }
            };

            if let Some(response) = self.handle_event(event) {
                if let Err(e) = transport.send(&response) {
                    error!("transport send failed: {}", e);
                    return Err(e);
                }
                answered += 1;
            }
        }
    }

    /// Async variant of `run` over an explicitly supplied transport.
    #[cfg(feature = "async")]
    pub async fn run_async<T>(&mut self, transport: &mut T) -> Result<usize>
    where
        T: AsyncTransport + ?Sized,
    {
        let mut answered = 0usize;
        loop {
            let event = match transport.receive().await {
                Ok(event) => event,
                Err(Error::ConnectionClosed) => {
                    info!("transport closed after {} responses", answered);
                    return Ok(answered);
                }
                Err(e) => {
                    error!("transport receive failed: {}", e);
                    return Err(e);
                }
            };

            if let Some(response) = self.handle_event(event) {
                transport.send(&response).await.inspect_err(|e| {
                    error!("transport send failed: {}", e);
                })?;
                answered += 1;
            }
        }
    }
}

/// Helper to construct an `HceService` with optional configuration.
pub struct ServiceBuilder {
    config: TagConfig,
    content: Option<BoxedContent>,
    notifier: Option<BoxedNotifier>,
    transport: Option<Box<dyn Transport + Send>>,
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceBuilder {
    /// Builder with the default `TagConfig` and no content source.
    pub fn new() -> Self {
        Self {
            config: TagConfig::default(),
            content: None,
            notifier: None,
            transport: None,
        }
    }

    /// Use `config` for the session and its Capability Container.
    pub fn with_config(mut self, config: TagConfig) -> Self {
        self.config = config;
        self
    }

    /// Source of the card text.
    pub fn with_content<C>(mut self, content: C) -> Self
    where
        C: ContentSource + Send + 'static,
    {
        self.content = Some(Box::new(content));
        self
    }

    /// Defaults to `LogNotifier` when not provided.
    pub fn with_notifier<N>(mut self, notifier: N) -> Self
    where
        N: NotificationSink + Send + 'static,
    {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Optional: only `HceService::run` needs an owned transport.
    pub fn with_transport(mut self, transport: Box<dyn Transport + Send>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Requires a content source; the configuration is validated here.
    pub fn build(self) -> Result<HceService> {
        let content = self
            .content
            .ok_or_else(|| Error::InvalidConfig("no content source".into()))?;
        let session = Session::new(self.config)?;
        Ok(HceService {
            session,
            content,
            notifier: self.notifier.unwrap_or_else(|| Box::new(LogNotifier)),
            transport: self.transport,
        })
    }
}
