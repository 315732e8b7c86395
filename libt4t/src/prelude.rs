// libt4t-rs/libt4t/src/prelude.rs

pub use crate::config::{Messages, TagConfig};
pub use crate::ndef::NdefTextRecord;
pub use crate::protocol::{CapabilityContainer, CommandKind};
pub use crate::service::{HceService, ServiceBuilder};
pub use crate::session::{Session, SessionPhase, SessionState};
pub use crate::store::{
    ContentSource, LogNotifier, MemoryStore, MessageNotifier, Notification, NotificationSink,
};
pub use crate::transport::{MockTransport, Transport, TransportEvent};
pub use crate::{DeactivationReason, Error, FileId, Result, StatusWord};

// Re-export small utilities for convenience
pub use crate::utils::{Hex, bytes_to_hex, parse_apdu};
