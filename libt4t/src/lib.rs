// libt4t-rs/libt4t/src/lib.rs

//! libt4t
//!
//! Pure Rust NFC Forum Type 4 Tag emulation for host card emulation: turns
//! reader command APDUs into the responses of an NDEF tag holding one text
//! record.
#![warn(missing_docs)]

/// Tag configuration and notification texts.
pub mod config;
/// Fixed command patterns and protocol constants.
pub mod constants;
/// Crate-wide error type.
pub mod error;
/// NDEF record and Text record codec.
pub mod ndef;
/// Commonly used items.
pub mod prelude;
/// Command classification and response composition.
pub mod protocol;
/// Host card-emulation service driving a transport.
pub mod service;
/// Per-activation protocol state.
pub mod session;
/// Content sources, notification sinks and the in-memory store.
pub mod store;
/// Helpers shared by tests, benches and demos.
pub mod test_support;
/// Frame delivery between the platform and the service.
pub mod transport;
/// Small protocol value types.
pub mod types;
/// Byte and hex helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
