// libt4t-rs/libt4t/src/protocol/mod.rs

/// Capability Container file.
pub mod capability;
/// Command APDU classification.
pub mod command;
/// Response APDU composition.
pub mod response;

pub use capability::CapabilityContainer;
pub use command::{CommandKind, classify};
pub use response::{compose_data, compose_error, compose_nlen, compose_ok};
