//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the reader-side command script and service
//! setup so tests across the crate and tests/ directory share one copy.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crate::config::TagConfig;
use crate::constants::{READ_CC_FILE, READ_NLEN, SELECT_CC_FILE, SELECT_NDEF_FILE};
use crate::service::HceService;
use crate::store::{MemoryStore, RecordingNotifier};
use crate::transport::MockTransport;
use crate::Result;

/// NDEF Tag Application AID (D2760000850101)
#[doc(hidden)]
pub const NDEF_APPLICATION_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// SELECT by name for the NDEF Tag Application.
#[doc(hidden)]
pub fn select_ndef_application() -> Vec<u8> {
    let mut frame = vec![0x00, 0xA4, 0x04, 0x00, NDEF_APPLICATION_AID.len() as u8];
    frame.extend_from_slice(&NDEF_APPLICATION_AID);
    frame
}

/// ReadBinary with explicit offset and Le.
#[doc(hidden)]
pub fn read_binary(offset: u16, le: u8) -> Vec<u8> {
    let [p1, p2] = offset.to_be_bytes();
    vec![0x00, 0xB0, p1, p2, le]
}

/// The six frames of the Mapping Version 2.0 read flow, in order, with a
/// final data read of `le` bytes from offset 0.
#[doc(hidden)]
pub fn read_flow(le: u8) -> Vec<Vec<u8>> {
    vec![
        select_ndef_application(),
        SELECT_CC_FILE.to_vec(),
        READ_CC_FILE.to_vec(),
        SELECT_NDEF_FILE.to_vec(),
        READ_NLEN.to_vec(),
        read_binary(0, le),
    ]
}

/// Build a MockTransport pre-seeded with the given command frames.
#[doc(hidden)]
pub fn mock_with_commands(frames: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for f in frames {
        mock.push_command(f);
    }
    mock
}

/// Convenience: a service over a fresh `MemoryStore` holding `content`
/// (None leaves the store empty), with a shared recording notifier.
#[doc(hidden)]
pub fn service_with_content(
    content: Option<&str>,
) -> Result<(HceService, MemoryStore, Arc<Mutex<RecordingNotifier>>)> {
    service_with_config(TagConfig::default(), content)
}

/// As `service_with_content`, with the store and the session built from the
/// same `config`.
#[doc(hidden)]
pub fn service_with_config(
    config: TagConfig,
    content: Option<&str>,
) -> Result<(HceService, MemoryStore, Arc<Mutex<RecordingNotifier>>)> {
    let store = MemoryStore::for_config(&config);
    if let Some(text) = content {
        store.set_card_content(text)?;
    }
    let notes = Arc::new(Mutex::new(RecordingNotifier::new()));
    let service = HceService::builder()
        .with_config(config)
        .with_content(store.clone())
        .with_notifier(notes.clone())
        .build()?;
    Ok((service, store, notes))
}
