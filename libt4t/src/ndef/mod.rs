// libt4t-rs/libt4t/src/ndef/mod.rs

/// Generic single-record NDEF messages.
pub mod record;
/// Well-known Text records.
pub mod text;

pub use record::{NdefRecord, RecordHeader, Tnf};
pub use text::NdefTextRecord;
