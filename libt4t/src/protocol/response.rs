// libt4t-rs/libt4t/src/protocol/response.rs

use log::debug;

use crate::ndef::NdefTextRecord;
use crate::types::StatusWord;
use crate::utils::bytes::slice;

/// `90 00` alone.
pub fn compose_ok() -> Vec<u8> {
    StatusWord::Success.to_bytes().to_vec()
}

/// `6A 82` alone, no data.
pub fn compose_error() -> Vec<u8> {
    StatusWord::Error.to_bytes().to_vec()
}

/// NLEN prefix followed by `90 00`.
pub fn compose_nlen(record: &NdefTextRecord) -> Vec<u8> {
    let mut out = Vec::with_capacity(4);
    out.extend_from_slice(&record.nlen());
    out.extend_from_slice(&StatusWord::Success.to_bytes());
    out
}

/// ReadBinary over the NDEF file image (NLEN ++ record).
///
/// The data part holds at most `requested_len` bytes starting at `offset`
/// and is empty when `offset` is past the end of the file. A complete read
/// clears `guard` and fires `notify`.
pub fn compose_data<F>(
    record: &NdefTextRecord,
    offset: u16,
    requested_len: u8,
    guard: &mut bool,
    mut notify: F,
) -> Vec<u8>
where
    F: FnMut(),
{
    let full = record.file_image();
    let tail = slice(&full, offset as usize, full.len());
    let actual_len = tail.len().min(requested_len as usize);

    debug!(
        "read binary: offset={}, requested={}, file={}, returned={}",
        offset,
        requested_len,
        full.len(),
        actual_len
    );
    #[cfg(feature = "diagnostics")]
    log::trace!("ndef file image: {}", crate::utils::hex::Hex(&full));

    let mut response = Vec::with_capacity(actual_len + 2);
    response.extend_from_slice(&tail[..actual_len]);
    response.extend_from_slice(&StatusWord::Success.to_bytes());

    *guard = false;
    notify();

    response
}
