//! Hexadecimal rendering for APDU frames.
//!
//! `Hex` formats lazily so it can be handed straight to `log` macros without
//! building a `String` when the level is disabled. `parse_apdu` accepts the
//! spaced notation readers and datasheets use (`"00 A4 04 00"`).

use std::fmt;

use crate::{Error, Result};

/// Display adapter printing bytes as uppercase, space separated hex.
///
/// Example: `Hex(&[0x90, 0x00])` -> `"90 00"`
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xE1, 0x04]` -> `"E104"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// Parse an APDU written as hex, with or without whitespace between bytes.
pub fn parse_apdu(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex("odd number of digits".into()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| Error::InvalidHex("non-ascii input".into()))?;
            u8::from_str_radix(pair, 16)
                .map_err(|e| Error::InvalidHex(format!("'{}': {}", pair, e)))
        })
        .collect()
}
