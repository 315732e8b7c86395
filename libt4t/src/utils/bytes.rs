//! Byte pattern matching over fixed command sequences.
//!
//! None of these helpers fail: out-of-range requests yield `false` or an
//! empty slice so callers can feed them reader-controlled offsets directly.

/// Does `source` begin with `pattern`? Returns false when the pattern is
/// longer than the source.
pub fn starts_with(source: &[u8], pattern: &[u8]) -> bool {
    source.len() >= pattern.len() && source[..pattern.len()] == *pattern
}

/// Same length and same bytes.
pub fn equals(source: &[u8], pattern: &[u8]) -> bool {
    source == pattern
}

/// Sub-slice `source[begin..end]`, clamped to the source bounds.
///
/// `begin > source.len()` (or `begin >= end`) yields an empty slice.
pub fn slice(source: &[u8], begin: usize, end: usize) -> &[u8] {
    let end = end.min(source.len());
    if begin >= end {
        return &[];
    }
    &source[begin..end]
}

/// Write `value` big-endian into a 2 byte buffer (NLEN encoding).
pub fn be_u16_prefix(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Read a big-endian u16 at `idx`, or None when out of bounds.
pub fn be_u16_at(data: &[u8], idx: usize) -> Option<u16> {
    let b = slice(data, idx, idx.checked_add(2)?);
    match b {
        [hi, lo] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}
