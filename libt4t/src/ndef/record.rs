// libt4t-rs/libt4t/src/ndef/record.rs

use derive_more::Display;

use crate::utils::bytes::slice;
use crate::{Error, Result};

const FLAG_MB: u8 = 0x80;
const FLAG_ME: u8 = 0x40;
const FLAG_CF: u8 = 0x20;
const FLAG_SR: u8 = 0x10;
const FLAG_IL: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// Type Name Format (3 bits of the record header)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tnf {
    /// No type, id or payload
    Empty = 0x00,
    /// NFC Forum well-known type (RTD)
    WellKnown = 0x01,
    /// Media type (RFC 2046)
    Mime = 0x02,
    /// Absolute URI (RFC 3986)
    AbsoluteUri = 0x03,
    /// NFC Forum external type
    External = 0x04,
    /// Payload of unknown type
    Unknown = 0x05,
    /// Middle or terminating chunk
    Unchanged = 0x06,
    /// Reserved value
    Reserved = 0x07,
}

impl Tnf {
    /// Low three bits of a header byte.
    pub fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::Mime,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::External,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// Decoded flag byte of an NDEF record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// MB: first record of the message
    pub message_begin: bool,
    /// ME: last record of the message
    pub message_end: bool,
    /// CF: payload continues in the next record
    pub chunked: bool,
    /// SR: 1 byte payload length instead of 4
    pub short_record: bool,
    /// IL: an ID_LENGTH byte is present
    pub has_id_length: bool,
    /// TNF: how to interpret the type field
    pub tnf: Tnf,
}

impl RecordHeader {
    /// Decode a flag byte.
    pub fn from_byte(b: u8) -> Self {
        Self {
            message_begin: b & FLAG_MB != 0,
            message_end: b & FLAG_ME != 0,
            chunked: b & FLAG_CF != 0,
            short_record: b & FLAG_SR != 0,
            has_id_length: b & FLAG_IL != 0,
            tnf: Tnf::from_bits(b),
        }
    }

    /// Encode back into a flag byte.
    pub fn to_byte(&self) -> u8 {
        let mut b = self.tnf as u8;
        for (set, flag) in [
            (self.message_begin, FLAG_MB),
            (self.message_end, FLAG_ME),
            (self.chunked, FLAG_CF),
            (self.short_record, FLAG_SR),
            (self.has_id_length, FLAG_IL),
        ] {
            if set {
                b |= flag;
            }
        }
        b
    }
}

/// A single, unchunked NDEF record that forms a whole NDEF message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    /// Type Name Format
    pub tnf: Tnf,
    /// TYPE field, e.g. `b"T"`
    pub record_type: Vec<u8>,
    /// ID field, empty when the record has no id
    pub id: Vec<u8>,
    /// PAYLOAD field
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Copy the given fields into a record.
    pub fn new(tnf: Tnf, record_type: &[u8], id: &[u8], payload: &[u8]) -> Self {
        Self {
            tnf,
            record_type: record_type.to_vec(),
            id: id.to_vec(),
            payload: payload.to_vec(),
        }
    }

    /// Header flags for this record as the only record of a message.
    pub fn header(&self) -> RecordHeader {
        RecordHeader {
            message_begin: true,
            message_end: true,
            chunked: false,
            short_record: self.payload.len() < 256,
            has_id_length: !self.id.is_empty(),
            tnf: self.tnf,
        }
    }

    /// Serialized length without building the bytes.
    pub fn encoded_len(&self) -> usize {
        let header = self.header();
        let payload_len_field = if header.short_record { 1 } else { 4 };
        let id_len_field = usize::from(header.has_id_length);
        2 + payload_len_field
            + id_len_field
            + self.record_type.len()
            + self.id.len()
            + self.payload.len()
    }

    /// Serialize: flags, TYPE_LENGTH, PAYLOAD_LENGTH (1 or 4 bytes),
    /// [ID_LENGTH], TYPE, [ID], PAYLOAD.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.record_type.len() > u8::MAX as usize {
            return Err(Error::RecordFormat("record type longer than 255 bytes".into()));
        }
        if self.id.len() > u8::MAX as usize {
            return Err(Error::RecordFormat("record id longer than 255 bytes".into()));
        }
        let payload_len = u32::try_from(self.payload.len()).map_err(|_| {
            Error::RecordTooLarge {
                max: u32::MAX as usize,
                actual: self.payload.len(),
            }
        })?;

        let header = self.header();
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(header.to_byte());
        out.push(self.record_type.len() as u8);
        if header.short_record {
            out.push(payload_len as u8);
        } else {
            out.extend_from_slice(&payload_len.to_be_bytes());
        }
        if header.has_id_length {
            out.push(self.id.len() as u8);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
        Ok(out)
    }

    /// Parse a single-record NDEF message. Trailing bytes are rejected.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor { data, pos: 0 };

        let header = RecordHeader::from_byte(cursor.byte()?);
        if header.chunked {
            return Err(Error::RecordFormat("chunked records are not supported".into()));
        }
        if !(header.message_begin && header.message_end) {
            return Err(Error::RecordFormat("expected a single-record message".into()));
        }

        let type_len = cursor.byte()? as usize;
        let payload_len = if header.short_record {
            cursor.byte()? as usize
        } else {
            let b = cursor.take(4)?;
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as usize
        };
        let id_len = if header.has_id_length {
            cursor.byte()? as usize
        } else {
            0
        };

        let record_type = cursor.take(type_len)?.to_vec();
        let id = cursor.take(id_len)?.to_vec();
        let payload = cursor.take(payload_len)?.to_vec();

        if cursor.pos != data.len() {
            return Err(Error::InvalidLength {
                expected: cursor.pos,
                actual: data.len(),
            });
        }

        Ok(Self {
            tnf: header.tnf,
            record_type,
            id,
            payload,
        })
    }
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.saturating_add(len);
        if end > self.data.len() {
            return Err(Error::InvalidLength {
                expected: end,
                actual: self.data.len(),
            });
        }
        let s = slice(self.data, self.pos, end);
        self.pos = end;
        Ok(s)
    }

    fn byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
}
