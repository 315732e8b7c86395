// libt4t-rs/libt4t/src/ndef/text.rs

use crate::constants::{MAX_LANGUAGE_LEN, MAX_NDEF_FILE_SIZE};
use crate::ndef::record::{NdefRecord, Tnf};
use crate::utils::bytes::be_u16_prefix;
use crate::{Error, Result};

/// RTD "T" (NFC Forum well-known Text type)
pub const RTD_TEXT: &[u8] = b"T";

/// Status byte bit 7: set = UTF-16, cleared = UTF-8
const STATUS_UTF16: u8 = 0x80;
const LANGUAGE_LEN_MASK: u8 = 0x3F;

/// NDEF Text Record, serialized once at construction.
///
/// `nlen` always equals the byte length of `bytes`, big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefTextRecord {
    language: String,
    text: String,
    id: [u8; 2],
    bytes: Vec<u8>,
    nlen: [u8; 2],
}

impl NdefTextRecord {
    /// Encode `text` (UTF-8) tagged with `language` (ASCII, at most 63 bytes).
    pub fn encode(language: &str, text: &str, id: [u8; 2]) -> Result<Self> {
        validate_language(language)?;

        let record = NdefRecord::new(Tnf::WellKnown, RTD_TEXT, &id, &text_payload(language, text));
        let bytes = record.to_bytes()?;

        // NLEN and the record share the NDEF file
        let max = MAX_NDEF_FILE_SIZE as usize - 2;
        if bytes.len() > max {
            return Err(Error::RecordTooLarge {
                max,
                actual: bytes.len(),
            });
        }
        let nlen = be_u16_prefix(bytes.len() as u16);

        Ok(Self {
            language: language.to_string(),
            text: text.to_string(),
            id,
            bytes,
            nlen,
        })
    }

    /// Decode a serialized text record back into `(language, text)`.
    pub fn decode(bytes: &[u8]) -> Result<(String, String)> {
        let record = NdefRecord::parse(bytes)?;
        if record.tnf != Tnf::WellKnown || record.record_type != RTD_TEXT {
            return Err(Error::RecordFormat(format!(
                "not a text record (tnf={}, type={:02X?})",
                record.tnf, record.record_type
            )));
        }

        let (&status, rest) = record
            .payload
            .split_first()
            .ok_or_else(|| Error::RecordFormat("empty text payload".into()))?;
        if status & STATUS_UTF16 != 0 {
            return Err(Error::UnsupportedEncoding);
        }

        let lang_len = (status & LANGUAGE_LEN_MASK) as usize;
        if lang_len > rest.len() {
            return Err(Error::InvalidLength {
                expected: lang_len,
                actual: rest.len(),
            });
        }
        let (lang, text) = rest.split_at(lang_len);
        if !lang.is_ascii() {
            return Err(Error::RecordFormat("language code is not ascii".into()));
        }

        let language = String::from_utf8(lang.to_vec()).map_err(|_| Error::InvalidUtf8)?;
        let text = String::from_utf8(text.to_vec()).map_err(|_| Error::InvalidUtf8)?;
        Ok((language, text))
    }

    /// Size of the NDEF file image (NLEN + record) `encode` would produce,
    /// without allocating the record.
    pub fn file_len(language: &str, text: &str) -> usize {
        let payload_len = 1 + language.len() + text.len();
        let length_field = if payload_len < 256 { 1 } else { 4 };
        // NLEN, flags, TYPE_LENGTH, PAYLOAD_LENGTH, ID_LENGTH, TYPE, ID
        2 + 1 + 1 + length_field + 1 + RTD_TEXT.len() + 2 + payload_len
    }

    /// Language tag the record was encoded with.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Text carried by the record.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record ID field.
    pub fn id(&self) -> [u8; 2] {
        self.id
    }

    /// Serialized record bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 2 byte big-endian length prefix of the serialized record.
    pub fn nlen(&self) -> [u8; 2] {
        self.nlen
    }

    /// NLEN as an integer.
    pub fn nlen_value(&self) -> u16 {
        u16::from_be_bytes(self.nlen)
    }

    /// Full NDEF file content: NLEN followed by the record.
    pub fn file_image(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.bytes.len());
        out.extend_from_slice(&self.nlen);
        out.extend_from_slice(&self.bytes);
        out
    }
}

/// Reject language codes the 6 bit length field cannot carry.
pub fn validate_language(language: &str) -> Result<()> {
    if language.len() > MAX_LANGUAGE_LEN {
        return Err(Error::LanguageTooLong {
            actual: language.len(),
        });
    }
    if !language.is_ascii() {
        return Err(Error::InvalidConfig(format!(
            "language code '{}' is not ascii",
            language
        )));
    }
    Ok(())
}

fn text_payload(language: &str, text: &str) -> Vec<u8> {
    let lang = language.as_bytes();
    let lang_len = lang.len() & LANGUAGE_LEN_MASK as usize;
    let mut payload = Vec::with_capacity(1 + lang_len + text.len());
    payload.push(lang_len as u8);
    payload.extend_from_slice(&lang[..lang_len]);
    payload.extend_from_slice(text.as_bytes());
    payload
}
