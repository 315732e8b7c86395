// libt4t-rs/libt4t/src/error.rs

use thiserror::Error;

/// 共通エラー型
///
/// Reader-facing failures never surface as `Error`: the session turns them
/// into a status word. These variants are reported by content setters, the
/// NDEF codec and the transport layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Language tag longer than the 6 bit length field allows
    #[error("language code too long: {actual} bytes (max 63)")]
    LanguageTooLong {
        /// Length of the rejected tag in bytes
        actual: usize,
    },

    /// Record or file image larger than the NDEF file
    #[error("ndef record too large: max {max} bytes, got {actual}")]
    RecordTooLarge {
        /// Limit in bytes
        max: usize,
        /// Size that was refused
        actual: usize,
    },

    /// Content source has nothing to serve
    #[error("no card content configured")]
    ContentUnavailable,

    /// Input shorter or longer than its length fields say
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes the length fields call for
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Malformed or unsupported NDEF record
    #[error("ndef record format error: {0}")]
    RecordFormat(String),

    /// Text record flagged as UTF-16
    #[error("unsupported text encoding (utf-16)")]
    UnsupportedEncoding,

    /// Text or language bytes are not UTF-8
    #[error("text payload is not valid utf-8")]
    InvalidUtf8,

    /// Hex string could not be parsed
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Configuration rejected by `TagConfig::validate` or the builder
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `run` was called on a service built without a transport
    #[error("no transport configured")]
    TransportMissing,

    /// Peer side of the transport is gone
    #[error("connection closed")]
    ConnectionClosed,

    /// Transport did not complete in time
    #[error("operation timed out")]
    Timeout,
}

impl Error {
    /// True for errors that originate from configured content rather than
    /// from the reader or the transport.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::LanguageTooLong { .. }
                | Error::RecordTooLarge { .. }
                | Error::ContentUnavailable
                | Error::InvalidConfig(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
