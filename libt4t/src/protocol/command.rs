// libt4t-rs/libt4t/src/protocol/command.rs

use derive_more::Display;

use crate::constants::{
    READ_BINARY_MIN_LEN, READ_BINARY_PREFIX, READ_CC_FILE, READ_NLEN, SELECT_BY_NAME_HEADER,
    SELECT_CC_FILE, SELECT_NDEF_FILE,
};
use crate::utils::bytes::{be_u16_at, equals, starts_with};

/// Structural classification of an inbound command APDU.
///
/// Classification does not track where the session is in the command flow;
/// an out-of-sequence command is still recognised by its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CommandKind {
    /// SELECT by name, any AID
    #[display(fmt = "SELECT application")]
    SelectApplication,
    /// SELECT of file E103
    #[display(fmt = "SELECT capability container")]
    SelectCapabilityContainer,
    /// First ReadBinary of the 15 CC bytes
    #[display(fmt = "READ capability container")]
    ReadCapabilityContainer,
    /// SELECT of file E104
    #[display(fmt = "SELECT ndef file")]
    SelectNdefFile,
    /// ReadBinary of the 2 NLEN bytes
    #[display(fmt = "READ BINARY nlen")]
    ReadBinaryNlen,
    /// Any other ReadBinary
    #[display(fmt = "READ BINARY data (offset={}, length={})", offset, length)]
    ReadBinaryData {
        /// P1P2, big-endian
        offset: u16,
        /// Le
        length: u8,
    },
    /// Anything else; answered with `6A 82`
    #[display(fmt = "unknown")]
    Unknown,
}

impl CommandKind {
    /// Commands whose response carries NDEF file content.
    pub fn reads_ndef(&self) -> bool {
        matches!(self, Self::ReadBinaryNlen | Self::ReadBinaryData { .. })
    }
}

/// Classify `frame`, first match wins.
///
/// The order is part of the protocol: the CC read and NLEN read are both
/// ReadBinary frames and must be tested before the generic ReadBinary
/// prefix. A CC read is only recognised while `guard` is false; recognising
/// it sets `guard`. With the guard set, the same bytes fall through to
/// `ReadBinaryData`.
pub fn classify(frame: &[u8], guard: &mut bool) -> CommandKind {
    if starts_with(frame, &SELECT_BY_NAME_HEADER) {
        return CommandKind::SelectApplication;
    }

    if equals(frame, &SELECT_CC_FILE) {
        return CommandKind::SelectCapabilityContainer;
    }

    if equals(frame, &READ_CC_FILE) && !*guard {
        *guard = true;
        return CommandKind::ReadCapabilityContainer;
    }

    if equals(frame, &SELECT_NDEF_FILE) {
        return CommandKind::SelectNdefFile;
    }

    if equals(frame, &READ_NLEN) {
        return CommandKind::ReadBinaryNlen;
    }

    if starts_with(frame, &READ_BINARY_PREFIX) && frame.len() >= READ_BINARY_MIN_LEN {
        // P1P2 carry the offset, the byte after them is Le
        if let Some(offset) = be_u16_at(frame, 2) {
            return CommandKind::ReadBinaryData {
                offset,
                length: frame[4],
            };
        }
    }

    CommandKind::Unknown
}
