// libt4t-rs/libt4t/src/types.rs

use derive_more::Display;

use crate::constants::{CC_FILE_ID, NDEF_FILE_ID, SW_FILE_NOT_FOUND, SW_SUCCESS};

/// StatusWord - SW1/SW2 trailer of every response APDU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusWord {
    /// Command completed
    #[display(fmt = "90 00 (success)")]
    Success,
    /// Referenced data or file not found
    #[display(fmt = "6A 82 (file not found)")]
    Error,
}

impl StatusWord {
    /// SW1 SW2.
    pub fn to_bytes(self) -> [u8; 2] {
        match self {
            Self::Success => SW_SUCCESS,
            Self::Error => SW_FILE_NOT_FOUND,
        }
    }

    /// SW1 SW2 as one big-endian value.
    pub fn as_u16(self) -> u16 {
        u16::from_be_bytes(self.to_bytes())
    }

    /// Inverse of `as_u16` for the two words this crate emits.
    pub fn from_u16(sw: u16) -> Option<Self> {
        match sw {
            0x9000 => Some(Self::Success),
            0x6A82 => Some(Self::Error),
            _ => None,
        }
    }

    /// Extract the trailing status word of a response APDU, if it is one
    /// this crate emits.
    pub fn of_response(response: &[u8]) -> Option<Self> {
        match response {
            [.., sw1, sw2] => Self::from_u16(u16::from_be_bytes([*sw1, *sw2])),
            _ => None,
        }
    }
}

/// FileId (u16) of an elementary file on the emulated tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04X}", _0)]
pub struct FileId(u16);

impl FileId {
    /// E103
    pub const CAPABILITY_CONTAINER: Self = Self(CC_FILE_ID);
    /// E104
    pub const NDEF: Self = Self(NDEF_FILE_ID);

    /// Wrap a raw file identifier.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw identifier.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Identifier as sent in SELECT and the CC TLV.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Why the platform deactivated the emulated tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeactivationReason {
    /// RF field lost or the reader moved away
    #[display(fmt = "link loss")]
    LinkLoss,
    /// Reader selected a different application
    #[display(fmt = "deselected")]
    Deselected,
}

impl DeactivationReason {
    /// Map the platform's numeric reason code (0 = link loss, 1 = deselected).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::LinkLoss),
            1 => Some(Self::Deselected),
            _ => None,
        }
    }
}
