// libt4t-rs/libt4t/src/config.rs
//! Deployment configuration of the emulated tag.

use crate::constants::{
    ACCESS_DENIED, ACCESS_GRANTED, DEFAULT_LANGUAGE, MAX_NDEF_FILE_SIZE, MIN_MLE,
};
use crate::ndef::text::validate_language;
use crate::{Error, Result};

/// Shown after the reader received the whole NDEF file.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Your NFC ID Tag has been communicated successfully to charger!";
/// Shown when a read fails, typically for lack of content.
pub const DEFAULT_ERROR_MESSAGE: &str =
    "No NFC ID Tag has been configured for you. Please contact support";

/// Capability Container parameters plus the language tag of the text record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagConfig {
    /// Language tag of the text record (ASCII, at most 63 bytes)
    pub language: String,
    /// Maximum R-APDU data size
    pub mle: u16,
    /// Maximum C-APDU data size
    pub mlc: u16,
    /// Advertised NDEF file size limit, enforced on every read
    pub max_ndef_size: u16,
    /// CC read access condition
    pub read_access: u8,
    /// CC write access condition
    pub write_access: u8,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            mle: 0xFFFF,
            mlc: 0xFFFF,
            max_ndef_size: MAX_NDEF_FILE_SIZE,
            read_access: ACCESS_GRANTED,
            write_access: ACCESS_DENIED,
        }
    }
}

impl TagConfig {
    /// Override the record language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set MLe and MLc.
    pub fn with_max_apdu_sizes(mut self, mle: u16, mlc: u16) -> Self {
        self.mle = mle;
        self.mlc = mlc;
        self
    }

    /// Set the max NDEF file size advertised in the CC.
    pub fn with_max_ndef_size(mut self, size: u16) -> Self {
        self.max_ndef_size = size;
        self
    }

    /// Set the read and write access bytes of the NDEF File Control TLV.
    pub fn with_access(mut self, read: u8, write: u8) -> Self {
        self.read_access = read;
        self.write_access = write;
        self
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<()> {
        validate_language(&self.language)?;
        if self.mle < MIN_MLE {
            return Err(Error::InvalidConfig(format!(
                "MLe {:#06x} below minimum {:#06x}",
                self.mle, MIN_MLE
            )));
        }
        if self.max_ndef_size < 2 || self.max_ndef_size > MAX_NDEF_FILE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "max NDEF file size {:#06x} out of range",
                self.max_ndef_size
            )));
        }
        Ok(())
    }
}

/// User-facing notification texts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Messages {
    /// Text for a completed read
    pub success: String,
    /// Text for a failed read
    pub error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_MESSAGE.to_string(),
            error: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}
