// libt4t-rs/libt4t/src/protocol/capability.rs

use crate::config::TagConfig;
use crate::constants::{CC_LEN, MAPPING_VERSION, NDEF_FILE_CONTROL_LEN, NDEF_FILE_CONTROL_TAG};
use crate::types::{FileId, StatusWord};

/// Capability Container file of a Type 4 Tag (15 bytes)
///
/// Layout: CCLEN(2) | version(1) | MLe(2) | MLc(2) | NDEF File Control TLV(8)
/// TLV: T=0x04 L=0x06 | file id(2) | max NDEF size(2) | read access | write access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityContainer {
    bytes: [u8; 15],
}

impl CapabilityContainer {
    /// Build the container from explicit field values.
    pub fn new(mle: u16, mlc: u16, max_ndef_size: u16, read_access: u8, write_access: u8) -> Self {
        let mut bytes = [0u8; 15];
        bytes[0..2].copy_from_slice(&CC_LEN.to_be_bytes());
        bytes[2] = MAPPING_VERSION;
        bytes[3..5].copy_from_slice(&mle.to_be_bytes());
        bytes[5..7].copy_from_slice(&mlc.to_be_bytes());
        bytes[7] = NDEF_FILE_CONTROL_TAG;
        bytes[8] = NDEF_FILE_CONTROL_LEN;
        bytes[9..11].copy_from_slice(&FileId::NDEF.to_be_bytes());
        bytes[11..13].copy_from_slice(&max_ndef_size.to_be_bytes());
        bytes[13] = read_access;
        bytes[14] = write_access;
        Self { bytes }
    }

    /// Fields taken from `config`.
    pub fn from_config(config: &TagConfig) -> Self {
        Self::new(
            config.mle,
            config.mlc,
            config.max_ndef_size,
            config.read_access,
            config.write_access,
        )
    }

    /// Raw 15 byte body.
    pub fn as_bytes(&self) -> &[u8; 15] {
        &self.bytes
    }

    /// Max NDEF file size field.
    pub fn max_ndef_size(&self) -> u16 {
        u16::from_be_bytes([self.bytes[11], self.bytes[12]])
    }

    /// CC body followed by `90 00`.
    pub fn response(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 2);
        out.extend_from_slice(&self.bytes);
        out.extend_from_slice(&StatusWord::Success.to_bytes());
        out
    }
}

impl Default for CapabilityContainer {
    fn default() -> Self {
        Self::from_config(&TagConfig::default())
    }
}
