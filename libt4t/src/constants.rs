// libt4t-rs/libt4t/src/constants.rs
//! Protocol constants for the NFC Forum Type 4 Tag command flow (Mapping
//! Version 2.0). All command patterns are matched bit-exact.

/// SELECT by name header: CLA=0x00 INS=0xA4 P1=0x04 P2=0x00
pub const SELECT_BY_NAME_HEADER: [u8; 4] = [0x00, 0xA4, 0x04, 0x00];

/// SELECT Capability Container file (file id 0xE103)
pub const SELECT_CC_FILE: [u8; 7] = [0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x03];

/// ReadBinary of the 15 byte Capability Container
pub const READ_CC_FILE: [u8; 5] = [0x00, 0xB0, 0x00, 0x00, 0x0F];

/// SELECT NDEF file (file id 0xE104)
pub const SELECT_NDEF_FILE: [u8; 7] = [0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x04];

/// ReadBinary of the 2 byte NLEN field at offset 0
pub const READ_NLEN: [u8; 5] = [0x00, 0xB0, 0x00, 0x00, 0x02];

/// Generic ReadBinary CLA/INS prefix
pub const READ_BINARY_PREFIX: [u8; 2] = [0x00, 0xB0];

/// Minimal ReadBinary length: CLA INS P1 P2 Le
pub const READ_BINARY_MIN_LEN: usize = 5;

/// Status word: command completed
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

/// Status word: referenced data / file not found
pub const SW_FILE_NOT_FOUND: [u8; 2] = [0x6A, 0x82];

/// File identifier of the Capability Container file
pub const CC_FILE_ID: u16 = 0xE103;

/// File identifier of the NDEF file
pub const NDEF_FILE_ID: u16 = 0xE104;

/// Record identifier attached to the emulated text record
pub const NDEF_RECORD_ID: [u8; 2] = [0xE1, 0x04];

/// CCLEN: size of the Capability Container file
pub const CC_LEN: u16 = 0x000F;

/// Mapping version 2.0
pub const MAPPING_VERSION: u8 = 0x20;

/// NDEF File Control TLV tag
pub const NDEF_FILE_CONTROL_TAG: u8 = 0x04;

/// NDEF File Control TLV value length
pub const NDEF_FILE_CONTROL_LEN: u8 = 0x06;

/// Smallest MLe a Type 4 Tag may advertise
pub const MIN_MLE: u16 = 0x000F;

/// Largest NDEF file size expressible in a 2 byte NLEN (0xFFFF is RFU)
pub const MAX_NDEF_FILE_SIZE: u16 = 0xFFFE;

/// Read access condition: granted without any security
pub const ACCESS_GRANTED: u8 = 0x00;

/// Write access condition: no write access
pub const ACCESS_DENIED: u8 = 0xFF;

/// Language codes are carried in the low 6 bits of the Text status byte
pub const MAX_LANGUAGE_LEN: usize = 0x3F;

/// Language tag used when the configuration does not override it
pub const DEFAULT_LANGUAGE: &str = "en";
