// fixtures.rs — provides commonly used frames and encoded records

use libt4t::constants::NDEF_RECORD_ID;
use libt4t::ndef::NdefTextRecord;

pub fn frame(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).expect("fixture hex")
}

/// SELECT by name with the NDEF Tag Application AID, no Le
pub fn select_app_frame() -> Vec<u8> {
    frame("00 A4 04 00 07 D2 76 00 00 85 01 01")
}

pub fn select_cc_frame() -> Vec<u8> {
    frame("00 A4 00 0C 02 E1 03")
}

pub fn read_cc_frame() -> Vec<u8> {
    frame("00 B0 00 00 0F")
}

pub fn select_ndef_frame() -> Vec<u8> {
    frame("00 A4 00 0C 02 E1 04")
}

pub fn read_nlen_frame() -> Vec<u8> {
    frame("00 B0 00 00 02")
}

pub fn ok() -> Vec<u8> {
    vec![0x90, 0x00]
}

pub fn file_not_found() -> Vec<u8> {
    vec![0x6A, 0x82]
}

/// Capability Container body of the default configuration
pub fn default_cc_body() -> Vec<u8> {
    frame("00 0F 20 FF FF FF FF 04 06 E1 04 FF FE 00 FF")
}

/// "TAG-42" in English as a text record with id E104
pub fn tag_42_record_bytes() -> Vec<u8> {
    frame("D9 01 09 02 54 E1 04 02 65 6E 54 41 47 2D 34 32")
}

pub fn sample_record(text: &str) -> NdefTextRecord {
    NdefTextRecord::encode("en", text, NDEF_RECORD_ID).expect("sample record")
}
