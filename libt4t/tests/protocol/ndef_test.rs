#[path = "../common/mod.rs"]
mod common;

use libt4t::constants::NDEF_RECORD_ID;
use libt4t::ndef::{NdefRecord, NdefTextRecord, Tnf};

#[test]
fn tag_42_record_matches_fixture() {
    let rec = common::fixtures::sample_record("TAG-42");
    assert_eq!(rec.as_bytes(), &common::fixtures::tag_42_record_bytes()[..]);
    assert_eq!(rec.nlen(), [0x00, 0x10]);
    assert_eq!(rec.id(), NDEF_RECORD_ID);
}

#[test]
fn abc123_round_trip() {
    let rec = NdefTextRecord::encode("en", "ABC123", NDEF_RECORD_ID).unwrap();
    let (language, text) = NdefTextRecord::decode(rec.as_bytes()).unwrap();
    assert_eq!(language, "en");
    assert_eq!(text, "ABC123");
}

#[test]
fn multibyte_text_round_trip() {
    let rec = NdefTextRecord::encode("ja", "充電ステーション", NDEF_RECORD_ID).unwrap();
    let (language, text) = NdefTextRecord::decode(rec.as_bytes()).unwrap();
    assert_eq!(language, "ja");
    assert_eq!(text, "充電ステーション");
}

#[test]
fn generic_record_parse_exposes_fields() {
    let bytes = common::fixtures::tag_42_record_bytes();
    let record = NdefRecord::parse(&bytes).unwrap();
    assert_eq!(record.tnf, Tnf::WellKnown);
    assert_eq!(record.record_type, b"T");
    assert_eq!(record.id, vec![0xE1, 0x04]);
    assert_eq!(record.payload[0], 0x02);
}
