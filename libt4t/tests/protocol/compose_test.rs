#[path = "../common/mod.rs"]
mod common;

use libt4t::protocol::{compose_data, compose_error, compose_nlen};
use libt4t::StatusWord;

#[test]
fn nlen_prefix_matches_record_length() {
    for text in ["", "A", "TAG-42", "a longer identifier with spaces"] {
        let rec = common::fixtures::sample_record(text);
        let r = compose_nlen(&rec);
        assert_eq!(r.len(), 4);
        assert_eq!(
            u16::from_be_bytes([r[0], r[1]]) as usize,
            rec.as_bytes().len()
        );
        assert_eq!(StatusWord::of_response(&r), Some(StatusWord::Success));
    }
}

#[test]
fn data_read_in_chunks_reassembles_file() {
    let rec = common::fixtures::sample_record("chunked read of a somewhat longer text");
    let image = rec.file_image();
    let mut guard = true;
    let mut offset = 0u16;
    let mut collected = Vec::new();
    loop {
        let r = compose_data(&rec, offset, 8, &mut guard, || {});
        let data = &r[..r.len() - 2];
        if data.is_empty() {
            break;
        }
        assert!(data.len() <= 8);
        collected.extend_from_slice(data);
        offset += data.len() as u16;
    }
    assert_eq!(collected, image);
}

#[test]
fn requested_length_below_available_is_exact() {
    let rec = common::fixtures::sample_record("TAG-42");
    let mut guard = true;
    for le in 0u8..18 {
        let r = compose_data(&rec, 0, le, &mut guard, || {});
        assert_eq!(r.len(), le as usize + 2);
    }
}

#[test]
fn error_response_is_status_only() {
    assert_eq!(compose_error(), common::fixtures::file_not_found());
}
