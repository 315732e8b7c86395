#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libt4t::config::TagConfig;
use libt4t::session::{Session, SessionPhase};
use libt4t::store::RecordingNotifier;

#[test]
fn tag_42_end_to_end() {
    common::init_logging();
    let mut session = Session::new(TagConfig::default()).unwrap();
    let mut notes = RecordingNotifier::new();
    let content = "TAG-42";

    let mut cc_response = fixtures::default_cc_body();
    cc_response.extend_from_slice(&fixtures::ok());

    let mut image = vec![0x00, 0x10];
    image.extend_from_slice(&fixtures::tag_42_record_bytes());
    let mut data_response = image[..15].to_vec();
    data_response.extend_from_slice(&fixtures::ok());

    let script = [
        (fixtures::select_app_frame(), fixtures::ok()),
        (fixtures::select_cc_frame(), fixtures::ok()),
        (fixtures::read_cc_frame(), cc_response),
        (fixtures::select_ndef_frame(), fixtures::ok()),
        (fixtures::read_nlen_frame(), vec![0x00, 0x10, 0x90, 0x00]),
        (fixtures::read_cc_frame(), data_response),
    ];

    for (frame, expected) in script {
        let response = session.process(&frame, &content, &mut notes);
        assert_eq!(response, expected, "frame {:02X?}", frame);
    }

    assert!(!session.state().read_capability_container_pending);
    assert_eq!(session.phase(), SessionPhase::DataRead);
    assert_eq!(notes.successes, 1);
    assert!(notes.errors.is_empty());
}

#[test]
fn empty_store_fails_cc_read_and_notifies() {
    let (mut svc, _store, notes) = common::helpers::service_with_content(None).unwrap();

    let responses: Vec<Vec<u8>> = common::helpers::read_flow(0x0F)
        .iter()
        .map(|f| svc.handle_frame(f))
        .collect();

    assert_eq!(responses[0], fixtures::ok());
    assert_eq!(responses[1], fixtures::ok());
    assert_eq!(responses[2], fixtures::file_not_found());
    assert_eq!(responses[3], fixtures::ok());
    assert_eq!(responses[4], fixtures::file_not_found());
    assert_eq!(responses[5], fixtures::file_not_found());

    let notes = notes.lock().unwrap();
    assert_eq!(notes.errors.len(), 3);
    assert_eq!(notes.successes, 0);
}

#[test]
fn second_tap_after_full_read_serves_cc_again() {
    let (mut svc, _store, notes) = common::helpers::service_with_content(Some("TAG-42")).unwrap();

    for _ in 0..2 {
        let responses: Vec<Vec<u8>> = common::helpers::read_flow(0xFF)
            .iter()
            .map(|f| svc.handle_frame(f))
            .collect();
        assert_eq!(responses[2].len(), 17);
        assert_eq!(&responses[2][..2], &[0x00, 0x0F]);
        assert_eq!(responses[5].len(), 18 + 2);
    }

    assert_eq!(notes.lock().unwrap().successes, 2);
}

#[test]
fn out_of_sequence_commands_are_still_answered() {
    let (mut svc, _store, _notes) = common::helpers::service_with_content(Some("abc")).unwrap();

    // NLEN before any select
    assert_eq!(svc.handle_frame(&fixtures::read_nlen_frame()), vec![0x00, 0x0D, 0x90, 0x00]);
    // data read at an offset before any CC read
    let r = svc.handle_frame(&common::helpers::read_binary(2, 4));
    assert_eq!(r.len(), 6);
    assert_eq!(&r[4..], &[0x90, 0x00]);
}
