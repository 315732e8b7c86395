#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libt4t::ndef::NdefTextRecord;

#[test]
fn content_change_between_taps_is_picked_up() {
    let (mut svc, store, _notes) = common::helpers::service_with_content(Some("first")).unwrap();

    svc.handle_frame(&fixtures::read_cc_frame());
    assert_eq!(svc.session().cached_record().unwrap().text(), "first");

    store.set_card_content("second value").unwrap();
    let r = svc.handle_frame(&fixtures::read_nlen_frame());
    let expected = NdefTextRecord::encode("en", "second value", [0xE1, 0x04]).unwrap();
    assert_eq!(&r[..2], &expected.nlen());
    assert_eq!(svc.session().cached_record().unwrap().text(), "second value");
}

#[test]
fn cleared_content_turns_reads_into_errors() {
    let (mut svc, store, notes) = common::helpers::service_with_content(Some("abc")).unwrap();
    assert_eq!(svc.handle_frame(&fixtures::read_nlen_frame()).len(), 4);

    store.clear_card_content();
    assert_eq!(
        svc.handle_frame(&fixtures::read_nlen_frame()),
        fixtures::file_not_found()
    );
    assert_eq!(notes.lock().unwrap().errors.len(), 1);
}

#[test]
fn configured_language_is_used() {
    use libt4t::config::TagConfig;
    use libt4t::service::HceService;

    let mut svc = HceService::builder()
        .with_config(TagConfig::default().with_language("de"))
        .with_content("Hallo")
        .build()
        .unwrap();

    let r = svc.handle_frame(&common::helpers::read_binary(0, 0xFF));
    let image = &r[..r.len() - 2];
    let (language, text) = NdefTextRecord::decode(&image[2..]).unwrap();
    assert_eq!(language, "de");
    assert_eq!(text, "Hallo");
}

#[test]
fn store_and_session_share_the_file_size_limit() {
    use libt4t::config::TagConfig;
    use libt4t::Error;

    let cfg = TagConfig::default().with_max_ndef_size(0x0020);
    let (mut svc, store, notes) =
        common::helpers::service_with_config(cfg, Some("TAG-42")).unwrap();

    let cc = svc.handle_frame(&fixtures::read_cc_frame());
    assert_eq!(&cc[11..13], &[0x00, 0x20]);

    assert!(matches!(
        store.set_card_content(&"x".repeat(100)),
        Err(Error::RecordTooLarge { max: 0x20, .. })
    ));
    assert_eq!(
        svc.handle_frame(&fixtures::read_nlen_frame()),
        vec![0x00, 0x10, 0x90, 0x00]
    );
    assert!(notes.lock().unwrap().errors.is_empty());
}

#[test]
fn oversized_custom_source_is_refused_at_read_time() {
    use libt4t::config::TagConfig;
    use libt4t::service::HceService;
    use libt4t::store::RecordingNotifier;
    use std::sync::{Arc, Mutex};

    let notes = Arc::new(Mutex::new(RecordingNotifier::new()));
    let mut svc = HceService::builder()
        .with_config(TagConfig::default().with_max_ndef_size(0x0020))
        .with_content("x".repeat(100))
        .with_notifier(notes.clone())
        .build()
        .unwrap();

    let responses: Vec<Vec<u8>> = common::helpers::read_flow(0xFF)
        .iter()
        .map(|f| svc.handle_frame(f))
        .collect();
    assert_eq!(responses[2], fixtures::file_not_found());
    assert_eq!(responses[4], fixtures::file_not_found());
    assert_eq!(responses[5], fixtures::file_not_found());

    let notes = notes.lock().unwrap();
    assert_eq!(notes.errors.len(), 3);
    assert_eq!(notes.successes, 0);
}
