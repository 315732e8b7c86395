#[path = "../common/mod.rs"]
mod common;

use libt4t::protocol::{CommandKind, classify};

#[test]
fn flow_frames_classify_in_order() {
    let mut guard = false;
    let expected = [
        (common::fixtures::select_app_frame(), CommandKind::SelectApplication),
        (
            common::fixtures::select_cc_frame(),
            CommandKind::SelectCapabilityContainer,
        ),
        (
            common::fixtures::read_cc_frame(),
            CommandKind::ReadCapabilityContainer,
        ),
        (common::fixtures::select_ndef_frame(), CommandKind::SelectNdefFile),
        (common::fixtures::read_nlen_frame(), CommandKind::ReadBinaryNlen),
        (
            common::fixtures::read_cc_frame(),
            CommandKind::ReadBinaryData {
                offset: 0,
                length: 15,
            },
        ),
    ];

    for (frame, kind) in expected {
        assert_eq!(classify(&frame, &mut guard), kind, "frame {:02X?}", frame);
    }
    assert!(guard);
}

#[test]
fn select_application_accepts_any_aid() {
    for aid in ["A0000000031010", "F0010203040506", ""] {
        let mut guard = false;
        let frame = common::fixtures::frame(&format!("00A40400{}", aid));
        assert_eq!(classify(&frame, &mut guard), CommandKind::SelectApplication);
    }
}

#[test]
fn repeated_cc_read_never_reenters() {
    let mut guard = false;
    let frame = common::fixtures::read_cc_frame();
    assert_eq!(
        classify(&frame, &mut guard),
        CommandKind::ReadCapabilityContainer
    );
    for _ in 0..3 {
        assert_ne!(
            classify(&frame, &mut guard),
            CommandKind::ReadCapabilityContainer
        );
    }
}
