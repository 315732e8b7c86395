#[path = "../common/mod.rs"]
mod common;

use libt4t::transport::{MockTransport, Transport, TransportEvent};
use libt4t::{DeactivationReason, Error};

#[test]
fn seeded_mock_replays_frames_then_closes() {
    let frames = common::helpers::read_flow(0x0F);
    let mut mock = common::helpers::mock_with_commands(frames.clone());

    for f in frames {
        assert_eq!(mock.receive().unwrap(), TransportEvent::Command(f));
    }
    assert!(matches!(mock.receive(), Err(Error::ConnectionClosed)));
}

#[test]
fn send_failures_are_consumed_once_each() {
    let mut mock = MockTransport::new();
    mock.set_send_failures(2);
    assert!(mock.send(&[0x90, 0x00]).is_err());
    assert!(mock.send(&[0x90, 0x00]).is_err());
    assert!(mock.send(&[0x6A, 0x82]).is_ok());
    assert_eq!(mock.sent, vec![vec![0x6A, 0x82]]);
}

#[test]
fn deactivation_events_keep_their_reason() {
    let mut mock = MockTransport::new();
    mock.push_deactivation(DeactivationReason::from_code(1).unwrap());
    assert_eq!(
        mock.receive().unwrap(),
        TransportEvent::Deactivated(DeactivationReason::Deselected)
    );
}
