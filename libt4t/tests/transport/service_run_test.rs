#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};

use common::fixtures;
use libt4t::service::HceService;
use libt4t::store::{MemoryStore, RecordingNotifier};
use libt4t::{DeactivationReason, Error};

#[test]
fn run_pumps_full_read_flow() {
    common::init_logging();
    let store = MemoryStore::new();
    store.set_card_content("TAG-42").unwrap();
    let notes = Arc::new(Mutex::new(RecordingNotifier::new()));

    let mock = common::helpers::mock_with_commands(common::helpers::read_flow(0xFF));
    let mut svc = HceService::builder()
        .with_content(store)
        .with_notifier(notes.clone())
        .with_transport(Box::new(mock))
        .build()
        .unwrap();

    assert_eq!(svc.run().unwrap(), 6);
    assert_eq!(notes.lock().unwrap().successes, 1);
    assert!(!svc.session().state().read_capability_container_pending);
}

#[test]
fn deactivation_mid_flow_restarts_cc_handling() {
    let store = MemoryStore::new();
    store.set_card_content("TAG-42").unwrap();

    let mut mock = libt4t::transport::MockTransport::new();
    mock.push_command(fixtures::read_cc_frame());
    mock.push_deactivation(DeactivationReason::LinkLoss);
    mock.push_command(fixtures::read_cc_frame());

    let mut svc = HceService::builder()
        .with_content(store)
        .with_transport(Box::new(mock))
        .build()
        .unwrap();

    assert_eq!(svc.run().unwrap(), 2);
    // both reads answered as CC reads, so the guard is still pending
    assert!(svc.session().state().read_capability_container_pending);
}

#[test]
fn run_reports_missing_transport() {
    let (mut svc, _store, _notes) = common::helpers::service_with_content(Some("x")).unwrap();
    assert!(matches!(svc.run(), Err(Error::TransportMissing)));
}
