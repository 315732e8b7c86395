#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libt4t::service::HceService;
use libt4t::store::MemoryStore;
use libt4t::transport::ChannelTransport;
use libt4t::DeactivationReason;

#[tokio::test]
async fn async_service_answers_reader_over_channel() {
    let store = MemoryStore::new();
    store.set_card_content("TAG-42").unwrap();
    let mut svc = HceService::builder().with_content(store).build().unwrap();

    let (mut tag, mut reader) = ChannelTransport::pair(8);
    let tag_task = tokio::spawn(async move { svc.run_async(&mut tag).await });

    let mut responses = Vec::new();
    for frame in common::helpers::read_flow(0x0F) {
        responses.push(reader.transceive(frame).await.unwrap());
    }
    reader.deactivate(DeactivationReason::Deselected).await.unwrap();
    drop(reader);

    assert_eq!(responses[0], fixtures::ok());
    assert_eq!(&responses[2][..15], fixtures::default_cc_body().as_slice());
    assert_eq!(responses[4], vec![0x00, 0x10, 0x90, 0x00]);
    assert_eq!(&responses[5][..2], &[0x00, 0x10]);
    assert_eq!(&responses[5][2..15], &fixtures::tag_42_record_bytes()[..13]);

    let answered = tag_task.await.unwrap().unwrap();
    assert_eq!(answered, 6);
}
