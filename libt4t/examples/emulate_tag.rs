//! Replay a reader's NDEF read flow against an in-memory tag and print
//! each exchange.
//!
//! Usage: `cargo run --example emulate_tag -- "card text" [le]`

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use libt4t::prelude::*;
use libt4t::test_support::read_flow;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "TAG-42".to_string());
    let le = match args.next() {
        Some(s) => u8::from_str_radix(s.trim_start_matches("0x"), 16)
            .with_context(|| format!("invalid Le: {}", s))?,
        None => 0xFF,
    };

    let store = MemoryStore::new();
    store.set_card_content(&text)?;

    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = delivered.clone();
    let notifier = MessageNotifier::new(store.clone(), move |n: Notification| {
        if let Ok(mut v) = sink.lock() {
            v.push(n);
        }
    });

    let frames = read_flow(le);
    let mut service = HceService::builder()
        .with_content(store)
        .with_notifier(notifier)
        .build()?;

    let mut transport = MockTransport::new();
    for frame in &frames {
        transport.push_command(frame.clone());
    }

    while let Ok(TransportEvent::Command(frame)) = transport.receive() {
        let response = service.handle_frame(&frame);
        println!("C-APDU: {}", Hex(&frame));
        println!("R-APDU: {}", Hex(&response));
        transport.send(&response)?;
    }

    for n in delivered.lock().map_err(|_| anyhow::anyhow!("notifier poisoned"))?.iter() {
        println!("notification: {:?}", n);
    }
    Ok(())
}
