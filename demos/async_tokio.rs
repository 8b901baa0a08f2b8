//! Several concurrent messages over one simulated data channel.
//!
//! Each sender task splits its own message; chunks of all messages are
//! interleaved on one channel. The receiver keeps one accumulator per
//! message id.
//!
//! Run with:
//!     cargo run --example async_tokio

use std::collections::HashMap;

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::sync::mpsc;

use chunkwire::{Accumulator, SplitConfig, Splitter, decode, encode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let messages: Vec<Vec<u8>> = vec![
        (0..50_000).map(|i| (i % 256) as u8).collect(),
        (50_000..100_000).map(|i| (i % 256) as u8).collect(),
        (100_000..150_000).map(|i| (i % 256) as u8).collect(),
    ];

    println!("Sending {} messages concurrently...\n", messages.len());

    let (tx, mut rx) = mpsc::unbounded_channel::<Bytes>();
    let config = SplitConfig::new(1200)?;

    let senders: Vec<_> = messages
        .into_iter()
        .map(|data| {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut stream = Splitter::new(config).split_stream(data)?;
                let message_id = stream.message_id();
                while let Some(chunk) = stream.next().await {
                    if tx.send(encode(&chunk)).is_err() {
                        break;
                    }
                }
                Ok::<_, chunkwire::ChunkError>(message_id)
            })
        })
        .collect();
    drop(tx);

    for sender in senders {
        let message_id = sender.await??;
        println!("Message {message_id} sent");
    }

    let mut inflight: HashMap<u32, Accumulator> = HashMap::new();
    while let Some(buf) = rx.recv().await {
        let chunk = decode(buf)?;
        let message_id = chunk.message_id();

        let acc = inflight.entry(message_id).or_default();
        acc.add_chunk(chunk)?;

        if acc.has_all_chunks() {
            if let Some(acc) = inflight.remove(&message_id) {
                let payload = acc.content_async().await?;
                println!(
                    "Message {}: {} chunks, {} bytes",
                    message_id,
                    acc.received_count(),
                    payload.len()
                );
            }
        }
    }

    Ok(())
}
