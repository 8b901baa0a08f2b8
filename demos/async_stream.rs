//! Async file transfer example.
//!
//! Reads a file into a blob, streams its chunks in a scrambled order and
//! reassembles them without blocking the executor.
//!
//! Run with:
//!     cargo run --example async_stream

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use chunkwire::{Accumulator, SplitConfig, Splitter, decode, encode, read_blob};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("chunkwire_demo.bin");
    let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();
    tokio::fs::write(&path, &data).await?;

    let file = tokio::fs::File::open(&path).await?;
    let blob = read_blob(file.compat()).await?;
    println!("Read {} bytes ({})\n", blob.len(), blob.media_type());

    let config = SplitConfig::new(4 * 1024)?.with_yield_interval(8);
    let mut stream = Splitter::new(config).split_stream(blob)?;
    println!(
        "Message {} split into {} chunks",
        stream.message_id(),
        stream.chunk_count()
    );

    let mut wire = Vec::with_capacity(stream.chunk_count());
    while let Some(chunk) = stream.next().await {
        wire.push(encode(&chunk));
    }

    // Deliver odd serials first, then even ones
    let (odd, even): (Vec<_>, Vec<_>) = wire.into_iter().enumerate().partition(|(i, _)| i % 2 == 1);

    let mut acc = Accumulator::new();
    for (_, buf) in odd.into_iter().chain(even) {
        acc.add_chunk(decode(buf)?)?;
        if !acc.has_all_chunks() {
            continue;
        }
        let payload = acc.content_async().await?;
        println!(
            "Reassembled {} bytes, identical: {}",
            payload.len(),
            payload.as_bytes() == &data[..]
        );
    }

    tokio::fs::remove_file(&path).await?;
    Ok(())
}
