//! Basic synchronous split / reassemble example.
//!
//! Run with:
//!     cargo run --example sync_basic

use chunkwire::{Accumulator, SplitConfig, Splitter, decode, encode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Chunks may arrive in any order, and some of them twice. 👻";

    // Small chunk size so the message spans several chunks
    let splitter = Splitter::new(SplitConfig::new(24)?);
    let chunks = splitter.split(text)?;

    println!("Split {} bytes into {} chunks\n", text.len(), chunks.len());

    // Encode for the wire
    let mut wire: Vec<_> = chunks.iter().map(encode).collect();

    // Simulate an unordered transport that duplicates the first chunk
    wire.reverse();
    wire.push(wire[wire.len() - 1].clone());

    let mut acc = Accumulator::new();
    for buf in wire {
        let chunk = decode(buf)?;
        println!("Received {chunk}");
        acc.add_chunk(chunk)?;
    }

    println!(
        "\nComplete: {} ({} of {:?} chunks)",
        acc.has_all_chunks(),
        acc.received_count(),
        acc.expected_count()
    );

    let payload = acc.content()?;
    println!("Reassembled {}: {:?}", payload.content_type(), payload.as_text());

    Ok(())
}
