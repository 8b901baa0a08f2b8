#![no_main]

use chunkwire::{Accumulator, MessageIds, SplitConfig, Splitter, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u64, Vec<u8>)| {
    let (size, seed, data) = input;

    // Small chunk sizes keep the chunk count interesting
    let config = SplitConfig::default().with_chunk_size(10 + size as usize);
    let ids = MessageIds::new();
    let chunks = Splitter::with_message_ids(config, &ids)
        .split(data.clone())
        .unwrap();

    if data.is_empty() {
        assert!(chunks.is_empty());
        return;
    }

    // Verify: every chunk fits the configured size
    let mut wire: Vec<_> = chunks.iter().map(encode).collect();
    assert!(wire.iter().all(|w| w.len() <= config.chunk_size()));

    // Deterministic shuffle driven by the seed
    let mut state = seed | 1;
    for i in (1..wire.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        wire.swap(i, (state % (i as u64 + 1)) as usize);
    }

    // Duplicate one chunk
    let dup = wire[(seed as usize) % wire.len()].clone();
    wire.push(dup);

    let mut acc = Accumulator::new();
    for buf in wire {
        acc.add_chunk(decode(buf).unwrap()).unwrap();
    }

    assert!(acc.has_all_chunks());
    assert_eq!(acc.content().unwrap().as_bytes(), &data[..]);
});
