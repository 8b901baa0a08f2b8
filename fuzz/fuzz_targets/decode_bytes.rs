#![no_main]

use bytes::Bytes;
use chunkwire::{Accumulator, ChunkError, HEADER_SIZE, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let wire = Bytes::from(data);

    let chunk = match decode(wire.clone()) {
        Ok(chunk) => chunk,
        Err(ChunkError::MalformedHeader { len }) => {
            assert!(len < HEADER_SIZE);
            return;
        }
        Err(e) => panic!("unexpected decode error: {e}"),
    };

    // Verify: payload is everything after the header
    assert_eq!(chunk.len(), wire.len() - HEADER_SIZE);

    // Verify: re-encoding is lossless except for reserved option bits
    let encoded = encode(&chunk);
    assert_eq!(encoded.len(), wire.len());
    assert_eq!(&encoded[1..], &wire[1..]);
    assert_eq!(encoded[0], wire[0] & 0b11001);

    // Verify: a lone arbitrary chunk never panics the accumulator
    let mut acc = Accumulator::new();
    if acc.add_chunk(chunk).is_ok() {
        let _ = acc.content();
    }
});
