//! Chunk wire codec.
//!
//! Every chunk travels as a 9-byte big-endian header followed by its payload:
//!
//! ```text
//!  byte 0      options   bit 0 = end of message, bits 3-4 = content type
//!  bytes 1-4   message id    (u32, big-endian)
//!  bytes 5-8   serial number (u32, big-endian)
//!  bytes 9..   payload
//! ```
//!
//! - [`encode`] / [`encode_into`] - Chunk to wire bytes
//! - [`decode`] / [`decode_slice`] - Wire bytes to chunk

mod header;

use bytes::{Bytes, BytesMut};

use crate::chunk::Chunk;
use crate::error::ChunkError;

pub use header::{ChunkHeader, EOM_BIT, HEADER_SIZE};

/// Encodes a chunk into a freshly allocated wire buffer.
///
/// The result is exactly `HEADER_SIZE + chunk.len()` bytes long.
///
/// # Example
///
/// ```
/// use chunkwire::{codec, Chunk, ContentType};
///
/// let chunk = Chunk::new(ContentType::Text, 0, 4, true, &b"!"[..]);
/// let wire = codec::encode(&chunk);
/// assert_eq!(&wire[..], &[0x11, 0, 0, 0, 0, 0, 0, 0, 4, b'!']);
/// ```
pub fn encode(chunk: &Chunk) -> Bytes {
    let mut buf = BytesMut::with_capacity(HEADER_SIZE + chunk.len());
    encode_into(chunk, &mut buf);
    buf.freeze()
}

/// Appends the wire form of a chunk to `buf`.
pub fn encode_into(chunk: &Chunk, buf: &mut BytesMut) {
    buf.reserve(HEADER_SIZE + chunk.len());
    ChunkHeader::from_chunk(chunk).write_to(buf);
    buf.extend_from_slice(chunk.payload());
}

/// Decodes a wire buffer into a chunk.
///
/// The payload is a zero-copy slice of `buf`.
///
/// Returns [`ChunkError::MalformedHeader`] if `buf` is shorter than
/// [`HEADER_SIZE`].
pub fn decode(mut buf: Bytes) -> Result<Chunk, ChunkError> {
    if buf.len() < HEADER_SIZE {
        return Err(ChunkError::MalformedHeader { len: buf.len() });
    }
    let header = ChunkHeader::read_from(&mut buf);
    Ok(header.into_chunk(buf))
}

/// Decodes a borrowed wire buffer, copying it first.
pub fn decode_slice(buf: &[u8]) -> Result<Chunk, ChunkError> {
    decode(Bytes::copy_from_slice(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ContentType;

    #[test]
    fn test_encode_layout() {
        let chunk = Chunk::new(
            ContentType::Opaque,
            0x0102_0304,
            0x0A0B_0C0D,
            false,
            &b"xyz"[..],
        );
        let wire = encode(&chunk);

        assert_eq!(wire.len(), HEADER_SIZE + 3);
        assert_eq!(wire[0], 0b11000);
        assert_eq!(&wire[1..5], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&wire[5..9], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(&wire[9..], b"xyz");
    }

    #[test]
    fn test_encode_end_of_message_bit() {
        let chunk = Chunk::new(ContentType::Bytes, 0, 0, true, Bytes::new());
        assert_eq!(encode(&chunk)[0], 0b00001);
    }

    #[test]
    fn test_decode_preserves_fields() {
        let chunk = Chunk::new(ContentType::Buffer, u32::MAX, 77, true, vec![0u8, 255, 0]);
        let decoded = decode(encode(&chunk)).unwrap();
        assert_eq!(decoded, chunk);
    }

    #[test]
    fn test_decode_header_only() {
        let wire = Bytes::from_static(&[0b10001, 0, 0, 0, 9, 0, 0, 0, 0]);
        let chunk = decode(wire).unwrap();
        assert_eq!(chunk.content_type(), ContentType::Text);
        assert_eq!(chunk.message_id(), 9);
        assert!(chunk.is_end_of_message());
        assert!(chunk.is_empty());
    }

    #[test]
    fn test_decode_short_buffer() {
        for len in 0..HEADER_SIZE {
            let err = decode(Bytes::from(vec![0u8; len])).unwrap_err();
            assert!(matches!(err, ChunkError::MalformedHeader { len: l } if l == len));
        }
    }

    #[test]
    fn test_decode_slice() {
        assert!(matches!(
            decode_slice(&[0x10, 0, 0]),
            Err(ChunkError::MalformedHeader { len: 3 })
        ));

        let chunk = Chunk::new(ContentType::Text, 4, 2, false, &b"hi"[..]);
        let wire = encode(&chunk);
        assert_eq!(decode_slice(&wire).unwrap(), chunk);
    }

    #[test]
    fn test_decode_is_zero_copy() {
        let wire = Bytes::from(vec![0u8, 0, 0, 0, 1, 0, 0, 0, 2, 42, 43]);
        let start = wire.as_ptr() as usize;
        let chunk = decode(wire).unwrap();
        assert_eq!(chunk.payload().as_ptr() as usize, start + HEADER_SIZE);
    }

    #[test]
    fn test_encode_into_appends() {
        let a = Chunk::new(ContentType::Bytes, 1, 0, false, &b"a"[..]);
        let b = Chunk::new(ContentType::Bytes, 1, 1, true, &b"b"[..]);
        let mut buf = BytesMut::new();
        encode_into(&a, &mut buf);
        encode_into(&b, &mut buf);
        assert_eq!(buf.len(), 2 * (HEADER_SIZE + 1));
        assert_eq!(&buf[HEADER_SIZE + 1..], &encode(&b)[..]);
    }
}
