//! Fixed 9-byte chunk header.

use bytes::{Buf, BufMut, Bytes};

use crate::chunk::{Chunk, ContentType};

/// Size of the chunk header in bytes.
pub const HEADER_SIZE: usize = 9;

/// Options bit marking the last chunk of a message.
pub const EOM_BIT: u8 = 0b1;

/// Decoded form of the 9-byte chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkHeader {
    /// Content-type tag of the message.
    pub content_type: ContentType,
    /// Message the chunk belongs to.
    pub message_id: u32,
    /// Position of the chunk within its message.
    pub serial_number: u32,
    /// Whether this is the last chunk of the message.
    pub is_end_of_message: bool,
}

impl ChunkHeader {
    /// Copies the header fields of a chunk.
    pub fn from_chunk(chunk: &Chunk) -> Self {
        Self {
            content_type: chunk.content_type(),
            message_id: chunk.message_id(),
            serial_number: chunk.serial_number(),
            is_end_of_message: chunk.is_end_of_message(),
        }
    }

    /// Returns the options byte.
    pub fn options(&self) -> u8 {
        let mut options = self.content_type.bits() & ContentType::MASK;
        if self.is_end_of_message {
            options |= EOM_BIT;
        }
        options
    }

    /// Writes the header in wire order.
    pub fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.options());
        buf.put_u32(self.message_id);
        buf.put_u32(self.serial_number);
    }

    /// Reads a header, advancing `buf` past it.
    ///
    /// The caller must ensure `buf.remaining() >= HEADER_SIZE`.
    pub(crate) fn read_from(buf: &mut impl Buf) -> Self {
        let options = buf.get_u8();
        let message_id = buf.get_u32();
        let serial_number = buf.get_u32();

        Self {
            content_type: ContentType::from_options(options),
            message_id,
            serial_number,
            is_end_of_message: options & EOM_BIT == EOM_BIT,
        }
    }

    /// Attaches a payload, producing the chunk.
    pub fn into_chunk(self, payload: Bytes) -> Chunk {
        Chunk::new(
            self.content_type,
            self.message_id,
            self.serial_number,
            self.is_end_of_message,
            payload,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_byte() {
        let header = ChunkHeader {
            content_type: ContentType::Text,
            message_id: 0,
            serial_number: 0,
            is_end_of_message: true,
        };
        assert_eq!(header.options(), 0x11);
    }

    #[test]
    fn test_write_read() {
        let header = ChunkHeader {
            content_type: ContentType::Buffer,
            message_id: 0xDEAD_BEEF,
            serial_number: 3,
            is_end_of_message: false,
        };
        let mut buf = Vec::new();
        header.write_to(&mut buf);
        assert_eq!(buf.len(), HEADER_SIZE);
        assert_eq!(buf, [0x08, 0xDE, 0xAD, 0xBE, 0xEF, 0, 0, 0, 3]);

        let mut slice = &buf[..];
        assert_eq!(ChunkHeader::read_from(&mut slice), header);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_read_ignores_reserved_bits() {
        let mut wire: &[u8] = &[0b1110_0110, 0, 0, 0, 1, 0, 0, 0, 2];
        let header = ChunkHeader::read_from(&mut wire);
        assert_eq!(header.content_type, ContentType::Bytes);
        assert!(!header.is_end_of_message);
    }
}
