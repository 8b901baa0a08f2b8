//! Content-type tags carried in bits 3-4 of the options byte.

use std::fmt;

use crate::error::ChunkError;

const TAG_SHIFT: u8 = 3;

/// Describes how the reassembled bytes of a message are reinterpreted.
///
/// Every chunk of one message carries the same tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// Raw byte sequence.
    #[default]
    Bytes = 0b00 << TAG_SHIFT,
    /// Generic untyped binary buffer.
    Buffer = 0b01 << TAG_SHIFT,
    /// UTF-8 encoded string.
    Text = 0b10 << TAG_SHIFT,
    /// Binary blob with an unspecified media type.
    Opaque = 0b11 << TAG_SHIFT,
}

impl ContentType {
    /// Mask selecting the content-type bits of an options byte.
    pub const MASK: u8 = 0b11 << TAG_SHIFT;

    /// Returns the wire value of the tag (already shifted into bits 3-4).
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Extracts the tag from a full options byte.
    ///
    /// Bits outside [`ContentType::MASK`] are ignored, so this never fails.
    pub const fn from_options(options: u8) -> Self {
        match (options & Self::MASK) >> TAG_SHIFT {
            0b00 => Self::Bytes,
            0b01 => Self::Buffer,
            0b10 => Self::Text,
            _ => Self::Opaque,
        }
    }
}

impl TryFrom<u8> for ContentType {
    type Error = ChunkError;

    /// Strict conversion from a bare tag value.
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        if tag & !Self::MASK != 0 {
            return Err(ChunkError::UnsupportedPayloadType { tag });
        }
        Ok(Self::from_options(tag))
    }
}

impl From<ContentType> for u8 {
    fn from(content_type: ContentType) -> Self {
        content_type.bits()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Bytes => "bytes",
            ContentType::Buffer => "buffer",
            ContentType::Text => "text",
            ContentType::Opaque => "opaque",
        };
        f.write_str(name)
    }
}
