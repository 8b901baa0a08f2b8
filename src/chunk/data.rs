//! The Chunk type - one wire-transmissible unit of a message.

use bytes::Bytes;
use std::fmt;

use super::ContentType;

/// A chunk of a larger message.
///
/// Chunks are immutable values. The payload is a [`Bytes`] handle, so chunks
/// produced by the splitter or the decoder share memory with the buffer they
/// were cut from.
///
/// # Example
///
/// ```
/// use chunkwire::{Chunk, ContentType};
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(ContentType::Text, 7, 0, true, Bytes::from_static(b"hi"));
///
/// assert_eq!(chunk.len(), 2);
/// assert!(chunk.is_end_of_message());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    content_type: ContentType,
    message_id: u32,
    serial_number: u32,
    is_end_of_message: bool,
    payload: Bytes,
}

impl Chunk {
    /// Creates a new chunk.
    pub fn new(
        content_type: ContentType,
        message_id: u32,
        serial_number: u32,
        is_end_of_message: bool,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self {
            content_type,
            message_id,
            serial_number,
            is_end_of_message,
            payload: payload.into(),
        }
    }

    /// Returns the content-type tag of the message this chunk belongs to.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Returns the id of the message this chunk belongs to.
    pub fn message_id(&self) -> u32 {
        self.message_id
    }

    /// Returns the zero-based position of this chunk within its message.
    pub fn serial_number(&self) -> u32 {
        self.serial_number
    }

    /// Returns true if this is the last chunk of its message.
    pub fn is_end_of_message(&self) -> bool {
        self.is_end_of_message
    }

    /// Returns a reference to the payload.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Returns the payload length.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Consumes the chunk and returns the payload.
    pub fn into_payload(self) -> Bytes {
        self.payload
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk(#{} of message {}, {} bytes, {}",
            self.serial_number,
            self.message_id,
            self.len(),
            self.content_type
        )?;
        if self.is_end_of_message {
            write!(f, ", eom")?;
        }
        write!(f, ")")
    }
}
