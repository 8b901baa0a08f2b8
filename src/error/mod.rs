//! Error types for chunkwire.

use std::fmt;

/// Errors that can occur while splitting, encoding, decoding or
/// reassembling chunks.
#[derive(Debug)]
pub enum ChunkError {
    /// An I/O error occurred while reading payload input.
    Io(std::io::Error),

    /// The requested total chunk size is too small.
    InvalidChunkSize {
        /// The size that was requested.
        actual: usize,
        /// The smallest size that would have been accepted.
        min: usize,
    },

    /// A raw content-type tag is not one of the four known tags.
    UnsupportedPayloadType {
        /// The offending tag value.
        tag: u8,
    },

    /// A chunk of another message was added to a bound accumulator.
    MismatchedMessage {
        /// The message id the accumulator is bound to.
        expected: u32,
        /// The message id carried by the rejected chunk.
        actual: u32,
    },

    /// A chunk contradicts the end of message.
    ConflictingEndOfMessage {
        /// Serial number of the end-of-message chunk.
        end: u32,
        /// Serial number that contradicts it.
        serial: u32,
    },

    /// Reconstruction was requested before every chunk arrived.
    IncompleteMessage {
        /// Number of distinct chunks received so far.
        received: usize,
        /// Number of chunks expected, if the end chunk is known.
        expected: Option<usize>,
    },

    /// A chunk payload does not match the size implied by chunk 0.
    InconsistentChunkSize {
        /// Serial number of the offending chunk.
        serial: u32,
        /// Payload length of chunk 0.
        expected: usize,
        /// Payload length of the offending chunk.
        actual: usize,
    },

    /// A buffer is too short to hold a chunk header.
    MalformedHeader {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// Reassembled text bytes are not valid UTF-8.
    Decode(std::str::Utf8Error),
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Io(e) => write!(f, "io error: {}", e),
            ChunkError::InvalidChunkSize { actual, min } => {
                write!(f, "invalid chunk size: {} bytes (min {})", actual, min)
            }
            ChunkError::UnsupportedPayloadType { tag } => {
                write!(f, "unsupported payload type tag: {:#07b}", tag)
            }
            ChunkError::MismatchedMessage { expected, actual } => {
                write!(
                    f,
                    "chunk belongs to message {} (accumulator bound to {})",
                    actual, expected
                )
            }
            ChunkError::ConflictingEndOfMessage { end, serial } => {
                write!(
                    f,
                    "conflicting end of message: serial {} with end at {}",
                    serial, end
                )
            }
            ChunkError::IncompleteMessage { received, expected } => match expected {
                Some(expected) => write!(
                    f,
                    "the message is not complete: {} of {} chunks",
                    received, expected
                ),
                None => write!(
                    f,
                    "the message is not complete: {} chunks, end not received",
                    received
                ),
            },
            ChunkError::InconsistentChunkSize {
                serial,
                expected,
                actual,
            } => write!(
                f,
                "inconsistent chunk size: serial {} has {} bytes (expected {})",
                serial, actual, expected
            ),
            ChunkError::MalformedHeader { len } => {
                write!(f, "malformed header: buffer of {} bytes", len)
            }
            ChunkError::Decode(e) => write!(f, "decode error: {}", e),
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChunkError::Io(e) => Some(e),
            ChunkError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChunkError {
    fn from(e: std::io::Error) -> Self {
        ChunkError::Io(e)
    }
}

impl From<std::str::Utf8Error> for ChunkError {
    fn from(e: std::str::Utf8Error) -> Self {
        ChunkError::Decode(e)
    }
}

impl From<std::string::FromUtf8Error> for ChunkError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        ChunkError::Decode(e.utf8_error())
    }
}
