//! Accumulator - per-message reassembly state.
//!
//! An [`Accumulator`] collects the chunks of exactly one message. Chunks may
//! arrive in any order and any number of times; storing is keyed by serial
//! number, so duplicates collapse onto one entry.
//!
//! # Example
//!
//! ```
//! use chunkwire::{Accumulator, MessageIds, Payload, SplitConfig, Splitter};
//!
//! let ids = MessageIds::new();
//! let splitter = Splitter::with_message_ids(SplitConfig::new(11)?, &ids);
//! let chunks = splitter.split("Hey 👻!")?;
//!
//! let mut acc = Accumulator::new();
//! for chunk in chunks.into_iter().rev() {
//!     acc.add_chunk(chunk)?;
//! }
//!
//! assert!(acc.has_all_chunks());
//! assert_eq!(acc.content()?, Payload::from("Hey 👻!"));
//! # Ok::<(), chunkwire::ChunkError>(())
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::chunk::{Chunk, ContentType};
use crate::config::DEFAULT_YIELD_INTERVAL;
use crate::error::ChunkError;
use crate::payload::Payload;

use super::Assembly;

#[cfg(feature = "async-io")]
use crate::async_stream::Reassemble;

/// Collects the chunks of one message and reconstructs its payload.
///
/// The accumulator binds to the message id of the first chunk it receives.
/// It has no expiry: an incomplete accumulator stays incomplete until the
/// missing chunks are added or it is dropped.
///
/// # Consistency
///
/// Besides the message id, the accumulator rejects chunks that contradict
/// the end of the message: a second end chunk with another serial number, or
/// any chunk positioned after the end. The rejected chunk is not stored.
#[derive(Debug, Clone)]
pub struct Accumulator {
    message_id: Option<u32>,
    chunks: BTreeMap<u32, Chunk>,
    end_serial: Option<u32>,
    yield_interval: usize,
}

impl Accumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            message_id: None,
            chunks: BTreeMap::new(),
            end_serial: None,
            yield_interval: DEFAULT_YIELD_INTERVAL,
        }
    }

    /// Sets how many chunks the async reassembly places between yields.
    pub fn with_yield_interval(mut self, interval: usize) -> Self {
        self.yield_interval = interval;
        self
    }

    /// Adds a chunk.
    ///
    /// Adding a chunk that is already stored is a no-op in effect.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::MismatchedMessage`] if the chunk belongs to another
    ///   message than the one this accumulator is bound to
    /// - [`ChunkError::ConflictingEndOfMessage`] if the chunk contradicts the
    ///   end of message already received
    pub fn add_chunk(&mut self, chunk: Chunk) -> Result<(), ChunkError> {
        let serial = chunk.serial_number();

        match self.message_id {
            None => self.message_id = Some(chunk.message_id()),
            Some(expected) if expected != chunk.message_id() => {
                tracing::warn!(
                    expected,
                    actual = chunk.message_id(),
                    serial,
                    "chunk of another message rejected"
                );
                return Err(ChunkError::MismatchedMessage {
                    expected,
                    actual: chunk.message_id(),
                });
            }
            Some(_) => {}
        }

        self.check_end(&chunk)?;

        if chunk.is_end_of_message() {
            self.end_serial = Some(serial);
        }

        let message_id = chunk.message_id();
        let len = chunk.len();
        if self.chunks.insert(serial, chunk).is_some() {
            tracing::trace!(message_id, serial, "duplicate chunk");
        } else {
            tracing::trace!(message_id, serial, len, "chunk stored");
            if self.has_all_chunks() {
                tracing::debug!(
                    message_id,
                    chunk_count = self.chunks.len(),
                    "message complete"
                );
            }
        }

        Ok(())
    }

    fn check_end(&self, chunk: &Chunk) -> Result<(), ChunkError> {
        let serial = chunk.serial_number();

        let conflict = match self.end_serial {
            Some(end) if serial > end || (serial == end) != chunk.is_end_of_message() => {
                Some((end, serial))
            }
            Some(_) => None,
            None if chunk.is_end_of_message() => self
                .chunks
                .last_key_value()
                .map(|(&last, _)| last)
                .filter(|&last| last > serial)
                .map(|last| (serial, last)),
            None => None,
        };

        match conflict {
            Some((end, serial)) => {
                tracing::warn!(
                    message_id = chunk.message_id(),
                    end,
                    serial,
                    "chunk conflicts with end of message"
                );
                Err(ChunkError::ConflictingEndOfMessage { end, serial })
            }
            None => Ok(()),
        }
    }

    /// Returns true once the end chunk and every chunk before it arrived.
    pub fn has_all_chunks(&self) -> bool {
        match self.end_serial {
            Some(end) => self.chunks.len() == end as usize + 1,
            None => false,
        }
    }

    /// Returns the serial numbers still missing before the end chunk, in
    /// ascending order.
    ///
    /// Empty when the end chunk has not arrived yet, since the length of the
    /// message is unknown. The end serial comes from the peer, so the
    /// iterator is lazy; bound it with `take` before collecting.
    pub fn missing(&self) -> impl Iterator<Item = u32> + '_ {
        let end = self.end_serial.unwrap_or(0);
        (0..end).filter(move |serial| !self.chunks.contains_key(serial))
    }

    /// Returns the message id this accumulator is bound to, if any.
    pub fn message_id(&self) -> Option<u32> {
        self.message_id
    }

    /// Returns the content-type tag of the message, if known.
    ///
    /// Taken from the end chunk once it arrived, otherwise from any stored
    /// chunk.
    pub fn content_type(&self) -> Option<ContentType> {
        self.end_chunk()
            .or_else(|| self.chunks.values().next())
            .map(Chunk::content_type)
    }

    /// Returns the number of distinct chunks received.
    pub fn received_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the number of chunks of the message, once the end is known.
    pub fn expected_count(&self) -> Option<usize> {
        self.end_serial.map(|end| end as usize + 1)
    }

    /// Returns true if no chunk has been added.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the reassembled bytes without reinterpreting them.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::IncompleteMessage`] if chunks are missing
    /// - [`ChunkError::InconsistentChunkSize`] if the chunks were not cut
    ///   with one uniform chunk size
    pub fn content_bytes(&self) -> Result<Bytes, ChunkError> {
        let (mut assembly, _) = self.assembly()?;
        assembly.step(usize::MAX)?;
        Ok(assembly.finish())
    }

    /// Reconstructs the payload in its original logical type.
    ///
    /// # Errors
    ///
    /// As [`Accumulator::content_bytes`], plus [`ChunkError::Decode`] if a
    /// text message is not valid UTF-8.
    pub fn content(&self) -> Result<Payload, ChunkError> {
        let (mut assembly, content_type) = self.assembly()?;
        assembly.step(usize::MAX)?;
        Payload::from_parts(content_type, assembly.finish())
    }

    /// Reconstructs the payload, yielding to the executor between batches
    /// of chunks.
    ///
    /// The result is identical to [`Accumulator::content`].
    #[cfg(feature = "async-io")]
    pub fn content_async(&self) -> Reassemble<'_> {
        Reassemble::new(self.assembly(), self.yield_interval)
    }

    /// Consumes the accumulator and reconstructs the payload.
    pub fn into_content(self) -> Result<Payload, ChunkError> {
        self.content()
    }

    /// Forgets all chunks and the bound message id.
    pub fn reset(&mut self) {
        self.message_id = None;
        self.chunks.clear();
        self.end_serial = None;
    }

    fn assembly(&self) -> Result<(Assembly<'_>, ContentType), ChunkError> {
        let end = self.complete_end()?;
        Ok((Assembly::new(&self.chunks, end), end.content_type()))
    }

    fn end_chunk(&self) -> Option<&Chunk> {
        self.end_serial.and_then(|end| self.chunks.get(&end))
    }

    fn complete_end(&self) -> Result<&Chunk, ChunkError> {
        match self.end_chunk() {
            Some(end) if self.has_all_chunks() => Ok(end),
            _ => Err(ChunkError::IncompleteMessage {
                received: self.chunks.len(),
                expected: self.expected_count(),
            }),
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
