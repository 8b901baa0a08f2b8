//! Splitter - turns one payload into an ordered chunk sequence.
//!
//! Each call to [`Splitter::split`] consumes one message id and produces
//! chunks with dense serial numbers `0..n`, the last one flagged as the end
//! of the message. All chunks except the last carry exactly
//! `chunk_size - HEADER_SIZE` payload bytes.
//!
//! # Example
//!
//! ```
//! use chunkwire::{MessageIds, SplitConfig, Splitter};
//!
//! let ids = MessageIds::new();
//! let splitter = Splitter::with_message_ids(SplitConfig::new(11)?, &ids);
//!
//! let chunks = splitter.split("abcd123")?;
//! let sizes: Vec<_> = chunks.iter().map(|c| c.len()).collect();
//! assert_eq!(sizes, [2, 2, 2, 1]);
//! # Ok::<(), chunkwire::ChunkError>(())
//! ```

use crate::chunk::Chunk;
use crate::codec::HEADER_SIZE;
use crate::config::SplitConfig;
use crate::error::ChunkError;
use crate::message_id::MessageIds;
use crate::payload::Payload;

use super::SplitIter;
#[cfg(feature = "async-io")]
use crate::async_stream::SplitStream;

/// Largest number of chunks one message can have (serials are `u32`).
const MAX_CHUNKS_PER_MESSAGE: u64 = u32::MAX as u64 + 1;

/// Splits payloads into chunks sized for the transport.
///
/// A `Splitter` is cheap to copy. Splitters created with [`Splitter::new`]
/// draw message ids from the process-wide [`MessageIds::global`] counter;
/// [`Splitter::with_message_ids`] binds a caller-owned counter instead.
#[derive(Debug, Clone, Copy)]
pub struct Splitter<'a> {
    config: SplitConfig,
    ids: &'a MessageIds,
}

impl Splitter<'static> {
    /// Creates a splitter using the process-wide message id counter.
    pub fn new(config: SplitConfig) -> Self {
        Self::with_message_ids(config, MessageIds::global())
    }
}

impl<'a> Splitter<'a> {
    /// Creates a splitter drawing ids from `ids`.
    pub fn with_message_ids(config: SplitConfig, ids: &'a MessageIds) -> Self {
        Self { config, ids }
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Splits a payload into its complete chunk sequence.
    ///
    /// An empty payload yields no chunks.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidChunkSize`] if the configured chunk size
    /// is below the minimum, or too small to address the whole payload with
    /// 32-bit serial numbers. No message id is consumed in that case.
    pub fn split(&self, payload: impl Into<Payload>) -> Result<Vec<Chunk>, ChunkError> {
        Ok(self.split_iter(payload)?.collect())
    }

    /// Splits a payload lazily.
    ///
    /// The message id is assigned immediately; chunks are cut on demand as
    /// zero-copy slices of the normalized payload.
    pub fn split_iter(&self, payload: impl Into<Payload>) -> Result<SplitIter, ChunkError> {
        self.config.validate()?;

        let payload = payload.into();
        let content_type = payload.content_type();
        let content_size = self.config.content_size();

        let chunk_count = payload.len().div_ceil(content_size) as u64;
        if chunk_count > MAX_CHUNKS_PER_MESSAGE {
            let min_content = (payload.len() as u64).div_ceil(MAX_CHUNKS_PER_MESSAGE) as usize;
            return Err(ChunkError::InvalidChunkSize {
                actual: self.config.chunk_size(),
                min: HEADER_SIZE + min_content,
            });
        }

        let message_id = self.ids.next();

        tracing::debug!(
            message_id,
            content_type = %content_type,
            payload_len = payload.len(),
            chunk_count,
            "splitting payload"
        );

        Ok(SplitIter::new(
            payload.into_bytes(),
            content_type,
            message_id,
            content_size,
        ))
    }

    /// Splits a payload into a [`SplitStream`] that yields to the executor
    /// every `yield_interval` chunks.
    #[cfg(feature = "async-io")]
    pub fn split_stream(&self, payload: impl Into<Payload>) -> Result<SplitStream, ChunkError> {
        Ok(SplitStream::new(
            self.split_iter(payload)?,
            self.config.yield_interval(),
        ))
    }
}

impl Default for Splitter<'static> {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ContentType;
    use crate::payload::Blob;
    use bytes::Bytes;

    fn splitter(ids: &MessageIds, chunk_size: usize) -> Splitter<'_> {
        Splitter::with_message_ids(SplitConfig::new(chunk_size).unwrap(), ids)
    }

    #[test]
    fn test_split_ascii() {
        let ids = MessageIds::new();
        let chunks = splitter(&ids, 11).split("abcd123").unwrap();

        assert_eq!(chunks.len(), 4);
        let sizes: Vec<_> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, [2, 2, 2, 1]);
        assert_eq!(&chunks[3].payload()[..], b"3");
    }

    #[test]
    fn test_split_unicode() {
        let ids = MessageIds::new();
        let chunks = splitter(&ids, 11).split("Hey 👻!").unwrap();

        let sizes: Vec<_> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, [2, 2, 2, 2, 1]);
        assert!(chunks.iter().all(|c| c.content_type() == ContentType::Text));
    }

    #[test]
    fn test_serials_and_end_flag() {
        let ids = MessageIds::new();
        let chunks = splitter(&ids, 12).split(vec![7u8; 10]).unwrap();

        assert_eq!(chunks.len(), 4);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.serial_number(), i as u32);
            assert_eq!(chunk.is_end_of_message(), i == chunks.len() - 1);
            assert_eq!(chunk.message_id(), 0);
            assert_eq!(chunk.content_type(), ContentType::Buffer);
        }
    }

    #[test]
    fn test_exact_multiple_has_full_last_chunk() {
        let ids = MessageIds::new();
        let chunks = splitter(&ids, 13).split(Bytes::from_static(b"12345678")).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].len(), 4);
        assert!(chunks[1].is_end_of_message());
    }

    #[test]
    fn test_one_id_per_call() {
        let ids = MessageIds::new();
        let s = splitter(&ids, 10);

        let first = s.split("ab").unwrap();
        let second = s.split(Blob::from(vec![1u8])).unwrap();

        assert!(first.iter().all(|c| c.message_id() == 0));
        assert_eq!(second[0].message_id(), 1);
        assert_eq!(second[0].content_type(), ContentType::Opaque);
    }

    #[test]
    fn test_empty_payload() {
        let ids = MessageIds::new();
        let chunks = splitter(&ids, 11).split("").unwrap();
        assert!(chunks.is_empty());
        assert_eq!(ids.peek(), 1);
    }

    #[test]
    fn test_invalid_chunk_size_consumes_no_id() {
        let ids = MessageIds::new();
        let config = SplitConfig::default().with_chunk_size(HEADER_SIZE);
        let s = Splitter::with_message_ids(config, &ids);

        assert!(matches!(
            s.split("abc"),
            Err(ChunkError::InvalidChunkSize { actual: 9, min: 10 })
        ));
        assert_eq!(ids.peek(), 0);
    }

    #[test]
    fn test_chunks_share_payload_memory() {
        let ids = MessageIds::new();
        let data = Bytes::from(vec![1u8; 20]);
        let start = data.as_ptr() as usize;
        let chunks = splitter(&ids, 19).split(data).unwrap();

        assert_eq!(chunks[1].payload().as_ptr() as usize, start + 10);
    }
}
