//! Configuration for splitting behavior.
//!
//! - [`SplitConfig`] - Total chunk size on the wire and cooperative yield cadence

use crate::codec::HEADER_SIZE;
use crate::error::ChunkError;

/// Smallest accepted total chunk size: the header plus one payload byte.
pub const MIN_CHUNK_SIZE: usize = HEADER_SIZE + 1;

/// Default total chunk size (16 KiB), a size every data channel accepts.
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Default number of loop iterations between cooperative yields.
pub const DEFAULT_YIELD_INTERVAL: usize = 10;

/// Configuration for splitting payloads into chunks.
///
/// `chunk_size` is the total wire size of one chunk, header included, so it
/// must be at least [`MIN_CHUNK_SIZE`].
///
/// `yield_interval` only affects the async APIs: long loops hand control
/// back to the executor every `yield_interval` iterations. Zero disables
/// yielding.
///
/// # Example
///
/// ```
/// use chunkwire::SplitConfig;
///
/// let config = SplitConfig::new(1200)?.with_yield_interval(32);
/// assert_eq!(config.content_size(), 1191);
/// # Ok::<(), chunkwire::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    chunk_size: usize,
    yield_interval: usize,
}

impl SplitConfig {
    /// Creates a new configuration with the given total chunk size.
    ///
    /// Returns [`ChunkError::InvalidChunkSize`] if `chunk_size` is below
    /// [`MIN_CHUNK_SIZE`].
    pub fn new(chunk_size: usize) -> Result<Self, ChunkError> {
        if chunk_size < MIN_CHUNK_SIZE {
            return Err(ChunkError::InvalidChunkSize {
                actual: chunk_size,
                min: MIN_CHUNK_SIZE,
            });
        }

        Ok(Self {
            chunk_size,
            yield_interval: DEFAULT_YIELD_INTERVAL,
        })
    }

    /// Sets the total chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`SplitConfig::validate`] to check it.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Sets the number of iterations between cooperative yields.
    pub fn with_yield_interval(mut self, interval: usize) -> Self {
        self.yield_interval = interval;
        self
    }

    /// Returns the total chunk size, header included.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the payload capacity of one chunk.
    pub fn content_size(&self) -> usize {
        self.chunk_size.saturating_sub(HEADER_SIZE)
    }

    /// Returns the yield interval.
    pub fn yield_interval(&self) -> usize {
        self.yield_interval
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            yield_interval: DEFAULT_YIELD_INTERVAL,
        }
    }
}
