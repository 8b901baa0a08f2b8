//! Stream adapter over the chunks of one message.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use chunkwire::{codec, SplitConfig, Splitter};
//!
//! async fn send_all(text: &str) -> Result<(), chunkwire::ChunkError> {
//!     let splitter = Splitter::new(SplitConfig::default());
//!     let mut stream = splitter.split_stream(text)?;
//!
//!     while let Some(chunk) = stream.next().await {
//!         let wire = codec::encode(&chunk);
//!         // hand `wire` to the data channel
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::chunk::Chunk;
use crate::splitter::SplitIter;

use super::YieldBudget;

/// A stream yielding the chunks of one message.
///
/// Created by [`Splitter::split_stream`](crate::Splitter::split_stream).
/// After every `yield_interval` chunks the stream returns `Poll::Pending`
/// once, with its waker already notified.
#[derive(Debug)]
pub struct SplitStream {
    iter: SplitIter,
    budget: YieldBudget,
}

impl SplitStream {
    pub(crate) fn new(iter: SplitIter, yield_interval: usize) -> Self {
        Self {
            iter,
            budget: YieldBudget::new(yield_interval),
        }
    }

    /// Returns the message id shared by every chunk.
    pub fn message_id(&self) -> u32 {
        self.iter.message_id()
    }

    /// Returns the total number of chunks of the message.
    pub fn chunk_count(&self) -> usize {
        self.iter.chunk_count()
    }
}

impl Stream for SplitStream {
    type Item = Chunk;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Chunk>> {
        let this = &mut *self;

        if this.budget.yield_now(cx) {
            return Poll::Pending;
        }

        let chunk = this.iter.next();
        if chunk.is_some() {
            this.budget.spend(1);
        }
        Poll::Ready(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
