//! Lazy chunk iterator for one message.

use std::iter::FusedIterator;

use bytes::Bytes;

use crate::chunk::{Chunk, ContentType};

/// An iterator over the chunks of one split message.
///
/// Created by [`Splitter::split_iter`](crate::Splitter::split_iter).
#[derive(Debug, Clone)]
pub struct SplitIter {
    data: Bytes,
    content_type: ContentType,
    message_id: u32,
    content_size: usize,
    next_index: usize,
    chunk_count: usize,
}

impl SplitIter {
    pub(crate) fn new(
        data: Bytes,
        content_type: ContentType,
        message_id: u32,
        content_size: usize,
    ) -> Self {
        let chunk_count = data.len().div_ceil(content_size);
        Self {
            data,
            content_type,
            message_id,
            content_size,
            next_index: 0,
            chunk_count,
        }
    }

    /// Returns the message id shared by every chunk.
    pub fn message_id(&self) -> u32 {
        self.message_id
    }

    /// Returns the content-type tag shared by every chunk.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Returns the total number of chunks of the message.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }
}

impl Iterator for SplitIter {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.next_index >= self.chunk_count {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;

        let start = index * self.content_size;
        let end = (start + self.content_size).min(self.data.len());

        Some(Chunk::new(
            self.content_type,
            self.message_id,
            index as u32,
            self.next_index == self.chunk_count,
            self.data.slice(start..end),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chunk_count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SplitIter {}

impl FusedIterator for SplitIter {}
