//! Reading opaque payloads from async sources.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::DEFAULT_YIELD_INTERVAL;
use crate::error::ChunkError;
use crate::payload::Blob;

use super::YieldBudget;

const READ_BUFFER_SIZE: usize = 8192;

pin_project! {
    /// Future returned by [`read_blob`].
    #[derive(Debug)]
    #[must_use = "futures do nothing unless polled"]
    pub struct ReadBlob<R> {
        #[pin]
        reader: R,
        buffer: Vec<u8>,
        data: Vec<u8>,
        budget: YieldBudget,
    }
}

impl<R: AsyncRead> Future for ReadBlob<R> {
    type Output = Result<Blob, ChunkError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            if this.budget.yield_now(cx) {
                return Poll::Pending;
            }

            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => return Poll::Ready(Err(ChunkError::Io(e))),
                Poll::Ready(Ok(0)) => {
                    tracing::trace!(len = this.data.len(), "blob read to end");
                    return Poll::Ready(Ok(Blob::from(std::mem::take(this.data))));
                }
                Poll::Ready(Ok(n)) => {
                    this.data.extend_from_slice(&this.buffer[..n]);
                    this.budget.spend(1);
                }
            }
        }
    }
}

/// Reads an async source to its end into a [`Blob`].
///
/// Uses `futures_io::AsyncRead`; tokio readers can be adapted with
/// `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use chunkwire::{read_blob, SplitConfig, Splitter};
///
/// let file = tokio::fs::File::open("photo.jpg").await?;
/// let blob = read_blob(file.compat()).await?;
/// let chunks = Splitter::new(SplitConfig::default()).split(blob)?;
/// ```
///
/// # Errors
///
/// I/O errors of the reader surface as [`ChunkError::Io`].
pub fn read_blob<R: AsyncRead>(reader: R) -> ReadBlob<R> {
    ReadBlob {
        reader,
        buffer: vec![0u8; READ_BUFFER_SIZE],
        data: Vec::new(),
        budget: YieldBudget::new(DEFAULT_YIELD_INTERVAL),
    }
}
