//! Cooperative payload reconstruction.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::accumulator::Assembly;
use crate::chunk::ContentType;
use crate::error::ChunkError;
use crate::payload::Payload;

use super::YieldBudget;

/// Future returned by [`Accumulator::content_async`](crate::Accumulator::content_async).
///
/// Places `yield_interval` chunks per poll and yields in between. Once it
/// has resolved, further polls return `Poll::Pending`.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct Reassemble<'a> {
    state: Option<Result<(Assembly<'a>, ContentType), ChunkError>>,
    budget: YieldBudget,
}

impl<'a> Reassemble<'a> {
    pub(crate) fn new(
        assembly: Result<(Assembly<'a>, ContentType), ChunkError>,
        yield_interval: usize,
    ) -> Self {
        Self {
            state: Some(assembly),
            budget: YieldBudget::new(yield_interval),
        }
    }
}

impl Future for Reassemble<'_> {
    type Output = Result<Payload, ChunkError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;

        let (mut assembly, content_type) = match this.state.take() {
            Some(Ok(state)) => state,
            Some(Err(e)) => return Poll::Ready(Err(e)),
            // Already completed
            None => return Poll::Pending,
        };

        match assembly.step(this.budget.remaining()) {
            Err(e) => Poll::Ready(Err(e)),
            Ok(true) => Poll::Ready(Payload::from_parts(content_type, assembly.finish())),
            Ok(false) => {
                this.state = Some(Ok((assembly, content_type)));
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}
