//! Async support for splitting and reassembly.
//!
//! Everything here is runtime-agnostic: streams implement
//! `futures_core::Stream`, readers are `futures_io::AsyncRead`, so the types
//! work with tokio, async-std, smol, or any futures-compatible executor.
//!
//! Long loops hand control back to the executor every `yield_interval`
//! iterations so that splitting or reassembling a large message does not
//! starve other tasks. Yielding never changes the result.
//!
//! - [`SplitStream`] - Chunks of one message as a `Stream`
//! - [`Reassemble`] - Future reconstructing a complete message
//! - [`read_blob`] - Reads an async source into a [`Blob`](crate::Blob)
//!
//! This module requires the `async-io` feature to be enabled.

mod blob;
mod reassemble;
mod split;

pub use blob::{ReadBlob, read_blob};
pub use reassemble::Reassemble;
pub use split::SplitStream;

use std::task::Context;

/// Counts loop iterations and decides when to hand control back.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YieldBudget {
    interval: usize,
    used: usize,
}

impl YieldBudget {
    pub(crate) fn new(interval: usize) -> Self {
        Self { interval, used: 0 }
    }

    /// Number of iterations allowed before the next yield.
    pub(crate) fn remaining(&self) -> usize {
        if self.interval == 0 {
            usize::MAX
        } else {
            self.interval - self.used
        }
    }

    /// Records `n` iterations.
    pub(crate) fn spend(&mut self, n: usize) {
        if self.interval != 0 {
            self.used = (self.used + n).min(self.interval);
        }
    }

    /// If the budget is used up, refills it, schedules a wake-up and returns
    /// true; the caller must then return `Poll::Pending`.
    pub(crate) fn yield_now(&mut self, cx: &mut Context<'_>) -> bool {
        if self.interval == 0 || self.used < self.interval {
            return false;
        }
        self.used = 0;
        cx.waker().wake_by_ref();
        true
    }
}
