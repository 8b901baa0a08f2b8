//! Message id allocation.
//!
//! Every split consumes one id from a [`MessageIds`] counter. Splitters share
//! the process-wide counter returned by [`MessageIds::global`] unless they are
//! given their own.

use std::sync::atomic::{AtomicU32, Ordering};

static GLOBAL: MessageIds = MessageIds::new();

/// Monotonic message id counter.
///
/// Ids start at 0 and wrap from `u32::MAX` back to 0. They only need to be
/// unique among messages in flight at the same time.
///
/// # Example
///
/// ```
/// use chunkwire::MessageIds;
///
/// let ids = MessageIds::new();
/// assert_eq!(ids.next(), 0);
/// assert_eq!(ids.next(), 1);
/// assert_eq!(ids.peek(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MessageIds {
    next: AtomicU32,
}

impl MessageIds {
    /// Creates a counter starting at 0.
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }

    /// Creates a counter whose next id is `start`.
    pub const fn starting_at(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }

    /// Returns the process-wide counter.
    pub fn global() -> &'static MessageIds {
        &GLOBAL
    }

    /// Issues the next id.
    pub fn next(&self) -> u32 {
        // fetch_add wraps on overflow
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the id the next call to [`MessageIds::next`] will issue.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }

    /// Rewinds the counter to 0.
    ///
    /// Intended for test harnesses that need deterministic ids. Resetting a
    /// counter that is shared with live splitters can hand out ids that are
    /// still in flight.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}
