//! Splitting payloads into chunk sequences.
//!
//! - [`Splitter`] - Assigns message ids and cuts payloads into chunks
//! - [`SplitIter`] - Lazy iterator over the chunks of one message

mod engine;
mod iter;

pub use engine::Splitter;
pub use iter::SplitIter;
