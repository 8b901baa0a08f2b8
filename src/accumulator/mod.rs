//! Reassembling chunks into messages.
//!
//! - [`Accumulator`] - Collects the chunks of one message in any order,
//!   deduplicates them and reconstructs the payload

mod assembly;
mod engine;

pub(crate) use assembly::Assembly;
pub use engine::Accumulator;
