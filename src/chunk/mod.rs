//! Chunk types.
//!
//! - [`Chunk`] - One wire unit: header fields plus a payload slice
//! - [`ContentType`] - How reassembled bytes are reinterpreted

mod content_type;
mod data;

pub use content_type::ContentType;
pub use data::Chunk;
