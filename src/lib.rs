//! chunkwire
//!
//! Message chunking for unordered, unreliable data channels.
//!
//! `chunkwire` splits an arbitrary payload into self-describing chunks that
//! fit the transport's MTU, and puts them back together on the other side no
//! matter in which order they arrive or how often they are delivered. It is
//! designed as a small, composable primitive for:
//!
//! - WebRTC-style data channels (unordered, no retransmits)
//! - datagram transports with a size limit
//! - any link that may reorder or duplicate buffers
//!
//! The crate intentionally:
//! - does NOT own the transport
//! - does NOT retransmit or acknowledge
//! - does NOT multiplex messages onto one accumulator
//! - does NOT compress or encrypt
//!
//! It only does one thing: **payload → chunks → payload**
//!
//! # Wire format
//!
//! Every chunk is a 9-byte big-endian header followed by payload bytes:
//!
//! ```text
//! byte 0      options: bit 0 = end of message, bits 3-4 = content type
//! bytes 1..5  message id (u32)
//! bytes 5..9  serial number (u32)
//! ```
//!
//! # Sync
//!
//! ```
//! use chunkwire::{codec, Accumulator, ChunkError, Payload, SplitConfig, Splitter};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let splitter = Splitter::new(SplitConfig::new(11)?);
//!     let wire: Vec<_> = splitter
//!         .split("Hey 👻!")?
//!         .iter()
//!         .map(codec::encode)
//!         .collect();
//!
//!     let mut acc = Accumulator::new();
//!     for buf in wire.into_iter().rev() {
//!         acc.add_chunk(codec::decode(buf)?)?;
//!     }
//!
//!     assert!(acc.has_all_chunks());
//!     assert_eq!(acc.content()?, Payload::from("Hey 👻!"));
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use chunkwire::{Accumulator, SplitConfig, Splitter};
//!
//! async fn demo(text: &str) -> Result<(), chunkwire::ChunkError> {
//!     let splitter = Splitter::new(SplitConfig::default());
//!     let mut stream = splitter.split_stream(text)?;
//!
//!     let mut acc = Accumulator::new();
//!     while let Some(chunk) = stream.next().await {
//!         acc.add_chunk(chunk)?;
//!     }
//!     let payload = acc.content_async().await?;
//!     println!("{} bytes", payload.len());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod accumulator;
mod chunk;
pub mod codec;
mod config;
mod error;
mod message_id;
mod payload;
mod splitter;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use accumulator::Accumulator;
pub use chunk::{Chunk, ContentType};
pub use codec::{HEADER_SIZE, decode, encode};
pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_YIELD_INTERVAL, MIN_CHUNK_SIZE, SplitConfig};
pub use error::ChunkError;
pub use message_id::MessageIds;
pub use payload::{Blob, Payload};
pub use splitter::{SplitIter, Splitter};

#[cfg(feature = "async-io")]
pub use async_stream::{ReadBlob, Reassemble, SplitStream, read_blob};
