//! Logical payload types.
//!
//! - [`Payload`] - Tagged union over the four supported payload kinds
//! - [`Blob`] - Opaque binary object

mod blob;

use bytes::Bytes;

use crate::chunk::ContentType;
use crate::error::ChunkError;

pub use blob::Blob;

/// A message payload in its logical type.
///
/// The variant decides the [`ContentType`] tag carried by every chunk of the
/// message, and the reassembler produces the same variant back.
///
/// # Example
///
/// ```
/// use chunkwire::{ContentType, Payload};
///
/// let payload = Payload::from("Hey 👻!");
/// assert_eq!(payload.content_type(), ContentType::Text);
/// assert_eq!(payload.len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Raw byte sequence.
    Bytes(Bytes),
    /// Generic owned buffer.
    Buffer(Vec<u8>),
    /// UTF-8 text.
    Text(String),
    /// Opaque binary blob.
    Opaque(Blob),
}

impl Payload {
    /// Returns the content-type tag for this payload.
    pub fn content_type(&self) -> ContentType {
        match self {
            Payload::Bytes(_) => ContentType::Bytes,
            Payload::Buffer(_) => ContentType::Buffer,
            Payload::Text(_) => ContentType::Text,
            Payload::Opaque(_) => ContentType::Opaque,
        }
    }

    /// Returns the payload viewed as bytes (text is its UTF-8 encoding).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Bytes(bytes) => bytes.as_ref(),
            Payload::Buffer(buf) => buf.as_slice(),
            Payload::Text(text) => text.as_bytes(),
            Payload::Opaque(blob) => blob.as_bytes(),
        }
    }

    /// Returns the encoded length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the payload has no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the text, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Normalizes the payload to raw bytes.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Payload::Bytes(bytes) => bytes,
            Payload::Buffer(buf) => Bytes::from(buf),
            Payload::Text(text) => Bytes::from(text),
            Payload::Opaque(blob) => blob.into_bytes(),
        }
    }

    /// Reinterprets reassembled bytes according to a content-type tag.
    ///
    /// Returns [`ChunkError::Decode`] if a text payload is not valid UTF-8.
    pub fn from_parts(content_type: ContentType, bytes: Bytes) -> Result<Self, ChunkError> {
        Ok(match content_type {
            ContentType::Bytes => Payload::Bytes(bytes),
            ContentType::Buffer => Payload::Buffer(Vec::from(bytes)),
            ContentType::Text => Payload::Text(String::from_utf8(Vec::from(bytes))?),
            ContentType::Opaque => Payload::Opaque(Blob::new(bytes)),
        })
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(buf: Vec<u8>) -> Self {
        Payload::Buffer(buf)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<Blob> for Payload {
    fn from(blob: Blob) -> Self {
        Payload::Opaque(blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(Payload::from(Bytes::new()).content_type(), ContentType::Bytes);
        assert_eq!(Payload::from(vec![1u8]).content_type(), ContentType::Buffer);
        assert_eq!(Payload::from("x").content_type(), ContentType::Text);
        assert_eq!(
            Payload::from(Blob::from(vec![1u8])).content_type(),
            ContentType::Opaque
        );
    }

    #[test]
    fn test_text_is_utf8_encoded() {
        let payload = Payload::from(String::from("Hey 👻!"));
        assert_eq!(payload.len(), 9);
        assert_eq!(payload.as_text(), Some("Hey 👻!"));
        assert_eq!(&payload.into_bytes()[4..8], &[0xf0, 0x9f, 0x91, 0xbb]);
    }

    #[test]
    fn test_from_parts() {
        let bytes = Bytes::from_static(&[0, 255, 0]);
        assert_eq!(
            Payload::from_parts(ContentType::Bytes, bytes.clone()).unwrap(),
            Payload::Bytes(bytes.clone())
        );
        assert_eq!(
            Payload::from_parts(ContentType::Buffer, bytes.clone()).unwrap(),
            Payload::Buffer(vec![0, 255, 0])
        );
        assert_eq!(
            Payload::from_parts(ContentType::Opaque, bytes.clone()).unwrap(),
            Payload::Opaque(Blob::new(bytes))
        );
        assert_eq!(
            Payload::from_parts(ContentType::Text, Bytes::from_static(b"abc")).unwrap(),
            Payload::from("abc")
        );
    }

    #[test]
    fn test_from_parts_rejects_invalid_utf8() {
        let err = Payload::from_parts(ContentType::Text, Bytes::from_static(&[0xf0, 0x9f]))
            .unwrap_err();
        assert!(matches!(err, ChunkError::Decode(_)));
    }

    #[test]
    fn test_empty() {
        assert!(Payload::from("").is_empty());
        assert!(!Payload::from(vec![0u8]).is_empty());
    }
}
