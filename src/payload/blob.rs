//! Opaque binary blobs.

use bytes::Bytes;

/// Binary object whose media type is not carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    /// Media type reported for every blob.
    pub const MEDIA_TYPE: &'static str = "application/octet-stream";

    /// Wraps bytes as a blob.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the media type. Always [`Blob::MEDIA_TYPE`].
    pub fn media_type(&self) -> &'static str {
        Self::MEDIA_TYPE
    }

    /// Returns the blob contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the blob size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the blob is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the blob and returns its contents.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for Blob {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
