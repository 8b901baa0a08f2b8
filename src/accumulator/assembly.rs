//! Step-wise payload reconstruction shared by the sync and async paths.

use std::collections::{BTreeMap, btree_map};

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::error::ChunkError;

/// Places chunk payloads into the output buffer a few chunks at a time.
///
/// Chunk 0 defines the standard payload size. Chunk `n` lands at offset
/// `n * standard`; every chunk except the end chunk must be exactly
/// `standard` bytes and the end chunk at most `standard`.
#[derive(Debug)]
pub(crate) struct Assembly<'a> {
    chunks: btree_map::Values<'a, u32, Chunk>,
    standard: usize,
    end_serial: u32,
    buf: Vec<u8>,
}

impl<'a> Assembly<'a> {
    /// Prepares an assembly over a complete chunk map.
    ///
    /// `chunks` must hold serials `0..=end.serial_number()`.
    pub(crate) fn new(chunks: &'a BTreeMap<u32, Chunk>, end: &Chunk) -> Self {
        let standard = chunks.get(&0).map_or(end.len(), Chunk::len);
        let total = end.serial_number() as usize * standard + end.len();

        Self {
            chunks: chunks.values(),
            standard,
            end_serial: end.serial_number(),
            buf: vec![0u8; total],
        }
    }

    /// Places up to `budget` more chunks.
    ///
    /// Returns `Ok(true)` once every chunk has been placed.
    pub(crate) fn step(&mut self, budget: usize) -> Result<bool, ChunkError> {
        for _ in 0..budget {
            match self.chunks.next() {
                Some(chunk) => self.place(chunk)?,
                None => return Ok(true),
            }
        }
        Ok(self.chunks.len() == 0)
    }

    fn place(&mut self, chunk: &Chunk) -> Result<(), ChunkError> {
        let serial = chunk.serial_number();
        let fits = if serial == self.end_serial {
            chunk.len() <= self.standard
        } else {
            chunk.len() == self.standard
        };
        if !fits {
            return Err(ChunkError::InconsistentChunkSize {
                serial,
                expected: self.standard,
                actual: chunk.len(),
            });
        }

        let offset = serial as usize * self.standard;
        self.buf[offset..offset + chunk.len()].copy_from_slice(chunk.payload());
        Ok(())
    }

    /// Returns the assembled bytes.
    pub(crate) fn finish(self) -> Bytes {
        Bytes::from(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ContentType;

    fn map(parts: &[&'static [u8]]) -> BTreeMap<u32, Chunk> {
        parts
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let eom = i + 1 == parts.len();
                (i as u32, Chunk::new(ContentType::Bytes, 0, i as u32, eom, *p))
            })
            .collect()
    }

    #[test]
    fn test_assembly_in_steps() {
        let chunks = map(&[b"ab", b"cd", b"e"]);
        let end = chunks[&2].clone();
        let mut assembly = Assembly::new(&chunks, &end);

        assert!(!assembly.step(1).unwrap());
        assert!(!assembly.step(1).unwrap());
        assert!(assembly.step(1).unwrap());
        assert_eq!(&assembly.finish()[..], b"abcde");
    }

    #[test]
    fn test_assembly_single_chunk() {
        let chunks = map(&[b"xyz"]);
        let end = chunks[&0].clone();
        let mut assembly = Assembly::new(&chunks, &end);

        assert!(assembly.step(usize::MAX).unwrap());
        assert_eq!(&assembly.finish()[..], b"xyz");
    }

    #[test]
    fn test_assembly_rejects_short_middle_chunk() {
        let chunks = map(&[b"ab", b"c", b"d"]);
        let end = chunks[&2].clone();
        let mut assembly = Assembly::new(&chunks, &end);

        let err = assembly.step(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            ChunkError::InconsistentChunkSize {
                serial: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_assembly_rejects_oversized_end_chunk() {
        let chunks = map(&[b"ab", b"cde"]);
        let end = chunks[&1].clone();
        let mut assembly = Assembly::new(&chunks, &end);

        assert!(assembly.step(usize::MAX).is_err());
    }
}
