//! Fingerprint index over the old content's fixed-size chunks.

use crate::{
    content::Text,
    hash::{Fingerprint, fingerprint},
    select,
};

use std::collections::HashMap;

/// Maps a chunk fingerprint to every old chunk position producing it.
///
/// Positions are 0-based and each list is strictly ascending. Built once
/// per old content and never mutated afterwards.
#[derive(Debug, Default)]
pub struct ChunkIndex {
    map: HashMap<Fingerprint, Vec<usize>>,
    chunks: usize,
}

impl ChunkIndex {
    /// Split `old` into consecutive `chunk_size`-char chunks (the last one
    /// may be shorter) and index their fingerprints.
    pub fn build(old: &str, chunk_size: usize) -> Self {
        let text = Text::new(old);
        let mut map: HashMap<Fingerprint, Vec<usize>> = HashMap::new();
        let mut chunks = 0;
        let mut start = 0;
        while start < text.len() {
            let fp = fingerprint(text.span(start, start + chunk_size));
            map.entry(fp).or_default().push(chunks);
            chunks += 1;
            start += chunk_size;
        }
        tracing::debug!(chunks, distinct = map.len(), chunk_size, "indexed old content");
        Self { map, chunks }
    }

    /// Positions whose chunk has fingerprint `fp`.
    pub fn get(&self, fp: &Fingerprint) -> Option<&[usize]> {
        self.map.get(fp).map(Vec::as_slice)
    }

    /// Candidate for `fp` nearest to `last`, see [`select::select`].
    pub fn select(&self, fp: &Fingerprint, last: usize) -> Option<usize> {
        select::select(self.get(fp)?, last)
    }

    /// Number of distinct fingerprints.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of chunks the old content was split into.
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }
}
