//! .

use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chunk size used when the caller does not pick one.
pub const DEFAULT_CHUNK_SIZE: usize = 12;

/// How raw file bytes are turned into text. The same decoding is applied
/// to the old and the new content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decoding {
    /// Invalid UTF-8 is an error.
    Utf8,
    /// Invalid sequences become U+FFFD.
    #[default]
    Utf8Lossy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Chunk width in chars. Must be positive.
    pub chunk_size: usize,
    /// Decoding applied to both input files by `build`.
    pub decoding: Decoding,
    /// Where `build` persists the serialized delta, if anywhere.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            decoding: Decoding::default(),
            output: None,
        }
    }
}

impl Config {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

/// One step of the scan over the new content, in new-content order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffEvent<'a> {
    /// The window equals old chunk `position`.
    Match(usize),
    /// Content with no old-chunk counterpart.
    Literal(&'a str),
}

/// `len` consecutive old chunks starting at `start`.
///
/// Serialized as the two-element array `[start, len]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct DeltaRun {
    pub start: usize,
    pub len: usize,
}

impl DeltaRun {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Position one past the last chunk of the run.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

impl From<(usize, usize)> for DeltaRun {
    fn from((start, len): (usize, usize)) -> Self {
        Self { start, len }
    }
}

impl From<DeltaRun> for (usize, usize) {
    fn from(run: DeltaRun) -> Self {
        (run.start, run.len)
    }
}

/// Element of `Delta::segments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Run(DeltaRun),
    Literal(String),
}

impl From<DeltaRun> for Segment {
    fn from(run: DeltaRun) -> Self {
        Segment::Run(run)
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Literal(s.to_owned())
    }
}

/// Description of the new content in terms of old chunks and literals.
///
/// Wire form: `{"modify": bool, "chunkSize": n, "data": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    /// `false` means the new content fingerprints equal to the old one and
    /// `segments` is empty.
    #[serde(rename = "modify")]
    pub modified: bool,
    #[serde(rename = "chunkSize")]
    pub chunk_size: usize,
    #[serde(rename = "data")]
    pub segments: Vec<Segment>,
}

impl Delta {
    pub fn unmodified(chunk_size: usize) -> Self {
        Self {
            modified: false,
            chunk_size,
            segments: Vec::new(),
        }
    }

    pub fn runs(&self) -> impl Iterator<Item = &DeltaRun> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Run(r) => Some(r),
            Segment::Literal(_) => None,
        })
    }

    /// Total chars carried verbatim.
    pub fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(l) => l.chars().count(),
                Segment::Run(_) => 0,
            })
            .sum()
    }
}
