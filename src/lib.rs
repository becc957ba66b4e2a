//! `chunkdelta` – describe a new text buffer in terms of an old one's fixed-size chunks.
//!
//! High‑level rules:
//! * The old content is cut into `chunk_size`-char chunks (the last one may be shorter) and each chunk
//!   is indexed by its SHA‑256 fingerprint.
//! * The new content is scanned with a `chunk_size` window. An indexed window becomes a chunk match and
//!   the window jumps a chunk ahead; otherwise one char becomes literal and the window slides by one.
//! * When several old chunks share a fingerprint the one closest to the previous match wins.
//! * Consecutive chunk matches are run-length encoded as `[start, len]`, literals are carried verbatim.
//! * If both buffers fingerprint equal, the delta is `modify: false` and nothing is scanned.
//!
//! Fingerprint equality stands in for content equality; a collision would be taken as a match.
//!
//! SPDX‑License‑Identifier: Apache‑2.0 OR MIT

mod build;
mod content;
mod encoding;
mod error;
mod hash;
mod index;
mod scan;
mod select;
mod types;

pub use build::{Built, Job, Outcome, build, build_many};
pub use encoding::encode;
pub use error::{Error, Result, Signal};
pub use hash::{Fingerprint, fingerprint};
pub use index::ChunkIndex;
pub use scan::scan;
pub use select::select;
pub use types::{Config, DEFAULT_CHUNK_SIZE, Decoding, Delta, DeltaRun, DiffEvent, Segment};

/// Compute the delta that rebuilds `new` from the chunks of `old`.
pub fn compute_delta(old: &str, new: &str, cfg: &Config) -> Result<Delta> {
    cfg.validate()?;
    let chunk_size = cfg.chunk_size;

    if fingerprint(old) == fingerprint(new) {
        tracing::debug!(chunk_size, "content unchanged");
        return Ok(Delta::unmodified(chunk_size));
    }

    let index = ChunkIndex::build(old, chunk_size);
    let events = scan(new, &index, chunk_size);
    Ok(encode(&events, chunk_size))
}
