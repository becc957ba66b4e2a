//! .

use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a content span.
///
/// Two spans with the same fingerprint are treated as equal content.
/// That is a probabilistic equality, the bytes are never compared again.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Fingerprint {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

/// Fingerprint the UTF-8 bytes of `span`.
///
/// Used for whole buffers and single chunks alike, so both are comparable.
pub fn fingerprint(span: &str) -> Fingerprint {
    let mut h = Sha256::new();
    h.update(span.as_bytes());
    Fingerprint(h.finalize().into())
}
