//! SHA-256 digests over record sequences.
//!
//! A digest summarizes a sorted view of the catalog in 32 bytes, so two
//! structures can be checked for agreement without comparing record by
//! record.
//!
//! ## Encoding
//!
//! For each record, in sequence order:
//!
//! ```text
//! len(identifier) identifier len(title) title count(prereqs) [len(p) p]...
//! ```
//!
//! Lengths and counts are `u64` little-endian, so field boundaries are
//! unambiguous.

use sha2::{Digest, Sha256};

use crate::types::SharedRecord;

/// Compute the digest of a record sequence.
///
/// Order matters: the same records in a different order hash differently.
pub fn digest<'a, I>(records: I) -> [u8; 32]
where
    I: IntoIterator<Item = &'a SharedRecord>,
{
    let mut hasher = Sha256::new();

    for record in records {
        update_field(&mut hasher, record.identifier());
        update_field(&mut hasher, record.title());
        hasher.update((record.prerequisites().len() as u64).to_le_bytes());
        for prerequisite in record.prerequisites() {
            update_field(&mut hasher, prerequisite);
        }
    }

    hasher.finalize().into()
}

/// Hex-encode a digest for display
pub fn digest_hex(digest: &[u8; 32]) -> String {
    hex::encode(digest)
}

fn update_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

// ============================================================================
// Unit Tests
// ============================================================================
