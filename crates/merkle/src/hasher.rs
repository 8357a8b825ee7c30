//! Digest function for leaves and internal nodes
//!
//! Leaves hash the raw item bytes with SHA-256. Internal nodes hash the
//! concatenated lowercase hex encodings of their two children, see
//! [`DIGEST_SCHEME`](crate::constants::DIGEST_SCHEME).

use alloy_primitives::B256;
use ::digest::Digest as _;
use sha2::Sha256;

use crate::constants::HEX_DIGEST_LENGTH;
use crate::digest::Digest;

/// Hash arbitrary bytes into a [`Digest`]
#[inline]
#[must_use]
pub fn hash(data: impl AsRef<[u8]>) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data.as_ref());
    B256::from_slice(hasher.finalize().as_slice()).into()
}

/// Combine two child digests into their parent digest.
///
/// Order matters - `combine(a, b) != combine(b, a)` for distinct digests.
#[inline]
#[must_use]
pub fn combine(left: &Digest, right: &Digest) -> Digest {
    let mut buf = String::with_capacity(2 * HEX_DIGEST_LENGTH);
    buf.push_str(&left.to_hex());
    buf.push_str(&right.to_hex());
    hash(buf)
}

/// Check that `data` hashes to `digest`
#[inline]
pub fn verify_hash(data: impl AsRef<[u8]>, digest: &Digest) -> bool {
    hash(data) == *digest
}
