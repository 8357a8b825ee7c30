//! Tamper detection
//!
//! Checks a known-good value and a possibly modified one against the same
//! proof. A modification is detected when the original verifies and the
//! modified value does not.

use crate::digest::Digest;
use crate::proof::{Proof, verify_proof};

/// Outcome of checking an original and a modified value against one proof
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TamperReport {
    /// Whether the original value verified
    pub original_valid: bool,
    /// Whether the modified value verified
    pub modified_valid: bool,
}

impl TamperReport {
    /// The original verified and the modified value was rejected
    #[inline]
    pub const fn detected(&self) -> bool {
        self.original_valid && !self.modified_valid
    }
}

/// Verify `original` and `modified` against `proof` and `root`.
///
/// Both checks go through [`verify_proof`], which rejects the empty proof of a
/// single-leaf tree. Such a report has both flags `false` and never counts as
/// detected; check height-0 trees with [`Proof::compute_root`].
pub fn detect_tampering(
    original: impl AsRef<[u8]>,
    modified: impl AsRef<[u8]>,
    proof: &Proof,
    root: &Digest,
) -> TamperReport {
    TamperReport {
        original_valid: verify_proof(original, proof, root),
        modified_valid: verify_proof(modified, proof, root),
    }
}
