//! Summary figures for a built tree

use std::fmt;

use crate::constants::{DIGEST_SCHEME, expected_proof_length};
use crate::digest::Digest;

use super::Tree;

/// Shape and commitment of a [`Tree`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    /// Number of committed items
    pub leaf_count: usize,
    /// Number of levels, leaf level included
    pub depth: usize,
    /// Number of combine rounds from leaf to root
    pub height: usize,
    /// The root digest
    pub root: Digest,
    /// `ceil(log2(leaf_count))`, the number of steps in every proof
    pub expected_proof_length: usize,
    /// Digest and combine scheme the root was computed with
    pub scheme: &'static str,
}

impl Tree {
    /// Summarise the tree
    pub fn statistics(&self) -> Statistics {
        Statistics {
            leaf_count: self.leaf_count(),
            depth: self.depth(),
            height: self.height(),
            root: self.root(),
            expected_proof_length: expected_proof_length(self.leaf_count()),
            scheme: DIGEST_SCHEME,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "leaves={} depth={} height={} proof_length={} root={} ({})",
            self.leaf_count,
            self.depth,
            self.height,
            self.expected_proof_length,
            self.root,
            self.scheme
        )
    }
}
