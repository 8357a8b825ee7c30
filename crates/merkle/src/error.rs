//! Error types for the arbor-merkle crate
//!
//! Construction and proof generation report failures through [`MerkleError`].
//! Proof verification does not: a tampered value or a proof for another tree
//! simply verifies as `false`. The remaining variants cover proofs assembled
//! from external parts (hex strings, position names, serialized steps) that
//! are structurally malformed.
//!
//! ## Example Usage
//!
//! ```
//! use arbor_merkle::{MerkleError, Tree};
//!
//! let empty: [&str; 0] = [];
//! match Tree::build(empty) {
//!     Err(MerkleError::EmptyInput) => println!("nothing to commit"),
//!     Err(e) => println!("other error: {e}"),
//!     Ok(tree) => println!("root: {}", tree.root()),
//! }
//! ```

use thiserror::Error;

/// Result type for operations in the merkle crate
pub type Result<T> = std::result::Result<T, MerkleError>;

/// Main error type for the merkle crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A tree was requested over zero items
    #[error("cannot build a tree from an empty input")]
    EmptyInput,

    /// A proof was requested for a leaf the tree does not have
    #[error("index {index} out of range: tree has {leaf_count} leaves")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },

    /// A digest could not be decoded from its textual form
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// A proof step position was neither `left` nor `right`
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Proof steps must be ordered leaf to root with levels `0, 1, ...`
    #[error("proof step {step} has level {actual}, expected {expected}")]
    MisorderedStep {
        /// Position of the offending step in the proof.
        step: usize,
        /// The level the step should carry.
        expected: usize,
        /// The level the step carries.
        actual: usize,
    },
}

impl MerkleError {
    /// Create an [`MerkleError::IndexOutOfRange`] error
    pub const fn index_out_of_range(index: usize, leaf_count: usize) -> Self {
        Self::IndexOutOfRange { index, leaf_count }
    }

    /// Create an [`MerkleError::InvalidDigest`] error
    pub fn invalid_digest<S: Into<String>>(msg: S) -> Self {
        Self::InvalidDigest(msg.into())
    }

    /// Create an [`MerkleError::InvalidPosition`] error
    pub fn invalid_position<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPosition(msg.into())
    }

    /// Create an [`MerkleError::MisorderedStep`] error
    pub const fn misordered_step(step: usize, expected: usize, actual: usize) -> Self {
        Self::MisorderedStep {
            step,
            expected,
            actual,
        }
    }
}
