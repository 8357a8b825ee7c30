//! Binary hash tree with membership proofs
//!
//! This crate commits an ordered sequence of items to a single SHA-256 root
//! digest and produces short proofs that one item, at one position, is part
//! of that commitment. A verifier needs only the item, the proof and the root.
//!
//! ## Key Components
//!
//! - **Digest function**: [`hash`] for leaves, [`combine`] for parents
//! - **Tree**: built once from the items, immutable afterwards ([`Tree`])
//! - **Proofs**: sibling paths from a leaf to the root ([`Proof`], [`verify_proof`])
//! - **TreeSlot**: explicit handle for the currently committed tree ([`TreeSlot`])
//!
//! ## Usage Examples
//!
//! ```
//! use arbor_merkle::{Tree, verify_proof};
//!
//! let tree = Tree::build(["alice:10", "bob:20", "carol:30"]).unwrap();
//! assert_eq!(tree.depth(), 3);
//!
//! let proof = tree.generate_proof(2).unwrap();
//! assert_eq!(proof.len(), tree.height());
//!
//! // The committed value verifies, an edited one does not
//! assert!(verify_proof("carol:30", &proof, &tree.root()));
//! assert!(!verify_proof("carol:3000", &proof, &tree.root()));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serde serialization/deserialization of digests, proofs
//!   and reports
//! - `parallel`: Hash leaves and pair levels on the rayon thread pool

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-export dependencies that are part of our public API
pub use bytes;

pub mod constants;
pub mod digest;
pub mod error;
mod hasher;
mod node;
pub mod proof;
mod slot;
mod tamper;
pub mod tree;

// Re-export core constants
pub use constants::{DIGEST_SCHEME, HASH_SIZE, expected_proof_length};

// Re-export core types
pub use digest::Digest;
pub use error::{MerkleError, Result};
pub use hasher::{combine, hash, verify_hash};
pub use node::Node;
pub use proof::{LeafProof, Position, Proof, ProofStep, verify_proof};
pub use slot::TreeSlot;
pub use tamper::{TamperReport, detect_tampering};
pub use tree::{Level, Statistics, Tree, TreeDisplay};
