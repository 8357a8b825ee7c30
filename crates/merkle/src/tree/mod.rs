//! Tree construction and proof generation.
//!
//! A [`Tree`] is built once from an ordered, non-empty sequence of items and
//! is immutable afterwards. Committing a different data set means building a
//! new tree; [`TreeSlot`](crate::TreeSlot) handles the swap for callers that
//! share the active tree.
//!
//! Construction hashes every item into a leaf, then pairs neighbours level by
//! level until a single root remains. A level with an odd number of nodes has
//! its last node duplicated before pairing. Position is significant: the item
//! at input index `i` is leaf `i`, and reordering items changes the root.

use bytes::Bytes;
use log::{debug, trace};

use crate::constants::expected_proof_length;
use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::hash;
use crate::node::Node;
use crate::proof::{LeafProof, Position, Proof, ProofStep, verify_proof};

mod display;
mod level;
mod stats;

pub use display::TreeDisplay;
pub use level::Level;
pub use stats::Statistics;

#[cfg(test)]
mod tests;

/// A binary hash tree over an ordered sequence of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// The committed items, in input order
    data: Vec<Bytes>,
    /// Level 0 holds the leaves, the last level holds the root
    levels: Vec<Level>,
    root: Digest,
}

impl Tree {
    /// Build a tree over `items`.
    ///
    /// Items are hashed as raw bytes, so strings commit to their UTF-8
    /// encoding. Fails with [`MerkleError::EmptyInput`] when there are no items.
    ///
    /// ```
    /// use arbor_merkle::{Tree, combine, hash};
    ///
    /// let tree = Tree::build(["a", "b"]).unwrap();
    /// assert_eq!(tree.root(), combine(&hash("a"), &hash("b")));
    /// ```
    pub fn build<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let data: Vec<Bytes> = items
            .into_iter()
            .map(|item| Bytes::copy_from_slice(item.as_ref()))
            .collect();
        Self::from_data(data)
    }

    fn from_data(data: Vec<Bytes>) -> Result<Self> {
        if data.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut levels = Vec::with_capacity(expected_proof_length(data.len()) + 1);
        let mut current = Level::new(hash_leaves(&data));

        while current.len() > 1 {
            current.pad();
            trace!(
                "level {}: {} nodes (padded: {})",
                levels.len(),
                current.len(),
                current.is_padded()
            );
            let next = current.parents();
            levels.push(std::mem::replace(&mut current, next));
        }

        let root = match current.get(0) {
            Some(node) => *node.digest(),
            None => return Err(MerkleError::EmptyInput),
        };
        levels.push(current);

        debug!(
            "built tree: leaves={} depth={} root={}",
            data.len(),
            levels.len(),
            root
        );

        Ok(Self { data, levels, root })
    }

    /// The root digest committing to every item and its position
    #[inline]
    pub const fn root(&self) -> Digest {
        self.root
    }

    /// Number of committed items (padding excluded)
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.data.len()
    }

    /// Total number of levels, leaf level included
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Number of combine rounds from the leaves to the root
    #[inline]
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels, leaves first
    #[inline]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The level at height `index`, 0 being the leaves
    #[inline]
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// The committed items, in input order
    #[inline]
    pub fn data(&self) -> &[Bytes] {
        &self.data
    }

    /// The item committed at leaf `index`
    #[inline]
    pub fn leaf_data(&self, index: usize) -> Option<&Bytes> {
        self.data.get(index)
    }

    /// Generate the membership proof for leaf `index`.
    ///
    /// The proof lists one sibling digest per level below the root, ordered
    /// from the leaf upwards, so its length always equals [`Tree::height`].
    pub fn generate_proof(&self, index: usize) -> Result<Proof> {
        if index >= self.leaf_count() {
            return Err(MerkleError::index_out_of_range(index, self.leaf_count()));
        }

        let mut steps = Vec::with_capacity(self.height());
        let mut current = index;

        for (level, nodes) in self.levels[..self.height()].iter().enumerate() {
            let (sibling, position) = if current % 2 == 0 {
                (current + 1, Position::Right)
            } else {
                (current - 1, Position::Left)
            };

            // Every level below the root is padded to an even length
            if let Some(node) = nodes.get(sibling) {
                steps.push(ProofStep::new(*node.digest(), position, level));
            }

            current /= 2;
        }

        trace!("generated proof for leaf {index}: {} steps", steps.len());
        Ok(Proof::new(steps))
    }

    /// Generate the proof for leaf `index` together with the item it covers
    pub fn prove(&self, index: usize) -> Result<LeafProof> {
        let proof = self.generate_proof(index)?;
        let leaf_data = self.data[index].clone();
        Ok(LeafProof {
            index,
            leaf_data,
            proof,
        })
    }

    /// Verify `leaf` and `proof` against this tree's root.
    ///
    /// Like [`verify_proof`], this rejects the empty proof, so it is always
    /// `false` on a single-leaf tree. Use [`Proof::compute_root`] to check a
    /// leaf of a height-0 tree.
    #[inline]
    pub fn verify(&self, leaf: impl AsRef<[u8]>, proof: &Proof) -> bool {
        verify_proof(leaf, proof, &self.root)
    }
}

fn hash_leaves(data: &[Bytes]) -> Vec<Node> {
    // Use parallel hashing only when enabled
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        data.par_iter().map(|item| Node::leaf(hash(item))).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        data.iter().map(|item| Node::leaf(hash(item))).collect()
    }
}
