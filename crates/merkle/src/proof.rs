//! Membership proofs and their verification.
//!
//! A [`Proof`] lists, for every level between a leaf and the root, the digest
//! of the sibling node and the side it sits on. Verification needs only the
//! claimed leaf value, the proof and a root to compare against; no tree
//! instance is involved.

use std::slice;

use bytes::Bytes;
use log::trace;

use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::{combine, hash};

/// Which side a sibling sits on relative to the node being authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// The sibling is the left child; the running digest is the right operand
    Left,
    /// The sibling is the right child; the running digest is the left operand
    Right,
}

impl Position {
    /// Returns the string representation of the position
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// One level of a membership proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofStep {
    /// Digest of the sibling node
    pub sibling: Digest,
    /// Side the sibling sits on
    pub position: Position,
    /// Source level, 0 being the leaf level
    pub level: usize,
}

impl ProofStep {
    /// Create a new proof step
    pub const fn new(sibling: Digest, position: Position, level: usize) -> Self {
        Self {
            sibling,
            position,
            level,
        }
    }

    /// Assemble a step from its textual parts, e.g. as received from a client
    pub fn parse(sibling: &str, position: &str, level: usize) -> Result<Self> {
        let sibling = sibling.parse()?;
        let position = position
            .parse()
            .map_err(|_| MerkleError::invalid_position(position))?;
        Ok(Self::new(sibling, position, level))
    }

    /// Fold this step into the running digest
    #[inline]
    pub fn apply(&self, current: &Digest) -> Digest {
        match self.position {
            Position::Right => combine(current, &self.sibling),
            Position::Left => combine(&self.sibling, current),
        }
    }
}

/// Ordered sibling path from a leaf to the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ProofStep>", into = "Vec<ProofStep>")
)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    pub(crate) const fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// The steps, leaf first
    #[inline]
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of steps, equal to the height of the tree that produced it
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for proofs from single-leaf trees
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps, leaf first
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }

    /// Recompute the root implied by `leaf` and this proof.
    ///
    /// An empty proof yields `hash(leaf)`.
    pub fn compute_root(&self, leaf: impl AsRef<[u8]>) -> Digest {
        self.steps
            .iter()
            .fold(hash(leaf), |current, step| step.apply(&current))
    }

    /// Verify `leaf` against `root`, see [`verify_proof`]
    #[inline]
    pub fn verify(&self, leaf: impl AsRef<[u8]>, root: &Digest) -> bool {
        verify_proof(leaf, self, root)
    }
}

impl TryFrom<Vec<ProofStep>> for Proof {
    type Error = MerkleError;

    /// Accepts steps only when their levels read `0, 1, 2, ...`
    fn try_from(steps: Vec<ProofStep>) -> Result<Self> {
        if let Some((i, step)) = steps
            .iter()
            .enumerate()
            .find(|(i, step)| step.level != *i)
        {
            return Err(MerkleError::misordered_step(i, i, step.level));
        }
        Ok(Self::new(steps))
    }
}

impl From<Proof> for Vec<ProofStep> {
    fn from(proof: Proof) -> Self {
        proof.steps
    }
}

impl AsRef<[ProofStep]> for Proof {
    fn as_ref(&self) -> &[ProofStep] {
        &self.steps
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a ProofStep;
    type IntoIter = slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Proof {
    type Item = ProofStep;
    type IntoIter = std::vec::IntoIter<ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// A proof bundled with the leaf it covers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafProof {
    /// Index of the leaf in the committed sequence
    pub index: usize,
    /// The committed item
    pub leaf_data: Bytes,
    /// Sibling path from the leaf to the root
    pub proof: Proof,
}

impl LeafProof {
    /// Verify the bundled item against `root`.
    ///
    /// Always `false` for a proof from a single-leaf tree, see [`verify_proof`].
    #[inline]
    pub fn verify(&self, root: &Digest) -> bool {
        verify_proof(&self.leaf_data, &self.proof, root)
    }
}

/// Check that `leaf` and `proof` recompute to `root`.
///
/// Returns `false` for an empty proof and for any mismatch; a failed
/// verification is an expected outcome, not an error. Single-leaf trees
/// produce empty proofs, so their leaves never verify here; compare
/// [`Proof::compute_root`] with the root instead.
///
/// ```
/// use arbor_merkle::{Tree, verify_proof};
///
/// let tree = Tree::build(["a", "b", "c"]).unwrap();
/// let proof = tree.generate_proof(1).unwrap();
///
/// assert!(verify_proof("b", &proof, &tree.root()));
/// assert!(!verify_proof("B", &proof, &tree.root()));
/// ```
pub fn verify_proof(leaf: impl AsRef<[u8]>, proof: &Proof, root: &Digest) -> bool {
    if proof.is_empty() {
        trace!("rejecting empty proof");
        return false;
    }

    let computed = proof.compute_root(leaf);
    let valid = computed == *root;
    trace!("proof of {} steps recomputed {computed}, valid: {valid}", proof.len());
    valid
}
