//! Tree vertices

use crate::digest::Digest;

/// A single vertex of the tree.
///
/// Nodes live in per-level arenas owned by the [`Tree`](crate::Tree). An
/// internal node records the positions of its two children in the level
/// directly below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    digest: Digest,
    children: Option<(usize, usize)>,
}

impl Node {
    pub(crate) const fn leaf(digest: Digest) -> Self {
        Self {
            digest,
            children: None,
        }
    }

    pub(crate) const fn internal(digest: Digest, left: usize, right: usize) -> Self {
        Self {
            digest,
            children: Some((left, right)),
        }
    }

    /// The node's digest
    #[inline]
    pub const fn digest(&self) -> &Digest {
        &self.digest
    }

    /// True iff the node has no children
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Positions of the left and right children in the level below
    #[inline]
    pub const fn children(&self) -> Option<(usize, usize)> {
        self.children
    }
}
