//! One height of the tree

use std::slice;

use crate::digest::Digest;
use crate::hasher::combine;
use crate::node::Node;

/// An ordered row of nodes at one height.
///
/// Level 0 holds the leaves and the last level holds only the root. A level
/// that had an odd number of nodes when it was paired carries a copy of its
/// last node at the end; [`Level::is_padded`] reports that, and [`Level::len`]
/// counts the copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Level {
    nodes: Vec<Node>,
    padded: bool,
}

impl Level {
    pub(crate) const fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            padded: false,
        }
    }

    /// Duplicate the last node when the level has an odd length, so every
    /// node has a partner. The copy reuses the digest rather than rehashing.
    pub(crate) fn pad(&mut self) {
        if self.nodes.len() % 2 == 0 {
            return;
        }
        if let Some(last) = self.nodes.last().copied() {
            self.nodes.push(last);
            self.padded = true;
        }
    }

    /// Pair nodes `(2k, 2k + 1)` into the parent level. Expects [`Level::pad`]
    /// to have been applied.
    pub(crate) fn parents(&self) -> Self {
        debug_assert!(self.nodes.len() % 2 == 0);

        let parent = |(k, pair): (usize, &[Node])| {
            let (left, right) = (2 * k, 2 * k + 1);
            Node::internal(combine(pair[0].digest(), pair[1].digest()), left, right)
        };

        #[cfg(feature = "parallel")]
        let nodes: Vec<Node> = {
            use rayon::prelude::*;
            self.nodes.par_chunks_exact(2).enumerate().map(parent).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let nodes: Vec<Node> = self.nodes.chunks_exact(2).enumerate().map(parent).collect();

        Self::new(nodes)
    }

    /// The nodes at this level, padding node included
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes at this level, padding node included
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct nodes at this level, padding node excluded
    #[inline]
    pub fn width(&self) -> usize {
        self.nodes.len() - usize::from(self.padded)
    }

    /// Levels of a built tree are never empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the last node is a duplicate added for pairing
    #[inline]
    pub const fn is_padded(&self) -> bool {
        self.padded
    }

    /// Get the node at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Iterate over the nodes at this level
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Iterate over the digests at this level
    pub fn digests(&self) -> impl Iterator<Item = &Digest> + '_ {
        self.nodes.iter().map(Node::digest)
    }
}

impl<'a> IntoIterator for &'a Level {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash;

    fn leaves(items: &[&str]) -> Level {
        Level::new(items.iter().map(|item| Node::leaf(hash(item))).collect())
    }

    #[test]
    fn test_pad_odd_level() {
        let mut level = leaves(&["a", "b", "c"]);
        level.pad();

        assert!(level.is_padded());
        assert_eq!(level.len(), 4);
        assert_eq!(level.width(), 3);
        assert_eq!(level.get(3), level.get(2));
        assert_eq!(level.get(3).map(Node::digest), Some(&hash("c")));
    }

    #[test]
    fn test_pad_even_level_is_noop() {
        let mut level = leaves(&["a", "b"]);
        level.pad();

        assert!(!level.is_padded());
        assert_eq!(level.len(), 2);
        assert_eq!(level.width(), 2);
    }

    #[test]
    fn test_parents() {
        let mut level = leaves(&["a", "b", "c"]);
        level.pad();
        let parents = level.parents();

        assert_eq!(parents.len(), 2);
        assert!(!parents.is_padded());

        let first = parents.get(0).unwrap();
        assert_eq!(first.children(), Some((0, 1)));
        assert_eq!(first.digest(), &combine(&hash("a"), &hash("b")));

        let second = parents.get(1).unwrap();
        assert_eq!(second.children(), Some((2, 3)));
        assert_eq!(second.digest(), &combine(&hash("c"), &hash("c")));
    }

    #[test]
    fn test_digests_in_order() {
        let level = leaves(&["a", "b"]);
        let digests: Vec<_> = level.digests().copied().collect();
        assert_eq!(digests, vec![hash("a"), hash("b")]);
    }
}
