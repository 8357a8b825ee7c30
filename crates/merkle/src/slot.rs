//! Holder for the active tree
//!
//! A [`TreeSlot`] owns at most one committed [`Tree`]. Readers take an
//! `Arc<Tree>` snapshot and keep using it even after a newer tree has been
//! committed. Committing builds the replacement outside the lock and swaps it
//! in; a failed build leaves the current tree untouched.
//!
//! ## Example Usage
//!
//! ```
//! use arbor_merkle::TreeSlot;
//!
//! let slot = TreeSlot::new();
//! let first = slot.commit(["a", "b"]).unwrap();
//!
//! let proof = first.generate_proof(0).unwrap();
//! slot.commit(["c", "d", "e"]).unwrap();
//!
//! // The old snapshot still verifies its own proofs
//! assert!(first.verify("a", &proof));
//! assert_eq!(slot.current().unwrap().leaf_count(), 3);
//! ```

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::error::Result;
use crate::tree::Tree;

/// Caller-owned handle to the currently committed tree
#[derive(Debug, Default)]
pub struct TreeSlot {
    current: RwLock<Option<Arc<Tree>>>,
}

impl TreeSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree over `items` and make it the active one.
    ///
    /// On error the previously committed tree stays active.
    pub fn commit<I>(&self, items: I) -> Result<Arc<Tree>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let tree = Arc::new(Tree::build(items)?);
        self.swap(Arc::clone(&tree));
        Ok(tree)
    }

    /// Make `tree` the active one, returning the tree it replaced
    pub fn replace(&self, tree: Tree) -> Option<Arc<Tree>> {
        self.swap(Arc::new(tree))
    }

    fn swap(&self, tree: Arc<Tree>) -> Option<Arc<Tree>> {
        debug!(
            "committing tree: leaves={} root={}",
            tree.leaf_count(),
            tree.root()
        );
        self.current.write().replace(tree)
    }

    /// Snapshot of the active tree, if any
    pub fn current(&self) -> Option<Arc<Tree>> {
        self.current.read().clone()
    }

    /// Whether a tree has been committed
    pub fn is_committed(&self) -> bool {
        self.current.read().is_some()
    }

    /// Drop the active tree, returning it
    pub fn clear(&self) -> Option<Arc<Tree>> {
        self.current.write().take()
    }
}
