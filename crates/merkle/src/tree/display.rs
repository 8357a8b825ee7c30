//! Human-readable level dump

use std::fmt;

use crate::constants::SHORT_DIGEST_LENGTH;

use super::Tree;

/// Renders a [`Tree`] root first, one section per level.
///
/// Compact mode shortens digests to their first
/// [`SHORT_DIGEST_LENGTH`] hex characters, verbose mode prints them in full.
/// The padding node of an odd level is marked.
///
/// ```text
/// merkle tree (depth 3, height 2)
/// root (1 node)
///   [0] 0bdf27bf7ec894ca...
/// level 1 (2 nodes)
///   [0] 62af5c3cb8da3e4f...
///   [1] d50c873877f38fcb...
/// level 0 (4 nodes)
///   [0] ca978112ca1bbdca...
///   [1] 3e23e8160039594a...
///   [2] 2e7d2c03a9507ae2...
///   [3] 2e7d2c03a9507ae2... (padding)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeDisplay<'a> {
    tree: &'a Tree,
    verbose: bool,
}

impl Tree {
    /// Dump the tree level by level, see [`TreeDisplay`]
    #[inline]
    pub const fn display(&self, verbose: bool) -> TreeDisplay<'_> {
        TreeDisplay {
            tree: self,
            verbose,
        }
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree;
        writeln!(
            f,
            "merkle tree (depth {}, height {})",
            tree.depth(),
            tree.height()
        )?;

        for (height, level) in tree.levels().iter().enumerate().rev() {
            let noun = if level.len() == 1 { "node" } else { "nodes" };
            if height == tree.height() {
                writeln!(f, "root ({} {noun})", level.len())?;
            } else {
                writeln!(f, "level {height} ({} {noun})", level.len())?;
            }

            let last = level.len() - 1;
            for (i, node) in level.iter().enumerate() {
                let digest = if self.verbose {
                    node.digest().to_hex()
                } else {
                    node.digest().short(SHORT_DIGEST_LENGTH)
                };
                if level.is_padded() && i == last {
                    writeln!(f, "  [{i}] {digest} (padding)")?;
                } else {
                    writeln!(f, "  [{i}] {digest}")?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(false), f)
    }
}
