use std::fmt::{self, Write};

use crate::node::Node;
use crate::tree::AvlTree;

/// Text returned by [`structure`] for a tree with no nodes.
pub const EMPTY_TREE: &str = "Tree is empty.";

/// Renders one line per node in preorder, indented by depth, with each
/// node's balance factor:
///
/// ```text
/// |0| Node: 20 (BF: 0)
/// |1|   Node: 10 (BF: 0)
/// |1|   Node: 30 (BF: 0)
/// ```
pub fn structure<K: fmt::Display>(tree: &AvlTree<K>) -> String {
    let Some(root) = tree.root() else {
        return EMPTY_TREE.to_string();
    };
    let mut out = String::new();
    fn line<K: fmt::Display>(tree: &AvlTree<K>, node: Option<&Node<K>>, depth: usize, out: &mut String) {
        let Some(node) = node else { return };
        // Writing into a String never fails.
        let _ = writeln!(
            out,
            "|{}| {}Node: {} (BF: {})",
            depth,
            "  ".repeat(depth),
            node.key(),
            tree.balance_factor(Some(node))
        );
        line(tree, node.left(), depth + 1, out);
        line(tree, node.right(), depth + 1, out);
    }
    line(tree, Some(root), 0, &mut out);
    out
}

/// Joins keys with single spaces.
pub fn join_keys<K: fmt::Display>(keys: &[K]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
