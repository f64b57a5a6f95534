#![allow(dead_code)]

use rustavl::{AvlTree, Node};

/// Walks the whole tree and panics on the first broken invariant.
/// Returns the number of reachable nodes.
pub fn assert_avl<K: Ord + Clone + std::fmt::Debug>(tree: &AvlTree<K>) -> usize {
    fn check<K: Ord + std::fmt::Debug>(
        node: Option<&Node<K>>,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> (usize, usize) {
        let Some(node) = node else { return (0, 0) };
        if let Some(lower) = lower {
            assert!(node.key() > lower, "{:?} should be above {:?}", node.key(), lower);
        }
        if let Some(upper) = upper {
            assert!(node.key() < upper, "{:?} should be below {:?}", node.key(), upper);
        }
        let (left_height, left_count) = check(node.left(), lower, Some(node.key()));
        let (right_height, right_count) = check(node.right(), Some(node.key()), upper);
        assert_eq!(
            node.height(),
            1 + left_height.max(right_height),
            "stale height at {:?}",
            node.key()
        );
        let balance = left_height as isize - right_height as isize;
        assert_eq!(node.balance_factor(), balance);
        assert!(balance.abs() <= 1, "unbalanced at {:?}: {}", node.key(), balance);
        (node.height(), left_count + right_count + 1)
    }
    let (height, count) = check(tree.root(), None, None);
    assert_eq!(height, tree.height());
    assert_eq!(count, tree.len());
    count
}

pub fn build(keys: &[i32]) -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}
