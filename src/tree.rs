use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};
use crate::report::{Imbalance, InsertReport, Rotation, RotationDirection};
use crate::rotation::{rotate_left, rotate_right};

/// Self-balancing binary search tree over unique keys.
///
/// Every insertion restores the AVL property (child heights differ by at
/// most one at every node) and returns an [`InsertReport`] describing the
/// rotations that were needed. Duplicate keys are ignored.
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    /// Creates an empty [`AvlTree`].
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        node::height_of(self.root())
    }

    /// Read-only view of the root node for structural walks.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Balance factor of `node`, or 0 for an empty subtree.
    pub fn balance_factor(&self, node: Option<&Node<K>>) -> isize {
        node::balance_factor(node)
    }

    /// Drops every node, leaving an empty tree.
    pub fn reset(&mut self) {
        debug!(len = self.len, "resetting tree");
        self.root = None;
        self.len = 0;
    }
}

impl<K: Ord + Clone + fmt::Debug> AvlTree<K> {
    /// Inserts `key` and rebalances the path back to the root.
    ///
    /// The returned report lists the rotations in the order they were applied.
    /// Inserting a key that is already present leaves the tree untouched and
    /// reports no rotation.
    pub fn insert(&mut self, key: K) -> InsertReport<K> {
        let mut report = InsertReport::new(key.clone());
        let mut inserted = false;
        self.root = Some(Self::insert_node(
            self.root.take(),
            key,
            &mut report,
            &mut inserted,
        ));
        if inserted {
            self.len += 1;
        }
        trace!(
            key = ?report.key(),
            inserted,
            rotations = report.rotations().len(),
            height = self.height(),
            "insert finished"
        );
        report
    }

    fn insert_node(
        node: Link<K>,
        key: K,
        report: &mut InsertReport<K>,
        inserted: &mut bool,
    ) -> Box<Node<K>> {
        let mut node = match node {
            Some(node) => node,
            None => {
                *inserted = true;
                return Box::new(Node::new(key));
            }
        };
        match key.cmp(&node.key) {
            Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), key.clone(), report, inserted));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), key.clone(), report, inserted));
            }
            Ordering::Equal => {
                trace!(key = ?key, "duplicate key ignored");
                return node;
            }
        }
        Self::rebalance(node, &key, report)
    }

    /// Restores balance at `node` after an insertion of `key` below it.
    ///
    /// The case is picked by comparing the inserted key with the heavy
    /// child's key, not by the child's own balance factor.
    fn rebalance(mut node: Box<Node<K>>, key: &K, report: &mut InsertReport<K>) -> Box<Node<K>> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            let side = key.cmp(
                node.left()
                    .map(Node::key)
                    .expect("left-heavy node has a left child"),
            );
            return match side {
                Ordering::Less => {
                    Self::record(report, RotationDirection::Right, &node.key, Imbalance::LeftLeft);
                    rotate_right(node)
                }
                Ordering::Greater => {
                    let left = node.left.take().expect("left-heavy node has a left child");
                    Self::record(report, RotationDirection::Left, &left.key, Imbalance::LeftRight);
                    Self::record(report, RotationDirection::Right, &node.key, Imbalance::LeftRight);
                    node.left = Some(rotate_left(left));
                    rotate_right(node)
                }
                Ordering::Equal => node,
            };
        }

        if balance < -1 {
            let side = key.cmp(
                node.right()
                    .map(Node::key)
                    .expect("right-heavy node has a right child"),
            );
            return match side {
                Ordering::Greater => {
                    Self::record(report, RotationDirection::Left, &node.key, Imbalance::RightRight);
                    rotate_left(node)
                }
                Ordering::Less => {
                    let right = node.right.take().expect("right-heavy node has a right child");
                    Self::record(report, RotationDirection::Right, &right.key, Imbalance::RightLeft);
                    Self::record(report, RotationDirection::Left, &node.key, Imbalance::RightLeft);
                    node.right = Some(rotate_right(right));
                    rotate_left(node)
                }
                Ordering::Equal => node,
            };
        }

        node
    }

    fn record(
        report: &mut InsertReport<K>,
        direction: RotationDirection,
        pivot: &K,
        case: Imbalance,
    ) {
        debug!(
            case = case.as_str(),
            direction = direction.as_str(),
            pivot = ?pivot,
            "rotation"
        );
        report.record(Rotation::new(direction, pivot.clone(), case));
    }
}

impl<K: Clone + fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("keys", &self.inorder())
            .finish()
    }
}
