/// Owned link to a child subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single tree node.
///
/// Nodes are owned exclusively by their parent (or by the tree for the root),
/// so the only way to reach one from outside the crate is through a shared
/// borrow handed out by [`AvlTree::root`](crate::AvlTree::root).
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Height of the subtree rooted here; a leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Left height minus right height.
    pub fn balance_factor(&self) -> isize {
        height_of(self.left()) as isize - height_of(self.right()) as isize
    }

    /// Recomputes the height from the children. Children must already be correct.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height_of(self.left()).max(height_of(self.right()));
    }
}

/// Height of an optional subtree, treating an empty one as 0.
pub fn height_of<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |n| n.height)
}

/// Balance factor of an optional subtree, 0 when empty.
pub fn balance_factor<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(0, Node::balance_factor)
}
