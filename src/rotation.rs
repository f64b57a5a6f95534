use crate::node::Node;

/// Promotes `node.left` to the subtree root. Panics if there is no left child.
pub(crate) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut left = node.left.take().expect("right rotation requires a left child");
    node.left = left.right.take();
    node.update_height();
    left.right = Some(node);
    left.update_height();
    left
}

/// Promotes `node.right` to the subtree root. Panics if there is no right child.
pub(crate) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut right = node.right.take().expect("left rotation requires a right child");
    node.right = right.left.take();
    node.update_height();
    right.left = Some(node);
    right.update_height();
    right
}
