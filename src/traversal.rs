use crate::node::Node;
use crate::tree::AvlTree;

/// Depth-first visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree. Keys come out ascending.
    In,
    /// Left subtree, right subtree, node.
    Post,
}

impl Traversal {
    pub const ALL: [Traversal; 3] = [Traversal::Pre, Traversal::In, Traversal::Post];

    pub fn label(&self) -> &'static str {
        match self {
            Traversal::Pre => "Pre-order",
            Traversal::In => "In-order",
            Traversal::Post => "Post-order",
        }
    }
}

impl<K: Clone> AvlTree<K> {
    /// Keys in preorder.
    pub fn preorder(&self) -> Vec<K> {
        self.collect(Traversal::Pre)
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Vec<K> {
        self.collect(Traversal::In)
    }

    /// Keys in postorder.
    pub fn postorder(&self) -> Vec<K> {
        self.collect(Traversal::Post)
    }

    /// Materializes the keys in the given order.
    pub fn collect(&self, order: Traversal) -> Vec<K> {
        let mut output = Vec::with_capacity(self.len());
        fn walk<K: Clone>(node: Option<&Node<K>>, order: Traversal, output: &mut Vec<K>) {
            if let Some(node) = node {
                if order == Traversal::Pre {
                    output.push(node.key().clone());
                }
                walk(node.left(), order, output);
                if order == Traversal::In {
                    output.push(node.key().clone());
                }
                walk(node.right(), order, output);
                if order == Traversal::Post {
                    output.push(node.key().clone());
                }
            }
        }
        walk(self.root(), order, &mut output);
        output
    }
}

impl<K> AvlTree<K> {
    pub fn iter_preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self.root())
    }

    pub fn iter_inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self.root())
    }

    pub fn iter_postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self.root())
    }
}

/// Lazy preorder iterator over borrowed keys.
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Preorder<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Lazy inorder iterator over borrowed keys.
pub struct Inorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Inorder<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut stack = Vec::new();
        Self::push_left(root, &mut stack);
        Self { stack }
    }

    fn push_left(mut node: Option<&'a Node<K>>, stack: &mut Vec<&'a Node<K>>) {
        while let Some(n) = node {
            stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        Self::push_left(node.right(), &mut self.stack);
        Some(node.key())
    }
}

/// Lazy postorder iterator over borrowed keys.
pub struct Postorder<'a, K> {
    // `true` once the node's children have been scheduled.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Postorder<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}
