//! AVL tree that explains itself.
//!
//! This crate provides:
//! - [`AvlTree`]: a self-balancing binary search tree over unique keys whose
//!   [`insert`](AvlTree::insert) returns an [`InsertReport`] listing every
//!   rotation it applied.
//! - Preorder, inorder and postorder traversals, both collected into a `Vec`
//!   and as lazy iterators.
//! - [`render`]: a plain-text dump of the tree shape with per-node balance factors.
//! - [`keys`]: parsing and presets for key sequences used by the `rustavl` binary.
//!
//! The tree only ever exposes shared borrows of its nodes, so external code can
//! walk the structure but cannot change it.

pub mod keys;
pub mod node;
pub mod render;
pub mod report;
mod rotation;
pub mod traversal;
pub mod tree;

pub use keys::{parse_keys, KeyListError, KeyPreset};
pub use node::Node;
pub use report::{Imbalance, InsertReport, Rotation, RotationDirection};
pub use traversal::{Inorder, Postorder, Preorder, Traversal};
pub use tree::AvlTree;
