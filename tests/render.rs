mod common;

use common::build;
use rustavl::render::{join_keys, structure, EMPTY_TREE};
use rustavl::AvlTree;

#[test]
fn structure_lists_depth_and_balance() {
    let tree = build(&[10, 20, 30, 40, 50, 25]);
    let expected = "\
|0| Node: 30 (BF: 0)
|1|   Node: 20 (BF: 0)
|2|     Node: 10 (BF: 0)
|2|     Node: 25 (BF: 0)
|1|   Node: 40 (BF: -1)
|2|     Node: 50 (BF: 0)
";
    assert_eq!(structure(&tree), expected);
}

#[test]
fn structure_of_empty_tree() {
    let tree: AvlTree<i32> = AvlTree::new();
    assert_eq!(structure(&tree), EMPTY_TREE);
}

#[test]
fn joined_traversal() {
    let tree = build(&[30, 10, 20]);
    assert_eq!(join_keys(&tree.preorder()), "20 10 30");
    assert_eq!(join_keys::<i32>(&[]), "");
}
