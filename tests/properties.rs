mod common;

use std::collections::BTreeSet;

use common::{assert_avl, build};
use proptest::prelude::*;

proptest! {
    #[test]
    fn inorder_is_sorted_and_complete(keys in proptest::collection::vec(-500i32..500, 0..200)) {
        let tree = build(&keys);
        let distinct: Vec<i32> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(tree.inorder(), distinct.clone());
        prop_assert_eq!(tree.len(), distinct.len());
        prop_assert!(tree.inorder().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_insert_keeps_invariants(keys in proptest::collection::vec(any::<i32>(), 1..150)) {
        let mut tree = rustavl::AvlTree::new();
        for key in keys {
            tree.insert(key);
            assert_avl(&tree);
        }
    }

    #[test]
    fn height_stays_logarithmic(keys in proptest::collection::btree_set(any::<i32>(), 1..400)) {
        let keys: Vec<i32> = keys.into_iter().collect();
        let tree = build(&keys);
        let bound = 1.4405 * ((tree.len() + 2) as f64).log2() - 0.3277;

        prop_assert!((tree.height() as f64) <= bound, "height {} exceeds {}", tree.height(), bound);
    }

    #[test]
    fn duplicate_insert_is_idempotent(
        keys in proptest::collection::vec(-100i32..100, 1..80),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = build(&keys);
        let preorder = tree.preorder();
        let postorder = tree.postorder();
        let len = tree.len();

        let report = tree.insert(keys[pick.index(keys.len())]);

        prop_assert!(report.is_balanced());
        prop_assert_eq!(tree.preorder(), preorder);
        prop_assert_eq!(tree.postorder(), postorder);
        prop_assert_eq!(tree.len(), len);
    }

    #[test]
    fn single_insert_rebalances_at_most_once(keys in proptest::collection::vec(any::<i32>(), 1..150)) {
        let mut tree = rustavl::AvlTree::new();
        for key in keys {
            let report = tree.insert(key);
            prop_assert!(report.rotations().len() <= 2);
            if let [first, second] = report.rotations() {
                prop_assert_eq!(first.case, second.case);
                prop_assert_ne!(first.direction, second.direction);
            }
        }
    }

    #[test]
    fn lazy_and_collected_traversals_agree(keys in proptest::collection::vec(any::<i16>(), 0..100)) {
        let mut tree = rustavl::AvlTree::new();
        for key in keys {
            tree.insert(key);
        }
        prop_assert_eq!(tree.iter_preorder().copied().collect::<Vec<_>>(), tree.preorder());
        prop_assert_eq!(tree.iter_postorder().copied().collect::<Vec<_>>(), tree.postorder());
        prop_assert_eq!(tree.iter_inorder().copied().collect::<Vec<_>>(), tree.inorder());
    }
}
