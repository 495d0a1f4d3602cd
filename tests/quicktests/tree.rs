use rebuild_bst::{traversal, tree, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set, skipping inserts of
/// values the tree already holds. This way we can ensure that a tree used
/// like a set agrees with `BTreeSet` after a random smattering of inserts,
/// deletes, and rebuilds.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                if !bst.contains(x) {
                    bst.insert(x.clone());
                }
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                // Go through the free function the way a caller holding a
                // bare link would.
                let root = bst.set_root(None);
                bst.set_root(tree::delete(root, x));
                set.remove(x);
            }
            Op::Rebalance => {
                let root = bst.set_root(None);
                bst.set_root(tree::rebalance(root));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
        let mut bst = Tree::from(xs.clone());
        let mut set: BTreeSet<_> = xs.into_iter().collect();

        do_ops(&ops, &mut bst, &mut set);
        bst.iter().eq(set.iter())
            && (i8::MIN..=i8::MAX).all(|x| bst.contains(&x) == set.contains(&x))
    }
}

quickcheck::quickcheck! {
    fn insert_then_find(xs: Vec<u16>, extra: u16) -> bool {
        let mut bst = Tree::from(xs.clone());
        let mut expected: BTreeSet<_> = xs.into_iter().collect();
        if !bst.contains(&extra) {
            bst.insert(extra);
        }
        expected.insert(extra);

        bst.find(&extra).map(|n| *n.value()) == Some(extra) && bst.iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn rebalance_restores_balance(xs: Vec<i32>, ascending: Vec<i32>) -> bool {
        let mut bst = Tree::from(xs);
        let mut ascending = ascending;
        ascending.sort_unstable();
        for x in ascending {
            bst.insert(x);
        }

        let mut before: Vec<i32> = bst.iter().copied().collect();
        before.dedup();
        bst.rebalance();

        bst.is_balanced() && bst.iter().copied().eq(before.into_iter())
    }
}

quickcheck::quickcheck! {
    fn delete_removes_only_that_value(xs: Vec<i8>, victim: i8) -> bool {
        let mut bst = Tree::from(xs.clone());
        let mut expected: BTreeSet<_> = xs.into_iter().collect();
        bst.delete(&victim);
        expected.remove(&victim);

        bst.find(&victim).is_none() && bst.iter().eq(expected.iter())
    }
}

#[test]
fn scenario_from_shuffled_input() {
    let bst = Tree::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);

    assert_eq!(bst.level_order(), vec![&4, &2, &6, &1, &3, &5, &9]);
    assert_eq!(bst.height(), 2);
    assert_eq!(bst.depth(), 2);
    assert!(bst.is_balanced());
}

#[test]
fn subtree_queries() {
    let mut bst = Tree::from((1..=15).collect::<Vec<_>>());
    for x in 16..20 {
        bst.insert(x);
    }

    let right = bst.root().and_then(|n| n.right());
    assert_eq!(traversal::height(right), 6);
    assert!(!traversal::is_balanced(right));
    assert!(traversal::is_balanced(bst.root().and_then(|n| n.left())));

    // Only rebuild the right half.
    if let Some(root) = bst.root_mut() {
        let right = root.set_right(None);
        root.set_right(tree::rebalance(right));
    }

    let expected: Vec<i32> = (1..20).collect();
    assert!(bst.is_balanced());
    assert_eq!(bst.iter().copied().collect::<Vec<_>>(), expected);
}
