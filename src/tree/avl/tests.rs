#![cfg(test)]

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::seq::SliceRandom;
use rand::thread_rng;

use super::*;
use crate::interface::ElementInterface;
use crate::tree::{CursorInvalidated, InvalidLimit, Traversal};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn pre_order(tree: &AvlTree<i32>) -> Vec<i32> {
    let mut visited = Vec::new();
    tree.for_each(Traversal::PreOrder, |value| visited.push(*value));
    visited
}

#[test]
fn test_insert_rebalances_adversarial_orders() {
    let mut ascending = AvlTree::ordered();
    for value in 1..=100 {
        ascending.insert(value).unwrap();
        ascending.verify_invariants();
    }
    assert_eq!(ascending.len(), 100);
    assert!(ascending.iter().copied().eq(1..=100));

    let mut descending = AvlTree::ordered();
    for value in (1..=100).rev() {
        descending.insert(value).unwrap();
        descending.verify_invariants();
    }
    assert!(descending.iter().copied().eq(1..=100));

    assert_eq!(
        ascending, descending,
        "Equality should not depend on the insertion order."
    );
}

#[test]
fn test_shuffled_round_trip() {
    let mut values: Vec<i32> = (0..500).collect();
    values.shuffle(&mut thread_rng());

    let mut tree = AvlTree::ordered();
    for &value in &values {
        tree.insert(value).unwrap();
    }
    tree.verify_invariants();
    assert!(tree.iter().copied().eq(0..500));

    values.shuffle(&mut thread_rng());
    for value in &values {
        assert!(tree.remove(value), "Every inserted element should be removable.");
        tree.verify_invariants();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn test_duplicates_are_rejected() {
    let mut tree = AvlTree::from_iter([5, 3, 8]);

    let rejected = tree.insert(5).unwrap_err();
    assert!(
        rejected.kind().is_duplicate(),
        "Inserting an equal element should be rejected as a duplicate."
    );
    assert_eq!(
        rejected.into_element(),
        5,
        "The rejected element should be handed back to the caller."
    );
    assert_eq!(tree.len(), 3);
    tree.verify_invariants();
}

#[test]
fn test_limit_enforcement() {
    let mut tree = AvlTree::ordered();
    tree.set_limit(3);
    assert_eq!(tree.limit(), 3);

    for value in 0..3 {
        tree.insert(value).unwrap();
    }
    assert!(tree.is_full());

    let rejected = tree.insert(3).unwrap_err();
    assert!(
        rejected.kind().is_at_capacity(),
        "Inserting into a full tree should be rejected at capacity."
    );
    assert_eq!(rejected.into_element(), 3);
    assert_eq!(tree.len(), 3, "A rejected insertion should leave the tree unchanged.");

    assert_eq!(
        tree.try_set_limit(2),
        Err(InvalidLimit { limit: 2, len: 3 }),
        "Lowering the limit below the length should fail."
    );
    assert_eq!(tree.limit(), 3, "A failed limit change should leave the limit in place.");

    tree.set_limit(0);
    assert!(!tree.is_full(), "A limit of zero should mean unbounded.");
    tree.insert(3).unwrap();
    assert_eq!(tree.len(), 4);

    assert_panics!(
        {
            let mut tree = AvlTree::from_iter(0..5);
            tree.set_limit(1)
        },
        "Lowering the limit below the length should panic."
    );
}

#[test]
fn test_deletion_cases() {
    let mut tree = AvlTree::from_iter([5, 3, 8, 1, 4, 7, 9]);
    tree.verify_invariants();

    assert!(tree.remove(&1), "Removing a leaf should succeed.");
    tree.verify_invariants();
    assert!(tree.iter().copied().eq([3, 4, 5, 7, 8, 9]));

    // 8 still has both children, so its in-order successor 9 takes its place.
    assert!(tree.remove(&8));
    tree.verify_invariants();
    assert!(
        tree.iter().copied().eq([3, 4, 5, 7, 9]),
        "Removing a two-child node should preserve both of its subtrees."
    );

    // 3 is down to a single child.
    assert!(tree.remove(&3));
    tree.verify_invariants();
    assert!(tree.iter().copied().eq([4, 5, 7, 9]));

    assert!(!tree.remove(&8), "Removing an absent element should report false.");
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_rotation_shapes() {
    // A straight left chain rotates right.
    let tree = AvlTree::from_iter([3, 2, 1]);
    assert_eq!(pre_order(&tree), [2, 1, 3]);
    tree.verify_invariants();

    // A straight right chain rotates left.
    let tree = AvlTree::from_iter([1, 2, 3]);
    assert_eq!(pre_order(&tree), [2, 1, 3]);
    tree.verify_invariants();

    // An inner-heavy left child is rotated left before the node rotates right.
    let tree = AvlTree::from_iter([3, 1, 2]);
    assert_eq!(pre_order(&tree), [2, 1, 3]);
    tree.verify_invariants();

    // An inner-heavy right child, mirrored.
    let tree = AvlTree::from_iter([1, 3, 2]);
    assert_eq!(pre_order(&tree), [2, 1, 3]);
    tree.verify_invariants();

    // Removals rebalance too: losing the left leaf leaves the right side two levels deep.
    let mut tree = AvlTree::from_iter([2, 1, 3, 4]);
    assert!(tree.remove(&1));
    assert_eq!(pre_order(&tree), [3, 2, 4]);
    tree.verify_invariants();
}

#[test]
fn test_split_sum_by_parity() {
    let mut original = AvlTree::ordered();
    for value in 1..=20_000_u64 {
        original.insert(value).unwrap();
    }
    original.verify_invariants();
    let total: u64 = original.iter().sum();
    assert_eq!(total, 200_010_000);

    let mut evens = AvlTree::ordered();
    let mut odds = AvlTree::ordered();
    while let Some(value) = original.pop() {
        if value % 2 == 0 {
            evens.insert(value).unwrap();
        } else {
            odds.insert(value).unwrap();
        }
    }
    assert!(original.is_empty());
    evens.verify_invariants();
    odds.verify_invariants();
    assert_eq!(evens.len() + odds.len(), 20_000);

    let split = evens.iter().sum::<u64>() + odds.iter().sum::<u64>();
    assert_eq!(split, total, "No element should be lost or duplicated by the split.");

    let mut drained = 0_u64;
    while let Some(value) = evens.take_min() {
        drained += value;
    }
    while let Some(value) = odds.take_max() {
        drained += value;
    }
    assert!(
        evens.is_empty() && odds.is_empty(),
        "Both secondary trees should drain to empty."
    );
    assert_eq!(drained, total);
}

#[test]
fn test_version_semantics() {
    let mut tree = AvlTree::from_iter([2, 1, 3]);
    let version = tree.version();

    assert!(!tree.remove(&9));
    assert!(tree.insert(2).is_err());
    assert_eq!(
        tree.version(),
        version,
        "Failed operations should not bump the version."
    );

    tree.insert(4).unwrap();
    assert!(tree.version() > version, "A successful insert should bump the version.");

    let version = tree.version();
    tree.clear();
    assert!(tree.version() > version);

    let version = tree.version();
    tree.clear();
    assert_eq!(
        tree.version(),
        version,
        "Clearing an already empty tree should not bump the version."
    );
}

#[test]
fn test_cursor_validation() {
    let tree = AvlTree::from_iter([2, 1, 3, 4]);

    // An undisturbed cursor walks the whole tree in order.
    let mut cursor = tree.cursor();
    let mut collected = Vec::new();
    while let Some(element) = cursor.next(&tree).unwrap() {
        collected.push(*element);
    }
    assert_eq!(collected, [1, 2, 3, 4]);
    assert_eq!(
        cursor.next(&tree).unwrap(),
        None,
        "An exhausted cursor should keep yielding None."
    );

    // Any structural mutation invalidates an outstanding cursor.
    let mut tree = tree;
    let mut cursor = tree.cursor();
    assert_eq!(cursor.next(&tree).unwrap(), Some(&1));
    tree.insert(5).unwrap();
    assert_eq!(cursor.next(&tree), Err(CursorInvalidated));

    // A cursor refuses to read a tree it was not created from, and a rejected read does not
    // advance it.
    let mut cursor = tree.cursor();
    let other = AvlTree::from_iter([1, 2]);
    assert_eq!(cursor.next(&other), Err(CursorInvalidated));
    assert_eq!(cursor.next(&tree).unwrap(), Some(&1));

    let empty = AvlTree::<i32>::ordered();
    assert_eq!(empty.cursor().next(&empty).unwrap(), None);
}

#[test]
fn test_drop_hook_discipline() {
    static HOOK_RUNS: AtomicUsize = AtomicUsize::new(0);

    fn hook(element: CountedDrop) {
        HOOK_RUNS.fetch_add(1, Ordering::Relaxed);
        drop(element);
    }

    let counter = CountedDrop::counter();
    let probes = CountedDrop::counter();
    let mut tree = AvlTree::new(ElementInterface::ordered().with_drop(hook));
    for key in 0..8 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }

    assert!(tree.remove(&CountedDrop::new(3, &probes)));
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        1,
        "Removal should destroy the element through the drop hook."
    );

    let taken = tree.take(&CountedDrop::new(4, &probes)).unwrap();
    let popped = tree.pop().unwrap();
    let smallest = tree.take_min().unwrap();
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        1,
        "Taking, popping and draining should bypass the drop hook."
    );
    drop(taken);
    drop(popped);
    drop(smallest);
    assert_eq!(*counter.borrow(), 4);

    tree.clear();
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        5,
        "Clearing should destroy every remaining element through the hook."
    );
    assert_eq!(*counter.borrow(), 8);

    for key in 10..14 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }
    tree.clear_shallow();
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        5,
        "A shallow clear should never invoke the drop hook."
    );
    assert_eq!(
        *counter.borrow(),
        12,
        "A shallow clear should still release the elements themselves."
    );

    for key in 20..24 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }
    let mut iter = tree.into_iter();
    let first = iter.next().unwrap();
    drop(iter);
    drop(first);
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        5,
        "Consuming iteration should bypass the hook, consumed or not."
    );
    assert_eq!(*counter.borrow(), 16);

    let mut tree = AvlTree::new(ElementInterface::ordered().with_drop(hook));
    for key in 30..33 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }
    drop(tree);
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        8,
        "Dropping the tree should destroy its elements through the hook."
    );
    assert_eq!(*counter.borrow(), 19);
}

#[test]
fn test_duplication() {
    let mut tree = AvlTree::new(ElementInterface::<i32>::ordered().with_clone_copy());
    for value in [5, 3, 8, 1] {
        tree.insert(value).unwrap();
    }
    tree.set_limit(10);

    let copy = tree.duplicate();
    copy.verify_invariants();
    assert_eq!(copy, tree);
    assert_eq!(copy.len(), 4);
    assert_eq!(copy.limit(), 10, "Duplication should carry the limit over.");
    assert_eq!(copy.version(), 0);

    let mut copy = copy;
    copy.insert(2).unwrap();
    assert!(copy.contains(&2));
    assert!(!tree.contains(&2), "The duplicate should be fully independent.");
    assert_ne!(copy, tree);

    assert_panics!(
        {
            let tree = AvlTree::from_iter([1]);
            let _ = tree.duplicate();
        },
        "Duplicating without a copy callback should panic."
    );
}

#[test]
fn test_queries() {
    let tree = AvlTree::from_iter([4, 2, 6, 1, 3, 5, 7]);

    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&7));
    assert_eq!(tree.peek(), Some(&4));
    assert!(tree.contains(&5));
    assert!(!tree.contains(&9));

    let empty = AvlTree::<i32>::ordered();
    assert_eq!(empty.peek(), None);
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
}

#[test]
fn test_traversal_orders() {
    let mut tree = AvlTree::new(ElementInterface::<i32>::ordered().with_debug_display());
    for value in [4, 2, 6, 1, 3, 5, 7] {
        tree.insert(value).unwrap();
    }

    let mut rendered = String::new();
    tree.write_traversal(Traversal::PreOrder, &mut rendered).unwrap();
    assert_eq!(rendered, "4 2 1 3 6 5 7");

    rendered.clear();
    tree.write_traversal(Traversal::InOrder, &mut rendered).unwrap();
    assert_eq!(rendered, "1 2 3 4 5 6 7");

    rendered.clear();
    tree.write_traversal(Traversal::PostOrder, &mut rendered).unwrap();
    assert_eq!(rendered, "1 3 2 5 7 6 4");

    rendered.clear();
    tree.write_traversal(Traversal::Leaves, &mut rendered).unwrap();
    assert_eq!(rendered, "1 3 5 7");

    let mut visited = Vec::new();
    tree.for_each(Traversal::PostOrder, |value| visited.push(*value));
    assert_eq!(visited, [1, 3, 2, 5, 7, 6, 4]);
}

#[test]
fn test_iteration_from_both_ends() {
    let tree = AvlTree::from_iter(0..10);

    assert!(tree.iter().copied().eq(0..10));
    assert!(tree.iter().rev().copied().eq((0..10).rev()));

    let mut iter = tree.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&9));
    assert_eq!(iter.len(), 8);
    assert!(iter.copied().eq(1..9));

    let mut meet = tree.iter();
    for _ in 0..5 {
        meet.next();
        meet.next_back();
    }
    assert_eq!(meet.next(), None, "The two ends should never walk past each other.");
    assert_eq!(meet.next_back(), None);

    assert!(AvlTree::from_iter([3, 1, 2]).into_iter().eq(1..=3));
    assert!(AvlTree::from_iter([3, 1, 2]).into_iter().rev().eq((1..=3).rev()));
}

#[test]
fn test_equality_and_hashing() {
    let a = AvlTree::from_iter([3, 1, 2]);
    let b = AvlTree::from_iter([1, 2, 3]);
    let c = AvlTree::from_iter([1, 2]);

    assert_eq!(a, b, "Trees holding equal elements should be equal regardless of shape.");
    assert_ne!(a, c);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal trees should hash equally."
    );

    assert_eq!(AvlTree::<i32>::default(), AvlTree::ordered());
    assert_eq!(
        AvlTree::from_iter([1, 1, 2]).len(),
        2,
        "Collecting should silently skip duplicate elements."
    );
}

#[test]
fn test_debug_renders_the_shape() {
    let tree = AvlTree::from_iter([2, 1, 3]);

    assert_eq!(
        format!("{tree:?}"),
        "AvlTree (len: 3):\n\
         ┌    ┌    -\n\
         ┌    (1)\n\
         ┌    └    -\n\
         (2)\n\
         └    ┌    -\n\
         └    (3)\n\
         └    └    -"
    );
}

#[test]
fn test_missing_callbacks_panic() {
    assert_panics!(
        {
            let mut tree = AvlTree::new(ElementInterface::<i32>::new());
            let _ = tree.insert(1);
        },
        "Inserting without a compare callback should panic."
    );
    assert_panics!(
        {
            let tree = AvlTree::<i32>::ordered();
            let mut out = String::new();
            let _ = tree.write_traversal(Traversal::InOrder, &mut out);
        },
        "Rendering without a display callback should panic."
    );
}

#[test]
fn test_zero_sized_elements() {
    let interface =
        ElementInterface::new().with_compare(|_: &ZeroSizedType, _| std::cmp::Ordering::Equal);
    let mut tree = AvlTree::new(interface);

    tree.insert(ZeroSizedType).unwrap();
    assert!(
        tree.insert(ZeroSizedType).is_err(),
        "All zero sized values compare equal, so only one fits."
    );
    assert_eq!(tree.len(), 1);
    assert!(tree.contains(&ZeroSizedType));
    assert_eq!(tree.take(&ZeroSizedType), Some(ZeroSizedType));
    assert!(tree.is_empty());
}
