#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::seq::SliceRandom;
use rand::thread_rng;

use super::*;
use crate::interface::ElementInterface;
use crate::tree::Traversal;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_insert_contains_and_duplicates() {
    let mut tree = BinarySearchTree::ordered();
    for value in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(value).unwrap();
    }

    assert_eq!(tree.len(), 7);
    assert!(tree.contains(&4));
    assert!(!tree.contains(&6));

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
    assert_eq!(
        tree.len(),
        7,
        "A rejected insertion should leave the tree unchanged."
    );
}

#[test]
fn test_in_order_iteration_is_sorted() {
    let mut values: Vec<i32> = (0..100).collect();
    values.shuffle(&mut thread_rng());

    let tree: BinarySearchTree<i32> = values.iter().copied().collect();

    assert_eq!(tree.len(), 100);
    assert_eq!(tree.iter().len(), 100);
    assert!(
        tree.iter().copied().eq(0..100),
        "In-order iteration should visit elements in ascending order."
    );
}

#[test]
fn test_removal_preserves_subtrees() {
    let mut tree = BinarySearchTree::from_iter([5, 3, 8, 1, 4, 7, 9]);

    assert!(tree.remove(&1), "Removing a leaf should succeed.");
    assert!(tree.iter().copied().eq([3, 4, 5, 7, 8, 9]));

    // 3 is down to a single child now.
    assert!(tree.remove(&3));
    assert!(tree.iter().copied().eq([4, 5, 7, 8, 9]));

    // The root holds 5 with two children, so its in-order successor steps up.
    assert!(tree.remove(&5));
    assert!(
        tree.iter().copied().eq([4, 7, 8, 9]),
        "Removing a two-child node should preserve both of its subtrees."
    );

    assert!(
        !tree.remove(&5),
        "Removing an absent element should report false."
    );
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_take_hands_the_element_back() {
    let mut tree = BinarySearchTree::from_iter([2, 1, 3]);

    assert_eq!(tree.take(&2), Some(2));
    assert_eq!(tree.take(&2), None);
    assert_eq!(tree.len(), 2);
    assert!(tree.iter().copied().eq([1, 3]));
}

#[test]
fn test_min_max_and_taking_the_ends() {
    let mut tree = BinarySearchTree::from_iter([4, 2, 6, 1, 3, 5, 7]);

    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&7));
    assert_eq!(tree.take_min(), Some(1));
    assert_eq!(tree.take_max(), Some(7));
    assert_eq!(tree.min(), Some(&2));
    assert_eq!(tree.max(), Some(&6));
    assert_eq!(tree.len(), 5);

    let mut empty = BinarySearchTree::<i32>::ordered();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.take_min(), None);
}

#[test]
fn test_remove_destroys_and_take_does_not() {
    static HOOK_RUNS: AtomicUsize = AtomicUsize::new(0);

    fn hook(element: CountedDrop) {
        HOOK_RUNS.fetch_add(1, Ordering::Relaxed);
        drop(element);
    }

    let counter = CountedDrop::counter();
    let probes = CountedDrop::counter();
    let mut tree = BinarySearchTree::new(ElementInterface::ordered().with_drop(hook));
    for key in [2, 1, 3] {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }

    assert!(tree.remove(&CountedDrop::new(1, &probes)));
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        1,
        "Removal should destroy the element through the drop hook."
    );
    assert_eq!(*counter.borrow(), 1);

    let taken = tree.take(&CountedDrop::new(2, &probes)).unwrap();
    assert_eq!(taken.key, 2);
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        1,
        "Taking should bypass the drop hook."
    );
    assert_eq!(
        *counter.borrow(),
        1,
        "A taken element should come back alive."
    );
    drop(taken);
    assert_eq!(*counter.borrow(), 2);

    tree.clear();
    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        2,
        "Clearing should destroy the remaining elements through the hook."
    );
    assert_eq!(*counter.borrow(), 3);
    assert!(tree.is_empty());
}

#[test]
fn test_clear_shallow_bypasses_the_hook() {
    static HOOK_RUNS: AtomicUsize = AtomicUsize::new(0);

    fn hook(element: CountedDrop) {
        HOOK_RUNS.fetch_add(1, Ordering::Relaxed);
        drop(element);
    }

    let counter = CountedDrop::counter();
    let mut tree = BinarySearchTree::new(ElementInterface::ordered().with_drop(hook));
    for key in 0..4 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }

    tree.clear_shallow();

    assert_eq!(
        HOOK_RUNS.load(Ordering::Relaxed),
        0,
        "A shallow clear should never invoke the drop hook."
    );
    assert_eq!(
        *counter.borrow(),
        4,
        "A shallow clear should still release the elements themselves."
    );
    assert!(tree.is_empty());
}

#[test]
fn test_drop_destroys_through_the_hook() {
    static HOOK_RUNS: AtomicUsize = AtomicUsize::new(0);

    fn hook(element: CountedDrop) {
        HOOK_RUNS.fetch_add(1, Ordering::Relaxed);
        drop(element);
    }

    let counter = CountedDrop::counter();
    let mut tree = BinarySearchTree::new(ElementInterface::ordered().with_drop(hook));
    for key in 0..4 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }
    drop(tree);

    assert_eq!(HOOK_RUNS.load(Ordering::Relaxed), 4);
    assert_eq!(*counter.borrow(), 4);
}

#[test]
fn test_degenerate_chains_tear_down_iteratively() {
    let mut ascending = BinarySearchTree::from_iter(0..10_000);
    assert_eq!(ascending.len(), 10_000);
    assert_eq!(ascending.take_min(), Some(0));
    ascending.clear();
    assert!(ascending.is_empty());

    let descending = BinarySearchTree::from_iter((0..10_000).rev());
    assert_eq!(descending.len(), 10_000);
    drop(descending);
}

#[test]
fn test_traversal_orders() {
    let mut tree = BinarySearchTree::new(ElementInterface::<i32>::ordered().with_debug_display());
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

    rendered.clear();
    BinarySearchTree::new(ElementInterface::<i32>::new().with_debug_display())
        .write_traversal(Traversal::InOrder, &mut rendered)
        .unwrap();
    assert_eq!(rendered, "", "An empty tree should render as nothing.");
}

#[test]
fn test_missing_callbacks_panic() {
    assert_panics!(
        {
            let mut tree = BinarySearchTree::new(ElementInterface::<i32>::new());
            let _ = tree.insert(1);
        },
        "Inserting without a compare callback should panic."
    );
    assert_panics!(
        {
            let tree = BinarySearchTree::from_iter([1, 2]);
            let mut out = String::new();
            let _ = tree.write_traversal(Traversal::InOrder, &mut out);
        },
        "Rendering without a display callback should panic."
    );
}

#[test]
fn test_into_iter_consumes_in_order() {
    let collected: Vec<i32> = BinarySearchTree::from_iter([3, 1, 2]).into_iter().collect();
    assert_eq!(collected, [1, 2, 3]);

    let counter = CountedDrop::counter();
    let mut tree = BinarySearchTree::ordered();
    for key in 0..10 {
        tree.insert(CountedDrop::new(key, &counter)).unwrap();
    }

    let mut iter = tree.into_iter();
    let first = iter.next().unwrap();
    let last = iter.next_back().unwrap();
    assert_eq!(first.key, 0);
    assert_eq!(last.key, 9);
    assert_eq!(iter.len(), 8);

    drop(iter);
    drop(first);
    drop(last);
    assert_eq!(
        *counter.borrow(),
        10,
        "Every element should be dropped exactly once, consumed or not."
    );
}

#[test]
fn test_equality_ignores_shape() {
    let a = BinarySearchTree::from_iter([3, 1, 2]);
    let b = BinarySearchTree::from_iter([1, 2, 3]);
    let c = BinarySearchTree::from_iter([1, 2]);

    assert_eq!(
        a, b,
        "Trees holding equal elements should be equal regardless of shape."
    );
    assert_ne!(a, c);
    assert_eq!(BinarySearchTree::<i32>::default(), BinarySearchTree::ordered());
    assert_eq!(
        BinarySearchTree::from_iter([1, 1, 2]).len(),
        2,
        "Collecting should silently skip duplicate elements."
    );
}

#[test]
fn test_debug_renders_the_shape() {
    let mut tree = BinarySearchTree::ordered();
    for value in [2, 1, 3] {
        tree.insert(value).unwrap();
    }

    assert_eq!(
        format!("{tree:?}"),
        "BinarySearchTree (len: 3):\n\
         ┌    ┌    -\n\
         ┌    (1)\n\
         ┌    └    -\n\
         (2)\n\
         └    ┌    -\n\
         └    (3)\n\
         └    └    -"
    );
}
