use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::num::NonZero;
use std::sync::atomic::{self, AtomicU64};

use crate::interface::{CompareFn, CopyFn, DisplayFn, DropFn, ElementInterface};
use crate::tree::error::{InsertError, InvalidLimit};
use crate::tree::traversal::{write_separated, Traversal};
use crate::util::result::ResultExtension;

use super::{Cursor, Iter, Link, Node, NodePtr, subtree_height};

/// Hands out a unique id per tree so that detached cursors can tell trees apart.
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// A self-balancing binary search tree of unique elements, ordered by the compare callback of its
/// [`ElementInterface`].
///
/// Every structural mutation restores the AVL property, that the heights of any node's subtrees
/// differ by at most one, so lookups, insertions and removals stay O(log n) no matter how
/// adversarial the input order is. An optional capacity limit turns the tree into a bounded
/// collection which rejects insertions once full.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert` | O(log n) |
/// | `contains` | O(log n) |
/// | `remove` / `take` | O(log n) |
/// | `min` / `max` | O(log n) |
/// | `peek` | O(1) |
/// | `len` | O(1) |
pub struct AvlTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
    pub(crate) limit: Option<NonZero<usize>>,
    pub(crate) interface: ElementInterface<T>,
    pub(crate) id: u64,
    pub(crate) version: u64,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> AvlTree<T> {
    /// Creates an empty, unbounded tree which orders its elements through the provided interface.
    pub fn new(interface: ElementInterface<T>) -> AvlTree<T> {
        AvlTree {
            root: None,
            len: 0,
            limit: None,
            interface,
            id: NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed),
            version: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates an empty tree ordered by the element type's own [`Ord`] implementation.
    pub fn ordered() -> AvlTree<T>
    where
        T: Ord,
    {
        AvlTree::new(ElementInterface::ordered())
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the tree's capacity limit, where 0 means unbounded.
    pub const fn limit(&self) -> usize {
        match self.limit {
            Some(limit) => limit.get(),
            None => 0,
        }
    }

    /// Returns true once the tree holds as many elements as its limit allows. An unbounded tree
    /// is never full.
    pub const fn is_full(&self) -> bool {
        match self.limit {
            Some(limit) => self.len >= limit.get(),
            None => false,
        }
    }

    /// Bounds the tree to hold at most `limit` elements, where 0 lifts the bound entirely.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is below the current length.
    pub fn set_limit(&mut self, limit: usize) {
        self.try_set_limit(limit).throw()
    }

    /// Bounds the tree to hold at most `limit` elements, where 0 lifts the bound entirely. Fails
    /// without changing anything if `limit` is below the current length.
    pub fn try_set_limit(&mut self, limit: usize) -> Result<(), InvalidLimit> {
        match NonZero::new(limit) {
            Some(bound) if bound.get() < self.len => Err(InvalidLimit {
                limit,
                len: self.len,
            }),
            bound => {
                self.limit = bound;
                Ok(())
            },
        }
    }

    /// Returns a copy of the tree's interface.
    pub const fn interface(&self) -> ElementInterface<T> {
        self.interface
    }

    /// Replaces the tree's interface, which takes effect for all subsequent operations.
    ///
    /// The new compare callback must order elements consistently with the one the tree was built
    /// with, otherwise existing elements become unreachable.
    pub fn set_interface(&mut self, interface: ElementInterface<T>) {
        self.interface = interface;
    }

    /// The number of structural mutations this tree has undergone. [`Cursor`]s use it to detect
    /// that their position may no longer exist.
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Inserts the provided element, rejecting it if the tree is full or if an equal element is
    /// already present. The error hands the element back either way.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn insert(&mut self, element: T) -> Result<(), InsertError<T>> {
        let compare = self.interface.compare();
        if self.is_full() {
            return Err(InsertError::at_capacity(element));
        }
        match self.root {
            None => {
                self.root = Some(NodePtr::from_node(Node {
                    element,
                    height: 1,
                    parent: None,
                    left: None,
                    right: None,
                }));
            },
            Some(root) => {
                let mut current = root;
                let (slot, parent) = loop {
                    match compare(&element, current.element()) {
                        Ordering::Less => match *current.left() {
                            Some(left) => current = left,
                            None => break (current.left_mut(), current),
                        },
                        Ordering::Greater => match *current.right() {
                            Some(right) => current = right,
                            None => break (current.right_mut(), current),
                        },
                        Ordering::Equal => return Err(InsertError::duplicate(element)),
                    }
                };
                let node = NodePtr::from_node(Node {
                    element,
                    height: 1,
                    parent: Some(parent),
                    left: None,
                    right: None,
                });
                *slot = Some(node);
                self.rebalance_from(Some(node));
            },
        }
        self.len += 1;
        self.version += 1;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Returns the element currently sitting at the tree's root.
    pub fn peek(&self) -> Option<&T> {
        Some(self.root?.element())
    }

    pub fn min(&self) -> Option<&T> {
        Some(self.root?.leftmost().element())
    }

    pub fn max(&self) -> Option<&T> {
        Some(self.root?.rightmost().element())
    }

    /// Removes the element equal to the provided one and destroys it, passing it to the
    /// interface's drop hook if one is set. Returns false without mutating if no equal element is
    /// present.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.take(element) {
            Some(removed) => {
                self.release(removed);
                true
            },
            None => false,
        }
    }

    /// Removes the element equal to the provided one and hands it back untouched, bypassing the
    /// drop hook.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn take(&mut self, element: &T) -> Option<T> {
        let node = self.find(element)?;
        Some(self.detach(node))
    }

    /// Removes and returns the element currently sitting at the tree's root.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.root?;
        Some(self.detach(node))
    }

    /// Removes and returns the smallest element.
    pub fn take_min(&mut self) -> Option<T> {
        let node = self.root?.leftmost();
        Some(self.detach(node))
    }

    /// Removes and returns the greatest element.
    pub fn take_max(&mut self) -> Option<T> {
        let node = self.root?.rightmost();
        Some(self.detach(node))
    }

    /// Removes every element, passing each to the interface's drop hook if one is set.
    pub fn clear(&mut self) {
        let hook = self.interface.try_drop().ok();
        self.wipe(hook);
    }

    /// Removes every element without invoking the drop hook.
    pub fn clear_shallow(&mut self) {
        self.wipe(None);
    }

    /// Returns a structure-preserving deep copy, duplicating every element through the
    /// interface's copy callback. The copy keeps the interface and limit but starts with a fresh
    /// identity, so cursors never carry over.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no copy callback.
    pub fn duplicate(&self) -> AvlTree<T> {
        let copy = self.interface.copy();
        AvlTree {
            root: duplicate_subtree(self.root, None, copy),
            len: self.len,
            limit: self.limit,
            interface: self.interface,
            id: NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed),
            version: 0,
            _phantom: PhantomData,
        }
    }

    /// Calls the provided closure on a reference to every element, in the given order.
    pub fn for_each(&self, order: Traversal, mut visit: impl FnMut(&T)) {
        for_each_subtree(self.root, order, &mut visit);
    }

    /// Writes every element in the given order through the interface's display callback,
    /// space-separated.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no display callback.
    pub fn write_traversal(&self, order: Traversal, out: &mut dyn Write) -> fmt::Result {
        let display = self.interface.display();
        let mut separate = false;
        write_subtree(self.root, order, display, &mut separate, out)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a detached cursor positioned before the smallest element. Unlike [`iter`], the
    /// cursor does not borrow the tree, but every read re-validates that the tree has not been
    /// structurally mutated since the cursor was created.
    ///
    /// [`iter`]: AvlTree::iter
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    /// Asserts every structural invariant: parent back-links, strict in-order ascent, stored
    /// heights and the AVL balance bound. Walks the whole tree, so tests only.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback or if any invariant is broken.
    pub(crate) fn verify_invariants(&self) {
        let compare = self.interface.compare();
        if let Some(root) = self.root {
            assert!(
                root.parent().is_none(),
                "The root node should have no parent."
            );
        }
        let count = verify_subtree(self.root, compare);
        assert_eq!(
            count, self.len,
            "The stored length should match the reachable node count."
        );
        let mut previous: Option<&T> = None;
        for element in self {
            if let Some(previous) = previous {
                assert!(
                    compare(previous, element).is_lt(),
                    "In-order iteration should ascend strictly."
                );
            }
            previous = Some(element);
        }
    }

    fn find(&self, element: &T) -> Link<T> {
        let compare = self.interface.compare();
        let mut current = self.root;
        while let Some(node) = current {
            match compare(element, node.element()) {
                Ordering::Less => current = *node.left(),
                Ordering::Greater => current = *node.right(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Unlinks the node and settles the surrounding bookkeeping.
    fn detach(&mut self, node: NodePtr<T>) -> T {
        let element = self.unlink(node);
        self.len -= 1;
        self.version += 1;
        element
    }

    /// Detaches the given node from the tree and returns its element, restoring the AVL property
    /// afterwards. Leaves len and version untouched.
    fn unlink(&mut self, node: NodePtr<T>) -> T {
        match (*node.left(), *node.right()) {
            (None, None) => {
                let parent = *node.parent();
                self.replace_child(parent, node, None);
                let detached = node.take_node();
                self.rebalance_from(parent);
                detached.element
            },
            (Some(child), None) | (None, Some(child)) => {
                let parent = *node.parent();
                *child.parent_mut() = parent;
                self.replace_child(parent, node, Some(child));
                let detached = node.take_node();
                self.rebalance_from(parent);
                detached.element
            },
            (Some(_), Some(right)) => {
                // The in-order successor has no left child, so it can be spliced out directly.
                // Its element then takes over the found node, and the node's original element is
                // the one removed from the tree.
                let successor = right.leftmost();
                let succ_parent = *successor.parent();
                let succ_right = *successor.right();
                if let Some(child) = succ_right {
                    *child.parent_mut() = succ_parent;
                }
                self.replace_child(succ_parent, successor, succ_right);
                let shell = successor.take_node();
                let displaced = mem::replace(node.element_mut(), shell.element);
                self.rebalance_from(succ_parent);
                displaced
            },
        }
    }

    /// Points the parent's child slot, or the root for a parentless node, at `new` in place of
    /// `old`.
    fn replace_child(&mut self, parent: Link<T>, old: NodePtr<T>, new: Link<T>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if *parent.left() == Some(old) {
                    *parent.left_mut() = new;
                } else {
                    *parent.right_mut() = new;
                }
            },
        }
    }

    /// Walks from the given node up to the root, recomputing heights and rotating every subtree
    /// whose balance magnitude reaches 2. Insertions need at most one rotation; removals may
    /// rotate once per level.
    fn rebalance_from(&mut self, start: Link<T>) {
        let mut current = start;
        while let Some(node) = current {
            // The parent is captured first because a rotation reattaches the node below a new
            // subtree root.
            let parent = *node.parent();
            node.update_height();
            let balance = node.balance();
            if balance >= 2 {
                // SAFETY: A balance of 2 requires a right subtree of height >= 2.
                let child = unsafe { (*node.right()).unwrap_unchecked() };
                if subtree_height(*child.right()) < subtree_height(*child.left()) {
                    self.rotate_right(child);
                }
                self.rotate_left(node);
            } else if balance <= -2 {
                // SAFETY: A balance of -2 requires a left subtree of height >= 2.
                let child = unsafe { (*node.left()).unwrap_unchecked() };
                if subtree_height(*child.left()) < subtree_height(*child.right()) {
                    self.rotate_left(child);
                }
                self.rotate_right(node);
            }
            current = parent;
        }
    }

    /// Rotates the subtree rooted at `node` to the left, promoting its right child. The heights
    /// of the two nodes involved are recomputed, demoted node first since the promoted one sits
    /// above it afterwards.
    fn rotate_left(&mut self, node: NodePtr<T>) {
        // SAFETY: Rotations are only requested towards the lighter side, so the opposite child
        // exists.
        let pivot = unsafe { (*node.right()).unwrap_unchecked() };
        let inner = *pivot.left();

        *node.right_mut() = inner;
        if let Some(inner) = inner {
            *inner.parent_mut() = Some(node);
        }

        let parent = *node.parent();
        *pivot.parent_mut() = parent;
        self.replace_child(parent, node, Some(pivot));

        *pivot.left_mut() = Some(node);
        *node.parent_mut() = Some(pivot);

        node.update_height();
        pivot.update_height();
    }

    /// Rotates the subtree rooted at `node` to the right, promoting its left child.
    fn rotate_right(&mut self, node: NodePtr<T>) {
        // SAFETY: Rotations are only requested towards the lighter side, so the opposite child
        // exists.
        let pivot = unsafe { (*node.left()).unwrap_unchecked() };
        let inner = *pivot.right();

        *node.left_mut() = inner;
        if let Some(inner) = inner {
            *inner.parent_mut() = Some(node);
        }

        let parent = *node.parent();
        *pivot.parent_mut() = parent;
        self.replace_child(parent, node, Some(pivot));

        *pivot.right_mut() = Some(node);
        *node.parent_mut() = Some(pivot);

        node.update_height();
        pivot.update_height();
    }

    fn wipe(&mut self, hook: Option<DropFn<T>>) {
        if let Some(root) = self.root.take() {
            drop_subtree(root, hook);
            self.len = 0;
            self.version += 1;
        }
    }

    fn release(&self, element: T) {
        match self.interface.try_drop() {
            Ok(hook) => hook(element),
            Err(_) => drop(element),
        }
    }
}

/// Releases every node of the subtree in post-order. Recursion is fine here since the AVL
/// property bounds the depth logarithmically.
fn drop_subtree<T>(node: NodePtr<T>, hook: Option<DropFn<T>>) {
    if let Some(left) = *node.left() {
        drop_subtree(left, hook);
    }
    if let Some(right) = *node.right() {
        drop_subtree(right, hook);
    }
    let detached = node.take_node();
    if let Some(hook) = hook {
        hook(detached.element);
    }
}

fn duplicate_subtree<T>(link: Link<T>, parent: Link<T>, copy: CopyFn<T>) -> Link<T> {
    let node = link?;
    let duplicate = NodePtr::from_node(Node {
        element: copy(node.element()),
        height: node.height(),
        parent,
        left: None,
        right: None,
    });
    *duplicate.left_mut() = duplicate_subtree(*node.left(), Some(duplicate), copy);
    *duplicate.right_mut() = duplicate_subtree(*node.right(), Some(duplicate), copy);
    Some(duplicate)
}

fn for_each_subtree<T>(link: Link<T>, order: Traversal, visit: &mut impl FnMut(&T)) {
    match link {
        None => {},
        Some(node) => match order {
            Traversal::PreOrder => {
                visit(node.element());
                for_each_subtree(*node.left(), order, visit);
                for_each_subtree(*node.right(), order, visit);
            },
            Traversal::InOrder => {
                for_each_subtree(*node.left(), order, visit);
                visit(node.element());
                for_each_subtree(*node.right(), order, visit);
            },
            Traversal::PostOrder => {
                for_each_subtree(*node.left(), order, visit);
                for_each_subtree(*node.right(), order, visit);
                visit(node.element());
            },
            Traversal::Leaves => {
                if node.left().is_none() && node.right().is_none() {
                    visit(node.element());
                } else {
                    for_each_subtree(*node.left(), order, visit);
                    for_each_subtree(*node.right(), order, visit);
                }
            },
        },
    }
}

fn write_subtree<T>(
    link: Link<T>,
    order: Traversal,
    display: DisplayFn<T>,
    separate: &mut bool,
    out: &mut dyn Write,
) -> fmt::Result {
    match link {
        None => Ok(()),
        Some(node) => match order {
            Traversal::PreOrder => {
                write_separated(node.element(), display, separate, out)?;
                write_subtree(*node.left(), order, display, separate, out)?;
                write_subtree(*node.right(), order, display, separate, out)
            },
            Traversal::InOrder => {
                write_subtree(*node.left(), order, display, separate, out)?;
                write_separated(node.element(), display, separate, out)?;
                write_subtree(*node.right(), order, display, separate, out)
            },
            Traversal::PostOrder => {
                write_subtree(*node.left(), order, display, separate, out)?;
                write_subtree(*node.right(), order, display, separate, out)?;
                write_separated(node.element(), display, separate, out)
            },
            Traversal::Leaves => {
                if node.left().is_none() && node.right().is_none() {
                    write_separated(node.element(), display, separate, out)
                } else {
                    write_subtree(*node.left(), order, display, separate, out)?;
                    write_subtree(*node.right(), order, display, separate, out)
                }
            },
        },
    }
}

fn verify_subtree<T>(link: Link<T>, compare: CompareFn<T>) -> usize {
    match link {
        None => 0,
        Some(node) => {
            if let Some(left) = *node.left() {
                assert!(
                    *left.parent() == Some(node),
                    "A left child should point back to its parent."
                );
                assert!(
                    compare(left.element(), node.element()).is_lt(),
                    "A left child should order before its parent."
                );
            }
            if let Some(right) = *node.right() {
                assert!(
                    *right.parent() == Some(node),
                    "A right child should point back to its parent."
                );
                assert!(
                    compare(right.element(), node.element()).is_gt(),
                    "A right child should order after its parent."
                );
            }
            let left_height = subtree_height(*node.left());
            let right_height = subtree_height(*node.right());
            assert_eq!(
                node.height(),
                1 + left_height.max(right_height),
                "A node's stored height should match its subtrees."
            );
            assert!(
                (right_height - left_height).abs() <= 1,
                "Every node should hold the balance bound."
            );
            verify_subtree(*node.left(), compare) + verify_subtree(*node.right(), compare) + 1
        },
    }
}

fn render_subtree<T: Debug>(link: Link<T>) -> String {
    match link {
        Some(node) => format!(
            "{}\n({:?})\n{}",
            render_subtree(*node.left())
                .lines()
                .map(|l| String::from("┌    ") + l)
                .collect::<Vec<_>>()
                .join("\n"),
            node.element(),
            render_subtree(*node.right())
                .lines()
                .map(|l| String::from("└    ") + l)
                .collect::<Vec<_>>()
                .join("\n")
        ),
        None => String::from("-"),
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    /// Builds an unbounded tree ordered by [`Ord`], silently skipping duplicate elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::ordered();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            let _ = self.insert(element);
        }
    }
}

impl<T: PartialEq> PartialEq for AvlTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlTree<T> {}

impl<T: Hash> Hash for AvlTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for element in self {
            element.hash(state);
        }
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "AvlTree (len: {}):\n{}", self.len, render_subtree(self.root))
    }
}
