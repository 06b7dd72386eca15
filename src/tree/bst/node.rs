use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter, Write};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::interface::{CompareFn, DisplayFn};
use crate::tree::error::InsertError;
use crate::tree::traversal::{write_separated, Traversal};

pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub element: T,
}

impl<T> Branch<T> {
    pub fn insert(&mut self, element: T, compare: CompareFn<T>) -> Result<(), InsertError<T>> {
        let mut branch = self;
        loop {
            let ordering = match &branch.0 {
                Some(node) => compare(&element, &node.element),
                None => break,
            };
            match ordering {
                Ordering::Less => branch = &mut branch.0.as_mut().unwrap().left,
                Ordering::Greater => branch = &mut branch.0.as_mut().unwrap().right,
                Ordering::Equal => return Err(InsertError::duplicate(element)),
            }
        }
        branch.0 = Some(Box::new(Node {
            left: None.into(),
            right: None.into(),
            element,
        }));
        Ok(())
    }

    pub fn contains(&self, element: &T, compare: CompareFn<T>) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            match compare(element, &node.element) {
                Ordering::Less => branch = &node.left,
                Ordering::Greater => branch = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Removes the node holding an element equal to the provided one and returns its element, if
    /// such a node exists.
    pub fn take(&mut self, element: &T, compare: CompareFn<T>) -> Option<T> {
        let mut branch = self;
        loop {
            let ordering = match &branch.0 {
                None => return None,
                Some(node) => compare(element, &node.element),
            };
            match ordering {
                Ordering::Less => branch = &mut branch.0.as_mut().unwrap().left,
                Ordering::Greater => branch = &mut branch.0.as_mut().unwrap().right,
                Ordering::Equal => return Some(branch.unlink()),
            }
        }
    }

    /// Unlinks the node at the base of this branch and returns its element.
    ///
    /// A node with one child is replaced by that child. A node with two children keeps its place
    /// but adopts the element of its in-order successor, whose own node is spliced out instead.
    fn unlink(&mut self) -> T {
        // SAFETY: Callers only unlink a branch they have just matched as occupied.
        let mut node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };
        match (node.left.is_some(), node.right.is_some()) {
            (false, false) => node.element,
            (true, false) => {
                self.0 = node.left.0;
                node.element
            },
            (false, true) => {
                self.0 = node.right.0;
                node.element
            },
            (true, true) => {
                // SAFETY: The right subtree is occupied, so it has a minimum to take.
                let successor = unsafe { node.right.take_min().unwrap_unchecked() };
                let element = mem::replace(&mut node.element, successor);
                self.0 = Some(node);
                element
            },
        }
    }

    pub fn min(&self) -> Option<&T> {
        let mut branch = self;
        let mut result = None;
        while let Some(node) = &branch.0 {
            result = Some(&node.element);
            branch = &node.left;
        }
        result
    }

    pub fn max(&self) -> Option<&T> {
        let mut branch = self;
        let mut result = None;
        while let Some(node) = &branch.0 {
            result = Some(&node.element);
            branch = &node.right;
        }
        result
    }

    pub fn take_min(&mut self) -> Option<T> {
        let mut branch = self;
        loop {
            match &branch.0 {
                None => return None,
                Some(node) if node.left.is_some() => {},
                Some(_) => break,
            }
            branch = &mut branch.0.as_mut().unwrap().left;
        }
        // SAFETY: The loop above only breaks on an occupied branch.
        let node = unsafe { mem::take(&mut branch.0).unwrap_unchecked() };
        branch.0 = node.right.0;
        Some(node.element)
    }

    pub fn take_max(&mut self) -> Option<T> {
        let mut branch = self;
        loop {
            match &branch.0 {
                None => return None,
                Some(node) if node.right.is_some() => {},
                Some(_) => break,
            }
            branch = &mut branch.0.as_mut().unwrap().right;
        }
        // SAFETY: The loop above only breaks on an occupied branch.
        let node = unsafe { mem::take(&mut branch.0).unwrap_unchecked() };
        branch.0 = node.left.0;
        Some(node.element)
    }

    pub fn for_each(&self, order: Traversal, visit: &mut impl FnMut(&T)) {
        match &self.0 {
            None => {},
            Some(node) => match order {
                Traversal::PreOrder => {
                    visit(&node.element);
                    node.left.for_each(order, visit);
                    node.right.for_each(order, visit);
                },
                Traversal::InOrder => {
                    node.left.for_each(order, visit);
                    visit(&node.element);
                    node.right.for_each(order, visit);
                },
                Traversal::PostOrder => {
                    node.left.for_each(order, visit);
                    node.right.for_each(order, visit);
                    visit(&node.element);
                },
                Traversal::Leaves => {
                    if node.left.is_none() && node.right.is_none() {
                        visit(&node.element);
                    } else {
                        node.left.for_each(order, visit);
                        node.right.for_each(order, visit);
                    }
                },
            },
        }
    }

    pub fn write_traversal(
        &self,
        order: Traversal,
        display: DisplayFn<T>,
        separate: &mut bool,
        out: &mut dyn Write,
    ) -> fmt::Result {
        match &self.0 {
            None => Ok(()),
            Some(node) => match order {
                Traversal::PreOrder => {
                    write_separated(&node.element, display, separate, out)?;
                    node.left.write_traversal(order, display, separate, out)?;
                    node.right.write_traversal(order, display, separate, out)
                },
                Traversal::InOrder => {
                    node.left.write_traversal(order, display, separate, out)?;
                    write_separated(&node.element, display, separate, out)?;
                    node.right.write_traversal(order, display, separate, out)
                },
                Traversal::PostOrder => {
                    node.left.write_traversal(order, display, separate, out)?;
                    node.right.write_traversal(order, display, separate, out)?;
                    write_separated(&node.element, display, separate, out)
                },
                Traversal::Leaves => {
                    if node.left.is_none() && node.right.is_none() {
                        write_separated(&node.element, display, separate, out)
                    } else {
                        node.left.write_traversal(order, display, separate, out)?;
                        node.right.write_traversal(order, display, separate, out)
                    }
                },
            },
        }
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.element,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
