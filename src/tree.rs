//! A Binary Search Tree that is built balanced, mutated without any
//! rebalancing, and rebuilt on request.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! // Duplicates are dropped and the middle value becomes the root.
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//! assert_eq!(tree.height(), 2);
//!
//! tree.insert(7);
//! assert!(tree.contains(&7));
//!
//! tree.delete(&4);
//! assert_eq!(tree.find(&4), None);
//! assert_eq!(tree.in_order(), vec![&1, &2, &3, &5, &6, &7, &9]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::node::{Link, Node};
use crate::sort;
use crate::traversal::{self, InOrder};

/// A Binary Search Tree of unique values (the values double as keys).
///
/// Building from a batch gives a tree of minimal height. [`insert`][Tree::insert]
/// and [`delete`][Tree::delete] leave the shape however they find it, so call
/// [`rebalance`][Tree::rebalance] after a run of mutations.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` for an empty tree. Pass this to the functions
    /// in [`traversal`] to query the whole tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root node. Nothing stops the caller from
    /// breaking the ordering of the tree through it.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Replaces the whole subtree hanging off the root, returning the old one.
    /// This is where the results of [`build`], [`delete`] and [`rebalance`] go
    /// when they were applied to the root.
    pub fn set_root(&mut self, root: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.root, root)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Lazily walks the values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// See [`traversal::level_order`].
    pub fn level_order(&self) -> Vec<&T> {
        traversal::level_order(self.root())
    }

    /// See [`traversal::in_order`].
    pub fn in_order(&self) -> Vec<&T> {
        traversal::in_order(self.root())
    }

    /// See [`traversal::pre_order`].
    pub fn pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.root())
    }

    /// See [`traversal::post_order`].
    pub fn post_order(&self) -> Vec<&T> {
        traversal::post_order(self.root())
    }

    /// Height of the root; -1 when empty.
    pub fn height(&self) -> isize {
        traversal::height(self.root())
    }

    /// See [`traversal::depth`].
    pub fn depth(&self) -> isize {
        traversal::depth(self.root())
    }

    /// See [`traversal::is_balanced`].
    pub fn is_balanced(&self) -> bool {
        traversal::is_balanced(self.root())
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a tree of minimal height holding each distinct value once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 3, 1, 2]);
    /// assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = sort::sorted_unique(values.into_iter().collect());
        debug!(values = values.len(), "building tree");

        Self {
            root: build(values),
        }
    }

    /// Finds the node holding `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::from(vec![1, 2, 3]);
    ///
    /// let two = tree.find(&2).unwrap();
    /// assert_eq!(two.left().map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Greater => current = node.right(),
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Attaches `value` as a new leaf. Larger values go right and everything
    /// else goes left, so inserting a value that's already present adds a
    /// second copy to the left subtree of the first. The tree is not
    /// rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=4 {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.height(), 3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value > node.value {
                &mut node.right
            } else {
                &mut node.left
            };
        }

        *link = Some(Node::new_boxed(value));
    }

    /// Removes the node holding `value`. Deleting a missing value does nothing.
    /// The tree is not rebalanced.
    pub fn delete(&mut self, value: &T) {
        self.root = delete(self.root.take(), value);
    }

    /// Rebuilds the tree into a minimal-height shape with the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    pub fn rebalance(&mut self) {
        self.root = rebalance(self.root.take());
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a subtree of minimal height from ascending, distinct `values`.
///
/// The root is the middle value, `floor((start + end) / 2)` over the inclusive
/// index range, so for an even number of values the left side gets the
/// smaller half. Each half is built the same way. No values gives `None`.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{traversal, tree};
///
/// let root = tree::build(vec![1, 2, 3, 4]);
/// assert_eq!(traversal::level_order(root.as_deref()), vec![&2, &1, &3, &4]);
/// ```
pub fn build<T>(mut values: Vec<T>) -> Link<T> {
    let mid = values.len().checked_sub(1)? / 2;
    let right = values.split_off(mid + 1);
    let value = values.pop()?;

    Some(Box::new(Node::new(value, build(values), build(right))))
}

/// Deletes `value` from the subtree rooted at `node` and returns what should
/// take that subtree's place. The caller has to store the result back in the
/// link `node` came from.
///
/// A node with two children keeps its place and takes on the value of its
/// in-order successor, which is unlinked instead.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{traversal, tree};
///
/// let mut root = tree::build(vec![1, 2, 3]);
/// root = tree::delete(root, &2);
///
/// assert_eq!(root.as_ref().map(|n| *n.value()), Some(3));
/// assert_eq!(traversal::in_order(root.as_deref()), vec![&1, &3]);
/// ```
pub fn delete<T>(node: Link<T>, value: &T) -> Link<T>
where
    T: Ord,
{
    let mut node = node?;

    match value.cmp(&node.value) {
        Ordering::Greater => {
            node.right = delete(node.right.take(), value);
            Some(node)
        }
        Ordering::Less => {
            node.left = delete(node.left.take(), value);
            Some(node)
        }
        Ordering::Equal if node.left.is_none() => node.right.take(),
        Ordering::Equal if node.right.is_none() => node.left.take(),
        Ordering::Equal => {
            trace!("replacing deleted value with its in-order successor");
            if let Some(successor) = take_leftmost(&mut node.right) {
                node.value = successor;
            }
            Some(node)
        }
    }
}

/// Unlinks the leftmost node under `link`, moving its right child into the
/// link that held it, and returns its value.
fn take_leftmost<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        return take_leftmost(&mut link.as_mut()?.left);
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

/// Consumes the subtree rooted at `node` and builds a minimal-height subtree
/// from its values, dropping repeats. The caller has to store the result back
/// in the link `node` came from.
pub fn rebalance<T>(node: Link<T>) -> Link<T>
where
    T: Ord,
{
    let mut values = Vec::new();
    into_in_order(node, &mut values);
    values.dedup();
    debug!(values = values.len(), "rebalancing subtree");

    build(values)
}

fn into_in_order<T>(node: Link<T>, acc: &mut Vec<T>) {
    if let Some(node) = node {
        let Node { value, left, right } = *node;
        into_in_order(left, acc);
        acc.push(value);
        into_in_order(right, acc);
    }
}
