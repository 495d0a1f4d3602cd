//! Traversals and shape metrics over a subtree.
//!
//! Everything here takes the node to start from so the same functions answer
//! questions about the whole tree (pass [`Tree::root`][crate::Tree::root]) or
//! about any subtree below it. Nothing here mutates the tree.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Values in breadth-first order: level by level, left to right within a
/// level. An empty subtree gives an empty vector.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{traversal, Tree};
///
/// let tree = Tree::from(vec![1, 2, 3, 4, 5]);
/// assert_eq!(traversal::level_order(tree.root()), vec![&3, &1, &4, &2, &5]);
/// ```
pub fn level_order<T>(node: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    let mut queue: VecDeque<&Node<T>> = node.into_iter().collect();

    while let Some(current) = queue.pop_front() {
        values.push(&current.value);
        queue.extend(current.left());
        queue.extend(current.right());
    }

    values
}

/// Values in left, node, right order. For a valid BST this is ascending.
pub fn in_order<T>(node: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    in_order_into(node, &mut values);
    values
}

/// Values in node, left, right order.
pub fn pre_order<T>(node: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    pre_order_into(node, &mut values);
    values
}

/// Values in left, right, node order.
pub fn post_order<T>(node: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    post_order_into(node, &mut values);
    values
}

/// Appends the in-order values of `node` to `acc`. An empty subtree leaves
/// `acc` untouched.
pub fn in_order_into<'a, T>(node: Option<&'a Node<T>>, acc: &mut Vec<&'a T>) {
    if let Some(node) = node {
        in_order_into(node.left(), acc);
        acc.push(&node.value);
        in_order_into(node.right(), acc);
    }
}

/// Appends the pre-order values of `node` to `acc`.
pub fn pre_order_into<'a, T>(node: Option<&'a Node<T>>, acc: &mut Vec<&'a T>) {
    if let Some(node) = node {
        acc.push(&node.value);
        pre_order_into(node.left(), acc);
        pre_order_into(node.right(), acc);
    }
}

/// Appends the post-order values of `node` to `acc`.
pub fn post_order_into<'a, T>(node: Option<&'a Node<T>>, acc: &mut Vec<&'a T>) {
    if let Some(node) = node {
        post_order_into(node.left(), acc);
        post_order_into(node.right(), acc);
        acc.push(&node.value);
    }
}

/// Number of edges on the longest path from `node` down to a leaf.
/// A leaf has height 0 and an empty subtree has height -1.
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => -1,
        Some(node) => height(node.left()).max(height(node.right())) + 1,
    }
}

/// Computed exactly like [`height`]: the longest path from `node` downwards,
/// -1 for an empty subtree. It is not the distance from the root to `node`.
pub fn depth<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => -1,
        Some(node) => depth(node.left()).max(depth(node.right())) + 1,
    }
}

/// Whether the heights of the two subtrees of every node below (and
/// including) `node` differ by at most one. An empty subtree is balanced.
pub fn is_balanced<T>(node: Option<&Node<T>>) -> bool {
    match node {
        None => true,
        Some(node) => {
            (height(node.left()) - height(node.right())).abs() <= 1
                && is_balanced(node.left())
                && is_balanced(node.right())
        }
    }
}

/// A lazy in-order walk over a subtree. It keeps the path of pending
/// ancestors on a stack instead of recursing.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    /// Starts a walk at `node`.
    pub fn new(node: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(node);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}
