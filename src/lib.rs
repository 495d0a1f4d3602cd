//! This crate exposes a Binary Search Tree (BST) that is built balanced from a
//! batch of values, can be mutated freely afterwards, and can be rebuilt into a
//! balanced shape on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! owns up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Building from a sorted batch picks the middle
//! value as the root of every subtree which keeps the height at `O(lg N)`.
//! Inserting and deleting do **not** rebalance, so a long run of ascending
//! inserts degrades the tree into a list. [`Tree::rebalance`] flattens the
//! tree into sorted order and builds it again.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &9]);
//! assert!(tree.is_balanced());
//!
//! for x in 10..20 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod render;
pub mod sort;
pub mod traversal;
pub mod tree;

#[cfg(test)]
mod test;

pub use node::{Link, Node};
pub use tree::Tree;
