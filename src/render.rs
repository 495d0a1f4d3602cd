//! Text rendering of a tree's shape.
//!
//! The tree is drawn on its side: the right subtree above its parent, the
//! left subtree below it, with branch lines joining each node to its parent.
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// Renders a subtree when formatted with `{}`. Returned by [`pretty`].
pub struct Pretty<'a, T>(Option<&'a Node<T>>);

/// Wraps `node` so that displaying it draws the subtree. An empty subtree
/// draws nothing.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{render, Tree};
///
/// let tree = Tree::from(vec![1, 2, 3]);
/// let drawing = render::pretty(tree.root()).to_string();
///
/// assert_eq!(drawing, "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
pub fn pretty<T>(node: Option<&Node<T>>) -> Pretty<'_, T> {
    Pretty(node)
}

impl<'a, T> fmt::Display for Pretty<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write_node(f, node, "", true),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&pretty(self.root()), f)
    }
}

/// Right subtree, then this node, then the left subtree. `prefix` carries the
/// branch lines of the ancestors.
fn write_node<W, T>(out: &mut W, node: &Node<T>, prefix: &str, is_left: bool) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_node(out, right, &prefix, false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(out, "{}{}{}", prefix, connector, node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_node(out, left, &prefix, true)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_draws_nothing() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }

    #[test]
    fn single_node() {
        assert_eq!(Tree::from(vec![42]).to_string(), "└── 42\n");
    }

    #[test]
    fn draws_nested_branches() {
        let tree = Tree::from(vec![1, 2, 3, 4, 5]);
        let expected = "\
│       ┌── 5
│   ┌── 4
└── 3
    │   ┌── 2
    └── 1
";

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn draws_subtree() {
        let tree = Tree::from(vec![1, 2, 3, 4, 5]);
        let right = tree.root().and_then(Node::right);

        assert_eq!(pretty(right).to_string(), "│   ┌── 5\n└── 4\n");
    }
}
