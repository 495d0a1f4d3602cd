//! The building block of a [`Tree`][crate::Tree].

/// An optional, owned subtree. `None` marks the empty pointer at the bottom
/// of a subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a value and owns its two children (either of which may be
/// empty). It has no pointer back to its parent.
///
/// A `Node` does not check the BST invariant itself. Replacing a child with
/// [`set_left`][Node::set_left] or [`set_right`][Node::set_right] can put
/// values where searches won't find them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `value` and children.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Node;
    ///
    /// let node = Node::new(2, Some(Box::new(Node::leaf(1))), None);
    /// assert_eq!(node.left().map(Node::value), Some(&1));
    /// assert!(node.right().is_none());
    /// ```
    pub fn new(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// Construct a `Node` without children.
    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::leaf(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the root of the left subtree.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the root of the right subtree.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Replaces the left subtree, returning the one that was there.
    pub fn set_left(&mut self, left: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.left, left)
    }

    /// Replaces the right subtree, returning the one that was there.
    pub fn set_right(&mut self, right: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.right, right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
