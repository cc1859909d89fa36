//! The tree vertex that validation walks over.
//!
//! A [`Node`] exclusively owns its children so a tree built from `Node`s can never share
//! subtrees or contain cycles. Nodes are immutable once built: all children are supplied at
//! construction time.
//!
//! # Examples
//!
//! ```
//! use bstvalid::Node;
//!
//! let tree = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
//!
//! assert_eq!(tree.data(), &2);
//! assert_eq!(tree.left().map(Node::data), Some(&1));
//! assert!(tree.is_valid());
//! ```

/// A binary tree node holding some orderable `data` and up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    data: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Constructs a node with no children.
    pub fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Constructs a node with the given (optional) children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstvalid::Node;
    ///
    /// let tree = Node::with_children(4, Some(Node::new(2)), None);
    ///
    /// assert!(tree.right().is_none());
    /// ```
    pub fn with_children(data: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            data,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Constructs a node with only a left child.
    pub fn with_left(data: T, left: Node<T>) -> Self {
        Self::with_children(data, Some(left), None)
    }

    /// Constructs a node with only a right child.
    pub fn with_right(data: T, right: Node<T>) -> Self {
        Self::with_children(data, None, Some(right))
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Checks whether the tree rooted at this node is a valid BST using the default
    /// [`Validator`][crate::Validator].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstvalid::Node;
    ///
    /// assert!(Node::with_left(2, Node::new(1)).is_valid());
    /// assert!(!Node::with_left(2, Node::new(3)).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        crate::is_valid(Some(self))
    }
}

impl<T> Drop for Node<T> {
    // Stack based drop. Children are detached before they are dropped so dropping a degenerate
    // tree never recurses.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
