//! This crate checks whether a binary tree is a valid Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a [`Node`]. A `Node` stores some value
//! and may have a left and a right child. The invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Note that these invariants are about whole subtrees, not immediate children. In the tree below
//! every child is on the correct side of its parent, but the `1` is in the root's right subtree
//! and is smaller than the root:
//!
//! ```text
//!       4
//!    2     6
//!   1 3   1 7
//! ```
//!
//! ## Bounds propagation
//!
//! Validation walks the tree once while carrying two bounds down from the ancestors. The ceiling
//! is the value of the nearest ancestor whose left subtree holds the node. The floor is the value
//! of the nearest ancestor whose right subtree holds the node. Going left tightens the ceiling and
//! going right tightens the floor. A node is misplaced exactly when it falls outside its bounds.
//!
//! # Examples
//!
//! ```
//! use bstvalid::{is_valid, Node};
//!
//! let tree = Node::with_children(
//!     4,
//!     Some(Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)))),
//!     Some(Node::with_children(6, Some(Node::new(1)), Some(Node::new(7)))),
//! );
//!
//! assert!(!is_valid(Some(&tree)));
//! assert!(is_valid::<i32>(None));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod checked;
mod error;
mod iterative;
mod node;
mod policy;
mod recursive;
pub mod scenarios;
mod validator;


pub use error::{Bound, Direction, Violation};
pub use node::Node;
pub use policy::Duplicates;
pub use validator::{Strategy, Validator};

/// Whether the tree rooted at `root` is a valid BST, rejecting duplicate values.
/// Shorthand for [`Validator::new().is_valid(root)`][Validator::is_valid].
pub fn is_valid<T: Ord>(root: Option<&Node<T>>) -> bool {
    Validator::new().is_valid(root)
}
