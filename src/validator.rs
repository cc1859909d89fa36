//! The configurable entry point for BST validation.
//!
//! A [`Validator`] carries the [`Duplicates`] policy and offers each traversal strategy. Every
//! strategy reaches the same verdict for the same tree and policy. They differ in what they report
//! and in how much call stack they use.
//!
//! # Examples
//!
//! ```
//! use bstvalid::{Duplicates, Node, Strategy, Validator};
//!
//! let tree = Node::with_children(
//!     4,
//!     Some(Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)))),
//!     Some(Node::with_children(6, Some(Node::new(5)), Some(Node::new(7)))),
//! );
//!
//! let validator = Validator::new();
//! assert!(validator.is_valid(Some(&tree)));
//! assert!(validator.is_valid_iterative(Some(&tree)));
//! assert!(validator.validate(Some(&tree)).is_ok());
//! assert!(validator.check(Strategy::Checked, Some(&tree)));
//!
//! // Validators are plain values configured by builder methods.
//! let lenient = validator.duplicates(Duplicates::Right);
//! assert_eq!(lenient.policy(), Duplicates::Right);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::Violation;
use crate::node::Node;
use crate::policy::Duplicates;
use crate::{checked, iterative, recursive};

/// Which traversal a [`Validator`] runs in [`Validator::check`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`Validator::is_valid`].
    #[default]
    Recursive,
    /// [`Validator::validate`].
    Checked,
    /// [`Validator::is_valid_iterative`].
    Iterative,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Recursive, Strategy::Checked, Strategy::Iterative];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recursive => f.write_str("recursive"),
            Self::Checked => f.write_str("checked"),
            Self::Iterative => f.write_str("iterative"),
        }
    }
}

/// Checks trees against the BST invariant under a configured [`Duplicates`] policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Validator {
    duplicates: Duplicates,
}

impl Validator {
    /// A validator that rejects duplicate values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this validator with its duplicate policy replaced.
    pub fn duplicates(self, duplicates: Duplicates) -> Self {
        Self { duplicates }
    }

    /// The duplicate policy in force.
    pub fn policy(&self) -> Duplicates {
        self.duplicates
    }

    /// Whether the tree rooted at `root` is a valid BST. An empty tree is valid.
    ///
    /// This walks the tree recursively so its call-stack use grows with the tree's height. See
    /// [`is_valid_iterative`][Self::is_valid_iterative] for degenerate trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstvalid::{Node, Validator};
    ///
    /// // The bottom-right 1 is less than its parent 6 and also less than the root 4.
    /// let tree = Node::with_children(
    ///     4,
    ///     Some(Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)))),
    ///     Some(Node::with_children(6, Some(Node::new(1)), Some(Node::new(7)))),
    /// );
    ///
    /// assert!(!Validator::new().is_valid(Some(&tree)));
    /// assert!(Validator::new().is_valid::<i32>(None));
    /// ```
    pub fn is_valid<T: Ord>(&self, root: Option<&Node<T>>) -> bool {
        recursive::is_valid(root, self.duplicates)
    }

    /// Like [`is_valid`][Self::is_valid] but explains a failure with the first [`Violation`]
    /// found, visiting left subtrees before right ones.
    pub fn validate<T: Ord>(&self, root: Option<&Node<T>>) -> Result<(), Violation> {
        checked::validate(root, self.duplicates).map_err(|violation| {
            debug!(%violation, depth = violation.depth(), "tree is not a valid BST");
            violation
        })
    }

    /// Like [`is_valid`][Self::is_valid] but walks the tree with a heap allocated stack.
    pub fn is_valid_iterative<T: Ord>(&self, root: Option<&Node<T>>) -> bool {
        iterative::is_valid(root, self.duplicates)
    }

    /// Runs the given strategy and reports only its verdict.
    pub fn check<T: Ord>(&self, strategy: Strategy, root: Option<&Node<T>>) -> bool {
        trace!(%strategy, duplicates = ?self.duplicates, "validating");
        match strategy {
            Strategy::Recursive => self.is_valid(root),
            Strategy::Checked => self.validate(root).is_ok(),
            Strategy::Iterative => self.is_valid_iterative(root),
        }
    }
}
