//! Describes where a tree stops being a valid BST.

use std::fmt;

use thiserror::Error;

/// One step from a node down to one of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Into the left subtree.
    Left,
    /// Into the right subtree.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Which of a node's inherited constraints it breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The node is too large for an ancestor whose left subtree holds it.
    Ceiling,
    /// The node is too small for an ancestor whose right subtree holds it.
    Floor,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceiling => f.write_str("exceeds its ceiling"),
            Self::Floor => f.write_str("falls below its floor"),
        }
    }
}

/// The first node found to break the BST invariant.
///
/// # Examples
///
/// ```
/// use bstvalid::{Bound, Direction, Node, Validator};
///
/// // The 1 is fine next to its parent 6 but is smaller than the root.
/// let tree = Node::with_right(4, Node::with_left(6, Node::new(1)));
/// let violation = Validator::new().validate(Some(&tree)).unwrap_err();
///
/// assert_eq!(violation.path(), &[Direction::Right, Direction::Left]);
/// assert_eq!(violation.bound(), Bound::Floor);
/// assert_eq!(violation.to_string(), "node at root.right.left falls below its floor");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("node at {} {bound}", DisplayPath(.path))]
pub struct Violation {
    path: Vec<Direction>,
    bound: Bound,
}

impl Violation {
    pub(crate) fn new(path: Vec<Direction>, bound: Bound) -> Self {
        Self { path, bound }
    }

    /// The steps from the root to the offending node. Never empty: the root is unconstrained.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// How many levels below the root the offending node sits.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The bound the offending node breaks.
    pub fn bound(&self) -> Bound {
        self.bound
    }
}

struct DisplayPath<'a>(&'a [Direction]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for step in self.0 {
            write!(f, ".{}", step)?;
        }
        Ok(())
    }
}
