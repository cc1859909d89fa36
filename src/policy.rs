//! Equality policy and the floor/ceiling pair carried down a traversal.

use std::cmp::Ordering;

use crate::error::Bound;

/// How values equal to an ancestor's value are treated.
///
/// The BST invariant is strict in both directions, so by default any duplicate makes a tree
/// invalid. Trees that store duplicates on one designated side can opt in to that side.
///
/// # Examples
///
/// ```
/// use bstvalid::{Duplicates, Node, Validator};
///
/// let tree = Node::with_left(2, Node::new(2));
///
/// assert!(!Validator::new().is_valid(Some(&tree)));
/// assert!(Validator::new().duplicates(Duplicates::Left).is_valid(Some(&tree)));
/// assert!(!Validator::new().duplicates(Duplicates::Right).is_valid(Some(&tree)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// Any value equal to one of its ancestors is a violation.
    #[default]
    Reject,
    /// A value equal to an ancestor may appear in that ancestor's left subtree.
    Left,
    /// A value equal to an ancestor may appear in that ancestor's right subtree.
    Right,
}

/// The strictest constraints inherited from a node's ancestors. `ceiling` comes from the nearest
/// ancestor whose left subtree holds the node and `floor` from the nearest ancestor whose right
/// subtree holds it.
pub(crate) struct Bounds<'a, T> {
    ceiling: Option<&'a T>,
    floor: Option<&'a T>,
}

/// Manual implementations so `Bounds` is `Copy` even when `T` isn't.
impl<'a, T> Clone for Bounds<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for Bounds<'a, T> {}

impl<'a, T> Bounds<'a, T> {
    /// The bounds of the root: nothing above it constrains it.
    pub(crate) fn unbounded() -> Self {
        Self {
            ceiling: None,
            floor: None,
        }
    }

    /// Bounds for the left child of a node holding `data`. It keeps the floor in force.
    pub(crate) fn left_of(self, data: &'a T) -> Self {
        Self {
            ceiling: Some(data),
            ..self
        }
    }

    /// Bounds for the right child of a node holding `data`. It keeps the ceiling in force.
    pub(crate) fn right_of(self, data: &'a T) -> Self {
        Self {
            floor: Some(data),
            ..self
        }
    }

    /// Returns the bound `data` breaks, if any. The ceiling is checked first.
    pub(crate) fn breach(&self, data: &T, duplicates: Duplicates) -> Option<Bound>
    where
        T: Ord,
    {
        if let Some(ceiling) = self.ceiling {
            match data.cmp(ceiling) {
                Ordering::Greater => return Some(Bound::Ceiling),
                Ordering::Equal if duplicates != Duplicates::Left => return Some(Bound::Ceiling),
                _ => {}
            }
        }

        if let Some(floor) = self.floor {
            match data.cmp(floor) {
                Ordering::Less => return Some(Bound::Floor),
                Ordering::Equal if duplicates != Duplicates::Right => return Some(Bound::Floor),
                _ => {}
            }
        }

        None
    }
}
