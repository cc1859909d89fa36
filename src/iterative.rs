//! Bounds propagation over an explicit stack. The decision is identical to the recursive
//! walk's but call-stack usage stays constant, so degenerate trees of any height can be checked.

use crate::node::Node;
use crate::policy::{Bounds, Duplicates};

pub(crate) fn is_valid<T: Ord>(root: Option<&Node<T>>, duplicates: Duplicates) -> bool {
    let mut stack: Vec<(&Node<T>, Bounds<'_, T>)> = Vec::new();
    stack.extend(root.map(|root| (root, Bounds::unbounded())));

    while let Some((node, bounds)) = stack.pop() {
        if bounds.breach(node.data(), duplicates).is_some() {
            return false;
        }

        // Right goes on first so the left subtree is visited first.
        if let Some(right) = node.right() {
            stack.push((right, bounds.right_of(node.data())));
        }
        if let Some(left) = node.left() {
            stack.push((left, bounds.left_of(node.data())));
        }
    }

    true
}
