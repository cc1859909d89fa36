//! Bounds propagation with a plain recursive walk. Each call answers whether its subtree fits
//! inside the bounds inherited from above and the answer is threaded back up as a `bool`.

use crate::node::Node;
use crate::policy::{Bounds, Duplicates};

pub(crate) fn is_valid<T: Ord>(root: Option<&Node<T>>, duplicates: Duplicates) -> bool {
    ok(root, Bounds::unbounded(), duplicates)
}

fn ok<'a, T: Ord>(
    node: Option<&'a Node<T>>,
    bounds: Bounds<'a, T>,
    duplicates: Duplicates,
) -> bool {
    let Some(node) = node else {
        return true;
    };

    // Fail fast: nothing below a misplaced node needs looking at.
    if bounds.breach(node.data(), duplicates).is_some() {
        return false;
    }

    ok(node.left(), bounds.left_of(node.data()), duplicates)
        && ok(node.right(), bounds.right_of(node.data()), duplicates)
}
