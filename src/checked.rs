//! Bounds propagation that bails out with the first [`Violation`] instead of threading a `bool`
//! back up. The early exit is just `?`, caught once by [`validate`].

use crate::error::{Direction, Violation};
use crate::node::Node;
use crate::policy::{Bounds, Duplicates};

pub(crate) fn validate<T: Ord>(
    root: Option<&Node<T>>,
    duplicates: Duplicates,
) -> Result<(), Violation> {
    let mut path = Vec::new();
    ok(root, Bounds::unbounded(), duplicates, &mut path)
}

/// `path` holds the steps from the root down to `node` and is restored before returning `Ok`.
fn ok<'a, T: Ord>(
    node: Option<&'a Node<T>>,
    bounds: Bounds<'a, T>,
    duplicates: Duplicates,
    path: &mut Vec<Direction>,
) -> Result<(), Violation> {
    let Some(node) = node else {
        return Ok(());
    };

    if let Some(bound) = bounds.breach(node.data(), duplicates) {
        return Err(Violation::new(path.clone(), bound));
    }

    path.push(Direction::Left);
    ok(node.left(), bounds.left_of(node.data()), duplicates, path)?;
    path.pop();

    path.push(Direction::Right);
    ok(node.right(), bounds.right_of(node.data()), duplicates, path)?;
    path.pop();

    Ok(())
}
