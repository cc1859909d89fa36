mod validator;

use bstvalid::{Direction, Node};

/// Builds a balanced BST out of sorted, distinct values.
fn balanced(xs: &[i16]) -> Option<Node<i16>> {
    if xs.is_empty() {
        return None;
    }

    let mid = xs.len() / 2;
    Some(Node::with_children(
        xs[mid],
        balanced(&xs[..mid]),
        balanced(&xs[mid + 1..]),
    ))
}

/// Sorts and dedups `xs` into a balanced BST.
fn search_tree(xs: Vec<i8>) -> Option<Node<i16>> {
    let mut xs: Vec<i16> = xs.into_iter().map(i16::from).collect();
    xs.sort_unstable();
    xs.dedup();
    balanced(&xs)
}

/// Rebuilds `node` with the value at the end of `path` replaced by `data`.
fn replace_at(node: &Node<i16>, path: &[Direction], data: i16) -> Node<i16> {
    let left = node.left();
    let right = node.right();
    match path.split_first() {
        None => Node::with_children(data, left.cloned(), right.cloned()),
        Some((Direction::Left, rest)) => Node::with_children(
            *node.data(),
            left.map(|left| replace_at(left, rest, data)),
            right.cloned(),
        ),
        Some((Direction::Right, rest)) => Node::with_children(
            *node.data(),
            left.cloned(),
            right.map(|right| replace_at(right, rest, data)),
        ),
    }
}

/// Every path from `node` down to one of its descendants, excluding the empty path to `node`
/// itself.
fn descendant_paths(node: &Node<i16>) -> Vec<Vec<Direction>> {
    let mut paths = Vec::new();
    for (step, child) in [(Direction::Left, node.left()), (Direction::Right, node.right())] {
        if let Some(child) = child {
            paths.push(vec![step]);
            for mut rest in descendant_paths(child) {
                rest.insert(0, step);
                paths.push(rest);
            }
        }
    }
    paths
}
