//! Fixed example trees with known verdicts. The `bstvalid` binary runs these as a smoke test and
//! the tests and benches reuse them.
//!
//! # Examples
//!
//! ```
//! use bstvalid::{is_valid, scenarios};
//!
//! for scenario in scenarios::all() {
//!     assert_eq!(is_valid(scenario.root.as_ref()), scenario.expected, "{}", scenario.name);
//! }
//! ```

use crate::node::Node;

/// A tree paired with whether it is a valid BST. Every verdict holds under any
/// [`Duplicates`][crate::Duplicates] policy.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Short human readable name.
    pub name: &'static str,
    /// The tree, or `None` for the empty tree.
    pub root: Option<Node<i32>>,
    /// Whether `root` is a valid BST.
    pub expected: bool,
}

/// A node with two leaf children.
fn triple(data: i32, left: i32, right: i32) -> Node<i32> {
    Node::with_children(data, Some(Node::new(left)), Some(Node::new(right)))
}

/// Returns every scenario.
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "balanced",
            //     4
            //  2     6
            // 1 3   5 7
            root: Some(Node::with_children(
                4,
                Some(triple(2, 1, 3)),
                Some(triple(6, 5, 7)),
            )),
            expected: true,
        },
        Scenario {
            name: "left child larger than parent",
            //     4
            //  2     6
            // 3 3   5 7
            root: Some(Node::with_children(
                4,
                Some(triple(2, 3, 3)),
                Some(triple(6, 5, 7)),
            )),
            expected: false,
        },
        Scenario {
            name: "grandchild smaller than root",
            //     4
            //  2     6
            // 1 3   1 7
            root: Some(Node::with_children(
                4,
                Some(triple(2, 1, 3)),
                Some(triple(6, 1, 7)),
            )),
            expected: false,
        },
        Scenario {
            name: "grandchild larger than root",
            //     4
            //  2
            //    5
            root: Some(Node::with_left(4, Node::with_right(2, Node::new(5)))),
            expected: false,
        },
        Scenario {
            name: "single node",
            root: Some(Node::new(5)),
            expected: true,
        },
        Scenario {
            name: "empty",
            root: None,
            expected: true,
        },
    ]
}
