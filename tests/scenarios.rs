use bstvalid::{is_valid, scenarios, Bound, Direction, Duplicates, Node, Strategy, Validator};
use rstest::rstest;

fn triple(data: i32, left: i32, right: i32) -> Node<i32> {
    Node::with_children(data, Some(Node::new(left)), Some(Node::new(right)))
}

#[rstest]
#[case::balanced(Some(Node::with_children(4, Some(triple(2, 1, 3)), Some(triple(6, 5, 7)))), true)]
#[case::left_child_larger_than_parent(
    Some(Node::with_children(4, Some(triple(2, 3, 3)), Some(triple(6, 5, 7)))),
    false
)]
#[case::grandchild_smaller_than_root(
    Some(Node::with_children(4, Some(triple(2, 1, 3)), Some(triple(6, 1, 7)))),
    false
)]
#[case::single_node(Some(Node::new(5)), true)]
#[case::empty(None, true)]
fn concrete_trees(
    #[case] root: Option<Node<i32>>,
    #[case] expected: bool,
    #[values(Strategy::Recursive, Strategy::Checked, Strategy::Iterative)] strategy: Strategy,
    #[values(Duplicates::Reject, Duplicates::Left, Duplicates::Right)] duplicates: Duplicates,
) {
    let validator = Validator::new().duplicates(duplicates);

    assert_eq!(validator.check(strategy, root.as_ref()), expected);
}

#[rstest]
#[case::left_of_a_left_child(Node::with_left(4, Node::with_left(2, Node::new(3))), vec![Direction::Left, Direction::Left], Bound::Ceiling)]
#[case::right_of_a_left_child(Node::with_left(4, Node::with_right(2, Node::new(5))), vec![Direction::Left, Direction::Right], Bound::Ceiling)]
#[case::left_of_a_right_child(Node::with_right(4, Node::with_left(6, Node::new(3))), vec![Direction::Right, Direction::Left], Bound::Floor)]
#[case::right_of_a_right_child(Node::with_right(4, Node::with_right(6, Node::new(5))), vec![Direction::Right, Direction::Right], Bound::Floor)]
fn violations_point_at_the_offender(
    #[case] tree: Node<i32>,
    #[case] path: Vec<Direction>,
    #[case] bound: Bound,
) {
    let violation = Validator::new().validate(Some(&tree)).unwrap_err();

    assert_eq!(violation.path(), path.as_slice());
    assert_eq!(violation.bound(), bound);
    assert!(!tree.is_valid());
}

#[rstest]
#[case::reject(Duplicates::Reject, false, false)]
#[case::left(Duplicates::Left, true, false)]
#[case::right(Duplicates::Right, false, true)]
fn duplicate_policy(
    #[case] duplicates: Duplicates,
    #[case] left_ok: bool,
    #[case] right_ok: bool,
) {
    let validator = Validator::new().duplicates(duplicates);
    let left = Node::with_children(5, Some(Node::with_right(3, Node::new(5))), None);
    let right = Node::with_children(5, None, Some(Node::with_left(8, Node::new(5))));

    assert_eq!(validator.is_valid(Some(&left)), left_ok);
    assert_eq!(validator.is_valid(Some(&right)), right_ok);
}

#[test]
fn bundled_scenarios_hold() {
    for scenario in scenarios::all() {
        assert_eq!(
            is_valid(scenario.root.as_ref()),
            scenario.expected,
            "{}",
            scenario.name
        );
    }
}

#[test]
fn strings_are_orderable_too() {
    let tree = Node::with_children("m", Some(Node::new("c")), Some(Node::new("x")));

    assert!(is_valid(Some(&tree)));
}
