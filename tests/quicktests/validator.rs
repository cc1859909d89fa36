use bstvalid::{is_valid, Direction, Duplicates, Validator};
use quickcheck_macros::quickcheck;

use crate::{descendant_paths, replace_at, search_tree};

#[quickcheck]
fn sorted_distinct_values_make_a_valid_tree(xs: Vec<i8>) -> bool {
    is_valid(search_tree(xs).as_ref())
}

#[quickcheck]
fn duplicating_the_root_anywhere_is_rejected(xs: Vec<i8>) -> bool {
    let Some(tree) = search_tree(xs) else {
        return true;
    };

    descendant_paths(&tree).iter().all(|path| {
        let broken = replace_at(&tree, path, *tree.data());
        let violation = Validator::new().validate(Some(&broken));

        !is_valid(Some(&broken)) && violation.map_err(|v| v.path().to_vec()) == Err(path.clone())
    })
}

/// Values pushed across the root are often still on the correct side of their own parent, so
/// only the root's bound catches them.
#[quickcheck]
fn crossing_the_root_is_rejected(xs: Vec<i8>) -> bool {
    let Some(tree) = search_tree(xs) else {
        return true;
    };
    let root = *tree.data();

    descendant_paths(&tree).iter().all(|path| {
        let crossed = match path[0] {
            Direction::Left => root + 1,
            Direction::Right => root - 1,
        };
        let broken = replace_at(&tree, path, crossed);

        [Duplicates::Reject, Duplicates::Left, Duplicates::Right]
            .iter()
            .all(|&duplicates| {
                let validator = Validator::new().duplicates(duplicates);
                !validator.is_valid(Some(&broken))
                    && !validator.is_valid_iterative(Some(&broken))
                    && validator
                        .validate(Some(&broken))
                        .map_err(|v| v.path().to_vec())
                        == Err(path.clone())
            })
    })
}
