use classics::tree::Tree;

use std::collections::HashSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.in_order() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn inserting_twice_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.in_order();
    let height = tree.height();
    tree.extend(xs);

    tree.in_order() == before && tree.height() == height
}

#[quickcheck]
fn min_and_max_are_the_ends(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let values = tree.in_order();

    tree.min() == values.first()
        && tree.max() == values.last()
        && tree.min().is_none() == tree.is_empty()
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    for remove in &removes {
        // We may have inserted the same value multiple times - remove each one.
        while let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }
    still_present.sort_unstable();
    still_present.dedup();

    removes.iter().all(|x| !tree.contains(x)) && tree.in_order() == still_present
}

#[quickcheck]
fn removing_missing_values_changes_nothing(xs: Vec<i8>, missing: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.in_order();
    for x in missing.iter().filter(|x| !xs.contains(*x)) {
        tree.remove(x);
    }

    tree.in_order() == before
}
