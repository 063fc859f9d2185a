use classics::sort::{bubble_sort, merge_sort};

#[quickcheck]
fn bubble_sort_matches_std(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort();

    let mut sorted = xs;
    bubble_sort(&mut sorted);
    sorted == expected
}

#[quickcheck]
fn merge_sort_matches_std(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort();

    let mut sorted = xs;
    merge_sort(&mut sorted);
    sorted == expected
}

#[quickcheck]
fn sorting_sorted_input_is_a_no_op(xs: Vec<u8>) -> bool {
    let mut sorted = xs;
    sorted.sort();
    let expected = sorted.clone();

    bubble_sort(&mut sorted);
    merge_sort(&mut sorted);
    sorted == expected
}
