//! In-place comparison sorts over slices. Both sorts are stable and leave the slice
//! non-decreasing.
//!
//! # Examples
//!
//! ```
//! use classics::sort::{bubble_sort, merge_sort};
//!
//! let mut blocks = [9, 5, 1, 4, 3];
//! bubble_sort(&mut blocks);
//! assert_eq!(blocks, [1, 3, 4, 5, 9]);
//!
//! let mut blocks = vec![9, 5, 1, 4, 3, 8, 2, 7, 6];
//! merge_sort(&mut blocks);
//! assert_eq!(blocks, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

/// Sorts `items` by repeatedly swapping adjacent elements that are out of order. After each
/// pass the largest unsorted element has bubbled up to the end, so each pass is one shorter
/// than the last. Stops early once a pass makes no swaps, so already sorted input takes a
/// single pass.
pub fn bubble_sort<T>(items: &mut [T])
where
    T: Ord,
{
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

/// Sorts `items` by sorting each half recursively and merging the sorted halves. The left half
/// gets the extra element when the length is odd.
///
/// Merging copies both halves into temporary buffers, hence the `Clone` bound.
pub fn merge_sort<T>(items: &mut [T])
where
    T: Ord + Clone,
{
    if items.len() <= 1 {
        return;
    }

    let mid = items.len().div_ceil(2);
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]`. Ties are taken from the left run
/// first which keeps the sort stable.
fn merge<T>(items: &mut [T], mid: usize)
where
    T: Ord + Clone,
{
    let mut left = items[..mid].to_vec().into_iter().peekable();
    let mut right = items[mid..].to_vec().into_iter().peekable();

    for slot in items.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}
