//! Sorted Array Merge
//!
//! Merges two slices that are already in non-decreasing order into one sorted
//! `Vec` with the classic two-pointer walk. The merge is stable: when the heads
//! compare equal, the element from `left` goes first.
//!
//! Complexity: O(n + m) time, a single output allocation of n + m elements.

/// Merge two sorted slices into a new sorted `Vec`.
///
/// Empty inputs are valid. Inputs that are not sorted break the ordering
/// guarantee (the output is still a permutation of both inputs) and trip a
/// debug assertion.
///
/// # Arguments
/// * `left` - First sorted slice; wins ties
/// * `right` - Second sorted slice
///
/// # Example
///
/// ```
/// use array_transforms::merge_sorted;
///
/// let merged = merge_sorted(&[2, 4, 6], &[1, 3, 7]);
/// assert_eq!(merged, vec![1, 2, 3, 4, 6, 7]);
/// ```
pub fn merge_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    debug_assert!(is_sorted(left), "left input is not sorted");
    debug_assert!(is_sorted(right), "right input is not sorted");

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of these is non-empty
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
