//! Sorting used when building a [`Tree`][crate::Tree] from a batch of values.

/// Sorts `values` ascending by picking the first element as the pivot,
/// splitting the rest into values strictly less than the pivot and values
/// greater than or equal to it, and sorting each half recursively.
///
/// Already sorted input is the worst case: every split is lopsided, the work
/// is quadratic and the recursion is as deep as the input is long.
///
/// # Examples
///
/// ```
/// use rebuild_bst::sort::partition_sort;
///
/// assert_eq!(partition_sort(vec![3, 1, 4, 1, 5]), vec![1, 1, 3, 4, 5]);
/// ```
pub fn partition_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut values = values.into_iter();
    let pivot = match values.next() {
        Some(pivot) => pivot,
        None => return Vec::new(),
    };

    let (less, greater_or_equal): (Vec<T>, Vec<T>) = values.partition(|x| *x < pivot);

    let mut sorted = partition_sort(less);
    sorted.push(pivot);
    sorted.extend(partition_sort(greater_or_equal));
    sorted
}

/// Sorts `values` with [`partition_sort`] and drops repeated values.
pub fn sorted_unique<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut sorted = partition_sort(values);
    sorted.dedup();
    sorted
}
