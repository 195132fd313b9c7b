use std::cmp::Ordering;

/// Indices of `rows` in sorted order; equal rows keep their input order.
///
/// Each row is decorated with its original index and ties are broken on that index,
/// which makes the result stable regardless of the underlying sort.
pub fn sorted_indices<T, F>(rows: &[T], compare: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    if indices.len() < 2 {
        return indices;
    }

    indices.sort_unstable_by(|&a, &b| compare(&rows[a], &rows[b]).then(a.cmp(&b)));
    indices
}

/// Sorted copy of `rows`; equal rows keep their input order. `rows` is left untouched.
pub fn stable_sort<T, F>(rows: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    sorted_indices(rows, compare)
        .into_iter()
        .map(|index| rows[index].clone())
        .collect()
}
