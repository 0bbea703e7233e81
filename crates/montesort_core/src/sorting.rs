//! Top-down merge sort and its insertion-sort hybrid.
//!
//! All sorts are stable and ascending. The `_by` variants take a comparator
//! so that stability can be observed on records that compare equal by key.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Stable in-place insertion sort.
///
/// Each element walks left past every strictly greater neighbour and the
/// skipped run is shifted right by one.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::cmp);
}

pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[i]) == Ordering::Greater {
            j -= 1;
        }
        v[j..=i].rotate_right(1);
    }
}

/// Recursive top-down merge sort.
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, T::cmp);
}

pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, None, &mut compare);
}

/// Merge sort that hands every subrange of length `<= threshold` to
/// [`insertion_sort`].
///
/// The threshold changes only the running time: for every threshold the
/// result is identical to [`merge_sort`]. Thresholds 0 and 1 never reach the
/// insertion sort on a non-trivial range.
pub fn hybrid_merge_sort<T: Ord + Clone>(v: &mut [T], threshold: usize) {
    hybrid_merge_sort_by(v, threshold, T::cmp);
}

pub fn hybrid_merge_sort_by<T, F>(v: &mut [T], threshold: usize, mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, Some(threshold), &mut compare);
}

fn sort_range<T, F>(v: &mut [T], cutoff: Option<usize>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if let Some(threshold) = cutoff
        && len <= threshold
    {
        insertion_sort_by(v, &mut *compare);
        return;
    }
    if len < 2 {
        return;
    }

    // left half takes the middle element, as with an inclusive midpoint
    let mid = len.div_ceil(2);
    sort_range(&mut v[..mid], cutoff, compare);
    sort_range(&mut v[mid..], cutoff, compare);
    merge(v, mid, compare);
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]` through auxiliary copies.
/// Ties are taken from the left run.
fn merge<T, F>(v: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = v[..mid].to_vec();
    let right = v[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in v.iter_mut() {
        let take_left = j == right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// A benchmarked sorting variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Standard,
    Hybrid { threshold: usize },
}

impl SortAlgorithm {
    pub fn label(&self) -> &'static str {
        match self {
            SortAlgorithm::Standard => "standard",
            SortAlgorithm::Hybrid { .. } => "hybrid",
        }
    }

    /// Insertion-sort cutoff, 0 for the standard merge sort
    pub fn threshold(&self) -> usize {
        match self {
            SortAlgorithm::Standard => 0,
            SortAlgorithm::Hybrid { threshold } => *threshold,
        }
    }

    pub fn sort<T: Ord + Clone>(&self, v: &mut [T]) {
        match self {
            SortAlgorithm::Standard => merge_sort(v),
            SortAlgorithm::Hybrid { threshold } => hybrid_merge_sort(v, *threshold),
        }
    }
}
