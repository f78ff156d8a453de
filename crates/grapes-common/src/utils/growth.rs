//! Geometric growth policy shared by the node table, adjacency lists and heap.

/// Returns the next capacity after `current`.
///
/// Grows by roughly 12.5% plus a constant, rounded down to a multiple of 4:
/// `0 -> 4 -> 8 -> 12 -> 16 -> 24 -> ...`. The result is always strictly
/// larger than `current`.
#[inline]
#[must_use]
pub const fn next_capacity(current: usize) -> usize {
    (current + (current >> 3) + 6) & !3
}

/// Returns the first capacity in the growth sequence starting at `current`
/// that is at least `required`.
#[must_use]
pub fn capacity_for(current: usize, required: usize) -> usize {
    let mut capacity = current;
    while capacity < required {
        capacity = next_capacity(capacity);
    }
    capacity
}
