//! Splits the interior rows into one contiguous range per worker.

use std::ops::Range;

/// Half-open row ranges covering the interior span `[1, dim - 1)`.
///
/// Boundaries start at 1 and advance by `dim / threads` (integer division),
/// with the final boundary forced to `dim - 1` so coverage is complete no
/// matter how the division truncates. Intermediate ranges can be uneven,
/// and when `threads` exceeds the interior row count some ranges come out
/// empty or degenerate (`begin >= end`); such workers simply do nothing.
pub fn interior_row_ranges(dim: usize, threads: usize) -> Vec<Range<usize>> {
    debug_assert!(threads >= 1);
    let step = dim / threads;
    let mut boundaries = Vec::with_capacity(threads + 1);
    boundaries.push(1);
    for n in 0..threads {
        if n == threads - 1 {
            boundaries.push(dim - 1);
        } else {
            boundaries.push(boundaries[n] + step);
        }
    }
    (0..threads)
        .map(|n| boundaries[n]..boundaries[n + 1])
        .collect()
}

/// Rows of `range` that are interior rows of a `dim`-sized grid.
///
/// Mirrors the kernel sweep's interior-only row loop: boundaries that
/// overshoot `dim - 1` are cut back, so a worker can never touch the fixed
/// boundary rows. Degenerate input yields an empty range.
pub fn clamp_to_interior(range: &Range<usize>, dim: usize) -> Range<usize> {
    let hi = range.end.min(dim - 1);
    let lo = range.start.max(1).min(hi);
    lo..hi
}
