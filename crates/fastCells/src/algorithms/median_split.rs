//! Axis-alternating median split.
//!
//! ## Purpose
//!
//! This module splits a range at the median of one coordinate, choosing the
//! axis strictly by recursion depth: latitude on even levels, longitude on
//! odd levels.
//!
//! ## Design notes
//!
//! * **Median Splitting**: uses `select_nth_unstable_by` instead of a full
//!   sort. Only the membership of `[0, mid)` matters to the cell ids, and the
//!   next level reorders each half again.
//! * **Total order**: ties on the axis coordinate are broken by point
//!   identity, so the split does not depend on the incoming order.
//!
//! ## Invariants
//!
//! * `mid = len / 2`; the lower half holds `floor(len / 2)` points.
//! * Every point of `[0, mid)` precedes every point of `[mid, len)` in the
//!   axis order.

use core::cmp::Ordering;

use num_traits::Float;

use crate::algorithms::{RangeSplitter, SplitOutcome};
use crate::primitives::point::Point;

/// Coordinate used to order a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Axis used at `level`.
    #[inline]
    pub fn for_level(level: usize) -> Self {
        if level % 2 == 0 {
            Axis::Latitude
        } else {
            Axis::Longitude
        }
    }

    #[inline]
    fn key<T: Float>(self, p: &Point<T>) -> T {
        match self {
            Axis::Latitude => p.lat,
            Axis::Longitude => p.lon,
        }
    }

    /// Order two points along this axis, identity breaking ties.
    #[inline]
    pub fn compare<T: Float>(self, a: &Point<T>, b: &Point<T>) -> Ordering {
        self.key(a)
            .partial_cmp(&self.key(b))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    }
}

/// Split `range` at its median along `axis` and return `mid`.
pub fn split_at_median<T: Float>(range: &mut [Point<T>], axis: Axis) -> usize {
    let mid = range.len() / 2;
    if mid == 0 {
        return mid;
    }
    range.select_nth_unstable_by(mid, |a, b| axis.compare(a, b));
    mid
}

/// Sort a whole range along `axis`.
pub fn sort_along<T: Float>(range: &mut [Point<T>], axis: Axis) {
    range.sort_unstable_by(|a, b| axis.compare(a, b));
}

/// Median splitter for the recursive engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianSplitter;

impl<T: Float> RangeSplitter<T> for MedianSplitter {
    fn split(&mut self, range: &mut [Point<T>], level: usize) -> SplitOutcome {
        SplitOutcome::direct(split_at_median(range, Axis::for_level(level)))
    }
}
