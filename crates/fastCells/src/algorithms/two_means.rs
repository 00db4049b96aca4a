//! Two-cluster split via Lloyd's algorithm (k = 2).
//!
//! ## Purpose
//!
//! This module splits a range into two spatial clusters instead of cutting
//! along a fixed axis, so boundaries follow the actual point density.
//!
//! ## Design notes
//!
//! * **Seeding**: two initial centroids are sampled uniformly, with
//!   replacement, from the range. The random source is passed in by the
//!   caller so runs are reproducible from a recorded seed.
//! * **Assignment**: a single left-to-right swap pass moves every point
//!   strictly closer to the first centroid into the prefix.
//! * **Empty sides**: a side that receives no points keeps its previous
//!   centroid for that round.
//! * **Degenerate guard**: if the final pass leaves one side empty the
//!   boundary falls back to the midpoint.
//!
//! ## Invariants
//!
//! * For `len >= 2` the returned boundary satisfies `0 < mid < len`.
//! * The iteration count never exceeds `max_iterations`.

use num_traits::Float;
use rand::Rng;
use tracing::debug;

use crate::algorithms::{RangeSplitter, SplitOutcome};
use crate::math::centroid::{compute_centroid, Centroid};
use crate::primitives::errors::CellError;
use crate::primitives::point::Point;

/// Default cap on refinement rounds per split.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default combined squared centroid movement below which refinement stops.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-10;

/// Parameters of the two-means strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoMeansConfig<T: Float = f64> {
    /// Maximum refinement rounds per split.
    pub max_iterations: usize,
    /// Convergence threshold on the summed squared centroid displacement.
    pub convergence_threshold: T,
    /// Seed for centroid sampling; drawn fresh per run when `None`.
    pub seed: Option<u64>,
}

impl<T: Float> Default for TwoMeansConfig<T> {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: T::from(DEFAULT_CONVERGENCE_THRESHOLD)
                .unwrap_or_else(T::epsilon),
            seed: None,
        }
    }
}

impl<T: Float> TwoMeansConfig<T> {
    /// Check the iteration cap and threshold.
    pub fn validate(&self) -> Result<(), CellError> {
        if self.max_iterations == 0 {
            return Err(CellError::InvalidIterations(self.max_iterations));
        }
        let t = self.convergence_threshold;
        if !t.is_finite() || t < T::zero() {
            return Err(CellError::InvalidThreshold(format!(
                "{} (must be finite and non-negative)",
                t.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}

/// Move every point strictly closer to `first` than to `second` into the
/// prefix and return the prefix length.
pub fn assign_to_nearest<T: Float>(
    range: &mut [Point<T>],
    first: &Centroid<T>,
    second: &Centroid<T>,
) -> usize {
    let mut mid = 0;
    for i in 0..range.len() {
        if first.distance_squared(&range[i]) < second.distance_squared(&range[i]) {
            range.swap(i, mid);
            mid += 1;
        }
    }
    mid
}

/// Split `range` into two clusters.
///
/// `range` must hold at least two points.
pub fn split<T, R>(
    range: &mut [Point<T>],
    rng: &mut R,
    max_iterations: usize,
    convergence_threshold: T,
) -> SplitOutcome
where
    T: Float,
    R: Rng + ?Sized,
{
    let len = range.len();
    debug_assert!(len > 1, "two-means split needs at least two points");
    if len < 2 {
        return SplitOutcome::direct(len / 2);
    }

    let mut first = Centroid::at(&range[rng.gen_range(0..len)]);
    let mut second = Centroid::at(&range[rng.gen_range(0..len)]);

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        iterations += 1;

        let mid = assign_to_nearest(range, &first, &second);
        let (lower, upper) = range.split_at(mid);
        let next_first = compute_centroid(lower).unwrap_or(first);
        let next_second = compute_centroid(upper).unwrap_or(second);

        let change =
            first.displacement_squared(&next_first) + second.displacement_squared(&next_second);
        first = next_first;
        second = next_second;

        if change < convergence_threshold {
            converged = true;
            break;
        }
    }

    let mut mid = assign_to_nearest(range, &first, &second);
    let degenerate = mid == 0 || mid == len;
    if degenerate {
        debug!(
            target: "fastCells",
            len, iterations, "two-means collapsed to one cluster, splitting at midpoint"
        );
        mid = len / 2;
    }

    SplitOutcome {
        mid,
        iterations,
        converged,
        degenerate,
    }
}

/// Two-means splitter for the recursive engine.
///
/// Holds the random source for the whole recursion.
pub struct TwoMeansSplitter<'r, T: Float, R: Rng + ?Sized> {
    rng: &'r mut R,
    max_iterations: usize,
    convergence_threshold: T,
}

impl<'r, T: Float, R: Rng + ?Sized> TwoMeansSplitter<'r, T, R> {
    pub fn new(config: &TwoMeansConfig<T>, rng: &'r mut R) -> Self {
        Self {
            rng,
            max_iterations: config.max_iterations,
            convergence_threshold: config.convergence_threshold,
        }
    }
}

impl<'r, T: Float, R: Rng + ?Sized> RangeSplitter<T> for TwoMeansSplitter<'r, T, R> {
    fn split(&mut self, range: &mut [Point<T>], _level: usize) -> SplitOutcome {
        split(
            range,
            &mut *self.rng,
            self.max_iterations,
            self.convergence_threshold,
        )
    }
}
