//! Recursive partitioning engine.
//!
//! ## Purpose
//!
//! This module drives a [`RangeSplitter`] over a point store level by level,
//! tagging each split with one bit of the cell id. Both strategies share
//! this driver; they differ only in how a single range is split.
//!
//! ## Design notes
//!
//! * **Range recursion**: the implicit tree is a recursion over disjoint
//!   sub-slices obtained with `split_at_mut`. Depth is bounded by the level
//!   count, which is at most the cell id bit width.
//! * **Sequential**: sibling ranges are processed one after the other.
//! * **Explicit randomness**: two-means runs own a `ChaCha8Rng` seeded from a
//!   recorded seed; nothing reads global random state mid-recursion.
//!
//! ## Key concepts
//!
//! * **Termination**: a range stops when `level >= levels` or it holds fewer
//!   than two points.
//! * **Tagging**: the upper sub-range `[mid, len)` gets bit `levels - level - 1`.
//!
//! ## Invariants
//!
//! * Validation happens before any mutation.
//! * Every run starts from cleared cell ids.
//! * Every final cell id lies in `[0, 2^levels)`.

// External dependencies
use num_traits::Float;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::{info, trace};

// Internal dependencies
use crate::algorithms::median_split::{sort_along, Axis, MedianSplitter};
use crate::algorithms::two_means::{TwoMeansConfig, TwoMeansSplitter};
use crate::algorithms::RangeSplitter;
use crate::engine::output::{PartitionDiagnostics, PartitionRun, Strategy};
use crate::engine::validator::Validator;
use crate::primitives::cell::tag_upper;
use crate::primitives::errors::CellError;
use crate::primitives::point::Point;

// ============================================================================
// Range Recursion
// ============================================================================

/// Apply `splitter` recursively to `points` for `levels` levels.
///
/// Callers are expected to have validated `levels`.
pub fn apply_levels<T, S>(
    points: &mut [Point<T>],
    levels: usize,
    splitter: &mut S,
) -> PartitionDiagnostics
where
    T: Float,
    S: RangeSplitter<T> + ?Sized,
{
    let mut diagnostics = PartitionDiagnostics::default();
    apply_range(points, 0, levels, splitter, &mut diagnostics);
    diagnostics
}

fn apply_range<T, S>(
    range: &mut [Point<T>],
    level: usize,
    levels: usize,
    splitter: &mut S,
    diagnostics: &mut PartitionDiagnostics,
) where
    T: Float,
    S: RangeSplitter<T> + ?Sized,
{
    if level >= levels || range.len() < 2 {
        return;
    }

    let outcome = splitter.split(range, level);
    debug_assert!(outcome.mid > 0 && outcome.mid < range.len());
    diagnostics.record(&outcome);
    trace!(
        target: "fastCells",
        level,
        len = range.len(),
        mid = outcome.mid,
        iterations = outcome.iterations,
        "split range"
    );

    let (lower, upper) = range.split_at_mut(outcome.mid);
    tag_upper(upper, levels, level);

    apply_range(lower, level + 1, levels, splitter, diagnostics);
    apply_range(upper, level + 1, levels, splitter, diagnostics);
}

// ============================================================================
// Executor
// ============================================================================

/// Validated, logged entry point for both strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionExecutor {
    /// Number of levels (cell id bit width).
    pub levels: usize,
    /// Use rayon for validation around the recursion.
    pub parallel: bool,
}

impl PartitionExecutor {
    pub fn new(levels: usize, parallel: bool) -> Self {
        Self { levels, parallel }
    }

    /// Median-split partition of `points`.
    pub fn run_median_split<T>(&self, points: &mut [Point<T>]) -> Result<PartitionRun, CellError>
    where
        T: Float + Send + Sync,
    {
        self.prepare(points)?;
        let start = Instant::now();

        // Level 0 orders by latitude; the whole store starts in that order.
        sort_along(points, Axis::Latitude);
        let diagnostics = apply_levels(points, self.levels, &mut MedianSplitter);

        Ok(self.finish(Strategy::MedianSplit, diagnostics, points.len(), start))
    }

    /// Two-means partition of `points`, seeding from `config.seed` or a
    /// freshly drawn seed. The seed used is recorded in the returned run.
    pub fn run_two_means<T>(
        &self,
        points: &mut [Point<T>],
        config: &TwoMeansConfig<T>,
    ) -> Result<PartitionRun, CellError>
    where
        T: Float + Send + Sync,
    {
        let seed = config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen::<u64>());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut run = self.run_two_means_with_rng(points, config, &mut rng)?;
        run.seed = Some(seed);
        Ok(run)
    }

    /// Two-means partition of `points` drawing from a caller-supplied RNG.
    pub fn run_two_means_with_rng<T, R>(
        &self,
        points: &mut [Point<T>],
        config: &TwoMeansConfig<T>,
        rng: &mut R,
    ) -> Result<PartitionRun, CellError>
    where
        T: Float + Send + Sync,
        R: Rng + ?Sized,
    {
        config.validate()?;
        self.prepare(points)?;
        let start = Instant::now();

        let mut splitter = TwoMeansSplitter::new(config, rng);
        let diagnostics = apply_levels(points, self.levels, &mut splitter);

        Ok(self.finish(Strategy::TwoMeans, diagnostics, points.len(), start))
    }

    fn prepare<T>(&self, points: &mut [Point<T>]) -> Result<(), CellError>
    where
        T: Float + Send + Sync,
    {
        Validator::validate_levels(self.levels)?;
        Validator::validate_points(points, self.parallel)?;
        points.iter_mut().for_each(|p| p.cell_id = 0);
        Ok(())
    }

    fn finish(
        &self,
        strategy: Strategy,
        diagnostics: PartitionDiagnostics,
        n: usize,
        start: Instant,
    ) -> PartitionRun {
        info!(
            target: "fastCells",
            %strategy,
            points = n,
            levels = self.levels,
            splits = diagnostics.splits,
            degenerate = diagnostics.degenerate_splits,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "partitioned points"
        );
        PartitionRun {
            strategy,
            levels: self.levels,
            seed: None,
            diagnostics,
        }
    }
}
