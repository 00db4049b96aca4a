//! Two-means adapter.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for the recursive two-means
//! strategy: each range is separated into two spatial clusters by Lloyd's
//! algorithm before recursing.
//!
//! ## Design notes
//!
//! * **Seeding**: with `.seed(s)` every call replays the same clustering;
//!   without it each call draws a new seed. The seed is reported in the
//!   returned run either way.
//! * **Bounded work**: refinement per split stops at convergence or at
//!   `max_iterations`.
//!
//! ## Invariants
//!
//! * `levels` is in `1..=MAX_LEVELS`.
//! * `max_iterations >= 1`, threshold finite and non-negative.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not guarantee balanced cells.

// External dependencies
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::algorithms::two_means::TwoMeansConfig;
use crate::api::CellPartitioner;
use crate::engine::executor::PartitionExecutor;
use crate::engine::output::{PartitionResult, PartitionRun};
use crate::engine::validator::Validator;
use crate::input::CoordinateInput;
use crate::primitives::errors::CellError;
use crate::primitives::point::{Point, PointStore};

use super::{assign_coordinates, partition_store};

// ============================================================================
// Two-Means Builder
// ============================================================================

/// Builder for the two-means partitioner.
#[derive(Debug, Clone, Copy)]
pub struct TwoMeansBuilder<T: Float> {
    /// Shared configuration
    pub base: CellPartitioner<T>,
}

impl<T: Float> TwoMeansBuilder<T> {
    /// Set the number of levels.
    pub fn levels(mut self, levels: usize) -> Self {
        self.base.levels = Some(levels);
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base.parallel = Some(parallel);
        self
    }

    /// Set the iteration cap per split.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.base.two_means.max_iterations = iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn convergence_threshold(mut self, threshold: T) -> Self {
        self.base.two_means.convergence_threshold = threshold;
        self
    }

    /// Fix the centroid sampling seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.base.two_means.seed = Some(seed);
        self
    }

    /// Build the partitioner.
    pub fn build(self) -> Result<TwoMeansPartitioner<T>, CellError> {
        let levels = self.base.levels.unwrap_or(0);
        Validator::validate_levels(levels)?;
        self.base.two_means.validate()?;

        Ok(TwoMeansPartitioner {
            executor: PartitionExecutor::new(levels, self.base.parallel.unwrap_or(true)),
            config: self.base.two_means,
        })
    }
}

// ============================================================================
// Two-Means Partitioner
// ============================================================================

/// Two-means partitioner.
#[derive(Debug, Clone, Copy)]
pub struct TwoMeansPartitioner<T: Float> {
    executor: PartitionExecutor,
    config: TwoMeansConfig<T>,
}

impl<T: Float + Send + Sync> TwoMeansPartitioner<T> {
    /// Number of levels.
    pub fn levels(&self) -> usize {
        self.executor.levels
    }

    /// Two-means parameters.
    pub fn config(&self) -> &TwoMeansConfig<T> {
        &self.config
    }

    /// Partition `points` in place.
    pub fn partition(&self, points: &mut [Point<T>]) -> Result<PartitionRun, CellError> {
        self.executor.run_two_means(points, &self.config)
    }

    /// Partition `points` in place, sampling centroids from `rng`.
    ///
    /// The configured seed is ignored and the run reports no seed.
    pub fn partition_with_rng<R: Rng + ?Sized>(
        &self,
        points: &mut [Point<T>],
        rng: &mut R,
    ) -> Result<PartitionRun, CellError> {
        self.executor.run_two_means_with_rng(points, &self.config, rng)
    }

    /// Partition a store and return cell ids in identity order.
    pub fn partition_store(
        &self,
        store: &mut PointStore<T>,
    ) -> Result<PartitionResult, CellError> {
        partition_store(store, self.executor.parallel, |points| {
            self.executor.run_two_means(points, &self.config)
        })
    }

    /// Assign a cell id to every `(lat[i], lon[i])`.
    pub fn assign<I1, I2>(&self, lat: &I1, lon: &I2) -> Result<PartitionResult, CellError>
    where
        I1: CoordinateInput<T> + ?Sized,
        I2: CoordinateInput<T> + ?Sized,
    {
        assign_coordinates(lat, lon, self.executor.parallel, |points| {
            self.executor.run_two_means(points, &self.config)
        })
    }
}
