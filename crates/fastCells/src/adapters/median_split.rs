//! Median-split adapter.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for the axis-alternating
//! median-split strategy: latitude on even levels, longitude on odd levels,
//! each range cut at its median.
//!
//! ## Key concepts
//!
//! * **Deterministic**: the same coordinates always give the same cell ids,
//!   whatever order they arrive in.
//! * **Balanced**: sibling cells differ in population by at most one point.
//!
//! ## Invariants
//!
//! * `levels` is in `1..=MAX_LEVELS`.
//! * Output order matches input order.

// External dependencies
use num_traits::Float;
use std::marker::PhantomData;

// Internal dependencies
use crate::api::CellPartitioner;
use crate::engine::executor::PartitionExecutor;
use crate::engine::output::{PartitionResult, PartitionRun};
use crate::engine::validator::Validator;
use crate::input::CoordinateInput;
use crate::primitives::errors::CellError;
use crate::primitives::point::{Point, PointStore};

use super::{assign_coordinates, partition_store};

// ============================================================================
// Median-Split Builder
// ============================================================================

/// Builder for the median-split partitioner.
#[derive(Debug, Clone, Copy)]
pub struct MedianSplitBuilder<T: Float> {
    /// Shared configuration
    pub base: CellPartitioner<T>,
}

impl<T: Float> MedianSplitBuilder<T> {
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

    /// Build the partitioner.
    pub fn build(self) -> Result<MedianSplitPartitioner<T>, CellError> {
        let levels = self.base.levels.unwrap_or(0);
        Validator::validate_levels(levels)?;

        Ok(MedianSplitPartitioner {
            executor: PartitionExecutor::new(levels, self.base.parallel.unwrap_or(true)),
            _coords: PhantomData,
        })
    }
}

// ============================================================================
// Median-Split Partitioner
// ============================================================================

/// Median-split partitioner.
#[derive(Debug, Clone, Copy)]
pub struct MedianSplitPartitioner<T: Float> {
    executor: PartitionExecutor,
    _coords: PhantomData<T>,
}

impl<T: Float + Send + Sync> MedianSplitPartitioner<T> {
    /// Number of levels.
    pub fn levels(&self) -> usize {
        self.executor.levels
    }

    /// Partition `points` in place.
    pub fn partition(&self, points: &mut [Point<T>]) -> Result<PartitionRun, CellError> {
        self.executor.run_median_split(points)
    }

    /// Partition a store and return cell ids in identity order.
    pub fn partition_store(
        &self,
        store: &mut PointStore<T>,
    ) -> Result<PartitionResult, CellError> {
        partition_store(store, self.executor.parallel, |points| {
            self.executor.run_median_split(points)
        })
    }

    /// Assign a cell id to every `(lat[i], lon[i])`.
    pub fn assign<I1, I2>(&self, lat: &I1, lon: &I2) -> Result<PartitionResult, CellError>
    where
        I1: CoordinateInput<T> + ?Sized,
        I2: CoordinateInput<T> + ?Sized,
    {
        assign_coordinates(lat, lon, self.executor.parallel, |points| {
            self.executor.run_median_split(points)
        })
    }
}
