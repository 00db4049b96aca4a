//! High-level API for cell partitioning.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. It implements a fluent
//! builder for the shared parameters and hands off to one of two strategy
//! adapters (median split or two-means).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything but `levels`.
//! * **Polymorphic**: Marker types select the strategy-specific builder.
//! * **Validated**: Parameters are checked when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CellPartitioner`](crate::api::CellPartitioner) via `CellPartitioner::new()`.
//! 2. Chain configuration methods (`.levels()`, `.seed()`, etc.).
//! 3. Select a strategy via `.adapter(MedianSplit)` or `.adapter(TwoMeans)`.

// Internal dependencies
use crate::adapters::median_split::MedianSplitBuilder;
use crate::adapters::two_means::TwoMeansBuilder;

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::algorithms::two_means::{
    TwoMeansConfig, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_ITERATIONS,
};
pub use crate::engine::output::{PartitionDiagnostics, PartitionResult, PartitionRun, Strategy};
pub use crate::primitives::cell::{CellId, MAX_LEVELS};
pub use crate::primitives::errors::CellError;
pub use crate::primitives::point::{Point, PointStore};

// ============================================================================
// Adapter Module
// ============================================================================

/// Strategy selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{MedianSplit, TwoMeans};
}

/// Conversion from the shared builder into a strategy-specific builder.
pub trait PartitionAdapter<T: Float> {
    type Output;

    fn convert(builder: CellPartitioner<T>) -> Self::Output;
}

// ============================================================================
// Shared Builder
// ============================================================================

/// Shared configuration for both strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPartitioner<T: Float = f64> {
    /// Number of levels; required.
    pub levels: Option<usize>,
    /// Two-means parameters (ignored by median split).
    pub two_means: TwoMeansConfig<T>,
    /// Parallel validation and order restoration.
    pub parallel: Option<bool>,
}

impl<T: Float> Default for CellPartitioner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CellPartitioner<T> {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            levels: None,
            two_means: TwoMeansConfig::default(),
            parallel: None,
        }
    }

    /// Set the number of levels (cell id bit width).
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Set the two-means iteration cap per split.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.two_means.max_iterations = iterations;
        self
    }

    /// Set the two-means convergence threshold.
    pub fn convergence_threshold(mut self, threshold: T) -> Self {
        self.two_means.convergence_threshold = threshold;
        self
    }

    /// Fix the seed for two-means centroid sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.two_means.seed = Some(seed);
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Select a strategy.
    pub fn adapter<A: PartitionAdapter<T>>(self, _adapter: A) -> A::Output {
        A::convert(self)
    }
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for the axis-alternating median-split strategy.
#[derive(Debug, Clone, Copy)]
pub struct MedianSplit;

impl<T: Float> PartitionAdapter<T> for MedianSplit {
    type Output = MedianSplitBuilder<T>;

    fn convert(builder: CellPartitioner<T>) -> Self::Output {
        MedianSplitBuilder { base: builder }
    }
}

/// Marker for the recursive two-means strategy.
#[derive(Debug, Clone, Copy)]
pub struct TwoMeans;

impl<T: Float> PartitionAdapter<T> for TwoMeans {
    type Output = TwoMeansBuilder<T>;

    fn convert(builder: CellPartitioner<T>) -> Self::Output {
        TwoMeansBuilder { base: builder }
    }
}
