//! Partition results and diagnostics.
//!
//! ## Purpose
//!
//! This module defines what a partitioning run hands back: per-run
//! statistics, the configuration that produced them (including the seed
//! for two-means runs), and, for driver-level calls, the cell ids in
//! original input order.

use std::collections::BTreeMap;
use std::fmt;

use crate::algorithms::SplitOutcome;
use crate::primitives::cell::CellId;

/// Partitioning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Axis-alternating median split.
    MedianSplit,
    /// Recursive two-cluster split.
    TwoMeans,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::MedianSplit => write!(f, "median-split"),
            Strategy::TwoMeans => write!(f, "two-means"),
        }
    }
}

/// Counters accumulated over every range split in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionDiagnostics {
    /// Ranges split.
    pub splits: usize,
    /// Splits whose natural boundary was empty on one side.
    pub degenerate_splits: usize,
    /// Splits that hit the iteration cap before converging.
    pub unconverged_splits: usize,
    /// Refinement rounds across all splits.
    pub iterations: usize,
}

impl PartitionDiagnostics {
    pub(crate) fn record(&mut self, outcome: &SplitOutcome) {
        self.splits += 1;
        self.iterations += outcome.iterations;
        if outcome.degenerate {
            self.degenerate_splits += 1;
        }
        if !outcome.converged {
            self.unconverged_splits += 1;
        }
    }
}

/// Summary of one partitioning run over a point store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRun {
    pub strategy: Strategy,
    pub levels: usize,
    /// Seed used for centroid sampling (two-means only).
    pub seed: Option<u64>,
    pub diagnostics: PartitionDiagnostics,
}

/// Cell ids in original input order, plus the run that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionResult {
    /// Cell id of input point `i` at position `i`.
    pub cell_ids: Vec<CellId>,
    pub run: PartitionRun,
}

impl PartitionResult {
    /// Number of points assigned.
    pub fn len(&self) -> usize {
        self.cell_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_ids.is_empty()
    }

    /// Points per occupied cell, ordered by cell id.
    pub fn cell_populations(&self) -> BTreeMap<CellId, usize> {
        let mut populations = BTreeMap::new();
        for &id in &self.cell_ids {
            *populations.entry(id).or_insert(0) += 1;
        }
        populations
    }

    /// Number of distinct cells that received at least one point.
    pub fn occupied_cells(&self) -> usize {
        self.cell_populations().len()
    }
}
