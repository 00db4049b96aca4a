//! Point records and the point store.
//!
//! ## Purpose
//!
//! This module defines the coordinate record both partitioners operate on,
//! and a small owning store that carries a collection of them from
//! ingestion to output.
//!
//! ## Design notes
//!
//! * **Identity travels with the record**: partitioning permutes points in
//!   place; `index` is never rewritten, so original order is recovered by
//!   sorting on it.
//! * **Generics**: Generic over `Float` coordinates (`f64` by default).
//!
//! ## Invariants
//!
//! * `index` values of a store form a bijection onto `0..len`.
//! * `lat` and `lon` are read-only during partitioning.
//! * `cell_id` starts at 0 and gains at most one bit per level.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::cell::CellId;
use crate::primitives::errors::CellError;

/// A geographic coordinate with its stable identity and accumulated cell id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float = f64> {
    /// Position in the original input sequence.
    pub index: usize,
    /// Latitude.
    pub lat: T,
    /// Longitude.
    pub lon: T,
    /// Hierarchical cell id, built up one bit per level.
    pub cell_id: CellId,
}

impl<T: Float> Point<T> {
    /// Create a point with an empty cell id.
    pub fn new(index: usize, lat: T, lon: T) -> Self {
        Self {
            index,
            lat,
            lon,
            cell_id: 0,
        }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Ordered, owning collection of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore<T: Float = f64> {
    points: Vec<Point<T>>,
}

impl<T: Float> PointStore<T> {
    /// Build a store from parallel latitude/longitude slices.
    ///
    /// Identities are assigned from input position.
    pub fn from_coordinates(lat: &[T], lon: &[T]) -> Result<Self, CellError> {
        if lat.len() != lon.len() {
            return Err(CellError::MismatchedInputs {
                lat_len: lat.len(),
                lon_len: lon.len(),
            });
        }

        let points = lat
            .iter()
            .zip(lon)
            .enumerate()
            .map(|(i, (&la, &lo))| Point::new(i, la, lo))
            .collect();

        Ok(Self { points })
    }

    /// Wrap existing points without re-indexing them.
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only view of the points in their current order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Mutable view handed to the partitioners.
    pub fn points_mut(&mut self) -> &mut [Point<T>] {
        &mut self.points
    }

    /// Clear every cell id back to 0.
    pub fn reset_cells(&mut self) {
        self.points.iter_mut().for_each(|p| p.cell_id = 0);
    }

    /// Reorder points by identity.
    pub fn restore_order(&mut self, parallel: bool)
    where
        T: Send,
    {
        #[cfg(feature = "cpu")]
        {
            if parallel {
                self.points.par_sort_unstable_by_key(|p| p.index);
                return;
            }
        }
        #[cfg(not(feature = "cpu"))]
        let _ = parallel;

        self.points.sort_unstable_by_key(|p| p.index);
    }

    /// Cell ids in current store order.
    pub fn cell_ids(&self) -> Vec<CellId> {
        self.points.iter().map(|p| p.cell_id).collect()
    }

    /// Consume the store and return its points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

impl<T: Float> From<Vec<Point<T>>> for PointStore<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self::from_points(points)
    }
}
