//! Cluster centroids for the two-means split.
//!
//! ## Purpose
//!
//! This module computes the coordinate-wise mean of a range of points and
//! the distances the two-means iteration needs around it.
//!
//! ## Design notes
//!
//! * **Empty ranges**: the mean of zero points is undefined, so
//!   [`compute_centroid`] returns `None` instead of dividing by zero. Callers
//!   decide what an empty side means for them.
//!
//! ## Invariants
//!
//! * A returned centroid lies inside the bounding box of its range.

use num_traits::Float;

use crate::math::distance::squared_euclidean;
use crate::primitives::point::Point;

/// Mean position of a cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid<T: Float = f64> {
    pub lat: T,
    pub lon: T,
}

impl<T: Float> Centroid<T> {
    /// Centroid located exactly on `point`.
    pub fn at(point: &Point<T>) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
        }
    }

    /// Squared distance from this centroid to `point`.
    #[inline]
    pub fn distance_squared(&self, point: &Point<T>) -> T {
        squared_euclidean(self.lat, self.lon, point.lat, point.lon)
    }

    /// Squared displacement between two centroid positions.
    #[inline]
    pub fn displacement_squared(&self, other: &Centroid<T>) -> T {
        squared_euclidean(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Coordinate-wise mean of `points`, or `None` for an empty range.
pub fn compute_centroid<T: Float>(points: &[Point<T>]) -> Option<Centroid<T>> {
    if points.is_empty() {
        return None;
    }

    let (lat_sum, lon_sum) = points
        .iter()
        .fold((T::zero(), T::zero()), |(la, lo), p| (la + p.lat, lo + p.lon));
    let n = T::from(points.len())?;

    Some(Centroid {
        lat: lat_sum / n,
        lon: lon_sum / n,
    })
}
