//! Squared distances in raw latitude/longitude space.
//!
//! No projection is applied: degrees of latitude and longitude are treated
//! as planar axes. Only squared distances are needed, since both callers
//! compare or sum them.

use num_traits::Float;

/// Squared Euclidean distance between `(lat_a, lon_a)` and `(lat_b, lon_b)`.
#[inline]
pub fn squared_euclidean<T: Float>(lat_a: T, lon_a: T, lat_b: T, lon_b: T) -> T {
    let dlat = lat_a - lat_b;
    let dlon = lon_a - lon_b;
    dlat * dlat + dlon * dlon
}
