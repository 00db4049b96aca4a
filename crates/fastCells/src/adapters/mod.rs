//! Layer 6: Adapters
//!
//! ## Purpose
//!
//! This layer provides one execution adapter per partitioning strategy.
//! Each adapter offers the same two entry points: `partition` over a caller
//! owned slice of points, and `assign`, which builds the point store from
//! coordinate arrays and returns cell ids in original input order.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

use num_traits::Float;

use crate::engine::output::{PartitionResult, PartitionRun};
use crate::engine::validator::Validator;
use crate::input::CoordinateInput;
use crate::primitives::errors::CellError;
use crate::primitives::point::{Point, PointStore};

/// Median-split adapter.
pub mod median_split;

/// Two-means adapter.
pub mod two_means;

/// Partition a whole store with `run`, then restore input order.
pub(crate) fn partition_store<T, F>(
    store: &mut PointStore<T>,
    parallel: bool,
    run: F,
) -> Result<PartitionResult, CellError>
where
    T: Float + Send,
    F: FnOnce(&mut [Point<T>]) -> Result<PartitionRun, CellError>,
{
    let run = run(store.points_mut())?;
    store.restore_order(parallel);
    Ok(PartitionResult {
        cell_ids: store.cell_ids(),
        run,
    })
}

/// Build a store from coordinate inputs and partition it with `run`.
pub(crate) fn assign_coordinates<T, I1, I2, F>(
    lat: &I1,
    lon: &I2,
    parallel: bool,
    run: F,
) -> Result<PartitionResult, CellError>
where
    T: Float + Send,
    I1: CoordinateInput<T> + ?Sized,
    I2: CoordinateInput<T> + ?Sized,
    F: FnOnce(&mut [Point<T>]) -> Result<PartitionRun, CellError>,
{
    let lat = lat.as_coordinate_slice()?;
    let lon = lon.as_coordinate_slice()?;
    Validator::validate_lengths(lat.len(), lon.len())?;

    let mut store = PointStore::from_coordinates(lat, lon)?;
    partition_store(&mut store, parallel, run)
}
