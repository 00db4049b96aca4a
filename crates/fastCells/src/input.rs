//! Input abstractions for coordinate arrays.
//!
//! ## Purpose
//!
//! This module lets the driver-level `assign` methods accept latitudes and
//! longitudes as slices, vectors or (with the `cpu` feature) `ndarray`
//! arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: inputs are viewed as slices; points are built from them once.
//! * **Fail-fast validation**: non-contiguous arrays are rejected up front.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CellError;

/// Trait for containers of coordinates.
pub trait CoordinateInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_coordinate_slice(&self) -> Result<&[T], CellError>;
}

impl<T: Float> CoordinateInput<T> for [T] {
    fn as_coordinate_slice(&self) -> Result<&[T], CellError> {
        Ok(self)
    }
}

impl<T: Float> CoordinateInput<T> for Vec<T> {
    fn as_coordinate_slice(&self) -> Result<&[T], CellError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> CoordinateInput<T> for [T; N] {
    fn as_coordinate_slice(&self) -> Result<&[T], CellError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> CoordinateInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_coordinate_slice(&self) -> Result<&[T], CellError> {
        self.as_slice().ok_or_else(|| {
            CellError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
