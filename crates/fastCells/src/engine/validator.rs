//! Up-front validation of configuration and input.
//!
//! Every check here runs before the point store is mutated, so a rejected
//! call leaves the store exactly as it was.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::cell::MAX_LEVELS;
use crate::primitives::errors::CellError;
use crate::primitives::point::Point;

/// Validation entry points shared by both strategies.
pub struct Validator;

impl Validator {
    /// Level count must lie in `1..=MAX_LEVELS`.
    pub fn validate_levels(levels: usize) -> Result<(), CellError> {
        if levels == 0 || levels > MAX_LEVELS {
            return Err(CellError::InvalidLevels {
                levels,
                max: MAX_LEVELS,
            });
        }
        Ok(())
    }

    /// Every coordinate must be finite. Reports the first offending identity.
    pub fn validate_points<T>(points: &[Point<T>], parallel: bool) -> Result<(), CellError>
    where
        T: Float + Send + Sync,
    {
        #[cfg(feature = "cpu")]
        let bad = if parallel {
            points.par_iter().find_first(|p| !p.is_finite())
        } else {
            points.iter().find(|p| !p.is_finite())
        };
        #[cfg(not(feature = "cpu"))]
        let bad = {
            let _ = parallel;
            points.iter().find(|p| !p.is_finite())
        };

        match bad {
            Some(p) => Err(CellError::NonFiniteCoordinate { index: p.index }),
            None => Ok(()),
        }
    }

    /// Latitude and longitude inputs must pair up.
    pub fn validate_lengths(lat_len: usize, lon_len: usize) -> Result<(), CellError> {
        if lat_len != lon_len {
            return Err(CellError::MismatchedInputs { lat_len, lon_len });
        }
        Ok(())
    }
}
