//! Error types for cell partitioning.
//!
//! ## Purpose
//!
//! This module defines the single error enum shared by every layer of the
//! crate. All errors are raised during validation, before the point store
//! is touched, so a failed call never leaves partially assigned cell ids.
//!
//! ## Key concepts
//!
//! * **Configuration errors**: level counts and two-means parameters.
//! * **Input errors**: mismatched, non-finite or non-contiguous coordinates.
//!
//! ## Non-goals
//!
//! * This module does not cover I/O errors (no file handling in this crate).

use thiserror::Error;

/// Errors that can occur while partitioning points into cells.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    /// Level count outside `1..=max`.
    #[error("Invalid number of levels: {levels} (must be between 1 and {max})")]
    InvalidLevels { levels: usize, max: usize },

    /// Latitude and longitude inputs have different lengths.
    #[error("Mismatched inputs: {lat_len} latitudes vs {lon_len} longitudes")]
    MismatchedInputs { lat_len: usize, lon_len: usize },

    /// A latitude or longitude is NaN or infinite.
    #[error("Non-finite coordinate for point {index}")]
    NonFiniteCoordinate { index: usize },

    /// Two-means iteration cap of zero.
    #[error("Invalid max iterations: {0} (must be at least 1)")]
    InvalidIterations(usize),

    /// Negative or non-finite convergence threshold.
    #[error("Invalid convergence threshold: {0}")]
    InvalidThreshold(String),

    /// Input container cannot be viewed as a contiguous slice.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used throughout the crate.
pub type CellResult<T> = Result<T, CellError>;
