//! # fastCells
//!
//! Hierarchical cell ids for geographic points.
//!
//! Every point of a coordinate set gets an `L`-bit cell id describing its
//! path through `L` levels of recursive binary subdivision. Two
//! interchangeable strategies decide how a range is split:
//!
//! * **Median split** (KD-tree style): cut at the median latitude on even
//!   levels and the median longitude on odd levels.
//! * **Two-means**: separate the range into two spatial clusters with
//!   Lloyd's algorithm (k = 2).
//!
//! Cell ids are encoded coarsest-first: level 0 owns the most significant
//! bit, and at every level the upper half of the split gets the bit set.
//!
//! ## Quick start
//!
//! ```rust
//! use fastCells::prelude::*;
//!
//! let lat = vec![10.0, 20.0, 30.0, 40.0];
//! let lon = vec![0.0, 1.0, 0.0, 1.0];
//!
//! let result = CellPartitioner::new()
//!     .levels(1)
//!     .adapter(MedianSplit)
//!     .build()?
//!     .assign(&lat, &lon)?;
//!
//! assert_eq!(result.cell_ids, vec![0, 0, 1, 1]);
//! # Ok::<(), CellError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API        (CellPartitioner, Adapter markers)
//!   ↓
//! Layer 6: Adapters   (median_split, two_means)
//!   ↓
//! Layer 5: Engine     (executor, validator, output)
//!   ↓
//! Layer 3: Algorithms (median_split, two_means)
//!   ↓
//! Layer 2: Math       (distance, centroid)
//!   ↓
//! Layer 1: Primitives (point, cell, errors)
//! ```

#![allow(non_snake_case)]

// Layer 1: Primitives
mod primitives;

// Layer 2: Math
mod math;

// Layer 3: Algorithms
mod algorithms;

// Layer 5: Engine
mod engine;

// Layer 6: Adapters
mod adapters;

// Layer 7: API
pub mod api;

// Input abstractions
pub mod input;

/// Standard fastCells prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter, CellError, CellId, CellPartitioner, MedianSplit, PartitionAdapter,
        PartitionDiagnostics, PartitionResult, PartitionRun, Point, PointStore, Strategy,
        TwoMeans, TwoMeansConfig, MAX_LEVELS,
    };
    pub use crate::input::CoordinateInput;
}

/// Internal modules for advanced use: the split algorithms, the recursive
/// engine, and the layer-level building blocks.
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
