//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the geometric helpers the split algorithms share:
//! squared distances and guarded centroids.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cluster centroids.
pub mod centroid;

/// Squared planar distances.
pub mod distance;
