//! Layer 3: Algorithms
//!
//! ## Purpose
//!
//! This layer provides the two interchangeable range-splitting rules used
//! by the recursive partitioning engine. Each rule reorders one contiguous
//! range in place and reports the boundary between its two halves.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

use num_traits::Float;

use crate::primitives::point::Point;

/// Axis-alternating median split (KD-tree style).
pub mod median_split;

/// Two-cluster split via Lloyd's algorithm with k = 2.
pub mod two_means;

/// Result of splitting a single range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Boundary between the lower `[0, mid)` and upper `[mid, len)` halves.
    pub mid: usize,
    /// Refinement rounds spent (0 for non-iterative rules).
    pub iterations: usize,
    /// Whether the refinement converged before its cap.
    pub converged: bool,
    /// Whether the natural boundary was empty on one side and got replaced
    /// by the midpoint.
    pub degenerate: bool,
}

impl SplitOutcome {
    /// Outcome of a direct (non-iterative) split at `mid`.
    pub fn direct(mid: usize) -> Self {
        Self {
            mid,
            iterations: 0,
            converged: true,
            degenerate: false,
        }
    }
}

/// A rule that splits one range of points in two.
pub trait RangeSplitter<T: Float> {
    /// Reorder `range` in place and return where it splits.
    ///
    /// Called only with `range.len() >= 2`; the returned `mid` must satisfy
    /// `0 < mid < range.len()`.
    fn split(&mut self, range: &mut [Point<T>], level: usize) -> SplitOutcome;
}
