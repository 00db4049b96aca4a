//! Layer 5: Engine
//!
//! ## Purpose
//!
//! This layer provides the recursive partitioning engine shared by both
//! strategies, its up-front validation, and the result types it returns.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recursive range driver and strategy entry points.
pub mod executor;

/// Partition results and diagnostics.
pub mod output;

/// Configuration and input validation.
pub mod validator;
