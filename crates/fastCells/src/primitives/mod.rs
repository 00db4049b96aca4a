//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! Core building blocks: the point record and store, the cell id layout,
//! and the shared error type. This layer has no internal dependencies
//! beyond itself.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Cell id type, level limits and bit tagging.
pub mod cell;

/// Shared error types.
pub mod errors;

/// Point records and the point store.
pub mod point;
