//! Cell id encoding.
//!
//! ## Purpose
//!
//! This module owns the bit layout of cell ids: which bit a recursion level
//! writes, and which side of a split receives it.
//!
//! ## Key concepts
//!
//! * **Coarsest-first**: level 0 writes the most significant of the `L`
//!   bits, level `L - 1` the least significant.
//! * **Upper side tagged**: points in `[mid, right)` get the level's bit set;
//!   points in `[left, mid)` leave it clear. Lower latitudes therefore land
//!   in cell 0 for `L = 1`. Encoders that tag the lower side `[left, mid)`
//!   instead produce the per-level complement of these ids:
//!   `id ^ (2^L - 1)`. Compare ids across such tools only after inverting.
//!
//! ## Invariants
//!
//! * For `1 <= L <= MAX_LEVELS`, every produced id lies in `[0, 2^L)`.

use num_traits::Float;

use crate::primitives::point::Point;

/// Hierarchical cell identifier.
pub type CellId = u64;

/// Widest supported level count (bit width of [`CellId`]).
pub const MAX_LEVELS: usize = CellId::BITS as usize;

/// Bit owned by `level` in an `levels`-deep encoding.
#[inline]
pub fn level_bit(levels: usize, level: usize) -> CellId {
    debug_assert!(level < levels && levels <= MAX_LEVELS);
    1 << (levels - level - 1)
}

/// Set the level bit on every point of the upper sub-range.
#[inline]
pub fn tag_upper<T: Float>(upper: &mut [Point<T>], levels: usize, level: usize) {
    let bit = level_bit(levels, level);
    for p in upper {
        p.cell_id |= bit;
    }
}

/// Number of distinct cells an `levels`-deep encoding can address, if it fits.
pub fn cell_capacity(levels: usize) -> Option<CellId> {
    (1 as CellId).checked_shl(levels as u32)
}
