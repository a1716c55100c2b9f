//! Board data structures and the pure match scan.
//!
//! - [`Cell`] - grid coordinates (row 0 is the bottom row)
//! - [`Token`] - a fruit occupying one cell
//! - [`Grid`] - the `size × size` matrix of optional tokens
//! - [`MatchSet`] / [`find_all_matches`] - runs of three or more same-kind tokens

pub use self::{cell::*, fruit::*, grid::*, match_set::*};

pub(crate) mod cell;
pub(crate) mod fruit;
pub(crate) mod grid;
pub(crate) mod match_set;

/// Smallest playable board edge. Requested sizes below this are clamped up.
pub const MIN_GRID_SIZE: usize = 6;
/// Largest playable board edge. Requested sizes above this are clamped down.
pub const MAX_GRID_SIZE: usize = 8;
/// Minimum run length that counts as a match.
pub const MIN_MATCH_LEN: usize = 3;

/// Clamps a requested board edge into `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
#[must_use]
pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}
