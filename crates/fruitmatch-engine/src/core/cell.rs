use std::fmt;

use serde::{Deserialize, Serialize};

/// Coordinates of a single grid cell.
///
/// `col` grows to the right and `row` grows upwards: row 0 is the bottom row,
/// where tokens come to rest under gravity.
///
/// Cells order column-major (`col` first, then `row`), which is also the order
/// in which [`MatchSet`](super::MatchSet) yields them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Returns the cell displaced by `(dcol, drow)`, or `None` if either
    /// coordinate would drop below zero.
    ///
    /// There is no upper bound check here; the grid decides what is in range.
    #[must_use]
    pub fn offset(self, dcol: isize, drow: isize) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(dcol)?,
            row: self.row.checked_add_signed(drow)?,
        })
    }

    /// Whether `other` shares an edge with this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
