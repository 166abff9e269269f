//! Single-cell coordinates.
//!
//! A [`Coordinate`] is a 1-based `(row, col)` pair that is always inside the
//! engine limits. Ordering is row-major, so sorted coordinates read
//! left-to-right then top-to-bottom.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::codec;
use super::error::{RangeError, Result};
use super::limits::check_axis;

/// Grid axis, used in diagnostics and by row/column operations.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// A cell position by row and column (both 1-based).
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct Coordinate {
    row: u32,
    col: u32,
}

impl Coordinate {
    /// Build a coordinate, rejecting indices outside `[1, MAX]`.
    pub fn new(row: u32, col: u32) -> Result<Self> {
        Self::from_signed(row as i64, col as i64)
    }

    /// Build a coordinate from signed indices (e.g. after applying an offset).
    pub fn from_signed(row: i64, col: i64) -> Result<Self> {
        let row = check_axis(Axis::Row, row)?;
        let col = check_axis(Axis::Column, col)?;
        Ok(Coordinate { row, col })
    }

    pub(crate) const fn new_unchecked(row: u32, col: u32) -> Self {
        Coordinate { row, col }
    }

    pub fn row(self) -> u32 {
        self.row
    }

    pub fn col(self) -> u32 {
        self.col
    }

    /// Index along `axis`.
    pub fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.col,
        }
    }

    /// Shift by signed deltas.
    pub fn offset(self, delta_row: i64, delta_col: i64) -> Result<Self> {
        Self::from_signed(
            (self.row as i64).saturating_add(delta_row),
            (self.col as i64).saturating_add(delta_col),
        )
    }

    /// Packed row-major key: row in the high half, column in the low half.
    pub fn packed(self) -> u64 {
        ((self.row as u64) << 32) | self.col as u64
    }

    /// Inverse of [`Coordinate::packed`].
    pub fn from_packed(key: u64) -> Result<Self> {
        Self::from_signed((key >> 32) as i64, (key & 0xFFFF_FFFF) as i64)
    }
}

impl TryFrom<(u32, u32)> for Coordinate {
    type Error = RangeError;

    fn try_from(value: (u32, u32)) -> Result<Self> {
        Self::new(value.0, value.1)
    }
}

impl From<Coordinate> for (u32, u32) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        codec::parse_cell_reference(s).map(|cell| cell.coord)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", codec::column_letters(self.col), self.row)
    }
}
