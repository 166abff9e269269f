//! Per-grid addressable space.
//!
//! The engine always parses and transforms against [`MAX_ROW`] x
//! [`MAX_COLUMN`]. A grid may be narrower (e.g. a legacy 65,536 x 256 sheet);
//! writes and view results are validated against its [`GridConfig`].

use serde::{Deserialize, Serialize};

use gridrange_engine::engine::{
    Axis, Coordinate, CoordinateRect, MAX_COLUMN, MAX_ROW, RangeError, RangeReference, Shorthand,
};

use crate::error::{GridError, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub max_rows: u32,
    pub max_columns: u32,
}

impl GridConfig {
    /// 1,048,576 rows x 16,384 columns.
    pub const fn excel() -> Self {
        GridConfig {
            max_rows: MAX_ROW,
            max_columns: MAX_COLUMN,
        }
    }

    /// 65,536 rows x 256 columns.
    pub const fn legacy_xls() -> Self {
        GridConfig {
            max_rows: 65_536,
            max_columns: 256,
        }
    }

    /// Reject limits of zero or beyond the engine constants.
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 || self.max_rows > MAX_ROW {
            return Err(GridError::Config(format!(
                "max_rows must be in 1..={MAX_ROW}, got {}",
                self.max_rows
            )));
        }
        if self.max_columns == 0 || self.max_columns > MAX_COLUMN {
            return Err(GridError::Config(format!(
                "max_columns must be in 1..={MAX_COLUMN}, got {}",
                self.max_columns
            )));
        }
        Ok(())
    }

    /// The whole addressable space as a rect.
    pub fn bounds(&self) -> CoordinateRect {
        // Validated limits are always inside the engine limits.
        CoordinateRect::new(1, 1, self.max_rows.max(1), self.max_columns.max(1))
            .unwrap_or_else(|_| CoordinateRect::whole_sheet())
    }

    pub fn check_coord(&self, coord: Coordinate) -> Result<()> {
        if coord.row() > self.max_rows {
            return Err(out_of_range(Axis::Row, coord.row(), self.max_rows));
        }
        if coord.col() > self.max_columns {
            return Err(out_of_range(Axis::Column, coord.col(), self.max_columns));
        }
        Ok(())
    }

    pub fn check_rect(&self, rect: &CoordinateRect) -> Result<()> {
        self.check_coord(rect.bottom_right())
    }

    /// The rect `reference` names on this grid.
    ///
    /// A `3:5` or `C:D` shorthand spans this grid's columns or rows; the
    /// written rows or columns must still fit. Explicit corners must already
    /// lie inside the grid.
    pub fn resolve(&self, reference: &RangeReference) -> Result<CoordinateRect> {
        let rect = reference.rect;
        match reference.shorthand {
            Shorthand::Cells => {
                self.check_rect(&rect)?;
                Ok(rect)
            }
            Shorthand::Rows => {
                if rect.last_row() > self.max_rows {
                    return Err(out_of_range(Axis::Row, rect.last_row(), self.max_rows));
                }
                Ok(CoordinateRect::new(rect.first_row(), 1, rect.last_row(), self.max_columns)?)
            }
            Shorthand::Columns => {
                if rect.last_col() > self.max_columns {
                    return Err(out_of_range(Axis::Column, rect.last_col(), self.max_columns));
                }
                Ok(CoordinateRect::new(1, rect.first_col(), self.max_rows, rect.last_col())?)
            }
        }
    }
}

fn out_of_range(axis: Axis, value: u32, max: u32) -> GridError {
    GridError::Range(RangeError::OutOfRange {
        axis,
        value: value as i64,
        max,
    })
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::excel()
    }
}
