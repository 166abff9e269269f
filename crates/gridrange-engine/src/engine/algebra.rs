//! Range algebra over [`CoordinateRect`].
//!
//! Everything here is pure: no grid state is consulted, only the engine
//! limits. Results that would leave `[1, MAX_ROW] x [1, MAX_COLUMN]` are
//! rejected rather than clamped.

use super::coord::Axis;
use super::error::{RangeError, Result};
use super::limits::{MAX_COLUMN, MAX_ROW, check_axis};
use super::rect::CoordinateRect;

impl CoordinateRect {
    /// True iff `inner` lies entirely within `self`. A rect contains itself.
    pub fn contains(&self, inner: &CoordinateRect) -> bool {
        inner.first_row() >= self.first_row()
            && inner.last_row() <= self.last_row()
            && inner.first_col() >= self.first_col()
            && inner.last_col() <= self.last_col()
    }

    /// True iff the closed row intervals and the closed column intervals overlap.
    pub fn intersects(&self, other: &CoordinateRect) -> bool {
        self.first_row() <= other.last_row()
            && other.first_row() <= self.last_row()
            && self.first_col() <= other.last_col()
            && other.first_col() <= self.last_col()
    }

    /// Overlapping region, or `None` when the rects are disjoint.
    pub fn intersect(&self, other: &CoordinateRect) -> Option<CoordinateRect> {
        if !self.intersects(other) {
            return None;
        }
        Some(CoordinateRect::normalized(
            self.first_row().max(other.first_row()),
            self.first_col().max(other.first_col()),
            self.last_row().min(other.last_row()),
            self.last_col().min(other.last_col()),
        ))
    }

    /// Bounding-box union.
    ///
    /// This is not a set union: cells between two disjoint rects are included.
    /// Callers that need disjoint multi-area regions keep a list of rects.
    pub fn union(&self, other: &CoordinateRect) -> CoordinateRect {
        CoordinateRect::normalized(
            self.first_row().min(other.first_row()),
            self.first_col().min(other.first_col()),
            self.last_row().max(other.last_row()),
            self.last_col().max(other.last_col()),
        )
    }

    /// Shift all four bounds.
    pub fn offset(&self, delta_row: i64, delta_col: i64) -> Result<CoordinateRect> {
        CoordinateRect::from_signed(
            (self.first_row() as i64).saturating_add(delta_row),
            (self.first_col() as i64).saturating_add(delta_col),
            (self.last_row() as i64).saturating_add(delta_row),
            (self.last_col() as i64).saturating_add(delta_col),
        )
    }

    /// Keep the top-left corner and set the size.
    pub fn resize(&self, row_count: i64, col_count: i64) -> Result<CoordinateRect> {
        if row_count < 1 || col_count < 1 {
            return Err(RangeError::InvalidArgument(format!(
                "resize needs at least one row and one column, got {row_count}x{col_count}"
            )));
        }
        CoordinateRect::from_signed(
            self.first_row() as i64,
            self.first_col() as i64,
            (self.first_row() as i64).saturating_add(row_count - 1),
            (self.first_col() as i64).saturating_add(col_count - 1),
        )
    }

    /// Rect addressed relative to this rect's top-left (1-based), which must
    /// stay inside `self`.
    pub fn sub_rect(
        &self,
        rel_first_row: i64,
        rel_first_col: i64,
        rel_last_row: i64,
        rel_last_col: i64,
    ) -> Result<CoordinateRect> {
        let base_row = self.first_row() as i64 - 1;
        let base_col = self.first_col() as i64 - 1;
        let rows = [base_row + rel_first_row, base_row + rel_last_row];
        let cols = [base_col + rel_first_col, base_col + rel_last_col];

        for row in rows {
            if row < self.first_row() as i64 || row > self.last_row() as i64 {
                return Err(RangeError::OutOfRange {
                    axis: Axis::Row,
                    value: row,
                    max: self.last_row(),
                });
            }
        }
        for col in cols {
            if col < self.first_col() as i64 || col > self.last_col() as i64 {
                return Err(RangeError::OutOfRange {
                    axis: Axis::Column,
                    value: col,
                    max: self.last_col(),
                });
            }
        }
        CoordinateRect::from_signed(rows[0], cols[0], rows[1], cols[1])
    }

    /// The `index`-th row of this rect (1-based relative).
    pub fn row_slice(&self, index: u32) -> Result<CoordinateRect> {
        self.sub_rect(index as i64, 1, index as i64, self.column_count() as i64)
    }

    /// The `index`-th column of this rect (1-based relative).
    pub fn column_slice(&self, index: u32) -> Result<CoordinateRect> {
        self.sub_rect(1, index as i64, self.row_count() as i64, index as i64)
    }

    /// Expand to whole rows, keeping the row span.
    pub fn entire_rows(&self) -> CoordinateRect {
        CoordinateRect::normalized(self.first_row(), 1, self.last_row(), MAX_COLUMN)
    }

    /// Expand to whole columns, keeping the column span.
    pub fn entire_columns(&self) -> CoordinateRect {
        CoordinateRect::normalized(1, self.first_col(), MAX_ROW, self.last_col())
    }
}

/// Every column of row `row_index`.
pub fn entire_row(row_index: u32) -> Result<CoordinateRect> {
    let row = check_axis(Axis::Row, row_index as i64)?;
    Ok(CoordinateRect::normalized(row, 1, row, MAX_COLUMN))
}

/// Every row of column `col_index`.
pub fn entire_column(col_index: u32) -> Result<CoordinateRect> {
    let col = check_axis(Axis::Column, col_index as i64)?;
    Ok(CoordinateRect::normalized(1, col, MAX_ROW, col))
}
