//! Row and column insertion/deletion.
//!
//! Content and merged regions shift with the rows/columns they sit in. Each
//! edit validates before mutating and finishes by recomputing the used rect,
//! so the tracked bound never excludes a moved cell.

use gridrange_engine::engine::{Axis, Coordinate, CoordinateRect, RangeError};

use super::{CellContent, SparseGrid};
use crate::error::Result;

/// Bounds of `rect` along `axis`
fn span(rect: &CoordinateRect, axis: Axis) -> (u32, u32) {
    match axis {
        Axis::Row => (rect.first_row(), rect.last_row()),
        Axis::Column => (rect.first_col(), rect.last_col()),
    }
}

/// `rect` with its span along `axis` replaced
fn with_span(rect: &CoordinateRect, axis: Axis, first: u32, last: u32) -> Result<CoordinateRect> {
    let rect = match axis {
        Axis::Row => CoordinateRect::new(first, rect.first_col(), last, rect.last_col())?,
        Axis::Column => CoordinateRect::new(rect.first_row(), first, rect.last_row(), last)?,
    };
    Ok(rect)
}

/// Shift a coordinate along `axis`
fn shifted(coord: Coordinate, axis: Axis, delta: i64) -> Result<Coordinate> {
    let moved = match axis {
        Axis::Row => coord.offset(delta, 0)?,
        Axis::Column => coord.offset(0, delta)?,
    };
    Ok(moved)
}

impl SparseGrid {
    fn axis_limit(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.config.max_rows,
            Axis::Column => self.config.max_columns,
        }
    }

    /// The band `at..=at+count-1` along `axis`, spanning the whole grid.
    fn band(&self, axis: Axis, at: u32, count: u32) -> Result<CoordinateRect> {
        if count == 0 {
            return Err(RangeError::InvalidArgument(format!("{axis} count must be at least 1")).into());
        }
        let limit = self.axis_limit(axis);
        let last = at as i64 + count as i64 - 1;
        if at == 0 || last > limit as i64 {
            let value = if at == 0 { 0 } else { last };
            return Err(RangeError::OutOfRange { axis, value, max: limit }.into());
        }
        with_span(&self.config.bounds(), axis, at, last as u32)
    }

    /// Everything at or after `at` along `axis`.
    fn tail(&self, axis: Axis, at: u32) -> Result<CoordinateRect> {
        let limit = self.axis_limit(axis);
        with_span(&self.config.bounds(), axis, at, limit)
    }

    /// Move `cells` (already removed from the grid) to their new positions.
    fn reinsert(&mut self, cells: Vec<(Coordinate, CellContent)>) {
        for (coord, content) in cells {
            self.cells.insert(coord.packed(), content);
            self.index_insert(coord);
        }
    }

    fn take_cells(&mut self, rect: CoordinateRect) -> Vec<(Coordinate, CellContent)> {
        let coords: Vec<Coordinate> = self.occupied_in_rect(rect).collect();
        let mut taken = Vec::with_capacity(coords.len());
        for coord in coords {
            if let Some(content) = self.cells.remove(&coord.packed()) {
                self.index_remove(coord);
                taken.push((coord, content));
            }
        }
        taken
    }

    fn insert_along(&mut self, axis: Axis, at: u32, count: u32) -> Result<()> {
        let inserted = self.band(axis, at, count)?;
        let tail = self.tail(axis, at)?;
        let limit = self.axis_limit(axis) as i64;
        let delta = count as i64;

        // Nothing may be pushed past the grid edge.
        for coord in self.occupied_in_rect(tail) {
            let moved = coord.along(axis) as i64 + delta;
            if moved > limit {
                return Err(RangeError::OutOfRange {
                    axis,
                    value: moved,
                    max: limit as u32,
                }
                .into());
            }
        }
        let mut merges = Vec::with_capacity(self.merges.len());
        for merge in &self.merges {
            let (first, last) = span(merge, axis);
            if last < at {
                merges.push(*merge);
                continue;
            }
            let moved_last = last as i64 + delta;
            if moved_last > limit {
                return Err(RangeError::OutOfRange {
                    axis,
                    value: moved_last,
                    max: limit as u32,
                }
                .into());
            }
            let moved_first = if first >= at { first + count } else { first };
            merges.push(with_span(merge, axis, moved_first, moved_last as u32)?);
        }

        let moving = self.take_cells(tail);
        let moved = moving
            .into_iter()
            .map(|(coord, content)| Ok((shifted(coord, axis, delta)?, content)))
            .collect::<Result<Vec<_>>>()?;
        self.reinsert(moved);
        self.merges = merges;
        self.recompute_used_rect();

        tracing::debug!(%axis, at, count, band = %inserted, "inserted");
        Ok(())
    }

    fn delete_along(&mut self, axis: Axis, at: u32, count: u32) -> Result<()> {
        let deleted = self.band(axis, at, count)?;
        let end = at + count - 1;
        let delta = -(count as i64);

        let mut merges = Vec::with_capacity(self.merges.len());
        for merge in &self.merges {
            let (first, last) = span(merge, axis);
            if last < at {
                merges.push(*merge);
                continue;
            }
            if first > end {
                merges.push(with_span(merge, axis, first - count, last - count)?);
                continue;
            }
            let overlap = last.min(end) - first.max(at) + 1;
            let remaining = last - first + 1 - overlap;
            if remaining == 0 {
                continue;
            }
            let new_first = first.min(at);
            let shrunk = with_span(merge, axis, new_first, new_first + remaining - 1)?;
            if !shrunk.is_single_cell() {
                merges.push(shrunk);
            }
        }

        let removed = self.take_cells(deleted).len();
        let tail_start = end.checked_add(1).filter(|next| *next <= self.axis_limit(axis));
        if let Some(start) = tail_start {
            let tail = self.tail(axis, start)?;
            let moving = self.take_cells(tail);
            let moved = moving
                .into_iter()
                .map(|(coord, content)| Ok((shifted(coord, axis, delta)?, content)))
                .collect::<Result<Vec<_>>>()?;
            self.reinsert(moved);
        }
        self.merges = merges;
        self.recompute_used_rect();

        tracing::debug!(%axis, at, count, removed, band = %deleted, "deleted");
        Ok(())
    }

    /// Insert `count` empty rows above row `at`.
    pub fn insert_rows(&mut self, at: u32, count: u32) -> Result<()> {
        self.insert_along(Axis::Row, at, count)
    }

    /// Delete rows `at..at+count`, shifting later rows up.
    pub fn delete_rows(&mut self, at: u32, count: u32) -> Result<()> {
        self.delete_along(Axis::Row, at, count)
    }

    /// Insert `count` empty columns left of column `at`.
    pub fn insert_columns(&mut self, at: u32, count: u32) -> Result<()> {
        self.insert_along(Axis::Column, at, count)
    }

    /// Delete columns `at..at+count`, shifting later columns left.
    pub fn delete_columns(&mut self, at: u32, count: u32) -> Result<()> {
        self.delete_along(Axis::Column, at, count)
    }
}
