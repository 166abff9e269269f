use std::fmt;

use gridrange_engine::engine::{Coordinate, CoordinateRect, RangeReference, ReferenceNotation};

use super::{CellView, GridHandle, RangeArg};
use crate::error::Result;
use crate::grid::CellContent;

/// A rectangular block of cells on a worksheet.
///
/// Geometry (`offset`, `resize`, `get_sub_range`, ...) produces new views
/// whose rects are checked against the worksheet's addressable space.
#[derive(Clone, Debug)]
pub struct RangeView {
    grid: GridHandle,
    rect: CoordinateRect,
}

/// Result of [`RangeView::get_used_range`].
#[derive(Clone, Debug)]
pub enum UsedRange {
    /// Nothing in the range has been written (or the grid was never written).
    Empty,
    Range(RangeView),
}

impl UsedRange {
    pub fn is_empty(&self) -> bool {
        matches!(self, UsedRange::Empty)
    }

    pub fn range(&self) -> Option<&RangeView> {
        match self {
            UsedRange::Empty => None,
            UsedRange::Range(range) => Some(range),
        }
    }

    pub fn into_range(self) -> Option<RangeView> {
        match self {
            UsedRange::Empty => None,
            UsedRange::Range(range) => Some(range),
        }
    }
}

impl RangeArg for &RangeView {
    fn to_reference(self) -> Result<RangeReference> {
        Ok(RangeReference::from_rect(self.rect))
    }
}

impl RangeView {
    pub(crate) fn new(grid: GridHandle, rect: CoordinateRect) -> Self {
        RangeView { grid, rect }
    }

    fn derive(&self, rect: CoordinateRect) -> Result<RangeView> {
        self.grid.check_rect(&rect)?;
        Ok(RangeView::new(self.grid.clone(), rect))
    }

    pub fn rect(&self) -> CoordinateRect {
        self.rect
    }

    pub fn row_count(&self) -> u32 {
        self.rect.row_count()
    }

    pub fn column_count(&self) -> u32 {
        self.rect.column_count()
    }

    pub fn cell_count(&self) -> u64 {
        self.rect.cell_count()
    }

    /// Address text in `notation`; relative R1C1 needs `origin`.
    pub fn address(&self, notation: ReferenceNotation, origin: Option<Coordinate>) -> Result<String> {
        Ok(self.rect.format(notation, origin)?)
    }

    /// Every cell, row-major. Lazy; nothing is read until a cell is used.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.rect
            .coordinates()
            .map(move |coord| CellView::new(self.grid.clone(), coord))
    }

    /// One single-row range per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = RangeView> + '_ {
        (1..=self.rect.row_count())
            .filter_map(move |i| self.rect.row_slice(i).ok())
            .map(move |rect| RangeView::new(self.grid.clone(), rect))
    }

    /// One single-column range per column, left to right.
    pub fn columns(&self) -> impl Iterator<Item = RangeView> + '_ {
        (1..=self.rect.column_count())
            .filter_map(move |j| self.rect.column_slice(j).ok())
            .map(move |rect| RangeView::new(self.grid.clone(), rect))
    }

    /// Sub-range addressed relative to this range's top-left (1-based).
    pub fn get_sub_range(
        &self,
        rel_first_row: i64,
        rel_first_col: i64,
        rel_last_row: i64,
        rel_last_col: i64,
    ) -> Result<RangeView> {
        let rect = self
            .rect
            .sub_rect(rel_first_row, rel_first_col, rel_last_row, rel_last_col)?;
        self.derive(rect)
    }

    pub fn offset(&self, delta_row: i64, delta_col: i64) -> Result<RangeView> {
        self.derive(self.rect.offset(delta_row, delta_col)?)
    }

    pub fn resize(&self, row_count: i64, col_count: i64) -> Result<RangeView> {
        self.derive(self.rect.resize(row_count, col_count)?)
    }

    /// Overlap with `other`, or `None` when they are disjoint.
    ///
    /// `other` is resolved on this range's worksheet, as by
    /// [`Worksheet::get_range`](super::Worksheet::get_range).
    pub fn intersect(&self, other: impl RangeArg) -> Result<Option<RangeView>> {
        let other = self.grid.resolve(other)?;
        self.rect
            .intersect(&other)
            .map(|rect| self.derive(rect))
            .transpose()
    }

    /// Bounding box of this range and `other`.
    pub fn union(&self, other: impl RangeArg) -> Result<RangeView> {
        let other = self.grid.resolve(other)?;
        self.derive(self.rect.union(&other))
    }

    pub fn contains(&self, other: impl RangeArg) -> Result<bool> {
        Ok(self.rect.contains(&self.grid.resolve(other)?))
    }

    /// The part of this range inside the grid's used rect.
    pub fn get_used_range(&self) -> Result<UsedRange> {
        let used = self.grid.read(|grid| grid.used_rect())?;
        Ok(match used.and_then(|used| used.intersect(&self.rect)) {
            Some(rect) => UsedRange::Range(RangeView::new(self.grid.clone(), rect)),
            None => UsedRange::Empty,
        })
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.grid.read(|grid| grid.is_rect_empty(&self.rect))
    }

    /// Clear every occupied cell; returns how many were cleared.
    pub fn clear(&self) -> Result<usize> {
        self.grid.write(|grid| Ok(grid.clear_rect(&self.rect)))
    }

    /// Write `content` into every writable cell (merged regions receive it
    /// at their anchor only). Cost is proportional to the range's area.
    pub fn fill(&self, content: CellContent) -> Result<usize> {
        self.grid.write(|grid| {
            let mut written = 0;
            for coord in self.rect.coordinates() {
                if grid.anchor_of(coord) != coord {
                    continue;
                }
                grid.set_cell_content(coord, content.clone())?;
                written += 1;
            }
            tracing::debug!(range = %self.rect, written, "filled range");
            Ok(written)
        })
    }

    /// Row-major copy of the range's content.
    pub fn values(&self) -> Result<Vec<Vec<CellContent>>> {
        self.grid.read(|grid| {
            (self.rect.first_row()..=self.rect.last_row())
                .map(|row| {
                    (self.rect.first_col()..=self.rect.last_col())
                        .filter_map(|col| self.rect.coordinate_at(row, col))
                        .map(|coord| grid.content(coord))
                        .collect()
                })
                .collect()
        })
    }

    /// Register this range as a merged region.
    pub fn merge(&self) -> Result<()> {
        self.grid.write(|grid| grid.register_merged_region(self.rect))
    }

    /// Unregister every merged region touching this range.
    pub fn unmerge(&self) -> Result<usize> {
        self.grid.write(|grid| Ok(grid.unregister_merged_regions_in(&self.rect)))
    }
}

impl fmt::Display for RangeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rect)
    }
}
