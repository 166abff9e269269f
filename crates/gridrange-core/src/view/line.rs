//! Whole-row and whole-column views.
//!
//! A line spans the grid's addressable space along one axis, so its extent
//! follows the worksheet's [`crate::GridConfig`], not the engine limits.

use gridrange_engine::engine::{Axis, Coordinate, CoordinateRect};

use super::{CellView, GridHandle, RangeView};
use crate::error::Result;

fn line_rect(grid: &GridHandle, axis: Axis, index: u32) -> Result<CoordinateRect> {
    let config = grid.config()?;
    let rect = match axis {
        Axis::Row => CoordinateRect::new(index, 1, index, config.max_columns)?,
        Axis::Column => CoordinateRect::new(1, index, config.max_rows, index)?,
    };
    config.check_rect(&rect)?;
    Ok(rect)
}

fn used_cells(grid: &GridHandle, rect: CoordinateRect) -> Result<Vec<CellView>> {
    let coords = grid.read(|g| g.occupied_in_rect(rect).collect::<Vec<Coordinate>>())?;
    Ok(coords
        .into_iter()
        .map(|coord| CellView::new(grid.clone(), coord))
        .collect())
}

#[derive(Clone, Debug)]
pub struct RowView {
    grid: GridHandle,
    row: u32,
}

impl RowView {
    pub(crate) fn new(grid: GridHandle, row: u32) -> Self {
        RowView { grid, row }
    }

    /// 1-based row index.
    pub fn index(&self) -> u32 {
        self.row
    }

    pub fn cell(&self, col: u32) -> Result<CellView> {
        let coord = Coordinate::new(self.row, col)?;
        self.grid.config()?.check_coord(coord)?;
        Ok(CellView::new(self.grid.clone(), coord))
    }

    pub fn range(&self) -> Result<RangeView> {
        let rect = line_rect(&self.grid, Axis::Row, self.row)?;
        Ok(RangeView::new(self.grid.clone(), rect))
    }

    pub fn is_empty(&self) -> Result<bool> {
        let rect = line_rect(&self.grid, Axis::Row, self.row)?;
        self.grid.read(|g| g.is_rect_empty(&rect))
    }

    /// Occupied cells, left to right.
    pub fn used_cells(&self) -> Result<Vec<CellView>> {
        used_cells(&self.grid, line_rect(&self.grid, Axis::Row, self.row)?)
    }

    pub fn clear(&self) -> Result<usize> {
        let rect = line_rect(&self.grid, Axis::Row, self.row)?;
        self.grid.write(|g| Ok(g.clear_rect(&rect)))
    }
}

#[derive(Clone, Debug)]
pub struct ColumnView {
    grid: GridHandle,
    col: u32,
}

impl ColumnView {
    pub(crate) fn new(grid: GridHandle, col: u32) -> Self {
        ColumnView { grid, col }
    }

    /// 1-based column index.
    pub fn index(&self) -> u32 {
        self.col
    }

    /// Column letters, e.g. `"AB"`.
    pub fn name(&self) -> Result<String> {
        Ok(gridrange_engine::engine::column_index_to_name(self.col)?)
    }

    pub fn cell(&self, row: u32) -> Result<CellView> {
        let coord = Coordinate::new(row, self.col)?;
        self.grid.config()?.check_coord(coord)?;
        Ok(CellView::new(self.grid.clone(), coord))
    }

    pub fn range(&self) -> Result<RangeView> {
        let rect = line_rect(&self.grid, Axis::Column, self.col)?;
        Ok(RangeView::new(self.grid.clone(), rect))
    }

    pub fn is_empty(&self) -> Result<bool> {
        let rect = line_rect(&self.grid, Axis::Column, self.col)?;
        self.grid.read(|g| g.is_rect_empty(&rect))
    }

    /// Occupied cells, top to bottom.
    pub fn used_cells(&self) -> Result<Vec<CellView>> {
        used_cells(&self.grid, line_rect(&self.grid, Axis::Column, self.col)?)
    }

    pub fn clear(&self) -> Result<usize> {
        let rect = line_rect(&self.grid, Axis::Column, self.col)?;
        self.grid.write(|g| Ok(g.clear_rect(&rect)))
    }
}
