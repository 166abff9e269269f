use gridrange_engine::engine::{Coordinate, CoordinateRect};

use super::{ColumnView, GridHandle, RowView};
use crate::error::Result;
use crate::grid::CellContent;

/// A single cell on a worksheet.
#[derive(Clone, Debug)]
pub struct CellView {
    grid: GridHandle,
    coord: Coordinate,
}

impl CellView {
    pub(crate) fn new(grid: GridHandle, coord: Coordinate) -> Self {
        CellView { grid, coord }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    /// Relative A1 address, e.g. `"C7"`.
    pub fn address(&self) -> String {
        self.coord.to_string()
    }

    pub fn content(&self) -> Result<CellContent> {
        self.grid.read(|grid| grid.content(self.coord))
    }

    pub fn set(&self, content: CellContent) -> Result<()> {
        self.grid.write(|grid| grid.set_cell_content(self.coord, content))
    }

    /// Write user-typed text (see [`CellContent::from_input`]).
    pub fn set_input(&self, input: &str) -> Result<()> {
        self.set(CellContent::from_input(input))
    }

    pub fn clear(&self) -> Result<Option<CellContent>> {
        self.grid.write(|grid| grid.clear_cell(self.coord))
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.grid.read(|grid| !grid.is_occupied(self.coord))
    }

    pub fn merged_region(&self) -> Result<Option<CoordinateRect>> {
        self.grid.read(|grid| grid.merged_region_at(self.coord))
    }

    /// True when this cell is the top-left of a merged region.
    pub fn is_merge_anchor(&self) -> Result<bool> {
        Ok(self
            .merged_region()?
            .is_some_and(|region| region.top_left() == self.coord))
    }

    pub fn row(&self) -> RowView {
        RowView::new(self.grid.clone(), self.coord.row())
    }

    pub fn column(&self) -> ColumnView {
        ColumnView::new(self.grid.clone(), self.coord.col())
    }

    /// The cell `delta_row` rows down and `delta_col` columns right.
    pub fn offset(&self, delta_row: i64, delta_col: i64) -> Result<CellView> {
        let coord = self.coord.offset(delta_row, delta_col)?;
        self.grid.config()?.check_coord(coord)?;
        Ok(CellView::new(self.grid.clone(), coord))
    }
}
